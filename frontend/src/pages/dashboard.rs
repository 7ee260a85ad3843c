use common::error::ApiError;
use common::format::{format_date_time, format_phone_number};
use common::model::credits::CreditBalance;
use common::model::dashboard::{recent_messages, DashboardStats};
use common::model::message::Message;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::ui::{empty_state, page_loading, stats_card};
use crate::helpers::format_credits;

const RECENT_MESSAGES: usize = 5;

pub struct Overview {
    stats: DashboardStats,
    messages: Vec<Message>,
}

pub enum Msg {
    Loaded(Overview),
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub api: ApiClient,
}

pub struct DashboardPage {
    overview: Option<Overview>,
}

/// A failed collection shows as empty rather than blocking the page.
fn or_empty<T>(what: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        gloo_console::warn!(format!("{what}: {err}"));
        Vec::new()
    })
}

async fn load(api: ApiClient) -> Overview {
    let clients = or_empty("clients", api.clients().await);
    let messages = or_empty("messages", api.messages().await);
    let templates = or_empty("templates", api.templates().await);
    let balance: Option<CreditBalance> = api.credits().await.ok();
    Overview {
        stats: DashboardStats::compute(&clients, &messages, &templates, balance.as_ref()),
        messages,
    }
}

impl Component for DashboardPage {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ctx.props().api.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(load(api).await));
        });
        Self { overview: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(overview) => self.overview = Some(overview),
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let Some(overview) = &self.overview else {
            return page_loading();
        };
        let stats = overview.stats;
        let recent = recent_messages(&overview.messages, RECENT_MESSAGES);

        html! {
            <div class="dashboard-page">
                <div class="stats-grid">
                    { stats_card("Clients", stats.total_clients.to_string(), "blue") }
                    { stats_card("Messages envoyés", stats.total_messages.to_string(), "green") }
                    { stats_card("Modèles", stats.total_templates.to_string(), "purple") }
                    { stats_card("Crédits restants", format_credits(stats.credits), "orange") }
                </div>
                <section class="card">
                    <h2>{ "Messages récents" }</h2>
                    {
                        if recent.is_empty() {
                            empty_state("Aucun message", "Envoyez votre premier message depuis la page Messages.")
                        } else {
                            html! {
                                <ul class="recent-list">
                                    { for recent.into_iter().map(|m| html! {
                                        <li key={m.id}>
                                            <span>{ format_phone_number(&m.phone) }</span>
                                            <span class="muted">
                                                { m.created_at.as_deref().map(format_date_time).unwrap_or_default() }
                                            </span>
                                            <span class="badge">{ m.status.label() }</span>
                                        </li>
                                    }) }
                                </ul>
                            }
                        }
                    }
                </section>
            </div>
        }
    }
}
