use common::error::ApiError;
use common::format::format_date;
use common::model::credits::{CreditBalance, CreditTransaction};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::ui::{empty_state, page_loading};
use crate::helpers::{format_credits, toast_error};

/// Number of history lines shown under the balance.
const HISTORY_LINES: usize = 8;

pub enum Msg {
    Loaded(Result<CreditBalance, ApiError>, Result<Vec<CreditTransaction>, ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct CreditsProps {
    pub api: ApiClient,
}

pub struct CreditsPage {
    balance: Option<CreditBalance>,
    history: Vec<CreditTransaction>,
    loading: bool,
}

impl Component for CreditsPage {
    type Message = Msg;
    type Properties = CreditsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ctx.props().api.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let balance = api.credits().await;
            let history = api.credits_history().await;
            link.send_message(Msg::Loaded(balance, history));
        });
        Self {
            balance: None,
            history: Vec::new(),
            loading: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::Loaded(balance, history) = msg;
        self.loading = false;
        match balance {
            Ok(balance) => self.balance = Some(balance),
            Err(err) => toast_error(&format!("Impossible de charger les crédits: {err}")),
        }
        match history {
            Ok(mut history) => {
                history.truncate(HISTORY_LINES);
                self.history = history;
            }
            Err(err) => gloo_console::warn!(format!("historique des crédits: {err}")),
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if self.loading {
            return page_loading();
        }
        let credits = self.balance.as_ref().map_or(0, |b| b.credits);

        html! {
            <div class="credits-page">
                <section class="card balance">
                    <p class="muted">{ "Solde actuel" }</p>
                    <p class="balance-value">{ format_credits(credits) }</p>
                    <p class="muted">{ "crédits disponibles" }</p>
                </section>
                <section class="card">
                    <h2>{ "Historique des transactions" }</h2>
                    {
                        if self.history.is_empty() {
                            empty_state("Aucune transaction", "Vos achats et envois apparaîtront ici.")
                        } else {
                            html! {
                                <ul class="transactions">
                                    { for self.history.iter().map(transaction_row) }
                                </ul>
                            }
                        }
                    }
                </section>
            </div>
        }
    }
}

fn transaction_row(t: &CreditTransaction) -> Html {
    let amount = t.signed_amount();
    let class = if amount < 0 { "debit" } else { "credit" };
    let sign = if amount > 0 { "+" } else { "" };
    html! {
        <li class={classes!("transaction", class)}>
            <span>{ t.description.clone() }</span>
            <span class="muted">{ t.date.as_deref().map(format_date).unwrap_or_default() }</span>
            <span class="amount">{ format!("{sign}{}", format_credits(amount)) }</span>
        </li>
    }
}
