use common::format::format_date_time;
use common::model::message::{Message, MessageStatus};
use yew::{classes, html, Component, Context, Html, Properties};

use crate::components::ui::{empty_state, page_loading};

pub struct MessageHistory;

#[derive(Properties, PartialEq)]
pub struct MessageHistoryProps {
    pub messages: Vec<Message>,
    #[prop_or_default]
    pub loading: bool,
}

fn status_class(status: MessageStatus) -> &'static str {
    match status {
        MessageStatus::Delivered => "badge-success",
        MessageStatus::Pending => "badge-warning",
        MessageStatus::Failed => "badge-error",
        MessageStatus::Unknown => "badge-muted",
    }
}

impl Component for MessageHistory {
    type Message = ();
    type Properties = MessageHistoryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MessageHistory
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if props.loading {
            return page_loading();
        }
        if props.messages.is_empty() {
            return empty_state("Aucun message", "Les messages envoyés apparaîtront ici");
        }
        html! {
            <ul class="message-history">
                { for props.messages.iter().map(|m| html! {
                    <li key={m.id}>
                        <div class="message-head">
                            <span class="message-phone">{ m.phone.clone() }</span>
                            <span class={classes!("badge", status_class(m.status))}>{ m.status.label() }</span>
                        </div>
                        <p class="muted">
                            {
                                match m.template_id {
                                    Some(id) => format!("Modèle #{id}"),
                                    None => "Modèle inconnu".to_string(),
                                }
                            }
                        </p>
                        {
                            match &m.created_at {
                                Some(at) => html! { <p class="muted small">{ format_date_time(at) }</p> },
                                None => html! {},
                            }
                        }
                    </li>
                }) }
            </ul>
        }
    }
}
