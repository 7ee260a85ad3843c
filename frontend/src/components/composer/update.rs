//! Update function for the message composer.
//!
//! Contract
//! - Mutates the [`ComposerComponent`] according to `msg`.
//! - Starts the send request through [`ApiDispatcher`]; its outcome comes back
//!   as `Msg::Sent`.
//! - Returns `true` whenever the view must re-render.

use common::compose::Dispatch;
use common::model::message::SendPayload;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::helpers::{toast_error, toast_success};

use super::messages::Msg;
use super::state::ComposerComponent;

/// Posts payloads to `/messages` and reports back to the composer.
struct ApiDispatcher {
    api: ApiClient,
    link: Scope<ComposerComponent>,
}

impl Dispatch for ApiDispatcher {
    fn dispatch(&self, payload: SendPayload) {
        let api = self.api.clone();
        let link = self.link.clone();
        spawn_local(async move {
            let outcome = api.send_message(&payload).await;
            link.send_message(Msg::Sent(outcome));
        });
    }
}

pub fn update(component: &mut ComposerComponent, ctx: &Context<ComposerComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SelectClient(id) => {
            component.session.select_client(id);
            component.error = None;
            true
        }
        Msg::SelectTemplate(id) => {
            component
                .session
                .select_template(&ctx.props().templates, id);
            component.error = None;
            true
        }
        Msg::SetValue {
            namespace,
            key,
            value,
        } => component.session.set_value(namespace, &key, value),
        Msg::Submit => {
            if component.session.is_sending() {
                return false;
            }
            let dispatcher = ApiDispatcher {
                api: ctx.props().api.clone(),
                link: ctx.link().clone(),
            };
            match component
                .session
                .submit_with(&ctx.props().clients, &dispatcher)
            {
                Ok(()) => component.error = None,
                Err(err) => component.error = Some(err.to_string()),
            }
            true
        }
        Msg::Sent(outcome) => {
            match &outcome {
                Ok(()) => {
                    toast_success("Message envoyé avec succès!");
                    ctx.props().on_sent.emit(());
                }
                Err(err) => {
                    gloo_console::error!(format!("envoi refusé: {err}"));
                    toast_error(&err.to_string());
                }
            }
            component.session.finish(outcome);
            true
        }
    }
}
