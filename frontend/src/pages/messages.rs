use std::rc::Rc;

use common::error::ApiError;
use common::model::client::Client;
use common::model::message::Message;
use common::model::template::Template;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::composer::ComposerComponent;
use crate::components::message_history::MessageHistory;
use crate::components::ui::page_loading;
use crate::helpers::toast_error;

pub enum Msg {
    Templates(Result<Vec<Template>, ApiError>),
    Clients(Result<Vec<Client>, ApiError>),
    FetchHistory,
    History(Result<Vec<Message>, ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct MessagesProps {
    pub api: ApiClient,
}

/// Templates and clients, each filled by its own fetch in whatever order
/// they complete. A failed fetch still fills its slot, with an empty list.
#[derive(Default)]
struct Catalog {
    templates: Option<Rc<Vec<Template>>>,
    clients: Option<Rc<Vec<Client>>>,
}

impl Catalog {
    fn set_templates(&mut self, templates: Vec<Template>) {
        self.templates = Some(Rc::new(templates));
    }

    fn set_clients(&mut self, clients: Vec<Client>) {
        self.clients = Some(Rc::new(clients));
    }

    fn loaded(&self) -> Option<(Rc<Vec<Template>>, Rc<Vec<Client>>)> {
        Some((Rc::clone(self.templates.as_ref()?), Rc::clone(self.clients.as_ref()?)))
    }
}

pub struct MessagesPage {
    catalog: Catalog,
    messages: Vec<Message>,
    history_loading: bool,
}

impl Component for MessagesPage {
    type Message = Msg;
    type Properties = MessagesProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (api, link) = (ctx.props().api.clone(), ctx.link().clone());
        spawn_local(async move {
            link.send_message(Msg::Templates(api.templates().await));
        });
        let (api, link) = (ctx.props().api.clone(), ctx.link().clone());
        spawn_local(async move {
            link.send_message(Msg::Clients(api.clients().await));
        });
        ctx.link().send_message(Msg::FetchHistory);
        Self {
            catalog: Catalog::default(),
            messages: Vec::new(),
            history_loading: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Templates(result) => {
                self.catalog.set_templates(result.unwrap_or_else(|err| {
                    toast_error(&format!("Impossible de charger les modèles: {err}"));
                    Vec::new()
                }));
                true
            }
            Msg::Clients(result) => {
                self.catalog.set_clients(result.unwrap_or_else(|err| {
                    toast_error(&format!("Impossible de charger les clients: {err}"));
                    Vec::new()
                }));
                true
            }
            Msg::FetchHistory => {
                let api = ctx.props().api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::History(api.messages().await));
                });
                false
            }
            Msg::History(result) => {
                self.history_loading = false;
                match result {
                    Ok(messages) => self.messages = messages,
                    Err(err) => gloo_console::warn!(format!("historique: {err}")),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="messages-page">
                <section class="card">
                    <h2>{ "Nouveau message" }</h2>
                    {
                        match self.catalog.loaded() {
                            Some((templates, clients)) => html! {
                                <ComposerComponent
                                    api={ctx.props().api.clone()}
                                    {templates}
                                    {clients}
                                    on_sent={ctx.link().callback(|_| Msg::FetchHistory)}
                                />
                            },
                            None => page_loading(),
                        }
                    }
                </section>
                <section class="card">
                    <h2>{ "Historique des messages" }</h2>
                    <MessageHistory messages={self.messages.clone()} loading={self.history_loading} />
                </section>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: i64) -> Client {
        Client {
            id,
            name: "Jean Dupont".into(),
            phone: "0612345678".into(),
            email: "jean@exemple.ma".into(),
            notes: None,
            created_at: None,
        }
    }

    #[test]
    fn catalog_waits_for_both_fetches_in_any_order() {
        let mut catalog = Catalog::default();
        catalog.set_clients(vec![client(1)]);
        assert!(catalog.loaded().is_none());

        catalog.set_templates(Vec::new());
        let (templates, clients) = catalog.loaded().unwrap();
        assert!(templates.is_empty());
        assert_eq!(clients.len(), 1);
    }
}
