//! Client directory: search, create, edit and delete.

use common::error::ApiError;
use common::format::{format_date, format_phone_number, generate_initials};
use common::model::client::Client;
use common::search::search_clients;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::client_form::ClientForm;
use crate::components::modal::Modal;
use crate::components::ui::{empty_state, page_loading, plural};
use crate::helpers::{confirm, input_value, toast_error, toast_success};

pub enum Msg {
    Fetch,
    Fetched(Result<Vec<Client>, ApiError>),
    Search(String),
    OpenCreate,
    OpenEdit(Client),
    CloseModal,
    Saved,
    Delete(i64),
    Deleted(Result<(), ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct ClientsProps {
    pub api: ApiClient,
}

/// Form state of the modal: closed, creating, or editing a given client.
enum Editor {
    Closed,
    Create,
    Edit(Client),
}

pub struct ClientsPage {
    clients: Vec<Client>,
    loading: bool,
    query: String,
    editor: Editor,
}

impl Component for ClientsPage {
    type Message = Msg;
    type Properties = ClientsProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        Self {
            clients: Vec::new(),
            loading: true,
            query: String::new(),
            editor: Editor::Closed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                let api = ctx.props().api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Fetched(api.clients().await));
                });
                false
            }
            Msg::Fetched(result) => {
                self.loading = false;
                match result {
                    Ok(clients) => self.clients = clients,
                    Err(err) => toast_error(&format!("Impossible de charger les clients: {err}")),
                }
                true
            }
            Msg::Search(query) => {
                self.query = query;
                true
            }
            Msg::OpenCreate => {
                self.editor = Editor::Create;
                true
            }
            Msg::OpenEdit(client) => {
                self.editor = Editor::Edit(client);
                true
            }
            Msg::CloseModal => {
                self.editor = Editor::Closed;
                true
            }
            Msg::Saved => {
                self.editor = Editor::Closed;
                ctx.link().send_message(Msg::Fetch);
                true
            }
            Msg::Delete(id) => {
                if !confirm("Êtes-vous sûr de vouloir supprimer ce client ?") {
                    return false;
                }
                let api = ctx.props().api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Deleted(api.delete_client(id).await));
                });
                false
            }
            Msg::Deleted(result) => {
                match result {
                    Ok(()) => {
                        toast_success("Client supprimé avec succès");
                        ctx.link().send_message(Msg::Fetch);
                    }
                    Err(err) => toast_error(&err.to_string()),
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if self.loading {
            return page_loading();
        }
        let visible = search_clients(&self.clients, &self.query);

        let (open, title, editing) = match &self.editor {
            Editor::Closed => (false, "", None),
            Editor::Create => (true, "Nouveau client", None),
            Editor::Edit(client) => (true, "Modifier le client", Some(client.clone())),
        };
        // Re-keyed per target so the form state resets between records.
        let form_key = editing
            .as_ref()
            .map_or_else(|| "new".to_string(), |c| c.id.to_string());

        html! {
            <div class="clients-page">
                <div class="toolbar">
                    <input
                        class="search"
                        type="search"
                        placeholder="Rechercher par nom, téléphone ou email..."
                        value={self.query.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Search(input_value(&e)))}
                    />
                    <button class="btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                        { "Ajouter un client" }
                    </button>
                </div>
                <p class="muted">{ plural(visible.len(), "client") }</p>
                {
                    if visible.is_empty() {
                        if self.query.trim().is_empty() {
                            empty_state("Aucun client", "Ajoutez votre premier client pour commencer.")
                        } else {
                            empty_state("Aucun résultat", "Essayez une autre recherche.")
                        }
                    } else {
                        html! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>{ "Client" }</th>
                                        <th>{ "Téléphone" }</th>
                                        <th>{ "Email" }</th>
                                        <th>{ "Ajouté le" }</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for visible.into_iter().map(|client| self.row(link, client)) }
                                </tbody>
                            </table>
                        }
                    }
                }
                <Modal {open} title={title.to_string()} on_close={link.callback(|_| Msg::CloseModal)}>
                    {
                        if open {
                            html! {
                                <ClientForm
                                    key={form_key}
                                    api={ctx.props().api.clone()}
                                    client={editing}
                                    on_saved={link.callback(|_| Msg::Saved)}
                                    on_cancel={link.callback(|_| Msg::CloseModal)}
                                />
                            }
                        } else {
                            html! {}
                        }
                    }
                </Modal>
            </div>
        }
    }
}

impl ClientsPage {
    fn row(&self, link: &yew::html::Scope<Self>, client: &Client) -> Html {
        let id = client.id;
        let edit_target = client.clone();
        html! {
            <tr key={id}>
                <td>
                    <span class="avatar small">{ generate_initials(&client.name) }</span>
                    <span>{ client.name.clone() }</span>
                    {
                        match client.notes.as_deref().filter(|n| !n.is_empty()) {
                            Some(notes) => html! { <p class="muted small">{ notes.to_string() }</p> },
                            None => html! {},
                        }
                    }
                </td>
                <td>{ format_phone_number(&client.phone) }</td>
                <td>{ client.email.clone() }</td>
                <td>{ client.created_at.as_deref().map(format_date).unwrap_or_default() }</td>
                <td class="actions">
                    <button class="icon-btn" title="Modifier"
                        onclick={link.callback(move |_| Msg::OpenEdit(edit_target.clone()))}>{ "✎" }</button>
                    <button class="icon-btn danger" title="Supprimer"
                        onclick={link.callback(move |_| Msg::Delete(id))}>{ "🗑" }</button>
                </td>
            </tr>
        }
    }
}
