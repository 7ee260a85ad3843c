//! Create/edit form for a client record, shown inside a [`Modal`].
//!
//! Validation runs on submit through [`ClientInput::validate`]; after the
//! first attempt the errors are recomputed on every keystroke so they clear as
//! soon as the field is fixed.
//!
//! [`Modal`]: crate::components::modal::Modal

use common::error::{ApiError, ValidationError};
use common::model::client::{Client, ClientField, ClientInput};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::helpers::{field_error, input_value, textarea_value, toast_error, toast_success};

pub enum Msg {
    SetName(String),
    SetPhone(String),
    SetEmail(String),
    SetNotes(String),
    Submit,
    Saved(Result<(), ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct ClientFormProps {
    pub api: ApiClient,
    /// `Some` when editing an existing record.
    #[prop_or_default]
    pub client: Option<Client>,
    pub on_saved: Callback<()>,
    pub on_cancel: Callback<()>,
}

pub struct ClientForm {
    input: ClientInput,
    errors: Vec<(ClientField, ValidationError)>,
    submitted: bool,
    saving: bool,
}

impl ClientForm {
    fn error_for(&self, field: ClientField) -> Option<String> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| e.to_string())
    }

    fn revalidate(&mut self) {
        if self.submitted {
            self.errors = self.input.validate();
        }
    }
}

impl Component for ClientForm {
    type Message = Msg;
    type Properties = ClientFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            input: ctx
                .props()
                .client
                .as_ref()
                .map(ClientInput::from_client)
                .unwrap_or_default(),
            errors: Vec::new(),
            submitted: false,
            saving: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetName(v) => self.input.name = v,
            Msg::SetPhone(v) => self.input.phone = v,
            Msg::SetEmail(v) => self.input.email = v,
            Msg::SetNotes(v) => self.input.notes = v,
            Msg::Submit => {
                if self.saving {
                    return false;
                }
                self.submitted = true;
                self.errors = self.input.validate();
                if !self.errors.is_empty() {
                    return true;
                }
                self.saving = true;
                let api = ctx.props().api.clone();
                let id = ctx.props().client.as_ref().map(|c| c.id);
                let input = self.input.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = match id {
                        Some(id) => api.update_client(id, &input).await,
                        None => api.create_client(&input).await,
                    };
                    link.send_message(Msg::Saved(result));
                });
                return true;
            }
            Msg::Saved(result) => {
                self.saving = false;
                match result {
                    Ok(()) => {
                        let message = if ctx.props().client.is_some() {
                            "Client modifié avec succès"
                        } else {
                            "Client ajouté avec succès"
                        };
                        toast_success(message);
                        ctx.props().on_saved.emit(());
                    }
                    Err(err) => toast_error(&err.to_string()),
                }
                return true;
            }
        }
        self.revalidate();
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let editing = ctx.props().client.is_some();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let on_cancel = ctx.props().on_cancel.reform(|_: MouseEvent| ());

        html! {
            <form class="client-form" {onsubmit} novalidate=true>
                <div class="form-group">
                    <label>{ "Nom complet" }</label>
                    <input
                        type="text"
                        value={self.input.name.clone()}
                        placeholder="Jean Dupont"
                        oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(&e)))}
                    />
                    { field_error(self.error_for(ClientField::Name)) }
                </div>
                <div class="form-group">
                    <label>{ "Téléphone" }</label>
                    <input
                        type="tel"
                        value={self.input.phone.clone()}
                        placeholder="+212612345678"
                        oninput={link.callback(|e: InputEvent| Msg::SetPhone(input_value(&e)))}
                    />
                    { field_error(self.error_for(ClientField::Phone)) }
                </div>
                <div class="form-group">
                    <label>{ "Email" }</label>
                    <input
                        type="email"
                        value={self.input.email.clone()}
                        placeholder="jean.dupont@email.com"
                        oninput={link.callback(|e: InputEvent| Msg::SetEmail(input_value(&e)))}
                    />
                    { field_error(self.error_for(ClientField::Email)) }
                </div>
                <div class="form-group">
                    <label>{ "Notes (optionnel)" }</label>
                    <textarea
                        rows="3"
                        value={self.input.notes.clone()}
                        placeholder="Informations supplémentaires sur le client..."
                        oninput={link.callback(|e: InputEvent| Msg::SetNotes(textarea_value(&e)))}
                    />
                </div>
                <div class="form-actions">
                    <button type="button" class="btn-secondary" onclick={on_cancel}>{ "Annuler" }</button>
                    <button type="submit" class="btn-primary" disabled={self.saving}>
                        {
                            if self.saving {
                                "Enregistrement..."
                            } else if editing {
                                "Modifier"
                            } else {
                                "Ajouter"
                            }
                        }
                    </button>
                </div>
            </form>
        }
    }
}
