//! Agency sign-up. A successful registration is stored but does not log the
//! agency in; the user is sent back to the login form.

use common::error::{ApiError, ValidationError};
use common::requests::{RegisterRequest, RegisterResponse};
use common::validation::{
    validate_confirmation, validate_email, validate_max_length, validate_new_password,
    validate_required,
};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::app::SessionAction;
use crate::helpers::{field_error, input_value, toast_error, toast_success};

const AGENCY_NAME_MAX: usize = 100;

pub enum Msg {
    SetAgency(String),
    SetEmail(String),
    SetPassword(String),
    SetConfirmation(String),
    Submit,
    Done(Result<RegisterResponse, ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct RegisterProps {
    pub api: ApiClient,
    pub on_session: Callback<SessionAction>,
    pub on_show_login: Callback<()>,
}

#[derive(Default)]
struct Errors {
    agency: Option<ValidationError>,
    email: Option<ValidationError>,
    password: Option<ValidationError>,
    confirmation: Option<ValidationError>,
}

impl Errors {
    fn is_empty(&self) -> bool {
        self.agency.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirmation.is_none()
    }
}

#[derive(Default)]
pub struct RegisterPage {
    agency: String,
    email: String,
    password: String,
    confirmation: String,
    errors: Errors,
    loading: bool,
}

impl RegisterPage {
    fn validate(&mut self) -> bool {
        self.errors = Errors {
            agency: validate_required(&self.agency, "Le nom de l'agence")
                .and_then(|()| {
                    validate_max_length(&self.agency, AGENCY_NAME_MAX, "Le nom de l'agence")
                })
                .err(),
            email: validate_email(&self.email).err(),
            password: validate_new_password(&self.password).err(),
            confirmation: validate_confirmation(&self.password, &self.confirmation).err(),
        };
        self.errors.is_empty()
    }
}

fn error_text(error: &Option<ValidationError>) -> Option<String> {
    error.as_ref().map(ToString::to_string)
}

impl Component for RegisterPage {
    type Message = Msg;
    type Properties = RegisterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetAgency(v) => self.agency = v,
            Msg::SetEmail(v) => self.email = v,
            Msg::SetPassword(v) => self.password = v,
            Msg::SetConfirmation(v) => self.confirmation = v,
            Msg::Submit => {
                if self.loading || !self.validate() {
                    return true;
                }
                self.loading = true;
                let api = ctx.props().api.clone();
                let body = RegisterRequest {
                    agency_name: self.agency.trim().to_string(),
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Done(api.register(&body).await));
                });
            }
            Msg::Done(result) => {
                self.loading = false;
                match result {
                    Ok(RegisterResponse { user, token, .. }) => {
                        toast_success("Compte créé avec succès. Vous pouvez vous connecter.");
                        ctx.props()
                            .on_session
                            .emit(SessionAction::Registered { user, token });
                    }
                    Err(err) => toast_error(&err.to_string()),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let show_login = ctx.props().on_show_login.reform(|_: MouseEvent| ());

        html! {
            <div class="auth-page">
                <form class="auth-card" {onsubmit} novalidate=true>
                    <h1>{ "Créer un compte" }</h1>
                    <div class="form-group">
                        <label>{ "Nom de l'agence" }</label>
                        <input
                            type="text"
                            value={self.agency.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetAgency(input_value(&e)))}
                        />
                        { field_error(error_text(&self.errors.agency)) }
                    </div>
                    <div class="form-group">
                        <label>{ "Email" }</label>
                        <input
                            type="email"
                            value={self.email.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetEmail(input_value(&e)))}
                        />
                        { field_error(error_text(&self.errors.email)) }
                    </div>
                    <div class="form-group">
                        <label>{ "Mot de passe" }</label>
                        <input
                            type="password"
                            value={self.password.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetPassword(input_value(&e)))}
                        />
                        { field_error(error_text(&self.errors.password)) }
                    </div>
                    <div class="form-group">
                        <label>{ "Confirmer le mot de passe" }</label>
                        <input
                            type="password"
                            value={self.confirmation.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetConfirmation(input_value(&e)))}
                        />
                        { field_error(error_text(&self.errors.confirmation)) }
                    </div>
                    <button type="submit" class="btn-primary wide" disabled={self.loading}>
                        { if self.loading { "Création..." } else { "Créer mon compte" } }
                    </button>
                    <p class="auth-switch">
                        { "Déjà inscrit ? " }
                        <button type="button" class="link" onclick={show_login}>{ "Se connecter" }</button>
                    </p>
                </form>
            </div>
        }
    }
}
