use common::error::{ApiError, ValidationError};
use common::requests::{AuthResponse, LoginRequest};
use common::validation::{
    validate_email, validate_min_length, validate_required, LOGIN_PASSWORD_MIN,
};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::app::SessionAction;
use crate::helpers::{field_error, input_value, toast_error, toast_success};

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    Submit,
    Done(Result<AuthResponse, ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub api: ApiClient,
    pub on_session: Callback<SessionAction>,
    pub on_show_register: Callback<()>,
}

#[derive(Default)]
pub struct LoginPage {
    email: String,
    password: String,
    email_error: Option<ValidationError>,
    password_error: Option<ValidationError>,
    loading: bool,
}

impl LoginPage {
    fn validate(&mut self) -> bool {
        self.email_error = validate_email(&self.email).err();
        self.password_error = validate_required(&self.password, "Le mot de passe")
            .and_then(|()| {
                validate_min_length(&self.password, LOGIN_PASSWORD_MIN, "Le mot de passe")
            })
            .err();
        self.email_error.is_none() && self.password_error.is_none()
    }
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(v) => self.email = v,
            Msg::SetPassword(v) => self.password = v,
            Msg::Submit => {
                if self.loading || !self.validate() {
                    return true;
                }
                self.loading = true;
                let api = ctx.props().api.clone();
                let body = LoginRequest {
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Done(api.login(&body).await));
                });
            }
            Msg::Done(result) => {
                self.loading = false;
                match result {
                    Ok(AuthResponse { user, token }) => {
                        toast_success("Connexion réussie");
                        ctx.props()
                            .on_session
                            .emit(SessionAction::LoggedIn { user, token });
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
        let show_register = ctx.props().on_show_register.reform(|_: MouseEvent| ());

        html! {
            <div class="auth-page">
                <form class="auth-card" {onsubmit} novalidate=true>
                    <h1>{ "Connexion" }</h1>
                    <p class="muted">{ "Accédez à votre espace agence" }</p>
                    <div class="form-group">
                        <label>{ "Email" }</label>
                        <input
                            type="email"
                            value={self.email.clone()}
                            placeholder="agence@email.com"
                            oninput={link.callback(|e: InputEvent| Msg::SetEmail(input_value(&e)))}
                        />
                        { field_error(self.email_error.as_ref().map(ToString::to_string)) }
                    </div>
                    <div class="form-group">
                        <label>{ "Mot de passe" }</label>
                        <input
                            type="password"
                            value={self.password.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetPassword(input_value(&e)))}
                        />
                        { field_error(self.password_error.as_ref().map(ToString::to_string)) }
                    </div>
                    <button type="submit" class="btn-primary wide" disabled={self.loading}>
                        { if self.loading { "Connexion..." } else { "Se connecter" } }
                    </button>
                    <p class="auth-switch">
                        { "Pas encore de compte ? " }
                        <button type="button" class="link" onclick={show_register}>{ "Créer un compte" }</button>
                    </p>
                </form>
            </div>
        }
    }
}
