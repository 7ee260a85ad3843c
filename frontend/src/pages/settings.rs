//! Account settings, split in three tabs: agency profile, interface
//! language and the messaging provider token.

use common::error::{ApiError, ValidationError};
use common::model::language::Language;
use common::model::user::{User, UserPatch};
use common::requests::UpdateUserRequest;
use common::validation::{validate_email, validate_required};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::app::SessionAction;
use crate::components::ui::spinner;
use crate::helpers::{field_error, input_value, parse_id, select_value, toast_error, toast_success};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Profile,
    Language,
    ApiToken,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Profile, Tab::Language, Tab::ApiToken];

    fn title(&self) -> &'static str {
        match self {
            Tab::Profile => "Profil",
            Tab::Language => "Langue",
            Tab::ApiToken => "Clé API",
        }
    }
}

pub enum Msg {
    SelectTab(Tab),
    SetAgency(String),
    SetEmail(String),
    SaveProfile,
    ProfileSaved(Result<User, ApiError>),
    Languages(Result<Vec<Language>, ApiError>),
    SelectLanguage(Option<i64>),
    LanguageSaved(i64, Result<(), ApiError>),
    SetToken(String),
    SaveToken,
    TokenSaved(String, Result<(), ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct SettingsProps {
    pub api: ApiClient,
    pub user: Option<User>,
    pub on_session: Callback<SessionAction>,
}

pub struct SettingsPage {
    tab: Tab,
    agency: String,
    email: String,
    agency_error: Option<ValidationError>,
    email_error: Option<ValidationError>,
    languages: Vec<Language>,
    token: String,
    saving: bool,
}

impl Component for SettingsPage {
    type Message = Msg;
    type Properties = SettingsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ctx.props().api.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Languages(api.languages().await));
        });
        let user = ctx.props().user.as_ref();
        Self {
            tab: Tab::Profile,
            agency: user.map(|u| u.agency_name.clone()).unwrap_or_default(),
            email: user.map(|u| u.email.clone()).unwrap_or_default(),
            agency_error: None,
            email_error: None,
            languages: Vec::new(),
            token: user.and_then(|u| u.confirmed_token.clone()).unwrap_or_default(),
            saving: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        let link = ctx.link().clone();
        match msg {
            Msg::SelectTab(tab) => self.tab = tab,
            Msg::SetAgency(v) => self.agency = v,
            Msg::SetEmail(v) => self.email = v,
            Msg::SaveProfile => {
                self.agency_error = validate_required(&self.agency, "Le nom de l'agence").err();
                self.email_error = validate_email(&self.email).err();
                let Some(id) = props.user.as_ref().map(|u| u.id) else {
                    return true;
                };
                if self.saving || self.agency_error.is_some() || self.email_error.is_some() {
                    return true;
                }
                self.saving = true;
                let api = props.api.clone();
                let body = UpdateUserRequest {
                    agency_name: self.agency.trim().to_string(),
                    email: self.email.trim().to_string(),
                };
                spawn_local(async move {
                    link.send_message(Msg::ProfileSaved(api.update_user(id, &body).await));
                });
            }
            Msg::ProfileSaved(result) => {
                self.saving = false;
                match result {
                    Ok(user) => {
                        toast_success("Profil mis à jour");
                        props.on_session.emit(SessionAction::ReplaceUser(user));
                    }
                    Err(err) => toast_error(&err.to_string()),
                }
            }
            Msg::Languages(result) => match result {
                Ok(languages) => self.languages = languages,
                Err(err) => gloo_console::warn!(format!("langues: {err}")),
            },
            Msg::SelectLanguage(None) => return false,
            Msg::SelectLanguage(Some(id)) => {
                let api = props.api.clone();
                spawn_local(async move {
                    link.send_message(Msg::LanguageSaved(id, api.select_language(id).await));
                });
                return false;
            }
            Msg::LanguageSaved(id, result) => match result {
                Ok(()) => {
                    toast_success("Langue mise à jour");
                    props.on_session.emit(SessionAction::UpdateUser(UserPatch {
                        language_id: Some(id),
                        ..UserPatch::default()
                    }));
                }
                Err(err) => toast_error(&err.to_string()),
            },
            Msg::SetToken(v) => self.token = v,
            Msg::SaveToken => {
                if self.saving {
                    return false;
                }
                let token = self.token.trim().to_string();
                if token.is_empty() {
                    toast_error("Veuillez saisir une clé API");
                    return false;
                }
                self.saving = true;
                let api = props.api.clone();
                spawn_local(async move {
                    let result = api.save_confirmed_token(&token).await;
                    link.send_message(Msg::TokenSaved(token, result));
                });
            }
            Msg::TokenSaved(token, result) => {
                self.saving = false;
                match result {
                    Ok(()) => {
                        toast_success("Clé API enregistrée");
                        props.on_session.emit(SessionAction::SetConfirmedToken(token));
                    }
                    Err(err) => toast_error(&err.to_string()),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let body = match self.tab {
            Tab::Profile => self.profile_tab(ctx),
            Tab::Language => self.language_tab(ctx),
            Tab::ApiToken => self.token_tab(ctx),
        };
        html! {
            <div class="settings-page">
                <nav class="tabs">
                    { for Tab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        html! {
                            <button
                                class={classes!("tab", (tab == self.tab).then_some("active"))}
                                onclick={link.callback(move |_| Msg::SelectTab(tab))}
                            >
                                { tab.title() }
                            </button>
                        }
                    }) }
                </nav>
                <section class="card">{ body }</section>
            </div>
        }
    }
}

impl SettingsPage {
    fn save_label(&self, idle: &'static str) -> Html {
        if self.saving {
            html! { <>{ spinner() }<span>{ "Enregistrement..." }</span></> }
        } else {
            html! { <span>{ idle }</span> }
        }
    }

    fn profile_tab(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::SaveProfile
        });
        html! {
            <form {onsubmit} novalidate=true>
                <div class="form-group">
                    <label>{ "Nom de l'agence" }</label>
                    <input
                        type="text"
                        value={self.agency.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetAgency(input_value(&e)))}
                    />
                    { field_error(self.agency_error.as_ref().map(ToString::to_string)) }
                </div>
                <div class="form-group">
                    <label>{ "Email" }</label>
                    <input
                        type="email"
                        value={self.email.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetEmail(input_value(&e)))}
                    />
                    { field_error(self.email_error.as_ref().map(ToString::to_string)) }
                </div>
                <button type="submit" class="btn-primary" disabled={self.saving}>
                    { self.save_label("Enregistrer") }
                </button>
            </form>
        }
    }

    fn language_tab(&self, ctx: &Context<Self>) -> Html {
        let current = ctx.props().user.as_ref().and_then(|u| u.language_id);
        let onchange = ctx
            .link()
            .callback(|e: Event| Msg::SelectLanguage(parse_id(&select_value(&e))));
        html! {
            <div class="form-group">
                <label>{ "Langue des messages" }</label>
                <select {onchange}>
                    <option value="" selected={current.is_none()}>{ "Choisir une langue..." }</option>
                    { for self.languages.iter().map(|l| html! {
                        <option value={l.id.to_string()} selected={current == Some(l.id)}>
                            { l.name.clone() }
                        </option>
                    }) }
                </select>
            </div>
        }
    }

    fn token_tab(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::SaveToken
        });
        html! {
            <form {onsubmit}>
                <p class="muted">
                    { "Clé fournie par votre fournisseur de messagerie, utilisée pour l'envoi des messages." }
                </p>
                <div class="form-group">
                    <label>{ "Clé API" }</label>
                    <input
                        type="password"
                        value={self.token.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetToken(input_value(&e)))}
                    />
                </div>
                <button type="submit" class="btn-primary" disabled={self.saving}>
                    { self.save_label("Enregistrer la clé") }
                </button>
            </form>
        }
    }
}
