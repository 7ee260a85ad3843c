//! Root component: owns the runtime configuration and the authentication
//! session, guards the pages behind login and switches between them.
//!
//! Startup sequence
//! 1. Restore the session from `localStorage` (synchronously, in `create`).
//! 2. Fetch `/config.json`.
//! 3. When a token was restored, verify it with `GET /auth/me`; a failure
//!    clears the session.

use common::config::ClientConfig;
use common::error::ApiError;
use common::model::user::{User, UserPatch};
use common::session::SessionContext;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{load_config, ApiClient};
use crate::components::layout::DashboardLayout;
use crate::components::ui::page_loading;
use crate::pages::clients::ClientsPage;
use crate::pages::credits::CreditsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::messages::MessagesPage;
use crate::pages::register::RegisterPage;
use crate::pages::settings::SettingsPage;
use crate::pages::templates::TemplatesPage;
use crate::storage::LocalSessionStorage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Clients,
    Messages,
    Templates,
    Credits,
    Settings,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Clients,
        Page::Messages,
        Page::Templates,
        Page::Credits,
        Page::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Tableau de bord",
            Page::Clients => "Clients",
            Page::Messages => "Messages",
            Page::Templates => "Modèles",
            Page::Credits => "Crédits",
            Page::Settings => "Paramètres",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthView {
    Login,
    Register,
}

/// Changes to the session requested by the pages.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    LoggedIn { user: User, token: String },
    Registered { user: User, token: String },
    Logout,
    ReplaceUser(User),
    UpdateUser(UserPatch),
    SetConfirmedToken(String),
}

pub enum Msg {
    ConfigLoaded(ClientConfig),
    SessionVerified(Result<User, ApiError>),
    Session(SessionAction),
    Navigate(Page),
    ShowAuth(AuthView),
}

pub struct App {
    config: Option<ClientConfig>,
    session: SessionContext,
    verifying: bool,
    page: Page,
    auth_view: AuthView,
}

impl App {
    fn api(&self) -> Option<ApiClient> {
        self.config
            .clone()
            .map(|config| ApiClient::new(config, self.session.bearer().map(str::to_string)))
    }

    fn apply(&mut self, action: SessionAction) {
        let storage = LocalSessionStorage;
        match action {
            SessionAction::LoggedIn { user, token } => {
                self.session.login(user, token, &storage);
                self.page = Page::Dashboard;
            }
            SessionAction::Registered { user, token } => {
                self.session.register(user, token, &storage);
                self.auth_view = AuthView::Login;
            }
            SessionAction::Logout => {
                if let Some(api) = self.api() {
                    spawn_local(async move {
                        if let Err(err) = api.logout().await {
                            gloo_console::warn!(format!("logout: {err}"));
                        }
                    });
                }
                self.session.logout(&storage);
                self.auth_view = AuthView::Login;
            }
            SessionAction::ReplaceUser(user) => self.session.replace_user(user, &storage),
            SessionAction::UpdateUser(patch) => self.session.update_user(patch, &storage),
            SessionAction::SetConfirmedToken(token) => {
                self.session.set_confirmed_token(token, &storage)
            }
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(load_config().await));
        });
        Self {
            config: None,
            session: SessionContext::load(&LocalSessionStorage),
            verifying: false,
            page: Page::Dashboard,
            auth_view: AuthView::Login,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                self.config = Some(config);
                if let Some(api) = self.api().filter(|_| self.session.bearer().is_some()) {
                    self.verifying = true;
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(Msg::SessionVerified(api.me().await));
                    });
                }
                true
            }
            Msg::SessionVerified(result) => {
                self.verifying = false;
                let storage = LocalSessionStorage;
                match result {
                    Ok(user) if self.session.is_authenticated() => {
                        self.session.confirm(user, &storage)
                    }
                    Ok(_) => {}
                    Err(err) => {
                        gloo_console::warn!(format!("session expirée: {err}"));
                        self.session.logout(&storage);
                    }
                }
                true
            }
            Msg::Session(action) => {
                self.apply(action);
                true
            }
            Msg::Navigate(page) => {
                self.page = page;
                true
            }
            Msg::ShowAuth(view) => {
                self.auth_view = view;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let Some(api) = self.api() else {
            return page_loading();
        };
        if self.verifying {
            return page_loading();
        }
        let on_session = link.callback(Msg::Session);

        if !self.session.is_authenticated() {
            return match self.auth_view {
                AuthView::Login => html! {
                    <LoginPage
                        {api}
                        on_session={on_session}
                        on_show_register={link.callback(|_| Msg::ShowAuth(AuthView::Register))}
                    />
                },
                AuthView::Register => html! {
                    <RegisterPage
                        {api}
                        on_session={on_session}
                        on_show_login={link.callback(|_| Msg::ShowAuth(AuthView::Login))}
                    />
                },
            };
        }

        let user = self.session.user().cloned();
        let content = match self.page {
            Page::Dashboard => html! { <DashboardPage {api} /> },
            Page::Clients => html! { <ClientsPage {api} /> },
            Page::Messages => html! { <MessagesPage {api} /> },
            Page::Templates => html! { <TemplatesPage {api} /> },
            Page::Credits => html! { <CreditsPage {api} /> },
            Page::Settings => html! {
                <SettingsPage {api} user={user.clone()} on_session={on_session.clone()} />
            },
        };

        html! {
            <DashboardLayout
                page={self.page}
                {user}
                on_navigate={link.callback(Msg::Navigate)}
                on_logout={on_session.reform(|_| SessionAction::Logout)}
            >
                { content }
            </DashboardLayout>
        }
    }
}
