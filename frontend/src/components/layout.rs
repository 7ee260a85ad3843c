use common::format::generate_initials;
use common::model::user::User;
use yew::{classes, html, Callback, Component, Context, Html, Properties};

use crate::app::Page;

/// Sidebar navigation plus header around the active page.
pub struct DashboardLayout {
    sidebar_open: bool,
}

pub enum LayoutMsg {
    ToggleSidebar,
    Navigate(Page),
}

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub page: Page,
    pub user: Option<User>,
    pub on_navigate: Callback<Page>,
    pub on_logout: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for DashboardLayout {
    type Message = LayoutMsg;
    type Properties = DashboardLayoutProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            sidebar_open: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LayoutMsg::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            LayoutMsg::Navigate(page) => {
                self.sidebar_open = false;
                ctx.props().on_navigate.emit(page);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let agency = props
            .user
            .as_ref()
            .map(|u| u.agency_name.clone())
            .unwrap_or_default();
        let initials = generate_initials(&agency);
        let email = props.user.as_ref().map(|u| u.email.clone()).unwrap_or_default();

        html! {
            <div class="dashboard-layout">
                <aside class={classes!("sidebar", self.sidebar_open.then_some("open"))}>
                    <div class="brand">{ "ImmoConnect" }</div>
                    <nav>
                        { for Page::ALL.iter().map(|page| {
                            let page = *page;
                            html! {
                                <button
                                    class={classes!("nav-item", (page == props.page).then_some("active"))}
                                    onclick={link.callback(move |_| LayoutMsg::Navigate(page))}
                                >
                                    { page.title() }
                                </button>
                            }
                        }) }
                    </nav>
                </aside>
                <div class="main">
                    <header class="header">
                        <button class="icon-btn menu" onclick={link.callback(|_| LayoutMsg::ToggleSidebar)}>{ "☰" }</button>
                        <h1>{ props.page.title() }</h1>
                        <div class="user-menu">
                            <span class="avatar" title={email}>{ initials }</span>
                            <span class="agency">{ agency }</span>
                            <button class="btn-secondary" onclick={props.on_logout.reform(|_| ())}>
                                { "Déconnexion" }
                            </button>
                        </div>
                    </header>
                    <main class="content">{ props.children.clone() }</main>
                </div>
            </div>
        }
    }
}
