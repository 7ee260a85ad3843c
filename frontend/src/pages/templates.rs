use common::error::ApiError;
use common::format::{capitalize_first_letter, truncate_text};
use common::model::template::Template;
use common::search::{filter_templates, TemplateCategory};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::ui::{empty_state, page_loading, plural};
use crate::helpers::{input_value, select_value, toast_error};

const PREVIEW_CHARS: usize = 150;

pub enum Msg {
    Fetched(Result<Vec<Template>, ApiError>),
    Search(String),
    Category(TemplateCategory),
}

#[derive(Properties, PartialEq)]
pub struct TemplatesProps {
    pub api: ApiClient,
}

pub struct TemplatesPage {
    templates: Vec<Template>,
    loading: bool,
    query: String,
    category: TemplateCategory,
}

fn template_card(template: &Template) -> Html {
    let chips = template
        .variables
        .iter()
        .map(|v| v.name.clone())
        .chain(template.global_variables.iter().map(|v| v.name.clone()))
        .chain(template.catch_data.iter().map(|v| v.name.clone()));

    html! {
        <article class="template-card" key={template.id}>
            <header>
                <h3>{ template.name.clone() }</h3>
                {
                    match template.category.as_deref() {
                        Some(category) => html! {
                            <span class="badge">{ capitalize_first_letter(category) }</span>
                        },
                        None => html! {},
                    }
                }
            </header>
            <p class="template-body">
                { truncate_text(template.body.as_deref().unwrap_or_default(), PREVIEW_CHARS) }
            </p>
            {
                if template.has_variables() {
                    html! {
                        <div class="chips">
                            { for chips.map(|name| html! { <span class="chip">{ name }</span> }) }
                        </div>
                    }
                } else {
                    html! { <p class="muted small">{ "Aucune variable" }</p> }
                }
            }
        </article>
    }
}

impl Component for TemplatesPage {
    type Message = Msg;
    type Properties = TemplatesProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ctx.props().api.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Fetched(api.templates().await));
        });
        Self {
            templates: Vec::new(),
            loading: true,
            query: String::new(),
            category: TemplateCategory::All,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetched(result) => {
                self.loading = false;
                match result {
                    Ok(templates) => self.templates = templates,
                    Err(err) => toast_error(&format!("Impossible de charger les modèles: {err}")),
                }
            }
            Msg::Search(query) => self.query = query,
            Msg::Category(category) => self.category = category,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return page_loading();
        }
        let link = ctx.link();
        let visible = filter_templates(&self.templates, &self.query, self.category);
        let on_category = link.callback(|e: Event| {
            Msg::Category(select_value(&e).parse().unwrap_or_default())
        });

        html! {
            <div class="templates-page">
                <div class="toolbar">
                    <input
                        class="search"
                        type="search"
                        placeholder="Rechercher un modèle..."
                        value={self.query.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Search(input_value(&e)))}
                    />
                    <select onchange={on_category}>
                        { for TemplateCategory::ALL.iter().map(|c| html! {
                            <option value={c.as_str()} selected={*c == self.category}>{ c.label() }</option>
                        }) }
                    </select>
                </div>
                <p class="muted">{ plural(visible.len(), "modèle") }</p>
                {
                    if visible.is_empty() {
                        empty_state("Aucun modèle trouvé", "Modifiez votre recherche ou la catégorie.")
                    } else {
                        html! {
                            <div class="template-grid">
                                { for visible.into_iter().map(template_card) }
                            </div>
                        }
                    }
                }
            </div>
        }
    }
}
