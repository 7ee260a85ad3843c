//! View rendering for the message composer.
//!
//! Layout, top to bottom: client selector, template selector, template
//! preview, one input group per variable namespace, submit button.

use common::compose::{VariableField, VariableNamespace};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::ui::spinner;
use crate::helpers::{input_value, parse_id, select_value};

use super::messages::Msg;
use super::state::ComposerComponent;

pub fn view(component: &ComposerComponent, ctx: &Context<ComposerComponent>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="composer" {onsubmit}>
            { build_client_select(component, ctx) }
            { build_template_select(component, ctx) }
            { build_preview(component) }
            { for VariableNamespace::ALL.iter().map(|ns| build_namespace_inputs(component, link, *ns)) }
            {
                match &component.error {
                    Some(message) => html! { <p class="field-error">{ message }</p> },
                    None => html! {},
                }
            }
            { build_submit(component) }
        </form>
    }
}

fn build_client_select(component: &ComposerComponent, ctx: &Context<ComposerComponent>) -> Html {
    let selected = component.session.selected_client_id();
    let disabled = component.session.is_sending();
    html! {
        <div class="form-group">
            <label for="composer-client">{ "Sélectionner un client" }</label>
            <select
                id="composer-client"
                {disabled}
                onchange={ctx.link().callback(|e: Event| Msg::SelectClient(parse_id(&select_value(&e))))}
            >
                <option value="" selected={selected.is_none()}>{ "Choisir un client..." }</option>
                { for ctx.props().clients.iter().map(|client| html! {
                    <option value={client.id.to_string()} selected={selected == Some(client.id)}>
                        { format!("{} - {}", client.name, client.phone) }
                    </option>
                }) }
            </select>
        </div>
    }
}

fn build_template_select(component: &ComposerComponent, ctx: &Context<ComposerComponent>) -> Html {
    let selected = component.session.selected_template_id();
    let disabled = component.session.is_sending();
    html! {
        <div class="form-group">
            <label for="composer-template">{ "Sélectionner un modèle" }</label>
            <select
                id="composer-template"
                {disabled}
                onchange={ctx.link().callback(|e: Event| Msg::SelectTemplate(parse_id(&select_value(&e))))}
            >
                <option value="" selected={selected.is_none()}>{ "Choisir un modèle..." }</option>
                { for ctx.props().templates.iter().map(|template| html! {
                    <option value={template.id.to_string()} selected={selected == Some(template.id)}>
                        { template.name.clone() }
                    </option>
                }) }
            </select>
        </div>
    }
}

fn build_preview(component: &ComposerComponent) -> Html {
    let Some(template) = component.session.template() else {
        return html! {};
    };
    html! {
        <div class="template-preview">
            <h4>{ "Aperçu du modèle" }</h4>
            <p class="muted">{ template.name.clone() }</p>
            {
                match &template.body {
                    Some(body) => html! { <div class="template-body">{ body.clone() }</div> },
                    None => html! {},
                }
            }
        </div>
    }
}

/// One labelled, required text input per variable the template declares in
/// `namespace`. Nothing is rendered for an empty namespace.
fn build_namespace_inputs(
    component: &ComposerComponent,
    link: &Scope<ComposerComponent>,
    namespace: VariableNamespace,
) -> Html {
    let fields: Vec<VariableField> = component
        .session
        .fields()
        .into_iter()
        .filter(|f| f.namespace == namespace)
        .collect();
    if fields.is_empty() {
        return html! {};
    }
    let disabled = component.session.is_sending();

    html! {
        <div class="variable-group">
            <h4>{ namespace.title() }</h4>
            { for fields.into_iter().map(|field| {
                let key = field.key.clone();
                let oninput = link.callback(move |e: InputEvent| Msg::SetValue {
                    namespace,
                    key: key.clone(),
                    value: input_value(&e),
                });
                html! {
                    <div class="form-group" key={format!("{namespace}-{}", field.key)}>
                        <label>{ field.label.clone() }</label>
                        <input
                            type="text"
                            required=true
                            {disabled}
                            value={field.value}
                            placeholder={format!("Entrez {}", field.label.to_lowercase())}
                            {oninput}
                        />
                    </div>
                }
            }) }
        </div>
    }
}

fn build_submit(component: &ComposerComponent) -> Html {
    let sending = component.session.is_sending();
    html! {
        <button type="submit" class="btn-primary wide" disabled={!component.session.can_submit()}>
            {
                if sending {
                    html! { <>{ spinner() }<span>{ "Envoi en cours..." }</span></> }
                } else {
                    html! { <span>{ "Envoyer le message" }</span> }
                }
            }
        </button>
    }
}
