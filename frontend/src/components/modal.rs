use yew::{classes, html, Callback, Component, Context, Html, Properties};

/// A top sheet overlay: slides in when `open` is set and calls `on_close`
/// from its close button.
pub struct Modal;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for Modal {
    type Message = ();
    type Properties = ModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Modal
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }
        let on_close = props.on_close.reform(|_| ());
        html! {
            <div class="overlay">
                <div class={classes!("top-sheet", "show")}>
                    <div class="top-sheet-header">
                        <h2>{ props.title.clone() }</h2>
                        <button class="icon-btn" title="Fermer" onclick={on_close}>{ "✕" }</button>
                    </div>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
