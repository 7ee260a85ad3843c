//! Message composer: picks a client and a template, collects the template's
//! variables and sends one message.
//!
//! The form logic lives in [`common::compose::ComposeSession`]; this module
//! wires it to Yew the same way the other stateful widgets are organized:
//! `state` holds the struct, `update` handles messages and `view` renders.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ComposerProps;
pub use state::ComposerComponent;

impl Component for ComposerComponent {
    type Message = Msg;
    type Properties = ComposerProps;

    fn create(ctx: &Context<Self>) -> Self {
        ComposerComponent::new(ctx.props().api.country_id())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().templates != old_props.templates {
            self.session.refresh_templates(&ctx.props().templates);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
