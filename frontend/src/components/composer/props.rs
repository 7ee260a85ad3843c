//! Properties of the `ComposerComponent`.

use std::rc::Rc;

use common::model::client::Client;
use common::model::template::Template;
use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct ComposerProps {
    /// Used to post the assembled payload to `/messages`.
    pub api: ApiClient,

    /// Template snapshot; empty while the list is still loading.
    #[prop_or_default]
    pub templates: Rc<Vec<Template>>,

    /// Client snapshot; empty while the list is still loading.
    #[prop_or_default]
    pub clients: Rc<Vec<Client>>,

    /// Fired once a message was accepted by the API, so the parent can
    /// refresh the history.
    #[prop_or_default]
    pub on_sent: Callback<()>,
}
