use common::compose::ComposeSession;

/// State of the message composer.
///
/// All form state lives in the [`ComposeSession`]; the component only adds
/// the last validation message shown above the submit button.
pub struct ComposerComponent {
    pub session: ComposeSession,
    pub error: Option<String>,
}

impl ComposerComponent {
    pub fn new(country_id: i64) -> Self {
        Self {
            session: ComposeSession::new(country_id),
            error: None,
        }
    }
}
