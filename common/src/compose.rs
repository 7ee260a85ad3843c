//! Message composition: choosing a client and a template, collecting the
//! template's variables and producing a single [`SendPayload`].
//!
//! A [`ComposeSession`] is a plain state container driven by UI events. It
//! performs no I/O; sending is delegated to a [`Dispatch`] implementation and
//! the outcome is fed back through [`ComposeSession::finish`].
//!
//! Lifecycle of one session:
//!
//! ```text
//! Idle -> TemplateChosen -> Editing -> Submitting -> Idle     (sent)
//!                                          \-> Editing         (failed)
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ApiError, ComposeError};
use crate::model::client::Client;
use crate::model::message::SendPayload;
use crate::model::template::Template;

/// Country sent with every message. Only Morocco is served today.
pub const DEFAULT_COUNTRY_ID: i64 = 1;

/// The three independent scopes a template may declare variables in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableNamespace {
    /// Per-message variables, keyed by their `name`.
    Template,
    /// Global variables, keyed by their `variable` identifier.
    Global,
    /// Catch-all data, keyed by their `variable` identifier.
    Catch,
}

impl VariableNamespace {
    pub const ALL: [VariableNamespace; 3] = [
        VariableNamespace::Template,
        VariableNamespace::Global,
        VariableNamespace::Catch,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            VariableNamespace::Template => "Variables du modèle",
            VariableNamespace::Global => "Variables globales",
            VariableNamespace::Catch => "Données supplémentaires",
        }
    }
}

impl fmt::Display for VariableNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VariableNamespace::Template => "data",
            VariableNamespace::Global => "globalData",
            VariableNamespace::Catch => "catchData",
        })
    }
}

/// Values typed by the user, one map per namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableValues {
    template: BTreeMap<String, String>,
    global: BTreeMap<String, String>,
    catch: BTreeMap<String, String>,
}

impl VariableValues {
    pub fn get(&self, namespace: VariableNamespace, key: &str) -> Option<&str> {
        self.map(namespace).get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.template.is_empty() && self.global.is_empty() && self.catch.is_empty()
    }

    pub fn clear(&mut self) {
        self.template.clear();
        self.global.clear();
        self.catch.clear();
    }

    fn map(&self, namespace: VariableNamespace) -> &BTreeMap<String, String> {
        match namespace {
            VariableNamespace::Template => &self.template,
            VariableNamespace::Global => &self.global,
            VariableNamespace::Catch => &self.catch,
        }
    }

    fn map_mut(&mut self, namespace: VariableNamespace) -> &mut BTreeMap<String, String> {
        match namespace {
            VariableNamespace::Template => &mut self.template,
            VariableNamespace::Global => &mut self.global,
            VariableNamespace::Catch => &mut self.catch,
        }
    }
}

/// One input to render for the active template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableField {
    pub namespace: VariableNamespace,
    pub key: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposePhase {
    Idle,
    TemplateChosen,
    Editing,
    Submitting,
}

/// Hands a payload to the message-send endpoint.
///
/// Implementations start the request and return immediately; the outcome
/// must later be reported with [`ComposeSession::finish`].
pub trait Dispatch {
    fn dispatch(&self, payload: SendPayload);
}

impl<F: Fn(SendPayload)> Dispatch for F {
    fn dispatch(&self, payload: SendPayload) {
        self(payload)
    }
}

/// State of one compose form.
#[derive(Debug, Clone)]
pub struct ComposeSession {
    country_id: i64,
    selected_client_id: Option<i64>,
    selected_template_id: Option<i64>,
    template: Option<Template>,
    values: VariableValues,
    sending: bool,
}

impl Default for ComposeSession {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY_ID)
    }
}

impl ComposeSession {
    pub fn new(country_id: i64) -> Self {
        Self {
            country_id,
            selected_client_id: None,
            selected_template_id: None,
            template: None,
            values: VariableValues::default(),
            sending: false,
        }
    }

    pub fn selected_client_id(&self) -> Option<i64> {
        self.selected_client_id
    }

    pub fn selected_template_id(&self) -> Option<i64> {
        self.selected_template_id
    }

    /// The template currently driving the variable inputs, if any.
    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    pub fn values(&self) -> &VariableValues {
        &self.values
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn phase(&self) -> ComposePhase {
        if self.sending {
            ComposePhase::Submitting
        } else if self.template.is_none() {
            ComposePhase::Idle
        } else if self.values.is_empty() {
            ComposePhase::TemplateChosen
        } else {
            ComposePhase::Editing
        }
    }

    pub fn select_client(&mut self, id: Option<i64>) {
        if !self.sending {
            self.selected_client_id = id;
        }
    }

    /// Selects a template by id.
    ///
    /// Values are dropped whenever the selected id changes. An id that does
    /// not appear in `templates` leaves no active template.
    pub fn select_template(&mut self, templates: &[Template], id: Option<i64>) {
        if self.sending {
            return;
        }
        if id != self.selected_template_id {
            self.values.clear();
        }
        self.selected_template_id = id;
        self.template = id.and_then(|id| templates.iter().find(|t| t.id == id).cloned());
    }

    /// Re-resolves the active template after the template list was refetched.
    ///
    /// Values are kept while the template is still present, minus the keys
    /// the refetched version no longer declares.
    pub fn refresh_templates(&mut self, templates: &[Template]) {
        self.template = self
            .selected_template_id
            .and_then(|id| templates.iter().find(|t| t.id == id).cloned());
        match &self.template {
            Some(template) => {
                for namespace in VariableNamespace::ALL {
                    self.values
                        .map_mut(namespace)
                        .retain(|key, _| template_declares(template, namespace, key));
                }
            }
            None => self.values.clear(),
        }
    }

    /// Inputs for the active template: template variables, then global
    /// variables, then catch-all data, each in declaration order.
    pub fn fields(&self) -> Vec<VariableField> {
        let Some(template) = &self.template else {
            return Vec::new();
        };

        let declared = template
            .variables
            .iter()
            .map(|v| (VariableNamespace::Template, &v.name, &v.name))
            .chain(
                template
                    .global_variables
                    .iter()
                    .map(|v| (VariableNamespace::Global, &v.variable, &v.name)),
            )
            .chain(
                template
                    .catch_data
                    .iter()
                    .map(|v| (VariableNamespace::Catch, &v.variable, &v.name)),
            );

        declared
            .map(|(namespace, key, label)| VariableField {
                namespace,
                key: key.clone(),
                label: label.clone(),
                value: self.values.get(namespace, key).unwrap_or_default().to_string(),
            })
            .collect()
    }

    fn declares(&self, namespace: VariableNamespace, key: &str) -> bool {
        self.template
            .as_ref()
            .is_some_and(|template| template_declares(template, namespace, key))
    }

    /// Records the value typed for one variable.
    ///
    /// Returns `false` without changing anything when the active template
    /// does not declare `key` in `namespace`, or while a send is in flight.
    pub fn set_value(&mut self, namespace: VariableNamespace, key: &str, value: String) -> bool {
        if self.sending || !self.declares(namespace, key) {
            return false;
        }
        self.values.map_mut(namespace).insert(key.to_string(), value);
        true
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.sending && self.selected_client_id.is_some() && self.template.is_some()
    }

    /// Validates the form and builds the payload.
    ///
    /// On success the session enters [`ComposePhase::Submitting`] and refuses
    /// further submits until [`finish`](Self::finish) is called.
    pub fn submit(&mut self, clients: &[Client]) -> Result<SendPayload, ComposeError> {
        if self.sending {
            return Err(ComposeError::InFlight);
        }
        let client_id = self.selected_client_id.ok_or(ComposeError::NoClient)?;
        let template = self.template.as_ref().ok_or(ComposeError::NoTemplate)?;
        let client = clients
            .iter()
            .find(|c| c.id == client_id)
            .ok_or(ComposeError::ClientNotFound(client_id))?;

        if let Some(missing) = self.fields().into_iter().find(|f| f.value.trim().is_empty()) {
            return Err(ComposeError::MissingVariable {
                namespace: missing.namespace,
                name: missing.label,
            });
        }

        let payload = SendPayload::new(
            client.phone.clone(),
            template.id,
            self.country_id,
            self.values.template.clone(),
            self.values.global.clone(),
            self.values.catch.clone(),
        );
        self.sending = true;
        Ok(payload)
    }

    /// [`submit`](Self::submit), then hand the payload to `dispatcher`.
    ///
    /// The dispatcher is only invoked when validation succeeds, so it runs at
    /// most once per submit cycle.
    pub fn submit_with<D: Dispatch + ?Sized>(
        &mut self,
        clients: &[Client],
        dispatcher: &D,
    ) -> Result<(), ComposeError> {
        let payload = self.submit(clients)?;
        dispatcher.dispatch(payload);
        Ok(())
    }

    /// Applies the outcome of the send started by the last submit.
    ///
    /// Success clears the whole form; failure keeps every selection and value
    /// so the user can correct and resubmit. Calls without a pending send are
    /// ignored.
    pub fn finish(&mut self, outcome: Result<(), ApiError>) {
        if !self.sending {
            return;
        }
        self.sending = false;
        if outcome.is_ok() {
            self.selected_client_id = None;
            self.selected_template_id = None;
            self.template = None;
            self.values.clear();
        }
    }
}

fn template_declares(template: &Template, namespace: VariableNamespace, key: &str) -> bool {
    match namespace {
        VariableNamespace::Template => template.variables.iter().any(|v| v.name == key),
        VariableNamespace::Global => template.global_variables.iter().any(|v| v.variable == key),
        VariableNamespace::Catch => template.catch_data.iter().any(|v| v.variable == key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::template::{NamedVariable, TemplateVariable};

    fn template(id: i64, vars: &[&str], globals: &[(&str, &str)], catch: &[(&str, &str)]) -> Template {
        Template {
            id,
            name: format!("Modèle {id}"),
            body: None,
            category: None,
            variables: vars.iter().map(|n| TemplateVariable { name: n.to_string() }).collect(),
            global_variables: globals
                .iter()
                .map(|(v, n)| NamedVariable { variable: v.to_string(), name: n.to_string() })
                .collect(),
            catch_data: catch
                .iter()
                .map(|(v, n)| NamedVariable { variable: v.to_string(), name: n.to_string() })
                .collect(),
        }
    }

    #[test]
    fn fields_follow_namespace_then_declaration_order() {
        let templates = vec![template(
            1,
            &["ville", "prix"],
            &[("agence", "Agence")],
            &[("agent", "Agent")],
        )];
        let mut session = ComposeSession::default();
        session.select_template(&templates, Some(1));

        let keys: Vec<_> = session
            .fields()
            .into_iter()
            .map(|f| (f.namespace, f.key, f.label))
            .collect();
        assert_eq!(
            keys,
            vec![
                (VariableNamespace::Template, "ville".into(), "ville".into()),
                (VariableNamespace::Template, "prix".into(), "prix".into()),
                (VariableNamespace::Global, "agence".into(), "Agence".into()),
                (VariableNamespace::Catch, "agent".into(), "Agent".into()),
            ]
        );
    }

    #[test]
    fn undeclared_keys_are_rejected() {
        let templates = vec![template(1, &["ville"], &[("agence", "Agence")], &[])];
        let mut session = ComposeSession::default();
        assert!(!session.set_value(VariableNamespace::Template, "ville", "Rabat".into()));

        session.select_template(&templates, Some(1));
        assert!(!session.set_value(VariableNamespace::Global, "ville", "Rabat".into()));
        assert!(!session.set_value(VariableNamespace::Catch, "agence", "x".into()));
        assert!(session.set_value(VariableNamespace::Global, "agence", "Atlas".into()));
        assert_eq!(session.values().get(VariableNamespace::Global, "agence"), Some("Atlas"));
        assert_eq!(session.values().get(VariableNamespace::Template, "ville"), None);
    }

    #[test]
    fn phase_tracks_the_form() {
        let templates = vec![template(1, &["ville"], &[], &[])];
        let mut session = ComposeSession::default();
        assert_eq!(session.phase(), ComposePhase::Idle);

        session.select_template(&templates, Some(1));
        assert_eq!(session.phase(), ComposePhase::TemplateChosen);

        session.set_value(VariableNamespace::Template, "ville", "Fès".into());
        assert_eq!(session.phase(), ComposePhase::Editing);
    }

    #[test]
    fn reselecting_the_same_template_keeps_values() {
        let templates = vec![template(1, &["ville"], &[], &[])];
        let mut session = ComposeSession::default();
        session.select_template(&templates, Some(1));
        session.set_value(VariableNamespace::Template, "ville", "Fès".into());

        session.select_template(&templates, Some(1));
        assert_eq!(session.values().get(VariableNamespace::Template, "ville"), Some("Fès"));
    }

    #[test]
    fn refresh_drops_vanished_template() {
        let templates = vec![template(1, &["ville"], &[], &[])];
        let mut session = ComposeSession::default();
        session.select_template(&templates, Some(1));
        session.set_value(VariableNamespace::Template, "ville", "Fès".into());

        session.refresh_templates(&templates);
        assert!(session.template().is_some());
        assert!(!session.values().is_empty());

        session.refresh_templates(&[]);
        assert!(session.template().is_none());
        assert!(session.values().is_empty());
        assert!(session.fields().is_empty());
    }

    #[test]
    fn refresh_drops_keys_the_template_no_longer_declares() {
        let before = vec![template(1, &["ville", "prix"], &[("agent", "Agent")], &[("ref", "Référence")])];
        let clients = vec![Client {
            id: 1,
            name: "Jean".into(),
            phone: "0612345678".into(),
            email: "jean@exemple.ma".into(),
            notes: None,
            created_at: None,
        }];
        let mut session = ComposeSession::default();
        session.select_client(Some(1));
        session.select_template(&before, Some(1));
        session.set_value(VariableNamespace::Template, "ville", "Rabat".into());
        session.set_value(VariableNamespace::Template, "prix", "900000".into());
        session.set_value(VariableNamespace::Global, "agent", "Samir".into());
        session.set_value(VariableNamespace::Catch, "ref", "A12".into());

        let after = vec![template(1, &["ville"], &[("agent", "Agent")], &[])];
        session.refresh_templates(&after);
        assert_eq!(session.values().get(VariableNamespace::Template, "ville"), Some("Rabat"));
        assert_eq!(session.values().get(VariableNamespace::Template, "prix"), None);
        assert_eq!(session.values().get(VariableNamespace::Catch, "ref"), None);

        let payload = session.submit(&clients).unwrap();
        assert_eq!(payload.data().keys().collect::<Vec<_>>(), ["ville"]);
        assert_eq!(payload.global_data().len(), 1);
        assert!(payload.catch_data().is_empty());
    }

    #[test]
    fn whitespace_only_value_counts_as_missing() {
        let templates = vec![template(1, &[], &[], &[("agent", "Agent")])];
        let clients = vec![Client {
            id: 1,
            name: "Jean".into(),
            phone: "0612345678".into(),
            email: "jean@exemple.ma".into(),
            notes: None,
            created_at: None,
        }];
        let mut session = ComposeSession::default();
        session.select_client(Some(1));
        session.select_template(&templates, Some(1));
        session.set_value(VariableNamespace::Catch, "agent", "   ".into());

        assert_eq!(
            session.submit(&clients),
            Err(ComposeError::MissingVariable {
                namespace: VariableNamespace::Catch,
                name: "Agent".into()
            })
        );
        assert!(!session.is_sending());
    }

    #[test]
    fn custom_country_is_used() {
        let templates = vec![template(2, &[], &[], &[])];
        let clients = vec![Client {
            id: 9,
            name: "Sara".into(),
            phone: "0512345678".into(),
            email: "sara@exemple.ma".into(),
            notes: None,
            created_at: None,
        }];
        let mut session = ComposeSession::new(4);
        session.select_client(Some(9));
        session.select_template(&templates, Some(2));
        let payload = session.submit(&clients).unwrap();
        assert_eq!(payload.country_id(), 4);
        assert_eq!(payload.phone(), "0512345678");
    }

    #[test]
    fn finish_without_pending_send_is_ignored() {
        let templates = vec![template(1, &[], &[], &[])];
        let mut session = ComposeSession::default();
        session.select_template(&templates, Some(1));
        session.finish(Ok(()));
        assert_eq!(session.selected_template_id(), Some(1));
    }
}
