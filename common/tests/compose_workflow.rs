use std::cell::RefCell;

use immoconnect_common::compose::{ComposePhase, ComposeSession, Dispatch, VariableNamespace};
use immoconnect_common::error::{ApiError, ComposeError};
use immoconnect_common::model::client::Client;
use immoconnect_common::model::message::SendPayload;
use immoconnect_common::model::template::Template;
use serde_json::json;

#[derive(Default)]
struct RecordingDispatcher {
    sent: RefCell<Vec<SendPayload>>,
}

impl Dispatch for RecordingDispatcher {
    fn dispatch(&self, payload: SendPayload) {
        self.sent.borrow_mut().push(payload);
    }
}

fn clients() -> Vec<Client> {
    serde_json::from_value(json!([
        {"id": 7, "name": "Jean Dupont", "phone": "+212612345678", "email": "jean@exemple.ma"},
        {"id": 8, "name": "Marie Martin", "phone": "0712345678", "email": "marie@exemple.ma"}
    ]))
    .unwrap()
}

fn templates() -> Vec<Template> {
    serde_json::from_value(json!([
        {"id": 3, "name": "Visite", "variables": [{"name": "ville"}]},
        {"id": 4, "name": "Relance", "variables": [{"name": "ville"}],
         "global_variables": [{"variable": "agence", "name": "Agence"}],
         "catch_data": [{"variable": "agent", "name": "Agent"}]},
        {"id": 5, "name": "Bienvenue"}
    ]))
    .unwrap()
}

#[test]
fn template_without_variables_renders_no_inputs() {
    let mut session = ComposeSession::default();
    session.select_template(&templates(), Some(5));
    assert!(session.template().is_some());
    assert!(session.fields().is_empty());
}

#[test]
fn stale_template_id_means_no_active_template() {
    let mut session = ComposeSession::default();
    session.select_template(&templates(), Some(42));
    assert_eq!(session.selected_template_id(), Some(42));
    assert!(session.template().is_none());
    assert!(session.fields().is_empty());
    assert_eq!(session.phase(), ComposePhase::Idle);
}

#[test]
fn changing_template_clears_shared_keys() {
    let templates = templates();
    let mut session = ComposeSession::default();
    session.select_template(&templates, Some(3));
    assert!(session.set_value(VariableNamespace::Template, "ville", "Casablanca".into()));

    session.select_template(&templates, Some(4));
    assert!(session.values().is_empty());
    assert!(session.fields().iter().all(|f| f.value.is_empty()));
}

#[test]
fn sends_expected_payload() {
    let (clients, templates) = (clients(), templates());
    let dispatcher = RecordingDispatcher::default();
    let mut session = ComposeSession::default();
    session.select_client(Some(7));
    session.select_template(&templates, Some(3));
    session.set_value(VariableNamespace::Template, "ville", "Casablanca".into());

    session.submit_with(&clients, &dispatcher).unwrap();

    let sent = dispatcher.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        serde_json::to_value(&sent[0]).unwrap(),
        json!({
            "phone": "+212612345678",
            "templateId": 3,
            "countryId": 1,
            "data": {"ville": "Casablanca"},
            "globalData": {},
            "catchData": {}
        })
    );
}

#[test]
fn every_namespace_is_sent_separately() {
    let (clients, templates) = (clients(), templates());
    let mut session = ComposeSession::default();
    session.select_client(Some(8));
    session.select_template(&templates, Some(4));
    session.set_value(VariableNamespace::Template, "ville", "Tanger".into());
    session.set_value(VariableNamespace::Global, "agence", "Atlas".into());
    session.set_value(VariableNamespace::Catch, "agent", "Karim".into());

    let payload = session.submit(&clients).unwrap();
    assert_eq!(payload.phone(), "0712345678");
    assert_eq!(payload.data().get("ville").map(String::as_str), Some("Tanger"));
    assert_eq!(payload.global_data().get("agence").map(String::as_str), Some("Atlas"));
    assert_eq!(payload.catch_data().get("agent").map(String::as_str), Some("Karim"));
}

#[test]
fn incomplete_forms_never_reach_the_dispatcher() {
    let (clients, templates) = (clients(), templates());
    let dispatcher = RecordingDispatcher::default();

    let mut no_client = ComposeSession::default();
    no_client.select_template(&templates, Some(5));
    assert!(!no_client.can_submit());
    assert_eq!(no_client.submit_with(&clients, &dispatcher), Err(ComposeError::NoClient));

    let mut no_template = ComposeSession::default();
    no_template.select_client(Some(7));
    assert!(!no_template.can_submit());
    assert_eq!(no_template.submit_with(&clients, &dispatcher), Err(ComposeError::NoTemplate));

    let mut empty_var = ComposeSession::default();
    empty_var.select_client(Some(7));
    empty_var.select_template(&templates, Some(4));
    empty_var.set_value(VariableNamespace::Template, "ville", "Tanger".into());
    empty_var.set_value(VariableNamespace::Global, "agence", "Atlas".into());
    empty_var.set_value(VariableNamespace::Catch, "agent", String::new());
    assert!(empty_var.can_submit());
    assert!(matches!(
        empty_var.submit_with(&clients, &dispatcher),
        Err(ComposeError::MissingVariable { namespace: VariableNamespace::Catch, .. })
    ));

    let mut unknown_client = ComposeSession::default();
    unknown_client.select_client(Some(99));
    unknown_client.select_template(&templates, Some(5));
    assert_eq!(
        unknown_client.submit_with(&clients, &dispatcher),
        Err(ComposeError::ClientNotFound(99))
    );

    assert!(dispatcher.sent.borrow().is_empty());
}

#[test]
fn resubmitting_while_in_flight_is_a_no_op() {
    let (clients, templates) = (clients(), templates());
    let dispatcher = RecordingDispatcher::default();
    let mut session = ComposeSession::default();
    session.select_client(Some(7));
    session.select_template(&templates, Some(5));

    session.submit_with(&clients, &dispatcher).unwrap();
    assert_eq!(session.phase(), ComposePhase::Submitting);
    assert!(!session.can_submit());
    assert_eq!(session.submit_with(&clients, &dispatcher), Err(ComposeError::InFlight));
    assert_eq!(dispatcher.sent.borrow().len(), 1);
}

#[test]
fn success_resets_and_failure_retains() {
    let (clients, templates) = (clients(), templates());
    let mut session = ComposeSession::default();
    session.select_client(Some(7));
    session.select_template(&templates, Some(3));
    session.set_value(VariableNamespace::Template, "ville", "Agadir".into());

    session.submit(&clients).unwrap();
    session.finish(Err(ApiError::Status {
        status: 402,
        message: "Crédits insuffisants".into(),
    }));
    assert_eq!(session.phase(), ComposePhase::Editing);
    assert_eq!(session.selected_client_id(), Some(7));
    assert_eq!(session.values().get(VariableNamespace::Template, "ville"), Some("Agadir"));

    session.submit(&clients).unwrap();
    session.finish(Ok(()));
    assert_eq!(session.phase(), ComposePhase::Idle);
    assert_eq!(session.selected_client_id(), None);
    assert_eq!(session.selected_template_id(), None);
    assert!(session.values().is_empty());
}

#[test]
fn closures_can_dispatch() {
    let (clients, templates) = (clients(), templates());
    let count = RefCell::new(0);
    let mut session = ComposeSession::default();
    session.select_client(Some(7));
    session.select_template(&templates, Some(5));
    session
        .submit_with(&clients, &|_payload: SendPayload| *count.borrow_mut() += 1)
        .unwrap();
    assert_eq!(*count.borrow(), 1);
}
