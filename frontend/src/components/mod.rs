pub mod client_form;
pub mod composer;
pub mod layout;
pub mod message_history;
pub mod modal;
pub mod ui;
