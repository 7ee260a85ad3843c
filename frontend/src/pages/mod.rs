pub mod clients;
pub mod credits;
pub mod dashboard;
pub mod login;
pub mod messages;
pub mod register;
pub mod settings;
pub mod templates;
