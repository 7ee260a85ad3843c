pub mod client;
pub mod credits;
pub mod dashboard;
pub mod language;
pub mod message;
pub mod template;
pub mod user;
