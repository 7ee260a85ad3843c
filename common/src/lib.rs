//! Shared, target-independent core of the ImmoConnect dashboard.
//!
//! Everything here compiles both for the browser bundle (`frontend`) and for
//! native targets, so the composition workflow, the validation rules and the
//! list filters can be unit-tested without a browser.

pub mod compose;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod requests;
pub mod search;
pub mod session;
pub mod validation;
