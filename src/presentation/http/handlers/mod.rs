//! HTTP Handlers
//!
//! Request handlers mapping HTTP calls onto application services.

pub mod entry;
pub mod health;
pub mod user;
