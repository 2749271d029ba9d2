//! Application Services
//!
//! Business logic services orchestrating domain entities and repositories.

pub mod entry_service;
pub mod user_service;

pub use entry_service::{validate, EntryData, EntryError, EntryService, EntryServiceImpl};
pub use user_service::{
    PasswordVerifier, PlaintextVerifier, UserError, UserService, UserServiceImpl,
};
