//! Repository Implementations
//!
//! PostgreSQL-backed implementations of the domain repository traits.

pub mod entry_repository;
pub mod user_repository;

pub use entry_repository::PgEntryRepository;
pub use user_repository::PgUserRepository;
