//! Domain Entities
//!
//! Core business entities and their repository traits.

pub mod entry;
pub mod user;

pub use entry::{
    Entry, EntryFilter, EntryKind, EntryRepository, EntryStatus, EntryUpdate, NewEntry,
};
pub use user::{NewUser, User, UserRepository};

#[cfg(test)]
pub use entry::MockEntryRepository;
#[cfg(test)]
pub use user::MockUserRepository;
