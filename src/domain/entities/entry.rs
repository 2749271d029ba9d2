//! Financial entry entity, enums, filter specification, and repository trait.
//!
//! Maps to the `entries` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Whether an entry adds to or subtracts from a user's balance.
///
/// The external member names are exact: `INCOME` and `EXPENSE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// Parse the exact external member name. Unknown strings are rejected
    /// rather than defaulted; callers surface a validation failure.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "INCOME" => Some(Self::Income),
            "EXPENSE" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Convert to the database/external string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle tag of an entry.
///
/// The external member names are exact: `PENDING`, `SETTLED`, `CANCELED`.
/// New entries always start as `PENDING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryStatus {
    #[default]
    Pending,
    Settled,
    Canceled,
}

impl EntryStatus {
    /// Parse the exact external member name; unknown strings are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "SETTLED" => Some(Self::Settled),
            "CANCELED" => Some(Self::Canceled),
            _ => None,
        }
    }

    /// Convert to the database/external string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Settled => "SETTLED",
            Self::Canceled => "CANCELED",
        }
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dated financial transaction (income or expense) owned by a user.
///
/// Maps to the `entries` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - description: VARCHAR(255) NOT NULL
/// - month: INT NOT NULL (1-12)
/// - year: INT NOT NULL (four digits)
/// - amount: NUMERIC(16,2) NOT NULL (strictly positive)
/// - kind: VARCHAR(20) NOT NULL
/// - status: VARCHAR(20) NOT NULL
/// - user_id: BIGINT NOT NULL REFERENCES users(id)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Database-generated primary key
    pub id: i64,

    /// Free-text description (never empty)
    pub description: String,

    /// Reference month, 1-12
    pub month: i32,

    /// Reference year, four digits
    pub year: i32,

    /// Transaction amount, strictly greater than zero
    pub amount: Decimal,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Lifecycle status
    pub status: EntryStatus,

    /// Owning user's id
    #[serde(rename = "user")]
    pub user_id: i64,

    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Validated fields for an entry that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub description: String,
    pub month: i32,
    pub year: i32,
    pub amount: Decimal,
    pub kind: EntryKind,
    pub status: EntryStatus,
    pub user_id: i64,
}

/// Validated fields for overwriting an existing entry.
#[derive(Debug, Clone)]
pub struct EntryUpdate {
    pub id: i64,
    pub description: String,
    pub month: i32,
    pub year: i32,
    pub amount: Decimal,
    pub kind: EntryKind,
    pub status: EntryStatus,
    pub user_id: i64,
}

/// Explicit filter specification for entry queries.
///
/// Each field is an optional predicate: `None` matches everything,
/// `description` matches as a case-insensitive substring, every other
/// field matches exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFilter {
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub kind: Option<EntryKind>,
    pub status: Option<EntryStatus>,
    pub user_id: Option<i64>,
}

/// Repository trait for Entry data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Find an entry by its database id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Entry>, AppError>;

    /// Insert a new entry and return it with the generated id.
    async fn create(&self, entry: &NewEntry) -> Result<Entry, AppError>;

    /// Overwrite an existing entry's fields.
    async fn update(&self, entry: &EntryUpdate) -> Result<Entry, AppError>;

    /// Delete an entry by id.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Return all entries matching the filter's predicates.
    async fn find_by_filter(&self, filter: &EntryFilter) -> Result<Vec<Entry>, AppError>;

    /// Sum the amounts of a user's entries of the given kind.
    /// An empty result set sums to zero, never null.
    async fn sum_amount_by_user_and_kind(
        &self,
        user_id: i64,
        kind: EntryKind,
    ) -> Result<Decimal, AppError>;
}
