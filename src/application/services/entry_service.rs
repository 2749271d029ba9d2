//! Entry Service
//!
//! Field validation, lifecycle operations, filtering, and balance
//! computation for financial entries.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{
    Entry, EntryFilter, EntryKind, EntryRepository, EntryStatus, EntryUpdate, NewEntry,
};
use crate::shared::error::AppError;

/// Entry service trait for dependency injection
#[async_trait]
pub trait EntryService: Send + Sync {
    /// Validate and persist a new entry. Status is forced to PENDING
    /// regardless of caller input.
    async fn create(&self, data: EntryData) -> Result<Entry, EntryError>;

    /// Validate and overwrite an existing entry. The id is a precondition:
    /// its absence is a contract violation, not a field-validation failure.
    async fn update(&self, data: EntryData) -> Result<Entry, EntryError>;

    /// Set the status and run a full update, so the whole entry is
    /// re-validated even though only the status changed.
    async fn change_status(&self, data: EntryData, status: EntryStatus)
        -> Result<Entry, EntryError>;

    /// Delete an entry. The id is a precondition, as for `update`.
    async fn delete(&self, data: EntryData) -> Result<(), EntryError>;

    /// Get an entry by id
    async fn find_by_id(&self, id: i64) -> Result<Entry, EntryError>;

    /// Return all entries matching the filter's predicates
    async fn filter(&self, filter: EntryFilter) -> Result<Vec<Entry>, EntryError>;

    /// Income total minus expense total for the user, status-agnostic.
    async fn balance_for_user(&self, user_id: i64) -> Result<Decimal, EntryError>;
}

/// An entry as submitted, before validation. Every field is optional;
/// `validate` extracts the typed fields or reports the first failure.
#[derive(Debug, Clone, Default)]
pub struct EntryData {
    pub id: Option<i64>,
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub amount: Option<Decimal>,
    pub kind: Option<EntryKind>,
    pub status: Option<EntryStatus>,
    pub user_id: Option<i64>,
}

impl From<&Entry> for EntryData {
    fn from(entry: &Entry) -> Self {
        Self {
            id: Some(entry.id),
            description: Some(entry.description.clone()),
            month: Some(entry.month),
            year: Some(entry.year),
            amount: Some(entry.amount),
            kind: Some(entry.kind),
            status: Some(entry.status),
            user_id: Some(entry.user_id),
        }
    }
}

/// Entry service errors
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum EntryError {
    #[error("invalid description")]
    InvalidDescription,

    #[error("invalid month")]
    InvalidMonth,

    #[error("invalid year")]
    InvalidYear,

    #[error("missing user")]
    MissingUser,

    #[error("invalid amount")]
    InvalidAmount,

    #[error("missing type")]
    MissingKind,

    #[error("entry id is required")]
    MissingId,

    #[error("entry not found for given id")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

/// The typed fields extracted by a successful validation.
struct ValidEntry {
    description: String,
    month: i32,
    year: i32,
    amount: Decimal,
    kind: EntryKind,
    user_id: i64,
}

/// Validate submitted entry fields in fixed order; the first failing check
/// wins and later fields are not inspected. The ordering is a behavioral
/// contract: description, month, year, user, amount, kind.
pub fn validate(data: &EntryData) -> Result<(), EntryError> {
    validated_fields(data).map(|_| ())
}

fn validated_fields(data: &EntryData) -> Result<ValidEntry, EntryError> {
    let description = match &data.description {
        Some(d) if !d.trim().is_empty() => d.clone(),
        _ => return Err(EntryError::InvalidDescription),
    };

    let month = match data.month {
        Some(m) if (1..=12).contains(&m) => m,
        _ => return Err(EntryError::InvalidMonth),
    };

    // The year must render to exactly four characters, mirroring the
    // stored contract: 999 and 10000 fail, and a sign character counts
    // against the length.
    let year = match data.year {
        Some(y) if y.to_string().len() == 4 => y,
        _ => return Err(EntryError::InvalidYear),
    };

    let user_id = data.user_id.ok_or(EntryError::MissingUser)?;

    let amount = match data.amount {
        Some(a) if a > Decimal::ZERO => a,
        _ => return Err(EntryError::InvalidAmount),
    };

    let kind = data.kind.ok_or(EntryError::MissingKind)?;

    Ok(ValidEntry {
        description,
        month,
        year,
        amount,
        kind,
        user_id,
    })
}

fn store_error(e: AppError) -> EntryError {
    match e {
        AppError::NotFound(_) => EntryError::NotFound,
        e => EntryError::Internal(e.to_string()),
    }
}

/// EntryService implementation
pub struct EntryServiceImpl<R>
where
    R: EntryRepository,
{
    repo: Arc<R>,
}

impl<R> EntryServiceImpl<R>
where
    R: EntryRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> EntryService for EntryServiceImpl<R>
where
    R: EntryRepository + 'static,
{
    async fn create(&self, data: EntryData) -> Result<Entry, EntryError> {
        let valid = validated_fields(&data)?;

        let new = NewEntry {
            description: valid.description,
            month: valid.month,
            year: valid.year,
            amount: valid.amount,
            kind: valid.kind,
            status: EntryStatus::Pending,
            user_id: valid.user_id,
        };

        self.repo.create(&new).await.map_err(store_error)
    }

    async fn update(&self, data: EntryData) -> Result<Entry, EntryError> {
        let id = data.id.ok_or(EntryError::MissingId)?;
        let status = data.status.unwrap_or_default();
        let valid = validated_fields(&data)?;

        let update = EntryUpdate {
            id,
            description: valid.description,
            month: valid.month,
            year: valid.year,
            amount: valid.amount,
            kind: valid.kind,
            status,
            user_id: valid.user_id,
        };

        self.repo.update(&update).await.map_err(store_error)
    }

    async fn change_status(
        &self,
        mut data: EntryData,
        status: EntryStatus,
    ) -> Result<Entry, EntryError> {
        data.status = Some(status);
        self.update(data).await
    }

    async fn delete(&self, data: EntryData) -> Result<(), EntryError> {
        let id = data.id.ok_or(EntryError::MissingId)?;
        self.repo.delete(id).await.map_err(store_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Entry, EntryError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(store_error)?
            .ok_or(EntryError::NotFound)
    }

    async fn filter(&self, filter: EntryFilter) -> Result<Vec<Entry>, EntryError> {
        self.repo.find_by_filter(&filter).await.map_err(store_error)
    }

    async fn balance_for_user(&self, user_id: i64) -> Result<Decimal, EntryError> {
        let income = self
            .repo
            .sum_amount_by_user_and_kind(user_id, EntryKind::Income)
            .await
            .map_err(store_error)?;

        let expense = self
            .repo
            .sum_amount_by_user_and_kind(user_id, EntryKind::Expense)
            .await
            .map_err(store_error)?;

        Ok(income - expense)
    }
}
