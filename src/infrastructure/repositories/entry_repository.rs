//! Entry Repository Implementation
//!
//! PostgreSQL implementation of the EntryRepository trait.
//! Maps between the database schema and domain Entry entity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::{Entry, EntryFilter, EntryKind, EntryRepository, EntryStatus, EntryUpdate, NewEntry};
use crate::shared::error::AppError;

const ENTRY_COLUMNS: &str = "id, description, month, year, amount, kind, status, user_id, created_at";

/// Database row representation matching the entries table schema.
/// Kind and status are stored as their external member names.
#[derive(Debug, sqlx::FromRow)]
struct EntryRow {
    id: i64,
    description: String,
    month: i32,
    year: i32,
    amount: Decimal,
    kind: String,
    status: String,
    user_id: i64,
    created_at: DateTime<Utc>,
}

impl EntryRow {
    fn try_into_entry(self) -> Result<Entry, AppError> {
        let kind = EntryKind::parse(&self.kind).ok_or_else(|| {
            AppError::Internal(format!("unknown entry kind in database: {}", self.kind))
        })?;
        let status = EntryStatus::parse(&self.status).ok_or_else(|| {
            AppError::Internal(format!("unknown entry status in database: {}", self.status))
        })?;

        Ok(Entry {
            id: self.id,
            description: self.description,
            month: self.month,
            year: self.year,
            amount: self.amount,
            kind,
            status,
            user_id: self.user_id,
            created_at: self.created_at,
        })
    }
}

/// PostgreSQL entry repository implementation.
///
/// Provides CRUD operations, predicate-driven filtering, and the balance
/// aggregate against a PostgreSQL database.
#[derive(Clone)]
pub struct PgEntryRepository {
    pool: PgPool,
}

impl PgEntryRepository {
    /// Create a new PgEntryRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryRepository for PgEntryRepository {
    /// Find an entry by its internal ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Entry>, AppError> {
        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT id, description, month, year, amount, kind, status, user_id, created_at
            FROM entries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.try_into_entry()).transpose()
    }

    /// Insert a new entry; the database assigns the id.
    async fn create(&self, entry: &NewEntry) -> Result<Entry, AppError> {
        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            INSERT INTO entries (description, month, year, amount, kind, status, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, description, month, year, amount, kind, status, user_id, created_at
            "#,
        )
        .bind(&entry.description)
        .bind(entry.month)
        .bind(entry.year)
        .bind(entry.amount)
        .bind(entry.kind.as_str())
        .bind(entry.status.as_str())
        .bind(entry.user_id)
        .fetch_one(&self.pool)
        .await?;

        row.try_into_entry()
    }

    /// Overwrite an existing entry's fields.
    async fn update(&self, entry: &EntryUpdate) -> Result<Entry, AppError> {
        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            UPDATE entries
            SET description = $2,
                month = $3,
                year = $4,
                amount = $5,
                kind = $6,
                status = $7,
                user_id = $8
            WHERE id = $1
            RETURNING id, description, month, year, amount, kind, status, user_id, created_at
            "#,
        )
        .bind(entry.id)
        .bind(&entry.description)
        .bind(entry.month)
        .bind(entry.year)
        .bind(entry.amount)
        .bind(entry.kind.as_str())
        .bind(entry.status.as_str())
        .bind(entry.user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("entry not found for given id".to_string()))?;

        row.try_into_entry()
    }

    /// Delete an entry (hard delete).
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("entry not found for given id".to_string()));
        }

        Ok(())
    }

    /// Return all entries matching the filter's predicates. A `None` field
    /// is a wildcard; the description matches as a case-insensitive
    /// substring, every other field exactly.
    async fn find_by_filter(&self, filter: &EntryFilter) -> Result<Vec<Entry>, AppError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE 1 = 1"));

        if let Some(description) = &filter.description {
            builder.push(" AND description ILIKE ");
            builder.push_bind(format!("%{}%", description));
        }
        if let Some(month) = filter.month {
            builder.push(" AND month = ");
            builder.push_bind(month);
        }
        if let Some(year) = filter.year {
            builder.push(" AND year = ");
            builder.push_bind(year);
        }
        if let Some(kind) = filter.kind {
            builder.push(" AND kind = ");
            builder.push_bind(kind.as_str());
        }
        if let Some(status) = filter.status {
            builder.push(" AND status = ");
            builder.push_bind(status.as_str());
        }
        if let Some(user_id) = filter.user_id {
            builder.push(" AND user_id = ");
            builder.push_bind(user_id);
        }
        builder.push(" ORDER BY id");

        let rows: Vec<EntryRow> = builder.build_query_as().fetch_all(&self.pool).await?;

        rows.into_iter().map(EntryRow::try_into_entry).collect()
    }

    /// Sum the amounts of a user's entries of the given kind. COALESCE
    /// keeps the aggregate at zero when no rows match.
    async fn sum_amount_by_user_and_kind(
        &self,
        user_id: i64,
        kind: EntryKind,
    ) -> Result<Decimal, AppError> {
        let total = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(amount), 0)
            FROM entries
            WHERE user_id = $1 AND kind = $2
            "#,
        )
        .bind(user_id)
        .bind(kind.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}
