//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a registered account that owns financial entries.
///
/// Maps to the `users` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: VARCHAR(150) NOT NULL
/// - email: VARCHAR(100) NOT NULL UNIQUE
/// - password: VARCHAR(100) NOT NULL (stored as plaintext, see PasswordVerifier)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Database-generated primary key
    pub id: i64,

    /// Display name
    pub name: String,

    /// Email address (uniqueness key, compared case-sensitively)
    pub email: String,

    /// Stored credential. Never serialized into responses.
    #[serde(skip_serializing)]
    pub password: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields for a user that has not been persisted yet; the database
/// assigns the id on insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their database id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Find a user by their email address (exact, case-sensitive match).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Check if an email address is already registered.
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;

    /// Insert a new user and return it with the generated id.
    async fn create(&self, user: &NewUser) -> Result<User, AppError>;

    /// Overwrite an existing user's fields.
    async fn update(&self, user: &User) -> Result<User, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_user() -> User {
        User {
            id: 7,
            name: "Maria Silva".to_string(),
            email: "maria@example.com".to_string(),
            password: "secret".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn password_is_never_serialized() {
        let user = sample_user();

        let serialized = serde_json::to_string(&user).expect("user should serialize");

        assert!(!serialized.contains("password"));
        assert!(!serialized.contains("secret"));
    }

    #[test]
    fn serialization_includes_identity_fields() {
        let user = sample_user();

        let serialized = serde_json::to_string(&user).expect("user should serialize");

        assert!(serialized.contains("\"id\":7"));
        assert!(serialized.contains("\"name\":\"Maria Silva\""));
        assert!(serialized.contains("\"email\":\"maria@example.com\""));
    }

    #[test]
    fn clone_preserves_fields() {
        let user = sample_user();
        let cloned = user.clone();

        assert_eq!(user.id, cloned.id);
        assert_eq!(user.email, cloned.email);
        assert_eq!(user.password, cloned.password);
    }
}
