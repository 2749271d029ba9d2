//! User Service
//!
//! Handles user registration, credential checks, and lookups.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserRepository};

/// User service trait for dependency injection
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user after checking email uniqueness
    async fn register(&self, user: NewUser) -> Result<User, UserError>;

    /// Authenticate a user by email and password
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError>;

    /// Get a user by id
    async fn find_by_id(&self, id: i64) -> Result<User, UserError>;
}

/// Credential verification capability.
///
/// The stored credential format is decided by the implementation; the
/// service only asks whether a candidate matches.
pub trait PasswordVerifier: Send + Sync {
    fn verify(&self, candidate: &str, stored: &str) -> bool;
}

/// Compares credentials by exact string equality, matching the plaintext
/// storage format. A hash-and-compare implementation plugs in through the
/// same trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextVerifier;

impl PasswordVerifier for PlaintextVerifier {
    fn verify(&self, candidate: &str, stored: &str) -> bool {
        candidate == stored
    }
}

/// User service errors
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum UserError {
    #[error("a user is already registered with this email")]
    EmailTaken,

    #[error("user not found for given email")]
    UnknownEmail,

    #[error("invalid password")]
    InvalidPassword,

    #[error("user not found for given id")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

/// UserService implementation
pub struct UserServiceImpl<R, V>
where
    R: UserRepository,
    V: PasswordVerifier,
{
    repo: Arc<R>,
    verifier: V,
}

impl<R, V> UserServiceImpl<R, V>
where
    R: UserRepository,
    V: PasswordVerifier,
{
    pub fn new(repo: Arc<R>, verifier: V) -> Self {
        Self { repo, verifier }
    }
}

#[async_trait]
impl<R, V> UserService for UserServiceImpl<R, V>
where
    R: UserRepository + 'static,
    V: PasswordVerifier + 'static,
{
    async fn register(&self, user: NewUser) -> Result<User, UserError> {
        let taken = self
            .repo
            .email_exists(&user.email)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?;

        if taken {
            return Err(UserError::EmailTaken);
        }

        self.repo
            .create(&user)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError> {
        let user = self
            .repo
            .find_by_email(email)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?
            .ok_or(UserError::UnknownEmail)?;

        if !self.verifier.verify(password, &user.password) {
            return Err(UserError::InvalidPassword);
        }

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<User, UserError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?
            .ok_or(UserError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MockUserRepository;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn stored_user() -> User {
        User {
            id: 1,
            name: "Ana".to_string(),
            email: "u@x.com".to_string(),
            password: "secret".to_string(),
            created_at: Utc::now(),
        }
    }

    fn make_service(repo: MockUserRepository) -> UserServiceImpl<MockUserRepository, PlaintextVerifier> {
        UserServiceImpl::new(Arc::new(repo), PlaintextVerifier)
    }

    #[test]
    fn plaintext_verifier_requires_exact_equality() {
        let verifier = PlaintextVerifier;

        assert!(verifier.verify("secret", "secret"));
        assert!(!verifier.verify("Secret", "secret"));
        assert!(!verifier.verify("", "secret"));
    }

    #[tokio::test]
    async fn register_persists_when_email_is_free() {
        let mut repo = MockUserRepository::new();
        repo.expect_email_exists()
            .times(1)
            .return_once(|_| Ok(false));
        repo.expect_create()
            .times(1)
            .return_once(|_| Ok(stored_user()));

        let service = make_service(repo);
        let user = service
            .register(NewUser {
                name: "Ana".to_string(),
                email: "u@x.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .expect("registration should succeed");

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "u@x.com");
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email_and_never_persists() {
        let mut repo = MockUserRepository::new();
        repo.expect_email_exists().times(1).return_once(|_| Ok(true));
        repo.expect_create().never();

        let service = make_service(repo);
        let error = service
            .register(NewUser {
                name: "Ana".to_string(),
                email: "u@x.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .expect_err("duplicate email must be rejected");

        assert_eq!(error, UserError::EmailTaken);
    }

    #[tokio::test]
    async fn authenticate_returns_the_stored_user_on_matching_credentials() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .return_once(|_| Ok(Some(stored_user())));

        let service = make_service(repo);
        let user = service
            .authenticate("u@x.com", "secret")
            .await
            .expect("authentication should succeed");

        assert_eq!(user.email, "u@x.com");
    }

    #[tokio::test]
    async fn authenticate_rejects_wrong_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .return_once(|_| Ok(Some(stored_user())));

        let service = make_service(repo);
        let error = service
            .authenticate("u@x.com", "wrong")
            .await
            .expect_err("wrong password must be rejected");

        assert_eq!(error, UserError::InvalidPassword);
        assert_eq!(error.to_string(), "invalid password");
    }

    #[tokio::test]
    async fn authenticate_rejects_unknown_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().times(1).return_once(|_| Ok(None));

        let service = make_service(repo);
        let error = service
            .authenticate("nobody@x.com", "secret")
            .await
            .expect_err("unknown email must be rejected");

        assert_eq!(error, UserError::UnknownEmail);
        assert_eq!(error.to_string(), "user not found for given email");
    }

    #[tokio::test]
    async fn find_by_id_reports_misses_with_the_id_message() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let service = make_service(repo);
        let error = service.find_by_id(99).await.expect_err("miss expected");

        assert_eq!(error, UserError::NotFound);
        assert_eq!(error.to_string(), "user not found for given id");
    }
}
