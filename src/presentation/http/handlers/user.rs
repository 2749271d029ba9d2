//! User Handlers
//!
//! Registration, authentication, and balance endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use validator::Validate;

use crate::application::dto::request::{LoginRequest, RegisterRequest};
use crate::application::dto::response::UserResponse;
use crate::application::services::{
    EntryService, EntryServiceImpl, PlaintextVerifier, UserError, UserService, UserServiceImpl,
};
use crate::domain::NewUser;
use crate::infrastructure::repositories::{PgEntryRepository, PgUserRepository};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn user_service(state: &AppState) -> UserServiceImpl<PgUserRepository, PlaintextVerifier> {
    let repo = Arc::new(PgUserRepository::new(state.db.clone()));
    UserServiceImpl::new(repo, PlaintextVerifier)
}

fn entry_service(state: &AppState) -> EntryServiceImpl<PgEntryRepository> {
    let repo = Arc::new(PgEntryRepository::new(state.db.clone()));
    EntryServiceImpl::new(repo)
}

pub(super) fn map_user_error(e: UserError) -> AppError {
    let message = e.to_string();
    match e {
        UserError::EmailTaken => AppError::BusinessRule(message),
        UserError::UnknownEmail | UserError::InvalidPassword => AppError::Authentication(message),
        UserError::NotFound => AppError::NotFound(message),
        UserError::Internal(msg) => AppError::Internal(msg),
    }
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    // Validate request shape; field rules beyond this live in the service
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = user_service(&state);
    let user = service
        .register(NewUser {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await
        .map_err(map_user_error)?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Authenticate with email and password
pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let service = user_service(&state);
    let user = service
        .authenticate(&body.email, &body.password)
        .await
        .map_err(map_user_error)?;

    Ok(Json(UserResponse::from(user)))
}

/// Compute the user's balance (income total minus expense total)
pub async fn balance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Decimal>, AppError> {
    let users = user_service(&state);
    let user = users.find_by_id(id).await.map_err(map_user_error)?;

    let entries = entry_service(&state);
    let balance = entries
        .balance_for_user(user.id)
        .await
        .map_err(super::entry::map_entry_error)?;

    Ok(Json(balance))
}
