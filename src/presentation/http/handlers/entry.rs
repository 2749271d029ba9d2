//! Entry Handlers
//!
//! Create, update, status-change, delete, and search endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{EntryRequest, EntrySearchQuery, StatusUpdateRequest};
use crate::application::dto::response::EntryResponse;
use crate::application::services::{
    EntryData, EntryError, EntryService, EntryServiceImpl, PlaintextVerifier, UserService,
    UserServiceImpl,
};
use crate::domain::{EntryFilter, EntryKind, EntryStatus, User};
use crate::infrastructure::repositories::{PgEntryRepository, PgUserRepository};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn entry_service(state: &AppState) -> EntryServiceImpl<PgEntryRepository> {
    let repo = Arc::new(PgEntryRepository::new(state.db.clone()));
    EntryServiceImpl::new(repo)
}

pub(super) fn map_entry_error(e: EntryError) -> AppError {
    let message = e.to_string();
    match e {
        EntryError::NotFound => AppError::NotFound(message),
        EntryError::MissingId => AppError::Precondition(message),
        EntryError::Internal(msg) => AppError::Internal(msg),
        _ => AppError::Validation(message),
    }
}

/// Resolve a referenced user, failing the request when the id is unknown.
async fn resolve_user(state: &AppState, id: i64) -> Result<User, AppError> {
    let repo = Arc::new(PgUserRepository::new(state.db.clone()));
    let service = UserServiceImpl::new(repo, PlaintextVerifier);
    service
        .find_by_id(id)
        .await
        .map_err(super::user::map_user_error)
}

fn parse_kind(kind: Option<&str>) -> Result<Option<EntryKind>, AppError> {
    kind.map(|s| {
        EntryKind::parse(s).ok_or_else(|| AppError::Validation("invalid type".to_string()))
    })
    .transpose()
}

fn parse_status(status: Option<&str>) -> Result<Option<EntryStatus>, AppError> {
    status
        .map(|s| {
            EntryStatus::parse(s).ok_or_else(|| AppError::Validation("invalid status".to_string()))
        })
        .transpose()
}

/// Build submitted entry data from a request body, resolving the referenced
/// user when one is given. Membership of the enum strings is checked here;
/// field presence and ranges are the service's job.
async fn entry_data_from(state: &AppState, body: EntryRequest) -> Result<EntryData, AppError> {
    let kind = parse_kind(body.kind.as_deref())?;
    let status = parse_status(body.status.as_deref())?;
    let user_id = match body.user {
        Some(id) => Some(resolve_user(state, id).await?.id),
        None => None,
    };

    Ok(EntryData {
        id: None,
        description: body.description,
        month: body.month,
        year: body.year,
        amount: body.amount,
        kind,
        status,
        user_id,
    })
}

/// Create a new entry (status always starts as PENDING)
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<EntryRequest>,
) -> Result<(StatusCode, Json<EntryResponse>), AppError> {
    let data = entry_data_from(&state, body).await?;

    let service = entry_service(&state);
    let entry = service.create(data).await.map_err(map_entry_error)?;

    Ok((StatusCode::CREATED, Json(EntryResponse::from(entry))))
}

/// Overwrite an existing entry
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<EntryRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    let service = entry_service(&state);
    let existing = service.find_by_id(id).await.map_err(map_entry_error)?;

    let mut data = entry_data_from(&state, body).await?;
    data.id = Some(existing.id);
    // A request that omits the status keeps the stored one.
    if data.status.is_none() {
        data.status = Some(existing.status);
    }

    let entry = service.update(data).await.map_err(map_entry_error)?;

    Ok(Json(EntryResponse::from(entry)))
}

/// Change an entry's status; the whole entry is re-validated
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<StatusUpdateRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    let status = parse_status(body.status.as_deref())?
        .ok_or_else(|| AppError::Validation("invalid status".to_string()))?;

    let service = entry_service(&state);
    let existing = service.find_by_id(id).await.map_err(map_entry_error)?;

    let entry = service
        .change_status(EntryData::from(&existing), status)
        .await
        .map_err(map_entry_error)?;

    Ok(Json(EntryResponse::from(entry)))
}

/// Delete an entry
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let service = entry_service(&state);
    let existing = service.find_by_id(id).await.map_err(map_entry_error)?;

    service
        .delete(EntryData::from(&existing))
        .await
        .map_err(map_entry_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Search entries by example: absent parameters are wildcards, the
/// description matches as a case-insensitive substring.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<EntrySearchQuery>,
) -> Result<Json<Vec<EntryResponse>>, AppError> {
    let user = resolve_user(&state, query.user).await?;

    let filter = EntryFilter {
        description: query.description,
        month: query.month,
        year: query.year,
        user_id: Some(user.id),
        ..EntryFilter::default()
    };

    let service = entry_service(&state);
    let entries = service.filter(filter).await.map_err(map_entry_error)?;

    Ok(Json(entries.into_iter().map(EntryResponse::from).collect()))
}
