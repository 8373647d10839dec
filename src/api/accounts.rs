use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;

use super::AppState;
use crate::domain::{Account, AccountDraft};
use crate::error::AppError;

/// POST /accounts — create an account, 201 with a Location header.
pub async fn create_account(
    State(state): State<AppState>,
    payload: Result<Json<AccountDraft>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(draft) = payload?;
    draft.validate().map_err(AppError::BadRequest)?;

    let account = state.repo.create_account(&draft).await?;
    info!(account_id = account.id, "Created account");

    let location = format!("/accounts/{}", account.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(account),
    ))
}

/// GET /accounts — list every account.
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = state.repo.list_accounts().await?;
    Ok(Json(accounts))
}

/// GET /accounts/{id}
pub async fn read_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Account>, AppError> {
    let account = state
        .repo
        .find_account(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Account with id [{}] could not be found", id)))?;

    Ok(Json(account))
}

/// PUT /accounts/{id} — full overwrite of an existing account.
pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<AccountDraft>, JsonRejection>,
) -> Result<Json<Account>, AppError> {
    let Json(draft) = payload?;
    draft.validate().map_err(AppError::BadRequest)?;

    let account = state
        .repo
        .update_account(id, &draft)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Account with id [{}] could not be found", id)))?;

    info!(account_id = id, "Updated account");
    Ok(Json(account))
}

/// DELETE /accounts/{id} — 204 on success, 404 if the id never existed.
pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let removed = state.repo.delete_account(id).await?;
    if !removed {
        return Err(AppError::NotFound(format!(
            "Account with id [{}] could not be found",
            id
        )));
    }

    info!(account_id = id, "Deleted account");
    Ok(StatusCode::NO_CONTENT)
}
