//! `/api/profile` handlers

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use checklist_core::{Profile, ValidationError, Validator};
use checklist_store::KeyValueStore;
use serde_json::Value;

fn parse_profile(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<Profile> {
    let Json(payload) = payload?;
    Validator::profile().validate(&payload, &["lists"])?;
    serde_json::from_value(payload)
        .map_err(|err| ApiError::from(ValidationError::Malformed(err.to_string())))
}

async fn current<S: KeyValueStore>(state: &AppState<S>, profile_name: &str) -> ApiResult<Json<Profile>> {
    let lists = state.profiles.get(profile_name).await?;
    Ok(Json(Profile { lists }))
}

/// `GET /api/profile/{name}`
pub(crate) async fn get_profile<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
    Path(profile_name): Path<String>,
) -> ApiResult<Json<Profile>> {
    state.profiles.ensure_exists(&profile_name).await?;
    current(&state, &profile_name).await
}

/// `POST /api/profile/{name}`
pub(crate) async fn create_profile<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
    Path(profile_name): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Profile>)> {
    let profile = parse_profile(payload)?;
    state.profiles.create(&profile_name, &profile).await?;

    Ok((StatusCode::CREATED, current(&state, &profile_name).await?))
}

/// `PUT|PATCH /api/profile/{name}`
pub(crate) async fn update_profile<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
    Path(profile_name): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Profile>> {
    let profile = parse_profile(payload)?;
    state.profiles.ensure_exists(&profile_name).await?;

    state.profiles.update(&profile_name, &profile).await?;
    current(&state, &profile_name).await
}

/// `DELETE /api/profile/{name}`
pub(crate) async fn delete_profile<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
    Path(profile_name): Path<String>,
) -> ApiResult<StatusCode> {
    state.profiles.ensure_exists(&profile_name).await?;

    state.profiles.delete(&profile_name).await?;
    Ok(StatusCode::NO_CONTENT)
}
