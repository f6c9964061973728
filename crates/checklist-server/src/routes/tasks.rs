//! `/api/checklist` handlers
//!
//! Task responses are keyed by id: `{"<id>": {"name": ..., "done": ...}}`.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use checklist_core::{NewTask, Task, TaskId, TaskPatch, ValidationError, Validator};
use checklist_store::KeyValueStore;
use serde_json::Value;
use std::collections::BTreeMap;

type TaskMap = BTreeMap<TaskId, Task>;

fn single(id: TaskId, task: Task) -> Json<TaskMap> {
    Json(BTreeMap::from([(id, task)]))
}

fn malformed(err: serde_json::Error) -> ApiError {
    ValidationError::Malformed(err.to_string()).into()
}

/// `GET /api/checklist/{list}`
pub(crate) async fn list_tasks<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
    Path(list_name): Path<String>,
) -> ApiResult<Json<TaskMap>> {
    Ok(Json(state.tasks.all(&list_name).await?))
}

/// `POST /api/checklist/{list}`
pub(crate) async fn create_task<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
    Path(list_name): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskMap>)> {
    let Json(payload) = payload?;
    Validator::task().validate(&payload, &["name"])?;
    let new_task: NewTask = serde_json::from_value(payload).map_err(malformed)?;

    let id = state.tasks.create(&list_name, new_task).await?;
    let task = state.tasks.get(&list_name, id).await?;

    Ok((StatusCode::CREATED, single(id, task)))
}

/// `GET /api/checklist/{list}/{id}`
pub(crate) async fn get_task<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
    path: Result<Path<(String, TaskId)>, PathRejection>,
) -> ApiResult<Json<TaskMap>> {
    let Path((list_name, id)) = path?;
    state.tasks.exists(&list_name, id).await?;

    let task = state.tasks.get(&list_name, id).await?;
    Ok(single(id, task))
}

/// `PUT /api/checklist/{list}/{id}`
pub(crate) async fn update_task<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
    path: Result<Path<(String, TaskId)>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<TaskMap>> {
    let Path((list_name, id)) = path?;
    let Json(payload) = payload?;
    Validator::task().validate(&payload, &[])?;
    let patch: TaskPatch = serde_json::from_value(payload).map_err(malformed)?;

    state.tasks.exists(&list_name, id).await?;
    let task = state.tasks.update(&list_name, id, &patch).await?;
    Ok(single(id, task))
}

/// `DELETE /api/checklist/{list}/{id}`
pub(crate) async fn delete_task<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
    path: Result<Path<(String, TaskId)>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path((list_name, id)) = path?;
    state.tasks.exists(&list_name, id).await?;

    state.tasks.delete(&list_name, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
