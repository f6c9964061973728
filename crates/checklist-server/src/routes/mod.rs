//! Router assembly
//!
//! Builds the `/api` surface:
//! - `/api/checklist/{list}[/{id}]` task CRUD
//! - `/api/profile/{name}` profile CRUD
//!
//! All `/api` routes sit behind Basic auth. Every response gets CORS headers
//! and a log line.

mod profiles;
mod tasks;

use crate::auth::require_basic_auth;
use crate::config::Credentials;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use checklist_store::KeyValueStore;
use std::sync::Arc;
use std::time::Instant;

/// Build the API router over `state`
pub fn router<S: KeyValueStore + 'static>(state: AppState<S>, credentials: Credentials) -> Router {
    let api = Router::new()
        .route(
            "/api/checklist/{list}",
            get(tasks::list_tasks::<S>).post(tasks::create_task::<S>),
        )
        .route("/api/checklist/{list}/", axum::routing::post(tasks::create_task::<S>))
        .route(
            "/api/checklist/{list}/{id}",
            get(tasks::get_task::<S>)
                .put(tasks::update_task::<S>)
                .delete(tasks::delete_task::<S>),
        )
        .route(
            "/api/profile/{name}",
            get(profiles::get_profile::<S>)
                .post(profiles::create_profile::<S>)
                .put(profiles::update_profile::<S>)
                .patch(profiles::update_profile::<S>)
                .delete(profiles::delete_profile::<S>),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::new(credentials),
            require_basic_auth,
        ));

    api.fallback(not_found)
        .layer(middleware::map_response(add_cors_headers))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn add_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type,Authorization"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,PUT,POST,DELETE"),
    );
    response
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}
