use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        attributes::{create_attribute, delete_attribute, get_attribute, update_attribute},
        entries::{create_entry, delete_entry, get_entry, update_entry},
        error::not_found,
        health::livez,
        rank_table::get_rank_table,
        ranks::{create_rank, delete_rank, get_rank, update_rank},
        upload::upload_file,
    },
    state::AppState,
};

/// Largest accepted JSON body.
pub const MAX_JSON_BODY_BYTES: usize = 1 << 20;

/// Largest accepted multipart upload.
pub const MAX_UPLOAD_BYTES: usize = 10 << 20;

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/livez", get(livez))
        .route("/rank", post(create_rank))
        .route(
            "/rank/{id}",
            get(get_rank).put(update_rank).delete(delete_rank),
        )
        .route("/rank/{id}/table", get(get_rank_table))
        .route(
            "/rank/{id}/file",
            post(upload_file).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/rank/{id}/attribute", post(create_attribute))
        .route(
            "/rank/{id}/attribute/{attribute_id}",
            get(get_attribute)
                .put(update_attribute)
                .delete(delete_attribute),
        )
        .route("/rank/{id}/entry", post(create_entry))
        .route(
            "/rank/{id}/entry/{entry_id}",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_JSON_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
