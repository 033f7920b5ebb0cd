pub mod attributes;
pub mod entries;
pub mod error;
pub mod health;
pub mod rank_table;
pub mod ranks;
pub mod upload;

use axum::Json;
use serde_json::{json, Value};

pub use error::AppError;

/// Body returned by every successful delete.
fn deleted(kind: &str) -> Json<Value> {
    Json(json!({ "message": format!("{kind} successfully deleted") }))
}
