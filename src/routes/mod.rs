// Route exports
pub mod health;
pub mod planning;
pub mod recommendations;
pub mod state;
pub mod utility;

pub use state::AppState;

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::ApiError;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .configure(recommendations::configure)
        .configure(planning::configure)
        .configure(utility::configure);
}

/// Wrap a payload as `{"success": true, "<key>": payload}`
pub(crate) fn success<T: Serialize>(key: &str, payload: &T) -> Result<HttpResponse, ApiError> {
    let value = serde_json::to_value(payload)
        .map_err(|e| ApiError::internal("Failed to serialize response", e))?;

    let mut body = serde_json::Map::with_capacity(2);
    body.insert("success".to_string(), serde_json::Value::Bool(true));
    body.insert(key.to_string(), value);

    Ok(HttpResponse::Ok().json(body))
}
