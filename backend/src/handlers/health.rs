//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{services::BeanService, AppState};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub beans: usize,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let beans = BeanService::new(state.store).count().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        beans,
    })
}
