//! HTTP handlers for the bean catalog

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{BeanSummary, CoffeeBean};
use uuid::Uuid;

use crate::{
    error::AppResult,
    services::{
        bean::{BeanDetail, BeanInput},
        BeanService,
    },
    AppState,
};

/// Query parameters for listing beans
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBeansQuery {
    #[serde(default)]
    pub include_archived: bool,
}

/// Body for archiving or restoring a bean
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveInput {
    pub is_archived: bool,
}

/// List beans, hiding archived ones unless asked
pub async fn list_beans(
    State(state): State<AppState>,
    Query(query): Query<ListBeansQuery>,
) -> Json<Vec<BeanSummary>> {
    let service = BeanService::new(state.store);
    Json(service.list_beans(query.include_archived).await)
}

/// Create a new bean
pub async fn create_bean(
    State(state): State<AppState>,
    Json(input): Json<BeanInput>,
) -> AppResult<Json<CoffeeBean>> {
    let service = BeanService::new(state.store);
    let bean = service.create_bean(input).await?;
    Ok(Json(bean))
}

/// Get a bean with its recipes and average score
pub async fn get_bean(
    State(state): State<AppState>,
    Path(bean_id): Path<Uuid>,
) -> AppResult<Json<BeanDetail>> {
    let service = BeanService::new(state.store);
    let bean = service.get_bean(bean_id).await?;
    Ok(Json(bean))
}

/// Update a bean's details
pub async fn update_bean(
    State(state): State<AppState>,
    Path(bean_id): Path<Uuid>,
    Json(input): Json<BeanInput>,
) -> AppResult<Json<CoffeeBean>> {
    let service = BeanService::new(state.store);
    let bean = service.update_bean(bean_id, input).await?;
    Ok(Json(bean))
}

/// Archive or restore a bean
pub async fn archive_bean(
    State(state): State<AppState>,
    Path(bean_id): Path<Uuid>,
    Json(input): Json<ArchiveInput>,
) -> AppResult<Json<CoffeeBean>> {
    let service = BeanService::new(state.store);
    let bean = service.set_archived(bean_id, input.is_archived).await?;
    Ok(Json(bean))
}
