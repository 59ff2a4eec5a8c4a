//! HTTP handlers for brew recipes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use super::LanguageQuery;
use crate::{
    error::AppResult,
    services::recipe::{RecipeDiagnosis, RecipeInput, RecipeView},
    services::RecipeService,
    AppState,
};

/// Query parameters for deleting a recipe
#[derive(Debug, Deserialize)]
pub struct DeleteRecipeQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// Default values for a new recipe
pub async fn get_recipe_template(State(state): State<AppState>) -> Json<RecipeView> {
    let service = RecipeService::new(state.store);
    Json(service.template_recipe())
}

/// List the recipes brewed with a bean
pub async fn list_recipes(
    State(state): State<AppState>,
    Path(bean_id): Path<Uuid>,
) -> AppResult<Json<Vec<RecipeView>>> {
    let service = RecipeService::new(state.store);
    let recipes = service.list_recipes(bean_id).await?;
    Ok(Json(recipes))
}

/// Save a new recipe for a bean
pub async fn create_recipe(
    State(state): State<AppState>,
    Path(bean_id): Path<Uuid>,
    Json(input): Json<RecipeInput>,
) -> AppResult<(StatusCode, Json<RecipeView>)> {
    let service = RecipeService::new(state.store);
    let recipe = service.create_recipe(bean_id, input).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Get a single recipe
pub async fn get_recipe(
    State(state): State<AppState>,
    Path((bean_id, recipe_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<RecipeView>> {
    let service = RecipeService::new(state.store);
    let recipe = service.get_recipe(bean_id, recipe_id).await?;
    Ok(Json(recipe))
}

/// Replace a recipe
pub async fn update_recipe(
    State(state): State<AppState>,
    Path((bean_id, recipe_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<RecipeInput>,
) -> AppResult<Json<RecipeView>> {
    let service = RecipeService::new(state.store);
    let recipe = service.update_recipe(bean_id, recipe_id, input).await?;
    Ok(Json(recipe))
}

/// Delete a recipe; requires `?confirm=true`
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path((bean_id, recipe_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<DeleteRecipeQuery>,
) -> AppResult<StatusCode> {
    let service = RecipeService::new(state.store);
    service.delete_recipe(bean_id, recipe_id, query.confirm).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Diagnose a stored recipe
pub async fn diagnose_recipe(
    State(state): State<AppState>,
    Path((bean_id, recipe_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<LanguageQuery>,
) -> AppResult<Json<RecipeDiagnosis>> {
    let language = query.resolve(state.config.journal.default_language)?;
    let service = RecipeService::new(state.store);
    let diagnosis = service.diagnose_recipe(bean_id, recipe_id, language).await?;
    Ok(Json(diagnosis))
}
