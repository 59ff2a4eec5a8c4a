//! Route definitions for the brewing journal API

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/beans", bean_routes())
        .route("/recipes/template", get(handlers::get_recipe_template))
        .route("/diagnose", post(handlers::diagnose_brew))
}

/// Bean catalog routes, with each bean's recipes nested below it
fn bean_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_beans).post(handlers::create_bean))
        .route("/:bean_id", get(handlers::get_bean).put(handlers::update_bean))
        .route("/:bean_id/archive", put(handlers::archive_bean))
        .route(
            "/:bean_id/recipes",
            get(handlers::list_recipes).post(handlers::create_recipe),
        )
        .route(
            "/:bean_id/recipes/:recipe_id",
            get(handlers::get_recipe)
                .put(handlers::update_recipe)
                .delete(handlers::delete_recipe),
        )
        .route(
            "/:bean_id/recipes/:recipe_id/diagnosis",
            get(handlers::diagnose_recipe),
        )
}
