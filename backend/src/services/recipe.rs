//! Brew recipe service
//!
//! Recipes are owned by a bean and always replaced as a whole.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{
    diagnose, localize, validate_brew_config, validate_sensory_result, BrewConfig, BrewRecipe,
    DiagnosisStatus, Language, LearningLog, LocalizedDiagnosis, SensoryResult, Technique,
};
use uuid::Uuid;

use super::bean::find_bean_mut;
use crate::error::{AppError, AppResult};
use crate::store::JournalStore;

/// Recipe service for managing the brews of a bean
#[derive(Clone)]
pub struct RecipeService {
    store: Arc<JournalStore>,
}

/// Input for saving a recipe
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    /// Defaults to now on create and to the stored date on update
    pub date: Option<DateTime<Utc>>,
    pub config: BrewConfig,
    #[serde(default)]
    pub technique: Technique,
    pub result: SensoryResult,
    #[serde(default)]
    pub learning: LearningLog,
}

impl RecipeInput {
    fn validate(&self) -> AppResult<()> {
        validate_brew_config(&self.config)?;
        validate_sensory_result(&self.result)?;
        Ok(())
    }

    fn into_recipe(self, id: Uuid, fallback_date: DateTime<Utc>) -> BrewRecipe {
        BrewRecipe {
            id,
            date: self.date.unwrap_or(fallback_date),
            config: self.config,
            technique: self.technique,
            result: self.result,
            learning: self.learning,
        }
    }
}

/// A recipe with its derived brew ratio
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    #[serde(flatten)]
    pub recipe: BrewRecipe,
    /// N in 1:N
    pub ratio: Option<Decimal>,
}

impl From<BrewRecipe> for RecipeView {
    fn from(recipe: BrewRecipe) -> Self {
        let ratio = recipe.config.ratio();
        Self { recipe, ratio }
    }
}

/// Computed diagnosis for a stored recipe
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDiagnosis {
    pub recipe_id: Uuid,
    /// Status the brewer recorded in the learning log
    pub recorded: DiagnosisStatus,
    pub diagnosis: LocalizedDiagnosis,
    /// Whether the computed status agrees with the recorded one
    pub agrees_with_recorded: bool,
}

/// Insert a recipe so the list stays ordered by date, newest first
pub(crate) fn place_recipe(recipes: &mut Vec<BrewRecipe>, recipe: BrewRecipe) {
    let index = recipes
        .iter()
        .position(|r| r.date <= recipe.date)
        .unwrap_or(recipes.len());
    recipes.insert(index, recipe);
}

/// Recipes ordered by date, newest first
pub(crate) fn newest_first(recipes: &[BrewRecipe]) -> Vec<BrewRecipe> {
    let mut sorted = recipes.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

impl RecipeService {
    /// Create a new RecipeService instance
    pub fn new(store: Arc<JournalStore>) -> Self {
        Self { store }
    }

    /// Default values for a new recipe form
    pub fn template_recipe(&self) -> RecipeView {
        BrewRecipe::template().into()
    }

    /// List a bean's recipes, newest first
    pub async fn list_recipes(&self, bean_id: Uuid) -> AppResult<Vec<RecipeView>> {
        self.store
            .read(|beans| {
                beans
                    .iter()
                    .find(|b| b.id == bean_id)
                    .map(|b| newest_first(&b.recipes).into_iter().map(RecipeView::from).collect())
            })
            .await
            .ok_or_else(|| AppError::NotFound("Bean".to_string()))
    }

    /// Get a single recipe
    pub async fn get_recipe(&self, bean_id: Uuid, recipe_id: Uuid) -> AppResult<RecipeView> {
        self.find_recipe(bean_id, recipe_id).await.map(RecipeView::from)
    }

    /// Add a recipe to a bean, at the position of its date
    pub async fn create_recipe(&self, bean_id: Uuid, input: RecipeInput) -> AppResult<RecipeView> {
        input.validate()?;
        let recipe = input.into_recipe(Uuid::new_v4(), Utc::now());

        let created = self
            .store
            .update(move |beans| {
                let bean = find_bean_mut(beans, bean_id)?;
                place_recipe(&mut bean.recipes, recipe.clone());
                Ok(recipe)
            })
            .await?;

        tracing::info!("Created recipe {} for bean {}", created.id, bean_id);
        Ok(created.into())
    }

    /// Replace a recipe, moving it if its date changed
    pub async fn update_recipe(
        &self,
        bean_id: Uuid,
        recipe_id: Uuid,
        input: RecipeInput,
    ) -> AppResult<RecipeView> {
        input.validate()?;

        let updated = self
            .store
            .update(move |beans| {
                let bean = find_bean_mut(beans, bean_id)?;
                let index = bean
                    .recipes
                    .iter()
                    .position(|r| r.id == recipe_id)
                    .ok_or_else(|| AppError::NotFound("Recipe".to_string()))?;

                let previous = bean.recipes.remove(index);
                let recipe = input.into_recipe(recipe_id, previous.date);
                place_recipe(&mut bean.recipes, recipe.clone());
                Ok(recipe)
            })
            .await?;

        Ok(updated.into())
    }

    /// Delete a recipe. Deletion is refused unless `confirmed` is set.
    pub async fn delete_recipe(&self, bean_id: Uuid, recipe_id: Uuid, confirmed: bool) -> AppResult<()> {
        if !confirmed {
            self.find_recipe(bean_id, recipe_id).await?;
            return Err(AppError::ConfirmationRequired("delete this recipe".to_string()));
        }

        self.store
            .update(move |beans| {
                let bean = find_bean_mut(beans, bean_id)?;
                let before = bean.recipes.len();
                bean.recipes.retain(|r| r.id != recipe_id);
                if bean.recipes.len() == before {
                    return Err(AppError::NotFound("Recipe".to_string()));
                }
                Ok(())
            })
            .await?;

        tracing::info!("Deleted recipe {} from bean {}", recipe_id, bean_id);
        Ok(())
    }

    /// Diagnose a stored recipe
    pub async fn diagnose_recipe(
        &self,
        bean_id: Uuid,
        recipe_id: Uuid,
        language: Language,
    ) -> AppResult<RecipeDiagnosis> {
        let recipe = self.find_recipe(bean_id, recipe_id).await?;
        let diagnosis = diagnose(&recipe.result, &recipe.config);

        Ok(RecipeDiagnosis {
            recipe_id,
            recorded: recipe.learning.diagnosis,
            agrees_with_recorded: recipe.learning.diagnosis == diagnosis.status,
            diagnosis: localize(&diagnosis, language),
        })
    }

    async fn find_recipe(&self, bean_id: Uuid, recipe_id: Uuid) -> AppResult<BrewRecipe> {
        self.store
            .read(|beans| {
                let bean = beans
                    .iter()
                    .find(|b| b.id == bean_id)
                    .ok_or_else(|| AppError::NotFound("Bean".to_string()))?;
                bean.find_recipe(recipe_id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound("Recipe".to_string()))
            })
            .await
    }
}
