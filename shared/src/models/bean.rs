//! Coffee bean models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::BrewRecipe;

/// Roast levels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoastLevel {
    #[default]
    #[serde(alias = "Claro")]
    Light,
    #[serde(alias = "Medio")]
    Medium,
    #[serde(alias = "Medio-Oscuro")]
    MediumDark,
    #[serde(alias = "Oscuro")]
    Dark,
}

impl std::fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoastLevel::Light => write!(f, "Light"),
            RoastLevel::Medium => write!(f, "Medium"),
            RoastLevel::MediumDark => write!(f, "Medium Dark"),
            RoastLevel::Dark => write!(f, "Dark"),
        }
    }
}

/// Common processing methods offered by the bean form.
/// `process` stays free text so experimental lots can be recorded.
pub const PROCESS_TYPES: &[&str] = &[
    "Washed",
    "Natural",
    "Honey",
    "Experimental",
    "Anaerobic",
    "Carbonic Maceration",
];

/// A bag of coffee and every recipe brewed with it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeBean {
    pub id: Uuid,
    pub name: String,
    pub roaster: String,
    /// Country and region
    pub origin: String,
    #[serde(default, deserialize_with = "crate::types::empty_string_as_none")]
    pub farm: Option<String>,
    /// Metres above sea level, free text ("1800-2000")
    #[serde(default, deserialize_with = "crate::types::empty_string_as_none")]
    pub altitude: Option<String>,
    #[serde(default, deserialize_with = "crate::types::empty_string_as_none")]
    pub variety: Option<String>,
    pub process: String,
    #[serde(default, deserialize_with = "crate::types::empty_string_as_none")]
    pub roast_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::types::empty_string_as_none")]
    pub open_date: Option<NaiveDate>,
    pub roast_level: RoastLevel,
    #[serde(default, deserialize_with = "crate::types::empty_string_as_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_archived: bool,
    /// Newest first
    #[serde(default)]
    pub recipes: Vec<BrewRecipe>,
}

impl CoffeeBean {
    pub fn find_recipe(&self, recipe_id: Uuid) -> Option<&BrewRecipe> {
        self.recipes.iter().find(|r| r.id == recipe_id)
    }

    /// Date of the most recent brew, if any
    pub fn last_brewed_at(&self) -> Option<DateTime<Utc>> {
        self.recipes.iter().map(|r| r.date).max()
    }

    /// Mean overall score across the bean's recipes, to one decimal
    pub fn average_score(&self) -> Option<Decimal> {
        if self.recipes.is_empty() {
            return None;
        }
        let total = self
            .recipes
            .iter()
            .try_fold(Decimal::ZERO, |sum, r| sum.checked_add(r.result.overall_score))?;
        total
            .checked_div(Decimal::from(self.recipes.len()))
            .map(|avg| avg.round_dp(1))
    }

    pub fn summary(&self) -> BeanSummary {
        BeanSummary {
            id: self.id,
            name: self.name.clone(),
            roaster: self.roaster.clone(),
            origin: self.origin.clone(),
            process: self.process.clone(),
            roast_level: self.roast_level,
            is_archived: self.is_archived,
            recipe_count: self.recipes.len(),
            average_score: self.average_score(),
            last_brewed_at: self.last_brewed_at(),
        }
    }
}

/// List view projection of a bean
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BeanSummary {
    pub id: Uuid,
    pub name: String,
    pub roaster: String,
    pub origin: String,
    pub process: String,
    pub roast_level: RoastLevel,
    pub is_archived: bool,
    pub recipe_count: usize,
    /// `None` until the first recipe is logged
    pub average_score: Option<Decimal>,
    pub last_brewed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SensoryResult;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bean_with_scores(scores: &[&str]) -> CoffeeBean {
        let recipes = scores
            .iter()
            .map(|score| BrewRecipe {
                result: SensoryResult {
                    overall_score: dec(score),
                    ..SensoryResult::default()
                },
                ..BrewRecipe::template()
            })
            .collect();

        CoffeeBean {
            id: Uuid::new_v4(),
            name: "Sidra".to_string(),
            roaster: "Café Estelar".to_string(),
            origin: "Ecuador, Pichincha".to_string(),
            farm: None,
            altitude: None,
            variety: Some("Sidra".to_string()),
            process: "Washed".to_string(),
            roast_date: None,
            open_date: None,
            roast_level: RoastLevel::Light,
            notes: None,
            is_archived: false,
            recipes,
        }
    }

    #[test]
    fn test_average_score_without_recipes() {
        let bean = bean_with_scores(&[]);
        assert_eq!(bean.average_score(), None);
        assert_eq!(bean.summary().average_score, None);
    }

    #[test]
    fn test_average_score_rounds_to_one_decimal() {
        let bean = bean_with_scores(&["7", "8", "8.5"]);
        assert_eq!(bean.average_score(), Some(dec("7.8")));

        let summary = bean.summary();
        assert_eq!(summary.recipe_count, 3);
        assert_eq!(summary.average_score, Some(dec("7.8")));
    }
}
