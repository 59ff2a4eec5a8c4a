//! Brew recipe models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DiagnosisStatus, SensoryResult};

/// Brewing methods
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum BrewMethod {
    #[default]
    #[serde(alias = "V60")]
    V60,
    #[serde(alias = "Origami")]
    Origami,
    #[serde(alias = "Kalita Wave")]
    KalitaWave,
    #[serde(alias = "Aeropress")]
    Aeropress,
    #[serde(alias = "Prensa Francesa", alias = "French Press")]
    FrenchPress,
    #[serde(alias = "Espresso")]
    Espresso,
    #[serde(alias = "Chemex")]
    Chemex,
    #[serde(alias = "Switch")]
    Switch,
    #[serde(alias = "Otro", alias = "Other")]
    Other,
}

impl BrewMethod {
    pub const ALL: [BrewMethod; 9] = [
        BrewMethod::V60,
        BrewMethod::Origami,
        BrewMethod::KalitaWave,
        BrewMethod::Aeropress,
        BrewMethod::FrenchPress,
        BrewMethod::Espresso,
        BrewMethod::Chemex,
        BrewMethod::Switch,
        BrewMethod::Other,
    ];
}

impl std::fmt::Display for BrewMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrewMethod::V60 => write!(f, "V60"),
            BrewMethod::Origami => write!(f, "Origami"),
            BrewMethod::KalitaWave => write!(f, "Kalita Wave"),
            BrewMethod::Aeropress => write!(f, "Aeropress"),
            BrewMethod::FrenchPress => write!(f, "French Press"),
            BrewMethod::Espresso => write!(f, "Espresso"),
            BrewMethod::Chemex => write!(f, "Chemex"),
            BrewMethod::Switch => write!(f, "Switch"),
            BrewMethod::Other => write!(f, "Other"),
        }
    }
}

/// Equipment and dosing for a brew
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrewConfig {
    pub method: BrewMethod,
    /// Specific model, e.g. "Plastic V60 02"
    #[serde(default, deserialize_with = "crate::types::empty_string_as_none")]
    pub dripper: Option<String>,
    #[serde(default)]
    pub filter_type: String,
    #[serde(default)]
    pub grinder_model: String,
    /// Free text since grinders use incompatible scales ("2.4", "20 clicks")
    #[serde(default)]
    pub grinder_setting: String,
    /// Grams of ground coffee
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub dose: Decimal,
    /// Millilitres of brew water
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub water_amount: Decimal,
    /// Celsius
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub temperature: Decimal,
    /// mm:ss
    pub total_time: String,
}

impl BrewConfig {
    /// Brew ratio 1:N where N = water / dose, rounded to one decimal
    pub fn ratio(&self) -> Option<Decimal> {
        crate::validation::calculate_brew_ratio(self.dose, self.water_amount)
    }
}

impl Default for BrewConfig {
    fn default() -> Self {
        Self {
            method: BrewMethod::V60,
            dripper: None,
            filter_type: "Paper".to_string(),
            grinder_model: String::new(),
            grinder_setting: String::new(),
            dose: Decimal::from(15),
            water_amount: Decimal::from(240),
            temperature: Decimal::from(93),
            total_time: "02:30".to_string(),
        }
    }
}

/// Pouring technique
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Technique {
    /// ml
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub bloom_water: Decimal,
    /// seconds
    #[serde(default, deserialize_with = "crate::types::lenient_count")]
    pub bloom_time: u32,
    #[serde(default, deserialize_with = "crate::types::lenient_count")]
    pub pours: u32,
    #[serde(default, deserialize_with = "crate::types::empty_string_as_none")]
    pub notes: Option<String>,
}

impl Default for Technique {
    fn default() -> Self {
        Self {
            bloom_water: Decimal::from(45),
            bloom_time: 30,
            pours: 2,
            notes: None,
        }
    }
}

/// What the brewer learned from a cup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LearningLog {
    /// Status recorded by the brewer, independent of the computed diagnosis
    pub diagnosis: DiagnosisStatus,
    #[serde(default)]
    pub changes_for_next_time: String,
    #[serde(default)]
    pub changes_from_previous: String,
}

/// A single brew of a bean
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrewRecipe {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub config: BrewConfig,
    pub technique: Technique,
    pub result: SensoryResult,
    pub learning: LearningLog,
}

impl BrewRecipe {
    /// A fresh recipe with default brew values, a new id and the current time
    pub fn template() -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            config: BrewConfig::default(),
            technique: Technique::default(),
            result: SensoryResult::default(),
            learning: LearningLog::default(),
        }
    }
}
