//! Extraction diagnosis models

use serde::{Deserialize, Serialize};

/// Extraction status of a brew
///
/// Serialized as a stable id; display labels live in [`crate::i18n`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisStatus {
    #[serde(alias = "Sub-extraído")]
    UnderExtracted,
    #[default]
    #[serde(alias = "Balanceado")]
    Balanced,
    #[serde(alias = "Sobre-extraído")]
    OverExtracted,
    #[serde(alias = "Excelente")]
    Excellent,
}

impl DiagnosisStatus {
    pub const ALL: [DiagnosisStatus; 4] = [
        DiagnosisStatus::UnderExtracted,
        DiagnosisStatus::Balanced,
        DiagnosisStatus::OverExtracted,
        DiagnosisStatus::Excellent,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DiagnosisStatus::UnderExtracted => "under_extracted",
            DiagnosisStatus::Balanced => "balanced",
            DiagnosisStatus::OverExtracted => "over_extracted",
            DiagnosisStatus::Excellent => "excellent",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.id() == id)
    }

    /// Whether the cup needs no corrective change
    pub fn is_on_target(&self) -> bool {
        matches!(self, DiagnosisStatus::Balanced | DiagnosisStatus::Excellent)
    }
}

impl std::fmt::Display for DiagnosisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Corrective action for the next brew
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    /// More surface area
    GrindFiner,
    RaiseTemperature,
    /// Raises the ratio
    IncreaseWater,
    AgitateBloom,
    GrindCoarser,
    LowerTemperature,
    /// Lowers the ratio
    DecreaseWater,
    /// Less turbulence
    PourGently,
    /// Confirm the result is consistent
    ReplicateRecipe,
}

impl Suggestion {
    pub fn key(&self) -> &'static str {
        match self {
            Suggestion::GrindFiner => "grind_finer",
            Suggestion::RaiseTemperature => "raise_temperature",
            Suggestion::IncreaseWater => "increase_water",
            Suggestion::AgitateBloom => "agitate_bloom",
            Suggestion::GrindCoarser => "grind_coarser",
            Suggestion::LowerTemperature => "lower_temperature",
            Suggestion::DecreaseWater => "decrease_water",
            Suggestion::PourGently => "pour_gently",
            Suggestion::ReplicateRecipe => "replicate_recipe",
        }
    }
}

/// Classification of a brew plus ordered corrective suggestions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnosis {
    pub status: DiagnosisStatus,
    pub suggestions: Vec<Suggestion>,
}
