//! Display text for diagnoses in Spanish and English
//!
//! The engine only produces status ids and suggestion keys; everything a
//! person reads is looked up here.

use serde::{Deserialize, Serialize};

use crate::models::{Diagnosis, DiagnosisStatus, Suggestion};
use crate::types::Language;

/// Label for an extraction status
pub fn status_label(status: DiagnosisStatus, language: Language) -> &'static str {
    match (status, language) {
        (DiagnosisStatus::UnderExtracted, Language::Spanish) => "Sub-extraído",
        (DiagnosisStatus::UnderExtracted, Language::English) => "Under-extracted",
        (DiagnosisStatus::Balanced, Language::Spanish) => "Balanceado",
        (DiagnosisStatus::Balanced, Language::English) => "Balanced",
        (DiagnosisStatus::OverExtracted, Language::Spanish) => "Sobre-extraído",
        (DiagnosisStatus::OverExtracted, Language::English) => "Over-extracted",
        (DiagnosisStatus::Excellent, Language::Spanish) => "Excelente",
        (DiagnosisStatus::Excellent, Language::English) => "Excellent",
    }
}

/// Text for a corrective suggestion
pub fn suggestion_text(suggestion: Suggestion, language: Language) -> &'static str {
    match language {
        Language::Spanish => match suggestion {
            Suggestion::GrindFiner => "Moler más fino (aumentar superficie de contacto).",
            Suggestion::RaiseTemperature => "Subir la temperatura del agua.",
            Suggestion::IncreaseWater => "Usar más agua (aumentar ratio).",
            Suggestion::AgitateBloom => "Agitar más durante el bloom.",
            Suggestion::GrindCoarser => "Moler más grueso.",
            Suggestion::LowerTemperature => "Bajar la temperatura del agua.",
            Suggestion::DecreaseWater => "Usar menos agua (disminuir ratio).",
            Suggestion::PourGently => "Verter más suavemente para reducir turbulencia.",
            Suggestion::ReplicateRecipe => {
                "¡Gran extracción! Intenta replicar la receta exactamente para confirmar consistencia."
            }
        },
        Language::English => match suggestion {
            Suggestion::GrindFiner => "Grind finer (more contact surface).",
            Suggestion::RaiseTemperature => "Raise the water temperature.",
            Suggestion::IncreaseWater => "Use more water (raise the ratio).",
            Suggestion::AgitateBloom => "Agitate more during the bloom.",
            Suggestion::GrindCoarser => "Grind coarser.",
            Suggestion::LowerTemperature => "Lower the water temperature.",
            Suggestion::DecreaseWater => "Use less water (lower the ratio).",
            Suggestion::PourGently => "Pour more gently to reduce turbulence.",
            Suggestion::ReplicateRecipe => {
                "Great extraction! Try replicating the recipe exactly to confirm consistency."
            }
        },
    }
}

/// Headline shown above the suggestions
pub fn headline(status: DiagnosisStatus, language: Language) -> String {
    if status.is_on_target() {
        return match language {
            Language::Spanish => "¡Muy buen balance!".to_string(),
            Language::English => "Great balance!".to_string(),
        };
    }

    let label = status_label(status, language);
    match language {
        Language::Spanish => format!("Detectado: {}", label),
        Language::English => format!("Detected: {}", label),
    }
}

/// A diagnosis rendered for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalizedDiagnosis {
    pub status: DiagnosisStatus,
    pub label: String,
    pub headline: String,
    pub suggestions: Vec<String>,
    pub language: Language,
}

/// Render a diagnosis in the given language, keeping suggestion order
pub fn localize(diagnosis: &Diagnosis, language: Language) -> LocalizedDiagnosis {
    LocalizedDiagnosis {
        status: diagnosis.status,
        label: status_label(diagnosis.status, language).to_string(),
        headline: headline(diagnosis.status, language),
        suggestions: diagnosis
            .suggestions
            .iter()
            .map(|s| suggestion_text(*s, language).to_string())
            .collect(),
        language,
    }
}
