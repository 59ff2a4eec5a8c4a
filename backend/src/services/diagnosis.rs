//! Ad-hoc brew diagnosis

use serde::Deserialize;
use shared::{diagnose, localize, validate_sensory_result, BrewConfig, Language, LocalizedDiagnosis, SensoryResult};

use crate::error::AppResult;

/// Diagnoses a tasting that has not been saved yet
#[derive(Clone, Default)]
pub struct DiagnosisService;

/// Input for diagnosing an unsaved brew
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnoseInput {
    pub result: SensoryResult,
    #[serde(default)]
    pub config: BrewConfig,
}

impl DiagnosisService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the sensory scores, then classify and localize them
    pub fn diagnose(&self, input: &DiagnoseInput, language: Language) -> AppResult<LocalizedDiagnosis> {
        validate_sensory_result(&input.result)?;

        let diagnosis = diagnose(&input.result, &input.config);
        Ok(localize(&diagnosis, language))
    }
}
