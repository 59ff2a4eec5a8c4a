//! HTTP handler for diagnosing an unsaved brew

use axum::{
    extract::{Query, State},
    Json,
};
use shared::LocalizedDiagnosis;

use super::LanguageQuery;
use crate::{
    error::AppResult,
    services::{diagnosis::DiagnoseInput, DiagnosisService},
    AppState,
};

/// Diagnose sensory scores without saving anything
pub async fn diagnose_brew(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
    Json(input): Json<DiagnoseInput>,
) -> AppResult<Json<LocalizedDiagnosis>> {
    let language = query.resolve(state.config.journal.default_language)?;
    let diagnosis = DiagnosisService::new().diagnose(&input, language)?;
    Ok(Json(diagnosis))
}
