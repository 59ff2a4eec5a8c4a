//! WebAssembly module for BaristaLog
//!
//! Lets the browser client diagnose a brew and validate form input offline,
//! with the same rules the server applies.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

pub use shared::models::*;
pub use shared::types::*;

fn language_or_default(code: &str) -> Language {
    Language::from_code(code).unwrap_or_default()
}

fn diagnose_json(result_json: &str, config_json: &str, lang: &str) -> Result<String, String> {
    let result: SensoryResult =
        serde_json::from_str(result_json).map_err(|e| format!("Invalid result JSON: {}", e))?;
    shared::validate_sensory_result(&result).map_err(|e| e.to_string())?;
    let config: BrewConfig = if config_json.trim().is_empty() {
        BrewConfig::default()
    } else {
        serde_json::from_str(config_json).map_err(|e| format!("Invalid config JSON: {}", e))?
    };

    let diagnosis = shared::diagnose(&result, &config);
    let localized = shared::localize(&diagnosis, language_or_default(lang));
    serde_json::to_string(&localized).map_err(|e| e.to_string())
}

/// Diagnose a brew and return the localized diagnosis as JSON.
///
/// Ratings outside 1-10 are rejected. `config_json` may be empty. Unknown
/// language codes fall back to Spanish.
#[wasm_bindgen]
pub fn diagnose_brew(result_json: &str, config_json: &str, lang: &str) -> Result<String, JsValue> {
    diagnose_json(result_json, config_json, lang).map_err(|e| JsValue::from_str(&e))
}

/// Display label for a status id such as `over_extracted`
#[wasm_bindgen]
pub fn status_label(id: &str, lang: &str) -> Option<String> {
    DiagnosisStatus::from_id(id)
        .map(|status| shared::status_label(status, language_or_default(lang)).to_string())
}

/// Brew ratio N in 1:N, or 0 when the dose is not positive
#[wasm_bindgen]
pub fn calculate_brew_ratio(dose: f64, water: f64) -> f64 {
    let (Ok(dose), Ok(water)) = (Decimal::try_from(dose), Decimal::try_from(water)) else {
        return 0.0;
    };
    shared::calculate_brew_ratio(dose, water)
        .and_then(|ratio| ratio.to_f64())
        .unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn validate_sensory_score(score: f64) -> bool {
    Decimal::try_from(score)
        .map(|s| shared::validate_sensory_score(s).is_ok())
        .unwrap_or(false)
}

/// Seconds in an `mm:ss` brew time, or -1 when it cannot be parsed
#[wasm_bindgen]
pub fn parse_brew_time(text: &str) -> i32 {
    shared::parse_total_time(text)
        .ok()
        .and_then(|secs| i32::try_from(secs).ok())
        .unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BITTER_CUP: &str = r#"{
        "aroma": 6, "acidity": 5, "sweetness": 5, "bitterness": 8,
        "body": 6, "clarity": 5, "balance": 5, "aftertaste": 5, "overallScore": 5
    }"#;

    #[test]
    fn test_diagnose_json_localizes() {
        let json = diagnose_json(BITTER_CUP, "", "en").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "over_extracted");
        assert_eq!(value["label"], "Over-extracted");
        assert_eq!(value["suggestions"][0], "Grind coarser.");
    }

    #[test]
    fn test_diagnose_json_defaults_to_spanish() {
        let json = diagnose_json(BITTER_CUP, "", "xx").unwrap();
        assert!(json.contains("Sobre-extraído"));
    }

    #[test]
    fn test_diagnose_json_rejects_bad_input() {
        assert!(diagnose_json("{}", "", "es").is_err());
        assert!(diagnose_json(BITTER_CUP, "not json", "es").is_err());
    }

    #[test]
    fn test_diagnose_json_rejects_out_of_range_scores() {
        let wild = r#"{
            "aroma": 6, "acidity": 50, "sweetness": -3, "bitterness": 2,
            "body": 6, "clarity": 5, "balance": 5, "aftertaste": 5, "overallScore": 99
        }"#;
        let err = diagnose_json(wild, "", "en").unwrap_err();
        assert!(err.starts_with("acidity:"), "{}", err);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label("excellent", "es").as_deref(), Some("Excelente"));
        assert_eq!(status_label("under_extracted", "en").as_deref(), Some("Under-extracted"));
        assert_eq!(status_label("burnt", "en"), None);
    }

    #[test]
    fn test_calculate_brew_ratio() {
        assert_eq!(calculate_brew_ratio(15.0, 240.0), 16.0);
        assert_eq!(calculate_brew_ratio(18.0, 250.0), 13.9);
        assert_eq!(calculate_brew_ratio(0.0, 240.0), 0.0);
        assert_eq!(calculate_brew_ratio(f64::NAN, 240.0), 0.0);
    }

    #[test]
    fn test_validate_sensory_score() {
        assert!(validate_sensory_score(1.0));
        assert!(validate_sensory_score(7.5));
        assert!(validate_sensory_score(10.0));
        assert!(!validate_sensory_score(0.5));
        assert!(!validate_sensory_score(10.5));
    }

    #[test]
    fn test_parse_brew_time() {
        assert_eq!(parse_brew_time("02:30"), 150);
        assert_eq!(parse_brew_time("3:05"), 185);
        assert_eq!(parse_brew_time("2m30"), -1);
        assert_eq!(parse_brew_time(""), -1);
    }
}
