//! Validation utilities for journal records
//!
//! Records are checked where they are built from user input. The diagnosis
//! engine itself accepts any value.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{BrewConfig, SensoryResult};

/// A field that failed validation, with messages in English and Spanish
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
    pub message_es: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>, message_es: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            message_es: message_es.into(),
        }
    }
}

// ============================================================================
// Sensory Validations
// ============================================================================

/// Validate a sensory rating is within 1-10
pub fn validate_sensory_score(score: Decimal) -> Result<(), &'static str> {
    if score < SensoryResult::MIN_SCORE || score > SensoryResult::MAX_SCORE {
        return Err("Sensory score must be between 1 and 10");
    }
    Ok(())
}

/// Validate every rating of a sensory result; reports the first bad field
pub fn validate_sensory_result(result: &SensoryResult) -> Result<(), FieldError> {
    for (field, score) in result.ratings() {
        if validate_sensory_score(score).is_err() {
            return Err(FieldError::new(
                field,
                format!("{} must be between 1 and 10, got {}", field, score),
                format!("{} debe estar entre 1 y 10, se recibió {}", field, score),
            ));
        }
    }
    Ok(())
}

// ============================================================================
// Brew Validations
// ============================================================================

/// Largest dose the journal accepts, in grams
pub const MAX_DOSE: Decimal = Decimal::ONE_THOUSAND;

/// Largest water amount the journal accepts, in millilitres
pub const MAX_WATER: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Parse a total brew time written as `mm:ss` into seconds
pub fn parse_total_time(value: &str) -> Result<u32, FieldError> {
    let invalid_format = || {
        FieldError::new(
            "totalTime",
            "Total time must be written as mm:ss",
            "El tiempo total debe tener el formato mm:ss",
        )
    };

    let (minutes, seconds) = value.trim().split_once(':').ok_or_else(invalid_format)?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid_format())?;
    let seconds: u32 = seconds.parse().map_err(|_| invalid_format())?;

    if seconds >= 60 {
        return Err(FieldError::new(
            "totalTime",
            "Seconds in total time must be below 60",
            "Los segundos del tiempo total deben ser menores a 60",
        ));
    }
    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(|| {
            FieldError::new(
                "totalTime",
                "Total time is too long",
                "El tiempo total es demasiado largo",
            )
        })
}

/// Brew ratio N for 1:N, rounded to one decimal.
///
/// `None` when the dose is not positive or the quotient does not fit a `Decimal`.
pub fn calculate_brew_ratio(dose: Decimal, water_amount: Decimal) -> Option<Decimal> {
    if dose <= Decimal::ZERO {
        return None;
    }
    water_amount.checked_div(dose).map(|ratio| ratio.round_dp(1))
}

/// Validate dosing, temperature and timing of a brew
pub fn validate_brew_config(config: &BrewConfig) -> Result<(), FieldError> {
    if config.dose <= Decimal::ZERO || config.dose > MAX_DOSE {
        return Err(FieldError::new(
            "dose",
            format!("Dose must be greater than 0 g and at most {} g", MAX_DOSE),
            format!("La dosis debe ser mayor a 0 g y como máximo {} g", MAX_DOSE),
        ));
    }
    if config.water_amount <= Decimal::ZERO || config.water_amount > MAX_WATER {
        return Err(FieldError::new(
            "waterAmount",
            format!("Water amount must be greater than 0 ml and at most {} ml", MAX_WATER),
            format!("La cantidad de agua debe ser mayor a 0 ml y como máximo {} ml", MAX_WATER),
        ));
    }
    if config.temperature < Decimal::ZERO || config.temperature > Decimal::ONE_HUNDRED {
        return Err(FieldError::new(
            "temperature",
            "Temperature must be between 0 and 100 °C",
            "La temperatura debe estar entre 0 y 100 °C",
        ));
    }
    parse_total_time(&config.total_time)?;
    Ok(())
}

// ============================================================================
// Bean Validations
// ============================================================================

/// Validate the required text fields of a bean
pub fn validate_bean_fields(name: &str, roaster: &str, origin: &str) -> Result<(), FieldError> {
    let required = [
        ("name", name, "Coffee name is required", "Se requiere el nombre del café"),
        ("roaster", roaster, "Roaster is required", "Se requiere el tostador"),
        ("origin", origin, "Origin is required", "Se requiere el país y región"),
    ];

    for (field, value, message, message_es) in required {
        if value.trim().is_empty() {
            return Err(FieldError::new(field, message, message_es));
        }
    }
    Ok(())
}
