//! Extraction diagnosis engine
//!
//! Maps a sensory evaluation to an extraction status and an ordered list of
//! corrective suggestions. Rules are evaluated in order and the first match
//! wins; their regions overlap, so the order below is part of the contract.

use rust_decimal::Decimal;

use crate::models::{BrewConfig, Diagnosis, DiagnosisStatus, SensoryResult, Suggestion};

/// A single classification rule
#[derive(Clone, Copy)]
pub struct DiagnosisRule {
    pub status: DiagnosisStatus,
    pub matches: fn(&SensoryResult) -> bool,
    pub suggestions: &'static [Suggestion],
}

/// Ordered rule table; anything unmatched is [`DiagnosisStatus::Balanced`].
pub const RULES: &[DiagnosisRule] = &[
    // Sour and thin: high acidity without sweetness
    DiagnosisRule {
        status: DiagnosisStatus::UnderExtracted,
        matches: is_under_extracted,
        suggestions: &[
            Suggestion::GrindFiner,
            Suggestion::RaiseTemperature,
            Suggestion::IncreaseWater,
            Suggestion::AgitateBloom,
        ],
    },
    // Harsh: strong bitterness, or an unbalanced cup dominated by bitterness
    DiagnosisRule {
        status: DiagnosisStatus::OverExtracted,
        matches: is_over_extracted,
        suggestions: &[
            Suggestion::GrindCoarser,
            Suggestion::LowerTemperature,
            Suggestion::DecreaseWater,
            Suggestion::PourGently,
        ],
    },
    DiagnosisRule {
        status: DiagnosisStatus::Excellent,
        matches: is_excellent,
        suggestions: &[Suggestion::ReplicateRecipe],
    },
];

fn is_under_extracted(result: &SensoryResult) -> bool {
    result.acidity >= Decimal::from(7) && result.sweetness <= Decimal::from(4)
}

fn is_over_extracted(result: &SensoryResult) -> bool {
    result.bitterness >= Decimal::from(7)
        || (result.balance <= Decimal::from(4) && result.bitterness > result.acidity)
}

fn is_excellent(result: &SensoryResult) -> bool {
    result.overall_score >= Decimal::from(8)
}

/// Diagnose a brew from its sensory evaluation.
///
/// `config` is accepted so that method-specific rules can be added without
/// changing callers; no current rule reads it. Ratings outside 1-10 are not
/// rejected here, they are simply compared like any other number.
pub fn diagnose(result: &SensoryResult, config: &BrewConfig) -> Diagnosis {
    let diagnosis = RULES
        .iter()
        .find(|rule| (rule.matches)(result))
        .map(|rule| Diagnosis {
            status: rule.status,
            suggestions: rule.suggestions.to_vec(),
        })
        .unwrap_or(Diagnosis {
            status: DiagnosisStatus::Balanced,
            suggestions: Vec::new(),
        });

    tracing::debug!(
        status = %diagnosis.status,
        method = %config.method,
        suggestions = diagnosis.suggestions.len(),
        "Diagnosed brew"
    );

    diagnosis
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn result(acidity: &str, sweetness: &str, bitterness: &str, balance: &str, overall: &str) -> SensoryResult {
        SensoryResult {
            acidity: dec(acidity),
            sweetness: dec(sweetness),
            bitterness: dec(bitterness),
            balance: dec(balance),
            overall_score: dec(overall),
            ..SensoryResult::default()
        }
    }

    fn status_of(r: &SensoryResult) -> DiagnosisStatus {
        diagnose(r, &BrewConfig::default()).status
    }

    #[test]
    fn test_under_extracted_scenario() {
        let d = diagnose(&result("8", "3", "2", "7", "6"), &BrewConfig::default());
        assert_eq!(d.status, DiagnosisStatus::UnderExtracted);
        assert_eq!(
            d.suggestions,
            vec![
                Suggestion::GrindFiner,
                Suggestion::RaiseTemperature,
                Suggestion::IncreaseWater,
                Suggestion::AgitateBloom,
            ]
        );
    }

    #[test]
    fn test_over_extracted_scenario() {
        let d = diagnose(&result("3", "7", "8", "3", "4"), &BrewConfig::default());
        assert_eq!(d.status, DiagnosisStatus::OverExtracted);
        assert_eq!(
            d.suggestions,
            vec![
                Suggestion::GrindCoarser,
                Suggestion::LowerTemperature,
                Suggestion::DecreaseWater,
                Suggestion::PourGently,
            ]
        );
    }

    #[test]
    fn test_excellent_scenario() {
        let d = diagnose(&result("5", "5", "4", "8", "9"), &BrewConfig::default());
        assert_eq!(d.status, DiagnosisStatus::Excellent);
        assert_eq!(d.suggestions, vec![Suggestion::ReplicateRecipe]);
    }

    #[test]
    fn test_balanced_scenario() {
        let d = diagnose(&result("5", "6", "4", "7", "7"), &BrewConfig::default());
        assert_eq!(d.status, DiagnosisStatus::Balanced);
        assert!(d.suggestions.is_empty());
    }

    #[test]
    fn test_under_extraction_takes_precedence_over_bitterness() {
        let r = result("8", "2", "9", "5", "5");
        assert!(is_over_extracted(&r));
        assert_eq!(status_of(&r), DiagnosisStatus::UnderExtracted);
    }

    #[test]
    fn test_over_extraction_takes_precedence_over_high_score() {
        assert_eq!(status_of(&result("5", "5", "7", "8", "10")), DiagnosisStatus::OverExtracted);
    }

    #[test]
    fn test_under_extraction_boundaries() {
        assert_eq!(status_of(&result("7", "4", "2", "7", "6")), DiagnosisStatus::UnderExtracted);
        assert_eq!(status_of(&result("6.9", "4", "2", "7", "6")), DiagnosisStatus::Balanced);
        assert_eq!(status_of(&result("7", "4.1", "2", "7", "6")), DiagnosisStatus::Balanced);
    }

    #[test]
    fn test_over_extraction_bitterness_boundary() {
        assert_eq!(status_of(&result("5", "5", "7", "7", "6")), DiagnosisStatus::OverExtracted);
        assert_eq!(status_of(&result("5", "5", "6.9", "7", "6")), DiagnosisStatus::Balanced);
    }

    #[test]
    fn test_over_extraction_unbalanced_branch() {
        // Balance at 4 with bitterness above acidity
        assert_eq!(status_of(&result("3", "5", "4", "4", "6")), DiagnosisStatus::OverExtracted);
        // Balance just above the threshold
        assert_eq!(status_of(&result("3", "5", "4", "4.1", "6")), DiagnosisStatus::Balanced);
        // Bitterness equal to acidity is not dominant
        assert_eq!(status_of(&result("4", "5", "4", "2", "6")), DiagnosisStatus::Balanced);
    }

    #[test]
    fn test_excellent_boundary() {
        assert_eq!(status_of(&result("5", "5", "4", "7", "8")), DiagnosisStatus::Excellent);
        assert_eq!(status_of(&result("5", "5", "4", "7", "7.5")), DiagnosisStatus::Balanced);
    }

    #[test]
    fn test_out_of_range_values_do_not_panic() {
        assert_eq!(status_of(&result("-3", "-1", "-5", "20", "-2")), DiagnosisStatus::Balanced);
        assert_eq!(status_of(&result("50", "0", "0", "5", "0")), DiagnosisStatus::UnderExtracted);
    }

    #[test]
    fn test_config_does_not_affect_diagnosis() {
        let r = result("8", "3", "2", "7", "6");
        let espresso = BrewConfig {
            method: crate::models::BrewMethod::Espresso,
            temperature: dec("88"),
            ..BrewConfig::default()
        };
        assert_eq!(diagnose(&r, &espresso), diagnose(&r, &BrewConfig::default()));
    }

    #[test]
    fn test_default_recipe_is_balanced() {
        let d = diagnose(&SensoryResult::default(), &BrewConfig::default());
        assert_eq!(d.status, DiagnosisStatus::Balanced);
    }

    #[test]
    fn test_rule_table_order() {
        let order: Vec<_> = RULES.iter().map(|r| r.status).collect();
        assert_eq!(
            order,
            vec![
                DiagnosisStatus::UnderExtracted,
                DiagnosisStatus::OverExtracted,
                DiagnosisStatus::Excellent,
            ]
        );
    }
}
