//! Sensory evaluation of a brew

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sensory evaluation of a single brew
///
/// Every rating is on a 1.0-10.0 scale. The browser slider moves in 0.5
/// increments, but any decimal inside the range is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SensoryResult {
    pub aroma: Decimal,
    pub acidity: Decimal,
    pub sweetness: Decimal,
    pub bitterness: Decimal,
    pub body: Decimal,
    pub clarity: Decimal,
    pub balance: Decimal,
    /// Retrogusto
    pub aftertaste: Decimal,
    #[serde(default)]
    pub flavor_notes: String,
    pub overall_score: Decimal,
    /// Free-text description of the cup
    #[serde(default)]
    pub general_feeling: String,
}

impl SensoryResult {
    pub const MIN_SCORE: Decimal = Decimal::ONE;
    pub const MAX_SCORE: Decimal = Decimal::TEN;

    /// Named ratings in display order
    pub fn ratings(&self) -> [(&'static str, Decimal); 9] {
        [
            ("aroma", self.aroma),
            ("acidity", self.acidity),
            ("sweetness", self.sweetness),
            ("bitterness", self.bitterness),
            ("body", self.body),
            ("clarity", self.clarity),
            ("balance", self.balance),
            ("aftertaste", self.aftertaste),
            ("overallScore", self.overall_score),
        ]
    }
}

impl Default for SensoryResult {
    fn default() -> Self {
        let mid = Decimal::from(5);
        Self {
            aroma: mid,
            acidity: mid,
            sweetness: mid,
            bitterness: mid,
            body: mid,
            clarity: mid,
            balance: mid,
            aftertaste: mid,
            flavor_notes: String::new(),
            overall_score: mid,
            general_feeling: String::new(),
        }
    }
}
