use serde::{Deserialize, Serialize};

use crate::models::MacroQuad;

/// A single food portion inside a suggested plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanItem {
    /// Catalog name of the food.
    pub name: String,

    /// Portion size in grams (whole grams).
    pub grams: f64,

    /// Calories and macros for this portion.
    #[serde(flatten)]
    pub totals: MacroQuad,
}

impl PlanItem {
    pub fn new(name: String, grams: f64, totals: MacroQuad) -> Self {
        Self {
            name,
            grams,
            totals,
        }
    }
}

/// A titled group of portions with their summed totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionPlan {
    pub title: String,
    pub items: Vec<PlanItem>,
    pub totals: MacroQuad,
}
