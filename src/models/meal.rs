use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::MacroQuad;
use crate::planner::calculations::scale_to_grams;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        MealType::ALL
            .into_iter()
            .find(|m| m.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown meal type '{}'", s))
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        };
        f.write_str(label)
    }
}

/// A meal entry in the journal.
///
/// Totals are authoritative unless both `grams` and `per_100g` are present,
/// in which case they are recomputed from the per-100g values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedMeal {
    pub id: u64,
    pub name: String,
    pub date: NaiveDate,

    #[serde(default)]
    pub meal_type: MealType,

    pub totals: MacroQuad,

    #[serde(default)]
    pub grams: Option<f64>,

    #[serde(default)]
    pub per_100g: Option<MacroQuad>,

    #[serde(default)]
    pub source: String,

    #[serde(default)]
    pub source_id: String,
}

impl LoggedMeal {
    /// Recompute totals from per-100g values.
    ///
    /// Zero or missing grams leaves the stored totals untouched.
    pub fn recalc_totals(&mut self) {
        let Some(grams) = self.grams.filter(|g| *g != 0.0) else {
            return;
        };
        if let Some(per100) = &self.per_100g {
            self.totals = scale_to_grams(per100, grams);
        }
    }

    /// Per-100g values, derived from totals and grams when not stored.
    pub fn per_100g_or_derived(&self) -> Option<MacroQuad> {
        self.per_100g.or_else(|| {
            self.grams
                .filter(|g| *g > 0.0)
                .map(|g| per_100g_from_totals(&self.totals, g, 1))
        })
    }

    /// Canonical key for name lookups (trimmed, lowercase).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// Back out per-100g values from a portion's totals.
pub fn per_100g_from_totals(totals: &MacroQuad, grams: f64, decimals: u32) -> MacroQuad {
    use crate::planner::calculations::round_to;

    let factor = 100.0 / grams;
    MacroQuad {
        kcal: round_to(totals.kcal * factor, decimals),
        protein: round_to(totals.protein * factor, decimals),
        carbs: round_to(totals.carbs * factor, decimals),
        fat: round_to(totals.fat * factor, decimals),
    }
}

/// A saved food that can be re-logged with a different portion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteFood {
    pub name: String,

    #[serde(default)]
    pub brand: String,

    #[serde(default)]
    pub default_grams: Option<f64>,

    #[serde(default)]
    pub per_100g: Option<MacroQuad>,

    #[serde(default)]
    pub source: String,

    #[serde(default)]
    pub source_id: String,

    pub created_at: DateTime<Utc>,
}

impl FavoriteFood {
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}
