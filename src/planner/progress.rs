use serde::{Deserialize, Serialize};

use crate::models::{MacroQuad, NutritionProfile};
use crate::planner::calculations::round1;
use crate::planner::constants::*;

/// Traffic-light status of a daily total against its goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    /// No usable goal.
    Secondary,
    Success,
    Warning,
    Danger,
}

/// Whether a total is judged as calories or as a macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Calories,
    Macro,
}

/// Percentage of goal reached, one decimal. Zero when there is no goal.
pub fn percent_of(total: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        round1(100.0 * total / goal)
    } else {
        0.0
    }
}

/// Classify a daily total against its goal.
///
/// Calories are fine up to the goal and a warning up to +10%. Macros are fine
/// within ±10%, a warning below that band and over above it.
pub fn badge_status(total: f64, goal: f64, kind: BadgeKind) -> Badge {
    if goal <= 0.0 {
        return Badge::Secondary;
    }
    let ratio = total / goal;
    match kind {
        BadgeKind::Calories => {
            if ratio <= CALORIE_ON_TARGET_MAX {
                Badge::Success
            } else if ratio <= CALORIE_WARNING_MAX {
                Badge::Warning
            } else {
                Badge::Danger
            }
        }
        BadgeKind::Macro => {
            if (MACRO_BAND_MIN..=MACRO_BAND_MAX).contains(&ratio) {
                Badge::Success
            } else if ratio < MACRO_BAND_MIN {
                Badge::Warning
            } else {
                Badge::Danger
            }
        }
    }
}

/// Progress of one day's totals toward the profile targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayProgress {
    pub totals: MacroQuad,
    /// Raw percentages of each goal (may exceed 100).
    pub percent: MacroQuad,
    /// Percentages capped at 100, for bar widths.
    pub capped: MacroQuad,
    pub badges: [Badge; 4],
}

impl DayProgress {
    pub fn new(totals: MacroQuad, profile: &NutritionProfile) -> Self {
        let percent = MacroQuad {
            kcal: percent_of(totals.kcal, profile.calories),
            protein: percent_of(totals.protein, profile.protein),
            carbs: percent_of(totals.carbs, profile.carbs),
            fat: percent_of(totals.fat, profile.fat),
        };
        let capped = MacroQuad {
            kcal: percent.kcal.min(100.0),
            protein: percent.protein.min(100.0),
            carbs: percent.carbs.min(100.0),
            fat: percent.fat.min(100.0),
        };
        let badges = [
            badge_status(totals.kcal, profile.calories, BadgeKind::Calories),
            badge_status(totals.protein, profile.protein, BadgeKind::Macro),
            badge_status(totals.carbs, profile.carbs, BadgeKind::Macro),
            badge_status(totals.fat, profile.fat, BadgeKind::Macro),
        ];

        Self {
            totals,
            percent,
            capped,
            badges,
        }
    }
}
