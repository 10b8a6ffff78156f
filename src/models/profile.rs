use std::fmt;

use serde::{Deserialize, Serialize};

use crate::planner::constants::{
    DEFAULT_CALORIES, DEFAULT_CARBS_G, DEFAULT_FAT_G, DEFAULT_PROTEIN_G, DEFAULT_WEEKLY_RATE_KG,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Parse a one-letter sex code. Anything other than "M"/"F" is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Sex::Male),
            "F" => Some(Sex::Female),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Objective::Lose => "Lose fat",
            Objective::Maintain => "Maintain",
            Objective::Gain => "Gain muscle",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly active",
            ActivityLevel::Moderate => "Moderately active",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very active",
        };
        f.write_str(label)
    }
}

/// Daily nutrition targets plus the inputs needed to recommend them.
///
/// `weekly_rate_kg` is a magnitude; its sign comes from `objective`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionProfile {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,

    #[serde(default)]
    pub objective: Objective,

    #[serde(default = "default_weekly_rate")]
    pub weekly_rate_kg: f64,

    #[serde(default)]
    pub sex: Option<Sex>,

    #[serde(default)]
    pub age: Option<u32>,

    #[serde(default)]
    pub height_cm: Option<f64>,

    #[serde(default)]
    pub weight_kg: Option<f64>,

    #[serde(default = "default_activity")]
    pub activity: Option<ActivityLevel>,
}

fn default_weekly_rate() -> f64 {
    DEFAULT_WEEKLY_RATE_KG
}

fn default_activity() -> Option<ActivityLevel> {
    Some(ActivityLevel::Moderate)
}

impl Default for NutritionProfile {
    fn default() -> Self {
        Self {
            calories: DEFAULT_CALORIES,
            protein: DEFAULT_PROTEIN_G,
            carbs: DEFAULT_CARBS_G,
            fat: DEFAULT_FAT_G,
            objective: Objective::Maintain,
            weekly_rate_kg: DEFAULT_WEEKLY_RATE_KG,
            sex: None,
            age: None,
            height_cm: None,
            weight_kg: None,
            activity: default_activity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets() {
        let profile = NutritionProfile::default();
        assert_eq!(profile.calories, 2000.0);
        assert_eq!(profile.protein, 150.0);
        assert_eq!(profile.carbs, 250.0);
        assert_eq!(profile.fat, 70.0);
        assert_eq!(profile.objective, Objective::Maintain);
        assert_eq!(profile.activity, Some(ActivityLevel::Moderate));
    }

    #[test]
    fn test_sex_codes() {
        assert_eq!(Sex::from_code("M"), Some(Sex::Male));
        assert_eq!(Sex::from_code("F"), Some(Sex::Female));
        assert_eq!(Sex::from_code("m"), None);
        assert_eq!(Sex::from_code(" F "), None);
        assert_eq!(Sex::from_code("X"), None);
        assert_eq!(Sex::from_code(""), None);
    }

    #[test]
    fn test_partial_profile_json_uses_defaults() {
        let json = r#"{"calories": 1800, "protein": 120, "carbs": 200, "fat": 60, "sex": "F"}"#;
        let profile: NutritionProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.sex, Some(Sex::Female));
        assert_eq!(profile.weekly_rate_kg, 0.25);
        assert_eq!(profile.activity, Some(ActivityLevel::Moderate));
        assert!(profile.weight_kg.is_none());
    }
}
