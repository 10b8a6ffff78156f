use serde::{Deserialize, Serialize};

use crate::models::{NutritionProfile, Objective};
use crate::planner::calculations::{activity_multiplier, estimate_bmr, round1, round5, round_to};
use crate::planner::constants::*;

/// Message shown when BMR cannot be estimated.
pub const MISSING_ANTHROPOMETRICS: &str =
    "Add sex, age, height, and weight to get a TDEE estimate.";

/// Energy numbers behind a calorie recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Recommended daily calories, rounded.
    pub recommended: f64,
    /// Estimated TDEE, rounded.
    pub tdee: f64,
    /// Daily deficit (negative) or surplus (positive), rounded.
    pub delta_per_day: f64,
    /// Delta as a percentage of TDEE, one decimal.
    pub percent: f64,
}

/// Outcome of a calorie recommendation.
///
/// `estimate` is `None` when the profile lacks the inputs for a BMR; the
/// rationale then explains what is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieRecommendation {
    pub estimate: Option<EnergyEstimate>,
    pub rationale: String,
}

impl CalorieRecommendation {
    pub fn recommended(&self) -> Option<f64> {
        self.estimate.map(|e| e.recommended)
    }
}

/// How a macro split was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitMethod {
    #[serde(rename = "per-kg")]
    PerKg,
    #[serde(rename = "ratio")]
    Ratio,
}

impl SplitMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitMethod::PerKg => "per-kg",
            SplitMethod::Ratio => "ratio",
        }
    }
}

/// Daily macro grams for a calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub method: SplitMethod,
}

impl MacroSplit {
    /// Calories implied by the gram amounts.
    pub fn implied_calories(&self) -> f64 {
        KCAL_PER_G_PROTEIN * self.protein + KCAL_PER_G_FAT * self.fat + KCAL_PER_G_CARBS * self.carbs
    }
}

/// Recommend a daily calorie target from the profile's BMR, activity and
/// objective.
///
/// The daily change is capped at 20% of TDEE in either direction.
pub fn recommend_calorie_target(profile: &NutritionProfile) -> CalorieRecommendation {
    let Some(bmr) = estimate_bmr(
        profile.sex,
        profile.weight_kg,
        profile.height_cm,
        profile.age,
    ) else {
        return CalorieRecommendation {
            estimate: None,
            rationale: MISSING_ANTHROPOMETRICS.to_string(),
        };
    };

    let tdee = bmr * activity_multiplier(profile.activity);

    let raw = profile.weekly_rate_kg * KCAL_PER_KG_BODY_MASS / 7.0;
    let cap = (MAX_DELTA_FRACTION * tdee).abs();
    let delta = match profile.objective {
        Objective::Lose => -raw.abs(),
        Objective::Gain => raw.abs(),
        Objective::Maintain => 0.0,
    }
    .clamp(-cap, cap);

    let percent = if tdee != 0.0 {
        round1(delta / tdee * 100.0)
    } else {
        0.0
    };
    let estimate = EnergyEstimate {
        recommended: round_to(tdee + delta, 0),
        tdee: round_to(tdee, 0),
        delta_per_day: round_to(delta, 0),
        percent,
    };

    let kind = if delta < 0.0 {
        "deficit"
    } else if delta > 0.0 {
        "surplus"
    } else {
        "neutral"
    };
    let rationale = format!(
        "TDEE ≈ {:.0} kcal; {} ≈ {:.0} kcal/day ({:.1}%).",
        estimate.tdee, kind, estimate.delta_per_day, estimate.percent
    );

    CalorieRecommendation {
        estimate: Some(estimate),
        rationale,
    }
}

/// Split a calorie target into protein, fat and carb grams.
///
/// With a known body weight, protein and fat scale per kg and carbs take
/// the rest. Otherwise a fixed 30/25/45 calorie split is used. A missing or
/// non-positive target falls back to the profile's calories, then 2000.
pub fn recommend_macros(profile: &NutritionProfile, target_calories: Option<f64>) -> MacroSplit {
    let target = target_calories
        .filter(|t| *t > 0.0)
        .unwrap_or_else(|| {
            if profile.calories > 0.0 {
                profile.calories
            } else {
                DEFAULT_CALORIES
            }
        });

    match profile.weight_kg.filter(|w| *w > 0.0) {
        Some(weight) => per_kg_split(target, weight),
        None => ratio_split(target),
    }
}

fn carbs_from_remainder(remaining_kcal: f64) -> f64 {
    round5((remaining_kcal / KCAL_PER_G_CARBS).max(0.0))
}

fn per_kg_split(target: f64, weight_kg: f64) -> MacroSplit {
    let protein = round5((PROTEIN_G_PER_KG * weight_kg).clamp(PROTEIN_MIN_G, PROTEIN_MAX_G));
    let mut fat = round5((FAT_G_PER_KG * weight_kg).clamp(FAT_MIN_G, FAT_MAX_G));

    let mut remaining = target - KCAL_PER_G_PROTEIN * protein - KCAL_PER_G_FAT * fat;
    let mut carbs = carbs_from_remainder(remaining);

    // Target below the protein/fat floors: shrink fat to make room for carbs.
    if carbs == 0.0 && remaining < 0.0 {
        let after_protein = target - KCAL_PER_G_PROTEIN * protein;
        fat = round5(LOW_CALORIE_FAT_SHARE * after_protein / KCAL_PER_G_FAT).max(FAT_MIN_G);
        remaining = target - KCAL_PER_G_PROTEIN * protein - KCAL_PER_G_FAT * fat;
        carbs = carbs_from_remainder(remaining);
    }

    MacroSplit {
        calories: target,
        protein,
        fat,
        carbs,
        method: SplitMethod::PerKg,
    }
}

fn ratio_split(target: f64) -> MacroSplit {
    let protein = round5(target * RATIO_PROTEIN / KCAL_PER_G_PROTEIN);
    let fat = round5(target * RATIO_FAT / KCAL_PER_G_FAT);
    // Carbs take whatever is left, which lands near 45%.
    let carbs = carbs_from_remainder(target - KCAL_PER_G_PROTEIN * protein - KCAL_PER_G_FAT * fat);

    MacroSplit {
        calories: target,
        protein,
        fat,
        carbs,
        method: SplitMethod::Ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Sex};

    fn athlete(objective: Objective, weekly_rate_kg: f64) -> NutritionProfile {
        NutritionProfile {
            objective,
            weekly_rate_kg,
            sex: Some(Sex::Male),
            age: Some(30),
            height_cm: Some(180.0),
            weight_kg: Some(80.0),
            activity: Some(ActivityLevel::Moderate),
            ..Default::default()
        }
    }

    #[test]
    fn test_calorie_target_lose() {
        let reco = recommend_calorie_target(&athlete(Objective::Lose, 0.5));
        let est = reco.estimate.unwrap();
        // BMR 1780 * 1.55 = 2759; delta -550
        assert_eq!(est.tdee, 2759.0);
        assert_eq!(est.delta_per_day, -550.0);
        assert_eq!(est.recommended, 2209.0);
        assert_eq!(est.percent, -19.9);
        assert_eq!(reco.rationale, "TDEE ≈ 2759 kcal; deficit ≈ -550 kcal/day (-19.9%).");
    }

    #[test]
    fn test_calorie_target_capped_at_twenty_percent() {
        let reco = recommend_calorie_target(&athlete(Objective::Lose, 1.0));
        let est = reco.estimate.unwrap();
        // -1100 kcal/day is capped at 0.2 * 2759 = 551.8
        assert_eq!(est.delta_per_day, -552.0);
        assert_eq!(est.recommended, 2207.0);
        assert_eq!(est.percent, -20.0);
    }

    #[test]
    fn test_calorie_target_gain_is_surplus() {
        let reco = recommend_calorie_target(&athlete(Objective::Gain, 0.25));
        let est = reco.estimate.unwrap();
        assert_eq!(est.delta_per_day, 275.0);
        assert!(reco.rationale.contains("surplus"));
    }

    #[test]
    fn test_calorie_target_maintain_is_neutral() {
        let reco = recommend_calorie_target(&athlete(Objective::Maintain, 0.75));
        let est = reco.estimate.unwrap();
        assert_eq!(est.delta_per_day, 0.0);
        assert_eq!(est.recommended, est.tdee);
        assert!(reco.rationale.contains("neutral"));
    }

    #[test]
    fn test_calorie_target_unavailable() {
        let reco = recommend_calorie_target(&NutritionProfile::default());
        assert!(reco.estimate.is_none());
        assert!(reco.recommended().is_none());
        assert_eq!(reco.rationale, MISSING_ANTHROPOMETRICS);
    }

    #[test]
    fn test_macros_per_kg_example() {
        let split = recommend_macros(&athlete(Objective::Maintain, 0.0), Some(2500.0));
        assert_eq!(split.method, SplitMethod::PerKg);
        assert_eq!(split.protein, 145.0);
        assert_eq!(split.fat, 65.0);
        assert_eq!(split.carbs, 335.0);
    }

    #[test]
    fn test_macros_low_calorie_shrinks_fat() {
        let split = recommend_macros(&athlete(Objective::Lose, 0.5), Some(1000.0));
        assert_eq!(split.protein, 145.0);
        assert_eq!(split.fat, 30.0);
        // (1000 - 580 - 270) / 4 = 37.5 -> 40
        assert_eq!(split.carbs, 40.0);
    }

    #[test]
    fn test_macros_ratio_when_weight_unknown() {
        let split = recommend_macros(&NutritionProfile::default(), Some(2000.0));
        assert_eq!(split.method, SplitMethod::Ratio);
        assert_eq!(split.protein, 150.0);
        assert_eq!(split.fat, 55.0);
        assert_eq!(split.carbs, 225.0);
    }

    #[test]
    fn test_macros_missing_target_uses_profile() {
        let mut profile = NutritionProfile::default();
        profile.calories = 1800.0;
        let split = recommend_macros(&profile, None);
        assert_eq!(split.calories, 1800.0);

        let split = recommend_macros(&profile, Some(-5.0));
        assert_eq!(split.calories, 1800.0);

        profile.calories = 0.0;
        let split = recommend_macros(&profile, None);
        assert_eq!(split.calories, 2000.0);
    }

    #[test]
    fn test_split_method_serializes() {
        let json = serde_json::to_string(&SplitMethod::PerKg).unwrap();
        assert_eq!(json, "\"per-kg\"");
    }
}
