use crate::models::{ActivityLevel, MacroQuad, Sex};
use crate::planner::constants::*;

/// Round to `decimals` places, ties to even.
///
/// Rounds the exact binary value, so `3.85` stored slightly above the tie
/// goes up. Scaling by a power of ten first would manufacture false ties.
/// All rounding in the coach goes through here so displayed numbers and
/// stored totals agree.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if decimals == 0 || !value.is_finite() {
        return value.round_ties_even();
    }
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Round to one decimal place.
#[inline]
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Round to the nearest multiple of 5.
#[inline]
pub fn round5(value: f64) -> f64 {
    (value / 5.0).round_ties_even() * 5.0
}

/// Scale per-100g values to a portion.
///
/// Calories are rounded to a whole number, macros to one decimal. Negative
/// grams are not rejected; callers validate quantities first.
pub fn scale_to_grams(per100: &MacroQuad, grams: f64) -> MacroQuad {
    MacroQuad {
        kcal: round_to(per100.kcal * grams / 100.0, 0),
        protein: round1(per100.protein * grams / 100.0),
        carbs: round1(per100.carbs * grams / 100.0),
        fat: round1(per100.fat * grams / 100.0),
    }
}

/// Sum already-rounded portions.
///
/// Calories are added as-is; macros are summed and then rounded to one
/// decimal.
pub fn sum_totals<'a, I>(portions: I) -> MacroQuad
where
    I: IntoIterator<Item = &'a MacroQuad>,
{
    let sum: MacroQuad = portions.into_iter().copied().sum();
    MacroQuad {
        kcal: sum.kcal,
        protein: round1(sum.protein),
        carbs: round1(sum.carbs),
        fat: round1(sum.fat),
    }
}

/// Basal metabolic rate via Mifflin–St Jeor.
///
/// Returns `None` when any input is missing or zero.
pub fn estimate_bmr(
    sex: Option<Sex>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<u32>,
) -> Option<f64> {
    let sex = sex?;
    let weight = weight_kg.filter(|w| *w != 0.0)?;
    let height = height_cm.filter(|h| *h != 0.0)?;
    let age = age.filter(|a| *a != 0)?;

    let base = 10.0 * weight + 6.25 * height - 5.0 * f64::from(age);
    Some(match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    })
}

/// TDEE multiplier for an activity level. Missing levels count as moderate.
pub fn activity_multiplier(level: Option<ActivityLevel>) -> f64 {
    match level.unwrap_or_default() {
        ActivityLevel::Sedentary => ACTIVITY_SEDENTARY,
        ActivityLevel::Light => ACTIVITY_LIGHT,
        ActivityLevel::Moderate => ACTIVITY_MODERATE,
        ActivityLevel::Active => ACTIVITY_ACTIVE,
        ActivityLevel::VeryActive => ACTIVITY_VERY_ACTIVE,
    }
}
