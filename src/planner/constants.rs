use std::sync::LazyLock;

use crate::models::{DietTag, FoodItem};

// ─────────────────────────────────────────────────────────────────────────────
// Profile defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_CALORIES: f64 = 2000.0;
pub const DEFAULT_PROTEIN_G: f64 = 150.0;
pub const DEFAULT_CARBS_G: f64 = 250.0;
pub const DEFAULT_FAT_G: f64 = 70.0;

/// Default desired pace in kg/week.
pub const DEFAULT_WEEKLY_RATE_KG: f64 = 0.25;

// ─────────────────────────────────────────────────────────────────────────────
// Energy
// ─────────────────────────────────────────────────────────────────────────────

/// Energy per gram of each macronutrient.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Approximate energy content of one kilogram of body mass.
pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

/// Largest daily deficit or surplus, as a fraction of TDEE.
pub const MAX_DELTA_FRACTION: f64 = 0.20;

/// Kilojoules per kilocalorie.
pub const KJ_PER_KCAL: f64 = 4.184;

pub const ACTIVITY_SEDENTARY: f64 = 1.20;
pub const ACTIVITY_LIGHT: f64 = 1.375;
pub const ACTIVITY_MODERATE: f64 = 1.55;
pub const ACTIVITY_ACTIVE: f64 = 1.725;
pub const ACTIVITY_VERY_ACTIVE: f64 = 1.90;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split
// ─────────────────────────────────────────────────────────────────────────────

/// Protein per kg of body weight, and its bounds in grams.
pub const PROTEIN_G_PER_KG: f64 = 1.8;
pub const PROTEIN_MIN_G: f64 = 60.0;
pub const PROTEIN_MAX_G: f64 = 250.0;

/// Fat per kg of body weight, and its bounds in grams.
pub const FAT_G_PER_KG: f64 = 0.8;
pub const FAT_MIN_G: f64 = 30.0;
pub const FAT_MAX_G: f64 = 120.0;

/// Share of post-protein calories given to fat when the target is too low.
pub const LOW_CALORIE_FAT_SHARE: f64 = 0.25;

/// Calorie shares used when body weight is unknown.
pub const RATIO_PROTEIN: f64 = 0.30;
pub const RATIO_FAT: f64 = 0.25;

// ─────────────────────────────────────────────────────────────────────────────
// Meal suggestions
// ─────────────────────────────────────────────────────────────────────────────

/// Weights used to pick the dominant macro of a need.
pub const PROTEIN_NEED_WEIGHT: f64 = 1.3;
pub const CARBS_NEED_WEIGHT: f64 = 1.0;
pub const FAT_NEED_WEIGHT: f64 = 0.7;

/// Portion bounds in grams.
pub const MIN_PORTION_G: f64 = 30.0;
pub const MAX_PORTION_G: f64 = 400.0;

/// Calorie ceiling for a single portion: max(need * factor, floor).
pub const PORTION_KCAL_FACTOR: f64 = 1.2;
pub const PORTION_KCAL_FLOOR: f64 = 400.0;

/// Stand-in for a zero per-100g value when dividing.
pub const MIN_PER_100G: f64 = 0.0001;

/// Portion assumed when nothing better is known.
pub const DEFAULT_PORTION_G: f64 = 100.0;

/// Fixed vegetable portion in the balanced bowl.
pub const VEGETABLE_PORTION_G: f64 = 100.0;
pub const VEGETABLE_NAME: &str = "Broccoli";

pub const QUICK_PROTEIN_TITLE: &str = "Quick Protein Fix";
pub const BALANCED_BOWL_TITLE: &str = "Balanced Bowl";
pub const GAP_FILLER_TITLE: &str = "Macro Gap Filler";

// ─────────────────────────────────────────────────────────────────────────────
// Progress badges
// ─────────────────────────────────────────────────────────────────────────────

/// Calories: at most this ratio of the goal is on target.
pub const CALORIE_ON_TARGET_MAX: f64 = 1.00;
/// Calories: up to this ratio is a warning; beyond is over.
pub const CALORIE_WARNING_MAX: f64 = 1.10;
/// Macros: ratios inside this band are on target.
pub const MACRO_BAND_MIN: f64 = 0.90;
pub const MACRO_BAND_MAX: f64 = 1.10;

/// Built-in food library, values per 100 g.
pub static CATALOG: LazyLock<Vec<FoodItem>> = LazyLock::new(|| {
    use DietTag::*;
    vec![
        FoodItem::new("Grilled Chicken Breast", 165.0, 31.0, 0.0, 3.6, &[Meat, GlutenFree]),
        FoodItem::new("Greek Yogurt (nonfat)", 59.0, 10.0, 4.0, 0.0, &[Vegetarian, Dairy, GlutenFree]),
        FoodItem::new("Tofu (firm)", 76.0, 8.0, 2.0, 4.8, &[Vegan, Vegetarian, GlutenFree]),
        FoodItem::new("Egg (whole)", 155.0, 13.0, 1.1, 11.0, &[Vegetarian, GlutenFree]),
        FoodItem::new("Oats (dry)", 389.0, 17.0, 66.0, 7.0, &[Vegetarian]),
        FoodItem::new("Cooked White Rice", 130.0, 2.7, 28.0, 0.3, &[Vegan, Vegetarian, GlutenFree]),
        FoodItem::new("Banana", 96.0, 1.1, 23.0, 0.3, &[Vegan, Vegetarian, GlutenFree]),
        FoodItem::new("Almonds", 579.0, 21.0, 22.0, 50.0, &[Vegan, Vegetarian, GlutenFree, Nuts]),
        FoodItem::new("Avocado", 160.0, 2.0, 9.0, 15.0, &[Vegan, Vegetarian, GlutenFree]),
        FoodItem::new("Broccoli", 34.0, 2.8, 7.0, 0.4, &[Vegan, Vegetarian, GlutenFree]),
    ]
});

/// The built-in catalog as a slice.
pub fn catalog() -> &'static [FoodItem] {
    CATALOG.as_slice()
}
