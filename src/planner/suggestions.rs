use std::cmp::Ordering;

use crate::models::{
    DietTag, DietaryPreferences, FoodItem, Macro, MacroNeed, MacroQuad, PlanItem, SuggestionPlan,
};
use crate::planner::calculations::{round_to, scale_to_grams, sum_totals};
use crate::planner::constants::*;

/// Check a food against every active dietary constraint.
fn fits(food: &FoodItem, prefs: &DietaryPreferences) -> bool {
    if prefs.vegan && !food.has_tag(DietTag::Vegan) {
        return false;
    }
    if prefs.vegetarian && !food.has_tag(DietTag::Vegetarian) {
        return false;
    }
    if prefs.no_dairy && food.has_tag(DietTag::Dairy) {
        return false;
    }
    if prefs.no_nuts && food.has_tag(DietTag::Nuts) {
        return false;
    }
    if prefs.gluten_free && !food.has_tag(DietTag::GlutenFree) {
        return false;
    }
    true
}

/// Foods that satisfy the preferences.
///
/// Falls back to the whole catalog rather than returning nothing.
pub fn filter_by_preferences<'a>(
    catalog: &'a [FoodItem],
    prefs: &DietaryPreferences,
) -> Vec<&'a FoodItem> {
    let pool: Vec<&FoodItem> = catalog.iter().filter(|f| fits(f, prefs)).collect();
    if pool.is_empty() {
        catalog.iter().collect()
    } else {
        pool
    }
}

/// Macro with the highest weighted remaining amount.
///
/// Protein counts 1.3x, carbs 1.0x, fat 0.7x. Ties go to the earlier macro
/// in protein, carbs, fat order.
fn dominant_macro(need: &MacroNeed) -> Macro {
    let weighted = |m: Macro| {
        let weight = match m {
            Macro::Protein => PROTEIN_NEED_WEIGHT,
            Macro::Carbs => CARBS_NEED_WEIGHT,
            Macro::Fat => FAT_NEED_WEIGHT,
        };
        need.get(m).max(0.0) * weight
    };

    let mut best = Macro::Protein;
    let mut best_score = weighted(best);
    for m in [Macro::Carbs, Macro::Fat] {
        let score = weighted(m);
        if score > best_score {
            best = m;
            best_score = score;
        }
    }
    best
}

/// Portion size that covers the need's dominant macro with this food.
///
/// Clamped to 30..400 g, then shrunk to the calorie budget if it would
/// overshoot `max(need.kcal * 1.2, 400)`. Whole grams.
pub fn grams_for_need(food: &FoodItem, need: &MacroNeed) -> f64 {
    let target = dominant_macro(need);
    let per100 = food.per_100g.get(target).max(MIN_PER_100G);

    let mut grams = (need.get(target) / per100 * 100.0).clamp(MIN_PORTION_G, MAX_PORTION_G);

    let kcal_ceiling = (need.kcal * PORTION_KCAL_FACTOR).max(PORTION_KCAL_FLOOR);
    if food.per_100g.kcal * grams / 100.0 > kcal_ceiling {
        let budget_grams = need.kcal / food.per_100g.kcal * 100.0;
        grams = grams.min(budget_grams).max(MIN_PORTION_G);
    }

    round_to(grams, 0)
}

/// Calories and macros for a portion of this food.
#[inline]
pub fn totals_for(food: &FoodItem, grams: f64) -> MacroQuad {
    scale_to_grams(&food.per_100g, grams)
}

/// Case-insensitive, whitespace-trimmed exact match against the catalog.
pub fn food_lookup(name: &str) -> Option<&'static FoodItem> {
    let key = name.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    catalog().iter().find(|f| f.key() == key)
}

fn desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

fn asc(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Protein descending, then fat ascending, then calories ascending.
fn by_lean_protein<'a>(pool: &[&'a FoodItem]) -> Vec<&'a FoodItem> {
    let mut sorted = pool.to_vec();
    sorted.sort_by(|a, b| {
        let (a, b) = (&a.per_100g, &b.per_100g);
        desc(a.protein, b.protein)
            .then(asc(a.fat, b.fat))
            .then(asc(a.kcal, b.kcal))
    });
    sorted
}

/// Carbs descending, then fat ascending, then protein descending.
fn by_carb_source<'a>(pool: &[&'a FoodItem]) -> Vec<&'a FoodItem> {
    let mut sorted = pool.to_vec();
    sorted.sort_by(|a, b| {
        let (a, b) = (&a.per_100g, &b.per_100g);
        desc(a.carbs, b.carbs)
            .then(asc(a.fat, b.fat))
            .then(desc(a.protein, b.protein))
    });
    sorted
}

/// Fat descending, then calories descending.
fn by_healthy_fat<'a>(pool: &[&'a FoodItem]) -> Vec<&'a FoodItem> {
    let mut sorted = pool.to_vec();
    sorted.sort_by(|a, b| {
        let (a, b) = (&a.per_100g, &b.per_100g);
        desc(a.fat, b.fat).then(desc(a.kcal, b.kcal))
    });
    sorted
}

fn portion(food: &FoodItem, grams: f64) -> PlanItem {
    PlanItem::new(food.name.clone(), grams, totals_for(food, grams))
}

fn plan(title: &str, items: Vec<PlanItem>) -> SuggestionPlan {
    let totals = sum_totals(items.iter().map(|i| &i.totals));
    SuggestionPlan {
        title: title.to_string(),
        items,
        totals,
    }
}

/// One lean, high-protein food sized to the dominant need.
fn quick_protein_fix(lean_protein: &[&FoodItem], need: &MacroNeed) -> SuggestionPlan {
    let food = lean_protein
        .iter()
        .copied()
        .find(|f| f.per_100g.protein >= 10.0 && f.per_100g.fat <= 6.0)
        .unwrap_or(lean_protein[0]);
    let grams = grams_for_need(food, need);

    plan(QUICK_PROTEIN_TITLE, vec![portion(food, grams)])
}

/// Protein source, carb source and a fixed vegetable portion.
fn balanced_bowl(
    pool: &[&FoodItem],
    lean_protein: &[&FoodItem],
    carb_sources: &[&FoodItem],
    need: &MacroNeed,
) -> SuggestionPlan {
    let protein_food = lean_protein
        .iter()
        .copied()
        .find(|f| f.per_100g.protein >= 8.0 && f.per_100g.fat < 12.0)
        .unwrap_or(lean_protein[0]);
    let carb_food = carb_sources
        .iter()
        .copied()
        .find(|f| f.per_100g.carbs >= 20.0 && f.per_100g.kcal <= 200.0)
        .unwrap_or(carb_sources[0]);
    let vegetable = pool
        .iter()
        .copied()
        .find(|f| f.name.contains(VEGETABLE_NAME))
        .unwrap_or(pool[0]);

    let protein_item = portion(protein_food, grams_for_need(protein_food, need));

    // The carb portion only chases carbs, within what the protein left over.
    let carb_need = MacroNeed {
        kcal: need.kcal - protein_item.totals.kcal,
        protein: 0.0,
        carbs: need.carbs,
        fat: 0.0,
    };
    let carb_item = portion(carb_food, grams_for_need(carb_food, &carb_need));
    let vegetable_item = portion(vegetable, VEGETABLE_PORTION_G);

    plan(BALANCED_BOWL_TITLE, vec![protein_item, carb_item, vegetable_item])
}

/// Two foods aimed at whichever macro has the largest gap.
fn macro_gap_filler(
    lean_protein: &[&FoodItem],
    carb_sources: &[&FoodItem],
    healthy_fats: &[&FoodItem],
    need: &MacroNeed,
) -> SuggestionPlan {
    let mut largest = Macro::Protein;
    for m in [Macro::Carbs, Macro::Fat] {
        if need.get(m) > need.get(largest) {
            largest = m;
        }
    }
    let ordered = match largest {
        Macro::Protein => lean_protein,
        Macro::Carbs => carb_sources,
        Macro::Fat => healthy_fats,
    };

    let first = ordered[0];
    let second = ordered.get(1).copied().unwrap_or(first);

    let first_item = portion(first, grams_for_need(first, need));
    let rest = need.saturating_sub(&first_item.totals);
    let second_item = portion(second, grams_for_need(second, &rest));

    plan(GAP_FILLER_TITLE, vec![first_item, second_item])
}

/// Build the three meal suggestions for a day's remaining need.
///
/// Always returns exactly three plans: "Quick Protein Fix", "Balanced Bowl"
/// and "Macro Gap Filler", in that order.
pub fn suggest_plans(need: &MacroNeed, prefs: &DietaryPreferences) -> Vec<SuggestionPlan> {
    suggest_plans_from(catalog(), need, prefs)
}

/// Same as [`suggest_plans`] over an explicit catalog.
///
/// An empty catalog yields no plans.
pub fn suggest_plans_from(
    catalog: &[FoodItem],
    need: &MacroNeed,
    prefs: &DietaryPreferences,
) -> Vec<SuggestionPlan> {
    let pool = filter_by_preferences(catalog, prefs);
    if pool.is_empty() {
        return Vec::new();
    }

    let lean_protein = by_lean_protein(&pool);
    let carb_sources = by_carb_source(&pool);
    let healthy_fats = by_healthy_fat(&pool);

    vec![
        quick_protein_fix(&lean_protein, need),
        balanced_bowl(&pool, &lean_protein, &carb_sources, need),
        macro_gap_filler(&lean_protein, &carb_sources, &healthy_fats, need),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn need(kcal: f64, protein: f64, carbs: f64, fat: f64) -> MacroNeed {
        MacroNeed::new(kcal, protein, carbs, fat)
    }

    fn by_name(name: &str) -> &'static FoodItem {
        food_lookup(name).unwrap()
    }

    #[test]
    fn test_dominant_macro_weighting() {
        // 40 * 1.3 = 52 beats 50 carbs
        assert_eq!(dominant_macro(&need(0.0, 40.0, 50.0, 0.0)), Macro::Protein);
        assert_eq!(dominant_macro(&need(0.0, 30.0, 50.0, 0.0)), Macro::Carbs);
        assert_eq!(dominant_macro(&need(0.0, 0.0, 0.0, 10.0)), Macro::Fat);
        // Nothing needed: protein wins the tie
        assert_eq!(dominant_macro(&need(0.0, 0.0, 0.0, 0.0)), Macro::Protein);
    }

    #[test]
    fn test_grams_for_need_targets_dominant_macro() {
        let chicken = by_name("Grilled Chicken Breast");
        // 60 / 31 * 100 = 193.5
        assert_eq!(grams_for_need(chicken, &need(500.0, 60.0, 30.0, 10.0)), 194.0);
    }

    #[test]
    fn test_grams_for_need_clamps_range() {
        let chicken = by_name("Grilled Chicken Breast");
        assert_eq!(grams_for_need(chicken, &need(2000.0, 2.0, 0.0, 0.0)), 30.0);
        // Chicken has no carbs: the divisor is floored, then the portion capped
        assert_eq!(grams_for_need(chicken, &need(2000.0, 0.0, 80.0, 0.0)), 400.0);
    }

    #[test]
    fn test_grams_for_need_respects_calorie_budget() {
        let almonds = by_name("Almonds");
        // 30 / 22 * 100 = 136 g is ~790 kcal, over the 400 kcal ceiling
        assert_eq!(grams_for_need(almonds, &need(180.0, 0.0, 30.0, 3.0)), 31.0);
    }

    #[test]
    fn test_grams_for_need_negative_calories_floor() {
        let rice = by_name("Cooked White Rice");
        assert_eq!(grams_for_need(rice, &need(-50.0, 0.0, 200.0, 0.0)), 30.0);
    }

    #[test]
    fn test_totals_for() {
        let rice = by_name("Cooked White Rice");
        let totals = totals_for(rice, 107.0);
        assert_eq!(totals.kcal, 139.0);
        assert_eq!(totals.protein, 2.9);
        assert_eq!(totals.carbs, 30.0);
        assert_eq!(totals.fat, 0.3);
    }

    #[test]
    fn test_lean_protein_order() {
        let pool: Vec<&FoodItem> = catalog().iter().collect();
        let names: Vec<&str> = by_lean_protein(&pool)
            .iter()
            .take(3)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["Grilled Chicken Breast", "Almonds", "Oats (dry)"]);
    }

    #[test]
    fn test_healthy_fat_tie_breaks_on_calories() {
        // Rice and Banana both carry 0.3 g fat; Rice has more calories.
        let pool: Vec<&FoodItem> = catalog().iter().collect();
        let sorted = by_healthy_fat(&pool);
        let rice = sorted.iter().position(|f| f.name == "Cooked White Rice").unwrap();
        let banana = sorted.iter().position(|f| f.name == "Banana").unwrap();
        assert!(rice < banana);
    }

    #[test]
    fn test_food_lookup() {
        assert!(food_lookup("  banana ").is_some());
        assert!(food_lookup("TOFU (FIRM)").is_some());
        assert!(food_lookup("Tofu").is_none());
        assert!(food_lookup("").is_none());
    }

    #[test]
    fn test_empty_catalog_yields_no_plans() {
        let plans = suggest_plans_from(&[], &need(500.0, 50.0, 50.0, 10.0), &Default::default());
        assert!(plans.is_empty());
    }
}
