use assert_float_eq::assert_float_absolute_eq;

use macro_coach_rs::models::{ActivityLevel, NutritionProfile, Objective, Sex};
use macro_coach_rs::planner::{
    catalog, estimate_bmr, food_lookup, recommend_calorie_target, recommend_macros, round1,
    round_to, scale_to_grams, SplitMethod,
};

fn profile(sex: Sex, weight: f64, objective: Objective, rate: f64) -> NutritionProfile {
    NutritionProfile {
        objective,
        weekly_rate_kg: rate,
        sex: Some(sex),
        age: Some(35),
        height_cm: Some(170.0),
        weight_kg: Some(weight),
        activity: Some(ActivityLevel::Light),
        ..Default::default()
    }
}

#[test]
fn test_scale_identity_at_100g() {
    for food in catalog() {
        let scaled = scale_to_grams(&food.per_100g, 100.0);
        assert_eq!(scaled.kcal, round_to(food.per_100g.kcal, 0), "{}", food.name);
        assert_eq!(scaled.protein, round1(food.per_100g.protein), "{}", food.name);
        assert_eq!(scaled.carbs, round1(food.per_100g.carbs), "{}", food.name);
        assert_eq!(scaled.fat, round1(food.per_100g.fat), "{}", food.name);
    }
}

#[test]
fn test_scale_is_linear_within_rounding() {
    for food in catalog() {
        for grams in [37.0, 55.0, 120.0, 250.0] {
            let single = scale_to_grams(&food.per_100g, grams);
            let double = scale_to_grams(&food.per_100g, 2.0 * grams);
            assert_float_absolute_eq!(2.0 * single.kcal, double.kcal, 1.0);
            assert_float_absolute_eq!(2.0 * single.protein, double.protein, 0.1 + 1e-9);
        }
    }
}

#[test]
fn test_scale_rounds_the_stored_value() {
    // 11 * 35 / 100 is stored a hair above 3.85
    let egg = food_lookup("Egg (whole)").unwrap();
    let portion = scale_to_grams(&egg.per_100g, 35.0);
    assert_eq!(portion.fat, 3.9);
    assert_eq!(portion.protein, 4.5);
    assert_eq!(round1(0.35), 0.3);
}

#[test]
fn test_bmr_example() {
    assert_eq!(estimate_bmr(Some(Sex::Male), Some(80.0), Some(180.0), Some(30)), Some(1780.0));
}

#[test]
fn test_bmr_male_exceeds_female_by_constant() {
    for weight in [45.0, 70.0, 95.0, 130.0] {
        for height in [150.0, 172.5, 195.0] {
            for age in [18, 40, 75] {
                let male = estimate_bmr(Some(Sex::Male), Some(weight), Some(height), Some(age)).unwrap();
                let female =
                    estimate_bmr(Some(Sex::Female), Some(weight), Some(height), Some(age)).unwrap();
                assert_float_absolute_eq!(male - female, 166.0, 1e-9);
            }
        }
    }
}

#[test]
fn test_calorie_delta_always_capped() {
    for objective in [Objective::Lose, Objective::Maintain, Objective::Gain] {
        for rate in [0.0, 0.25, 0.5, 1.0, 2.0] {
            for weight in [50.0, 80.0, 120.0] {
                let reco = recommend_calorie_target(&profile(Sex::Female, weight, objective, rate));
                let est = reco.estimate.unwrap();
                // Both numbers are rounded independently
                assert!(est.delta_per_day.abs() <= 0.20 * est.tdee + 1.0);
                if objective == Objective::Maintain {
                    assert_eq!(est.delta_per_day, 0.0);
                }
            }
        }
    }
}

#[test]
fn test_per_kg_split_matches_target() {
    for weight in [50.0, 65.0, 80.0, 100.0] {
        for target in [2000.0, 2400.0, 2750.0, 3500.0] {
            let split = recommend_macros(&profile(Sex::Male, weight, Objective::Maintain, 0.0), Some(target));
            assert_eq!(split.method, SplitMethod::PerKg);
            assert_float_absolute_eq!(split.implied_calories(), target, 10.0);
        }
    }
}

#[test]
fn test_split_never_negative() {
    for weight in [40.0, 80.0, 160.0] {
        for target in [800.0, 1200.0, 2000.0, 5000.0] {
            let split = recommend_macros(&profile(Sex::Male, weight, Objective::Lose, 0.5), Some(target));
            assert!(split.protein >= 0.0 && split.fat >= 0.0 && split.carbs >= 0.0);
        }
    }
}

#[test]
fn test_per_kg_example() {
    let split = recommend_macros(&profile(Sex::Male, 80.0, Objective::Maintain, 0.0), Some(2500.0));
    assert_eq!((split.protein, split.fat, split.carbs), (145.0, 65.0, 335.0));
}
