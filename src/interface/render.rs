use chrono::NaiveDate;

use crate::food_db::FoodRecord;
use crate::models::{DietaryPreferences, FavoriteFood, LoggedMeal, NutritionProfile, SuggestionPlan};
use crate::planner::progress::{Badge, DayProgress};
use crate::planner::targets::{CalorieRecommendation, MacroSplit};
use crate::state::{LogPlanOutcome, RecentFood};

const BAR_WIDTH: usize = 20;

/// Text bar for a percentage already capped at 100.
fn progress_bar(capped_percent: f64, width: usize) -> String {
    let filled = ((capped_percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

fn badge_label(badge: Badge) -> &'static str {
    match badge {
        Badge::Secondary => "no goal",
        Badge::Success => "ok",
        Badge::Warning => "low",
        Badge::Danger => "over",
    }
}

/// Display one day's meals with progress toward the goals.
pub fn display_day_summary(
    date: NaiveDate,
    meals: &[&LoggedMeal],
    progress: &DayProgress,
    profile: &NutritionProfile,
) {
    println!();
    println!("=== {} ===", date);
    println!();

    if meals.is_empty() {
        println!("No meals logged.");
    } else {
        let max_name_len = meals.iter().map(|m| m.name.len()).max().unwrap_or(10);
        for meal in meals {
            let grams = meal
                .grams
                .map(|g| format!(" ({:.0} g)", g))
                .unwrap_or_default();
            println!(
                "{:>4}. {:<9} {:<width$} - {:>4.0} kcal | P {:.1} C {:.1} F {:.1}{}",
                meal.id,
                meal.meal_type.to_string(),
                meal.name,
                meal.totals.kcal,
                meal.totals.protein,
                meal.totals.carbs,
                meal.totals.fat,
                grams,
                width = max_name_len
            );
        }
    }

    let t = &progress.totals;
    let rows = [
        ("Calories", t.kcal, profile.calories, progress.percent.kcal, progress.capped.kcal, "kcal"),
        ("Protein", t.protein, profile.protein, progress.percent.protein, progress.capped.protein, "g"),
        ("Carbs", t.carbs, profile.carbs, progress.percent.carbs, progress.capped.carbs, "g"),
        ("Fat", t.fat, profile.fat, progress.percent.fat, progress.capped.fat, "g"),
    ];

    println!();
    println!("--- Progress ---");
    for ((label, total, goal, percent, capped, unit), badge) in rows.into_iter().zip(progress.badges) {
        println!(
            "{:<8} {} {:>6.1} / {:<6.0} {:<4} {:>5.1}%  {}",
            label,
            progress_bar(capped, BAR_WIDTH),
            total,
            goal,
            unit,
            percent,
            badge_label(badge)
        );
    }
    println!();
}

/// Display calories per day for a week.
pub fn display_weekly(week: &[(NaiveDate, f64)], goal: f64) {
    println!("--- Last 7 days ---");
    let scale = week
        .iter()
        .map(|(_, kcal)| *kcal)
        .fold(goal.max(1.0), f64::max);
    for (day, kcal) in week {
        let capped = 100.0 * kcal / scale;
        println!("{} {} {:>5.0}", day.format("%a %m-%d"), progress_bar(capped, BAR_WIDTH), kcal);
    }
    println!();
}

pub fn display_calorie_recommendation(reco: &CalorieRecommendation) {
    match reco.estimate {
        Some(estimate) => {
            println!("Recommended: {:.0} kcal/day", estimate.recommended);
            println!("{}", reco.rationale);
        }
        None => println!("{}", reco.rationale),
    }
}

pub fn display_macro_split(split: &MacroSplit) {
    println!(
        "{:.0} kcal -> Protein {:.0} g, Carbs {:.0} g, Fat {:.0} g ({})",
        split.calories,
        split.protein,
        split.carbs,
        split.fat,
        split.method.as_str()
    );
}

/// Display suggested plans, numbered from 1.
pub fn display_plans(plans: &[SuggestionPlan], prefs: &DietaryPreferences) {
    let flags = prefs.active_flags();
    if !flags.is_empty() {
        println!("Preferences: {}", flags.join(", "));
    }

    for (i, plan) in plans.iter().enumerate() {
        println!();
        println!("{}. {}", i + 1, plan.title);
        for item in &plan.items {
            println!(
                "     {:<24} {:>4.0} g - {:>4.0} kcal | P {:.1} C {:.1} F {:.1}",
                item.name,
                item.grams,
                item.totals.kcal,
                item.totals.protein,
                item.totals.carbs,
                item.totals.fat
            );
        }
        println!(
            "     {:<24}        {:>4.0} kcal | P {:.1} C {:.1} F {:.1}",
            "Total", plan.totals.kcal, plan.totals.protein, plan.totals.carbs, plan.totals.fat
        );
    }
    println!();
}

pub fn display_log_outcome(outcome: &LogPlanOutcome) {
    println!("Logged {} of {} items.", outcome.created, outcome.seen);
    for error in &outcome.errors {
        println!("  skipped: {}", error);
    }
}

/// Display food database results, numbered from 1.
pub fn display_search_results(results: &[FoodRecord]) {
    if results.is_empty() {
        println!("No results.");
        return;
    }

    for (i, r) in results.iter().enumerate() {
        let brand = if r.brand.is_empty() {
            String::new()
        } else {
            format!(" ({})", r.brand)
        };
        println!(
            "{:>3}. {}{} - per {} g: {:.1} kcal | P {:.1} C {:.1} F {:.1}",
            i + 1,
            r.name,
            brand,
            r.per,
            r.calories,
            r.protein,
            r.carbs,
            r.fat
        );
    }
}

pub fn display_favorites(favorites: &[FavoriteFood]) {
    if favorites.is_empty() {
        println!("Favorites: (none)");
        return;
    }
    println!("Favorites:");
    for fav in favorites {
        let grams = fav.default_grams.unwrap_or(100.0);
        println!("  {} ({:.0} g)", fav.name, grams);
    }
}

pub fn display_recent(recents: &[RecentFood]) {
    if recents.is_empty() {
        return;
    }
    println!("Recent:");
    for r in recents {
        println!(
            "  {} ({:.0} g) - {:.0} kcal/100 g",
            r.name, r.default_grams, r.per_100g.kcal
        );
    }
}
