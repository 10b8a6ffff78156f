use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{CoachError, Result};
use crate::food_db::FoodRecord;
use crate::models::{
    ActivityLevel, FoodItem, MacroQuad, MealType, NutritionProfile, Objective, Sex, SuggestionPlan,
};
use crate::planner::constants::DEFAULT_PORTION_G;
use crate::state::NewMeal;

/// Minimum similarity for a fuzzy food-name match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Parse a non-negative number typed by the user.
pub fn parse_amount(input: &str, field: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| CoachError::InvalidInput(format!("{}: invalid number", field)))?;
    if !value.is_finite() || value < 0.0 {
        return Err(CoachError::InvalidInput(format!(
            "{}: must be a non-negative number",
            field
        )));
    }
    Ok(value)
}

/// Parse an optional number; blank input means unset.
fn parse_optional(input: &str, field: &str) -> Result<Option<f64>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_amount(input, field).map(|v| Some(v).filter(|v| *v > 0.0))
}

/// Catalog foods whose names resemble `input`, best match first.
pub fn fuzzy_candidates<'a>(catalog: &'a [FoodItem], input: &str) -> Vec<&'a FoodItem> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(&FoodItem, f64)> = catalog
        .iter()
        .map(|f| (f, jaro_winkler(&f.key(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(f, _)| f).collect()
}

fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(format!("{}", default))
        .interact_text()?;
    parse_amount(&input, prompt)
}

fn prompt_optional_number(prompt: &str, current: Option<f64>) -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt(format!("{} (blank to leave unset)", prompt))
        .default(current.map(|v| v.to_string()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    parse_optional(&input, prompt)
}

/// Resolve a typed name against the catalog, asking when the match is fuzzy.
fn resolve_catalog_food<'a>(catalog: &'a [FoodItem], input: &str) -> Result<Option<&'a FoodItem>> {
    let key = input.trim().to_lowercase();
    if let Some(food) = catalog.iter().find(|f| f.key() == key) {
        return Ok(Some(food));
    }

    let candidates = fuzzy_candidates(catalog, input);
    match candidates.len() {
        0 => Ok(None),
        1 => {
            let food = candidates[0];
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;
            Ok(confirm.then_some(food))
        }
        _ => {
            let mut options: Vec<String> =
                candidates.iter().take(5).map(|f| f.name.clone()).collect();
            let shown = options.len();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok((selection < shown).then(|| candidates[selection]))
        }
    }
}

/// Interactively describe a meal. Returns `None` when the user enters no name.
pub fn prompt_meal(catalog: &[FoodItem], date: NaiveDate) -> Result<Option<NewMeal>> {
    let input: String = Input::new()
        .with_prompt("Food name (or press Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let meal_types: Vec<String> = MealType::ALL.iter().map(|m| m.to_string()).collect();
    let default_type = MealType::ALL
        .iter()
        .position(|m| *m == MealType::default())
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Meal")
        .items(&meal_types)
        .default(default_type)
        .interact()?;
    let meal_type = MealType::ALL[selection];

    if let Some(food) = resolve_catalog_food(catalog, input)? {
        let grams = prompt_number("Grams", DEFAULT_PORTION_G)?;
        println!("Using catalog values for {}", food.name);
        return Ok(Some(NewMeal {
            name: food.name.clone(),
            date,
            meal_type,
            grams: Some(grams),
            per_100g: Some(food.per_100g),
            ..Default::default()
        }));
    }

    println!("'{}' is not in the catalog; enter its totals.", input);
    let kcal = prompt_number("Calories", 0.0)?;
    let protein = prompt_number("Protein (g)", 0.0)?;
    let carbs = prompt_number("Carbs (g)", 0.0)?;
    let fat = prompt_number("Fat (g)", 0.0)?;
    let grams = prompt_optional_number("Portion grams", None)?;

    Ok(Some(NewMeal {
        name: input.to_string(),
        date,
        meal_type,
        totals: MacroQuad::new(kcal.round(), protein, carbs, fat),
        grams,
        ..Default::default()
    }))
}

/// Interactively edit goals and body data.
pub fn prompt_goals(current: &NutritionProfile) -> Result<NutritionProfile> {
    let mut profile = current.clone();

    profile.calories = prompt_number("Daily calories", current.calories)?;
    profile.protein = prompt_number("Protein (g)", current.protein)?;
    profile.carbs = prompt_number("Carbs (g)", current.carbs)?;
    profile.fat = prompt_number("Fat (g)", current.fat)?;

    let objectives = [Objective::Lose, Objective::Maintain, Objective::Gain];
    let labels: Vec<String> = objectives.iter().map(|o| o.to_string()).collect();
    let selection = Select::new()
        .with_prompt("Objective")
        .items(&labels)
        .default(objectives.iter().position(|o| *o == current.objective).unwrap_or(1))
        .interact()?;
    profile.objective = objectives[selection];

    profile.weekly_rate_kg = prompt_number("Weekly rate (kg/week)", current.weekly_rate_kg)?;

    let sexes = ["Unset", "M", "F"];
    let current_sex = match current.sex {
        None => 0,
        Some(Sex::Male) => 1,
        Some(Sex::Female) => 2,
    };
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&sexes)
        .default(current_sex)
        .interact()?;
    profile.sex = Sex::from_code(sexes[selection]);

    profile.age = prompt_optional_number("Age", current.age.map(f64::from))?
        .map(|a| a.round() as u32);
    profile.height_cm = prompt_optional_number("Height (cm)", current.height_cm)?;
    profile.weight_kg = prompt_optional_number("Weight (kg)", current.weight_kg)?;

    let labels: Vec<String> = ActivityLevel::ALL.iter().map(|a| a.to_string()).collect();
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(
            ActivityLevel::ALL
                .iter()
                .position(|a| Some(*a) == current.activity)
                .unwrap_or(2),
        )
        .interact()?;
    profile.activity = Some(ActivityLevel::ALL[selection]);

    Ok(profile)
}

/// Ask which suggested plan to log. `None` means log nothing.
pub fn prompt_plan_choice(plans: &[SuggestionPlan]) -> Result<Option<usize>> {
    let mut options: Vec<String> = plans
        .iter()
        .map(|p| format!("{} ({:.0} kcal)", p.title, p.totals.kcal))
        .collect();
    options.push("None".to_string());

    let selection = Select::new()
        .with_prompt("Log which plan?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < plans.len()).then_some(selection))
}

/// Ask which search result to log and how much of it.
///
/// Returns the chosen index and grams, or `None` to log nothing.
pub fn prompt_food_record(records: &[FoodRecord]) -> Result<Option<(usize, f64)>> {
    let mut options: Vec<String> = records
        .iter()
        .map(|r| format!("{} ({:.0} kcal/100 g)", r.name, r.calories))
        .collect();
    options.push("None".to_string());

    let selection = Select::new()
        .with_prompt("Log which food?")
        .items(&options)
        .default(0)
        .interact()?;
    if selection >= records.len() {
        return Ok(None);
    }

    let grams = prompt_number("Grams", DEFAULT_PORTION_G)?;
    Ok(Some((selection, grams)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
