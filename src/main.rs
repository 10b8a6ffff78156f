use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::debug;

use macro_coach_rs::cli::{Cli, Command, parse_day};
use macro_coach_rs::error::{CoachError, Result};
use macro_coach_rs::food_db::{FoodDbConfig, OpenFoodFactsClient, search_or_empty};
use macro_coach_rs::interface::{
    display_calorie_recommendation, display_day_summary, display_favorites, display_log_outcome,
    display_macro_split, display_plans, display_recent, display_search_results, display_weekly,
    prompt_food_record, prompt_goals, prompt_meal, prompt_plan_choice, prompt_yes_no,
};
use macro_coach_rs::logging;
use macro_coach_rs::models::DietaryPreferences;
use macro_coach_rs::planner::{catalog, recommend_calorie_target, suggest_plans};
use macro_coach_rs::state::{
    ExportFilter, JournalManager, MealEdit, PlanLogItem, export_csv, load_journal, save_journal,
};

/// Number of recent foods shown in the summary.
const RECENT_LIMIT: usize = 8;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let today = Local::now().date_naive();
    let path = cli.file.as_path();
    debug!(path = %path.display(), %today, "starting");

    match cli.command.unwrap_or_default() {
        Command::Summary { date } => cmd_summary(path, parse_day(date.as_deref(), today)?),
        Command::Add { date } => cmd_add(path, parse_day(date.as_deref(), today)?),
        Command::Edit {
            id,
            name,
            date,
            meal_type,
            grams,
            kcal,
            protein,
            carbs,
            fat,
        } => {
            let date = match date {
                Some(d) => Some(parse_day(Some(d.as_str()), today)?),
                None => None,
            };
            let edit = MealEdit {
                name,
                date,
                meal_type,
                grams,
                kcal,
                protein,
                carbs,
                fat,
            };
            cmd_edit(path, id, edit)
        }
        Command::Delete { id } => cmd_delete(path, id),
        Command::Goals => cmd_goals(path),
        Command::ApplyCalories => cmd_apply_calories(path),
        Command::ApplyMacros { use_reco } => cmd_apply_macros(path, use_reco),
        Command::Suggest { date, message, log } => {
            cmd_suggest(path, parse_day(date.as_deref(), today)?, &message, log)
        }
        Command::Search {
            query,
            limit,
            log,
            date,
        } => {
            let log_on = if log {
                Some(parse_day(date.as_deref(), today)?)
            } else {
                None
            };
            cmd_search(path, cli.food_db_url, &query, limit, log_on)
        }
        Command::Favorite { meal_id } => cmd_favorite(path, meal_id),
        Command::QuickAdd { name, grams, date } => {
            cmd_quick_add(path, &name, grams, parse_day(date.as_deref(), today)?)
        }
        Command::CopyYesterday { to } => cmd_copy_yesterday(path, parse_day(to.as_deref(), today)?),
        Command::Export {
            date,
            start,
            end,
            out,
        } => {
            let filter = match (date, start, end) {
                (Some(d), _, _) => ExportFilter::Day(parse_day(Some(d.as_str()), today)?),
                (None, Some(s), Some(e)) => ExportFilter::Range(
                    parse_day(Some(s.as_str()), today)?,
                    parse_day(Some(e.as_str()), today)?,
                ),
                _ => ExportFilter::All,
            };
            cmd_export(path, filter, out)
        }
    }
}

fn open(path: &Path) -> Result<JournalManager> {
    Ok(JournalManager::new(load_journal(path)?))
}

fn save(path: &Path, manager: &JournalManager) -> Result<()> {
    save_journal(path, manager.journal())
}

/// Show a day's meals, progress, weekly chart and shortcuts.
fn cmd_summary(path: &Path, date: NaiveDate) -> Result<()> {
    let manager = open(path)?;
    let profile = manager.profile();

    display_day_summary(date, &manager.meals_on(date), &manager.progress_for(date), profile);
    display_weekly(&manager.weekly_calories(date), profile.calories);
    display_calorie_recommendation(&recommend_calorie_target(profile));
    println!();
    display_favorites(manager.favorites());
    display_recent(&manager.recent_foods(RECENT_LIMIT));

    Ok(())
}

fn cmd_add(path: &Path, date: NaiveDate) -> Result<()> {
    let mut manager = open(path)?;

    let Some(new_meal) = prompt_meal(catalog(), date)? else {
        println!("Nothing logged.");
        return Ok(());
    };

    let id = manager.add_meal(new_meal);
    save(path, &manager)?;

    if let Some(meal) = manager.get_meal(id) {
        println!(
            "Logged #{} {}: {:.0} kcal (P {:.1} C {:.1} F {:.1})",
            meal.id, meal.name, meal.totals.kcal, meal.totals.protein, meal.totals.carbs, meal.totals.fat
        );
    }
    Ok(())
}

fn cmd_edit(path: &Path, id: u64, edit: MealEdit) -> Result<()> {
    if edit.is_empty() {
        println!("Nothing to change.");
        return Ok(());
    }

    let mut manager = open(path)?;
    let meal = manager.update_meal(id, edit)?;
    println!(
        "Updated #{} {} on {}: {:.0} kcal (P {:.1} C {:.1} F {:.1})",
        meal.id, meal.name, meal.date, meal.totals.kcal, meal.totals.protein, meal.totals.carbs, meal.totals.fat
    );
    save(path, &manager)
}

fn cmd_delete(path: &Path, id: u64) -> Result<()> {
    let mut manager = open(path)?;
    let Some(meal) = manager.get_meal(id) else {
        return Err(CoachError::MealNotFound(id));
    };
    if !prompt_yes_no(&format!("Delete #{} {}?", meal.id, meal.name), false)? {
        println!("Kept.");
        return Ok(());
    }

    let meal = manager.delete_meal(id)?;
    save(path, &manager)?;
    println!("Deleted #{} {}.", meal.id, meal.name);
    Ok(())
}

fn cmd_goals(path: &Path) -> Result<()> {
    let mut manager = open(path)?;
    let profile = prompt_goals(manager.profile())?;
    manager.update_profile(profile);
    save(path, &manager)?;

    println!("Goals updated.");
    display_calorie_recommendation(&recommend_calorie_target(manager.profile()));
    Ok(())
}

fn cmd_apply_calories(path: &Path) -> Result<()> {
    let mut manager = open(path)?;
    let reco = recommend_calorie_target(manager.profile());

    match manager.apply_calorie_recommendation() {
        Some(calories) => {
            save(path, &manager)?;
            println!("Calorie goal set to {:.0} kcal.", calories);
            println!("{}", reco.rationale);
        }
        None => println!("{}", reco.rationale),
    }
    Ok(())
}

fn cmd_apply_macros(path: &Path, use_reco: bool) -> Result<()> {
    let mut manager = open(path)?;
    let split = manager.apply_macro_recommendation(use_reco);
    save(path, &manager)?;

    print!("Macros updated: ");
    display_macro_split(&split);
    Ok(())
}

/// Suggest plans for the rest of the day, optionally logging one.
fn cmd_suggest(path: &Path, date: NaiveDate, message: &str, log: bool) -> Result<()> {
    let mut manager = open(path)?;
    let need = manager.need_for(date);
    let prefs = DietaryPreferences::from_message(message);

    println!(
        "Remaining for {}: {:.0} kcal | P {:.1} C {:.1} F {:.1}",
        date, need.kcal, need.protein, need.carbs, need.fat
    );

    let plans = suggest_plans(&need, &prefs);
    display_plans(&plans, &prefs);

    if !log {
        return Ok(());
    }

    let Some(choice) = prompt_plan_choice(&plans)? else {
        println!("Nothing logged.");
        return Ok(());
    };

    let items: Vec<PlanLogItem> = plans[choice]
        .items
        .iter()
        .map(|item| PlanLogItem {
            name: item.name.clone(),
            grams: item.grams,
            totals: item.totals,
        })
        .collect();

    let outcome = manager.log_plan(date, &items);
    if outcome.created > 0 {
        save(path, &manager)?;
    }
    display_log_outcome(&outcome);
    Ok(())
}

/// Search the food database, optionally logging one result on `log_on`.
fn cmd_search(
    path: &Path,
    base_url: Option<String>,
    query: &str,
    limit: usize,
    log_on: Option<NaiveDate>,
) -> Result<()> {
    let mut config = FoodDbConfig::default();
    if let Some(url) = base_url {
        config.base_url = url;
    }

    let client = OpenFoodFactsClient::new(config)?;
    let records = search_or_empty(&client, query, limit);
    display_search_results(&records);

    let Some(date) = log_on else {
        return Ok(());
    };
    if records.is_empty() {
        return Ok(());
    }
    let Some((choice, grams)) = prompt_food_record(&records)? else {
        println!("Nothing logged.");
        return Ok(());
    };

    let mut manager = open(path)?;
    let id = manager.log_food_record(&records[choice], grams, date)?;
    save(path, &manager)?;

    if let Some(meal) = manager.get_meal(id) {
        println!(
            "Logged #{} {} ({:.0} g): {:.0} kcal",
            meal.id, meal.name, grams, meal.totals.kcal
        );
    }
    Ok(())
}

fn cmd_favorite(path: &Path, meal_id: u64) -> Result<()> {
    let mut manager = open(path)?;
    let created = manager.favorite_from_meal(meal_id)?;
    save(path, &manager)?;

    if created {
        println!("Added to favorites.");
    } else {
        println!("Favorite updated.");
    }
    Ok(())
}

fn cmd_quick_add(path: &Path, name: &str, grams: Option<f64>, date: NaiveDate) -> Result<()> {
    let mut manager = open(path)?;
    let id = manager.quick_add_favorite(name, grams, date)?;
    save(path, &manager)?;

    if let Some(meal) = manager.get_meal(id) {
        println!(
            "Logged #{} {} ({:.0} g): {:.0} kcal",
            meal.id,
            meal.name,
            meal.grams.unwrap_or_default(),
            meal.totals.kcal
        );
    }
    Ok(())
}

fn cmd_copy_yesterday(path: &Path, target: NaiveDate) -> Result<()> {
    let mut manager = open(path)?;
    let count = manager.copy_day(target);

    if count == 0 {
        println!("Nothing to copy from the previous day.");
        return Ok(());
    }

    save(path, &manager)?;
    println!("Copied {} meal(s) to {}.", count, target);
    Ok(())
}

fn cmd_export(path: &Path, filter: ExportFilter, out: Option<PathBuf>) -> Result<()> {
    let manager = open(path)?;
    let out = out.unwrap_or_else(|| PathBuf::from(filter.filename()));
    let rows = export_csv(&manager, filter, &out)?;
    println!("Wrote {} meal(s) to {}.", rows, out.display());
    Ok(())
}
