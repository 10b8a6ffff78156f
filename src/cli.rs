use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::error::{CoachError, Result};
use crate::models::MealType;

/// MacroCoach: a calorie journal with target recommendations and meal suggestions.
#[derive(Parser, Debug)]
#[command(name = "macro_coach")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the journal JSON file.
    #[arg(short, long, env = "MACRO_COACH_JOURNAL", default_value = "journal.json")]
    pub file: PathBuf,

    /// Food database search endpoint.
    #[arg(long, env = "MACRO_COACH_FOOD_DB_URL")]
    pub food_db_url: Option<String>,

    /// Log debug output to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a day's meals, progress and the last 7 days.
    Summary {
        /// Day to show (YYYY-MM-DD, default today).
        #[arg(long)]
        date: Option<String>,
    },

    /// Log a meal interactively.
    Add {
        #[arg(long)]
        date: Option<String>,
    },

    /// Change a logged meal. Totals are rescaled when grams change.
    Edit {
        /// Meal id, as shown by `summary`.
        id: u64,

        #[arg(long)]
        name: Option<String>,

        /// Move the meal to another day (YYYY-MM-DD).
        #[arg(long)]
        date: Option<String>,

        /// Breakfast, lunch, dinner or snack.
        #[arg(long)]
        meal_type: Option<MealType>,

        #[arg(long)]
        grams: Option<f64>,

        #[arg(long)]
        kcal: Option<f64>,

        #[arg(long)]
        protein: Option<f64>,

        #[arg(long)]
        carbs: Option<f64>,

        #[arg(long)]
        fat: Option<f64>,
    },

    /// Delete a logged meal.
    Delete {
        /// Meal id, as shown by `summary`.
        id: u64,
    },

    /// Edit goals and body data interactively.
    Goals,

    /// Set the calorie goal to the recommended target.
    ApplyCalories,

    /// Set protein, carbs and fat to a recommended split.
    ApplyMacros {
        /// Use the recommended calorie target instead of the current goal.
        #[arg(long)]
        use_reco: bool,
    },

    /// Suggest meals for what is left of the day.
    Suggest {
        #[arg(long)]
        date: Option<String>,

        /// Free-text preferences, e.g. "vegan, no nuts".
        #[arg(short, long, default_value = "")]
        message: String,

        /// Pick a plan and log it.
        #[arg(long)]
        log: bool,
    },

    /// Search the food database.
    Search {
        query: String,

        #[arg(long, default_value = "10")]
        limit: usize,

        /// Pick a result and log it.
        #[arg(long)]
        log: bool,

        /// Day to log the result on (default today).
        #[arg(long, requires = "log")]
        date: Option<String>,
    },

    /// Save a logged meal as a favorite.
    Favorite {
        /// Meal id, as shown by `summary`.
        meal_id: u64,
    },

    /// Log a favorite.
    QuickAdd {
        name: String,

        /// Portion in grams (default: the favorite's usual portion).
        #[arg(long)]
        grams: Option<f64>,

        #[arg(long)]
        date: Option<String>,
    },

    /// Copy the previous day's meals.
    CopyYesterday {
        /// Target day (default today).
        #[arg(long)]
        to: Option<String>,
    },

    /// Export meals as CSV.
    Export {
        /// Export a single day.
        #[arg(long, conflicts_with_all = ["start", "end"])]
        date: Option<String>,

        /// First day of a range.
        #[arg(long, requires = "end")]
        start: Option<String>,

        /// Last day of a range.
        #[arg(long, requires = "start")]
        end: Option<String>,

        /// Output file (default derived from the selection).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Summary { date: None }
    }
}

/// Parse an optional `YYYY-MM-DD` argument, falling back to `today`.
pub fn parse_day(value: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(today),
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map_err(|_| CoachError::InvalidInput(format!("invalid date '{}', expected YYYY-MM-DD", v))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_summary() {
        let cli = Cli::try_parse_from(["macro_coach", "--file", "j.json"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(
            cli.command.unwrap_or_default(),
            Command::Summary { date: None }
        ));
    }

    #[test]
    fn test_parse_day() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert_eq!(parse_day(None, today).unwrap(), today);
        assert_eq!(parse_day(Some(""), today).unwrap(), today);
        assert_eq!(
            parse_day(Some("2026-02-28"), today).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
        assert!(matches!(
            parse_day(Some("2026-02-30"), today),
            Err(CoachError::InvalidInput(_))
        ));
        assert!(parse_day(Some("03/01/2026"), today).is_err());
    }

    #[test]
    fn test_export_range_requires_both_ends() {
        assert!(Cli::try_parse_from(["macro_coach", "export", "--start", "2026-03-01"]).is_err());
        assert!(
            Cli::try_parse_from([
                "macro_coach",
                "export",
                "--start",
                "2026-03-01",
                "--end",
                "2026-03-07"
            ])
            .is_ok()
        );
    }

    #[test]
    fn test_edit_parses_meal_type() {
        let cli = Cli::try_parse_from([
            "macro_coach",
            "edit",
            "7",
            "--grams",
            "80",
            "--meal-type",
            "dinner",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Edit {
                id,
                grams,
                meal_type,
                ..
            }) => {
                assert_eq!(id, 7);
                assert_eq!(grams, Some(80.0));
                assert_eq!(meal_type, Some(MealType::Dinner));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(Cli::try_parse_from(["macro_coach", "edit", "7", "--meal-type", "brunch"]).is_err());
    }

    #[test]
    fn test_search_date_requires_log() {
        assert!(Cli::try_parse_from(["macro_coach", "search", "skyr", "--date", "2026-03-01"]).is_err());
        assert!(
            Cli::try_parse_from(["macro_coach", "search", "skyr", "--log", "--date", "2026-03-01"])
                .is_ok()
        );
    }
}
