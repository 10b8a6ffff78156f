pub mod export;
mod manager;
mod persistence;

pub use export::{ExportFilter, export_csv, write_meals_csv};
pub use manager::{
    FOOD_DB_SOURCE, JournalManager, LogPlanOutcome, MealEdit, NewMeal, PlanLogItem, RecentFood,
};
pub use persistence::{Journal, load_journal, save_journal};
