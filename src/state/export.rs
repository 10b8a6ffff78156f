use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::error::Result;
use crate::models::LoggedMeal;
use crate::state::manager::JournalManager;

/// Which meals go into an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFilter {
    All,
    Day(NaiveDate),
    Range(NaiveDate, NaiveDate),
}

impl ExportFilter {
    /// Default file name for this selection.
    pub fn filename(&self) -> String {
        match self {
            ExportFilter::All => "meals.csv".to_string(),
            ExportFilter::Day(d) => format!("meals_{}.csv", d),
            ExportFilter::Range(s, e) => format!("meals_{}_to_{}.csv", s, e),
        }
    }

    /// Selected meals, ordered by date then id.
    pub fn select<'a>(&self, manager: &'a JournalManager) -> Vec<&'a LoggedMeal> {
        match *self {
            ExportFilter::All => manager.all_meals(),
            ExportFilter::Day(d) => manager.meals_between(d, d),
            ExportFilter::Range(s, e) => manager.meals_between(s, e),
        }
    }
}

/// Write meals as CSV to any writer.
pub fn write_meals_csv<W: Write>(meals: &[&LoggedMeal], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["Date", "Name", "Calories", "Protein", "Carbs", "Fat"])?;

    for meal in meals {
        wtr.write_record([
            meal.date.to_string(),
            meal.name.clone(),
            format!("{:.0}", meal.totals.kcal),
            format!("{:.1}", meal.totals.protein),
            format!("{:.1}", meal.totals.carbs),
            format!("{:.1}", meal.totals.fat),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export the selected meals to a CSV file. Returns the number of rows.
pub fn export_csv(manager: &JournalManager, filter: ExportFilter, path: &Path) -> Result<usize> {
    let meals = filter.select(manager);
    let file = std::fs::File::create(path)?;
    write_meals_csv(&meals, file)?;
    info!(path = %path.display(), rows = meals.len(), "exported meals");
    Ok(meals.len())
}
