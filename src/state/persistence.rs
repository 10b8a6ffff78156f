use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{FavoriteFood, LoggedMeal, NutritionProfile};

/// The persisted journal document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default)]
    pub profile: NutritionProfile,

    #[serde(default)]
    pub meals: Vec<LoggedMeal>,

    #[serde(default)]
    pub favorites: Vec<FavoriteFood>,

    /// Id to hand out to the next logged meal.
    #[serde(default)]
    pub next_id: u64,
}

/// Load the journal from a JSON file.
///
/// A missing file yields a fresh journal with the default profile.
/// Favorites are deduplicated by lowercase name (last occurrence wins).
pub fn load_journal<P: AsRef<Path>>(path: P) -> Result<Journal> {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "journal not found, starting a new one");
        return Ok(Journal::default());
    }

    let content = fs::read_to_string(path)?;
    let mut journal: Journal = serde_json::from_str(&content)?;

    journal.favorites = dedup_favorites(std::mem::take(&mut journal.favorites));

    // Repair an id counter that lags behind the stored meals.
    let max_id = journal.meals.iter().map(|m| m.id).max().unwrap_or(0);
    if journal.next_id <= max_id {
        journal.next_id = max_id + 1;
    }

    debug!(
        meals = journal.meals.len(),
        favorites = journal.favorites.len(),
        "journal loaded"
    );
    Ok(journal)
}

/// Save the journal to a JSON file.
pub fn save_journal<P: AsRef<Path>>(path: P, journal: &Journal) -> Result<()> {
    let json = serde_json::to_string_pretty(journal)?;
    fs::write(path.as_ref(), json)?;
    debug!(path = %path.as_ref().display(), "journal saved");
    Ok(())
}

fn dedup_favorites(favorites: Vec<FavoriteFood>) -> Vec<FavoriteFood> {
    let mut order: Vec<String> = Vec::new();
    let mut seen: HashMap<String, FavoriteFood> = HashMap::new();
    for fav in favorites {
        let key = fav.key();
        if !seen.contains_key(&key) {
            order.push(key.clone());
        }
        seen.insert(key, fav);
    }
    order
        .into_iter()
        .filter_map(|key| seen.remove(&key))
        .collect()
}
