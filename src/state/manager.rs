use std::collections::HashSet;

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{CoachError, Result};
use crate::food_db::FoodRecord;
use crate::models::meal::per_100g_from_totals;
use crate::models::{
    FavoriteFood, LoggedMeal, MacroNeed, MacroQuad, MealType, NutritionProfile,
};
use crate::planner::calculations::sum_totals;
use crate::planner::constants::{DEFAULT_CALORIES, DEFAULT_PORTION_G};
use crate::planner::progress::DayProgress;
use crate::planner::suggestions::food_lookup;
use crate::planner::targets::{MacroSplit, recommend_calorie_target, recommend_macros};
use crate::state::persistence::Journal;

/// Meals scanned when building the recent-foods list.
const RECENT_SCAN_LIMIT: usize = 100;

/// `source` recorded on meals logged from the food database.
pub const FOOD_DB_SOURCE: &str = "OFF";

/// A meal to be logged.
///
/// When `grams` and `per_100g` are both given, `totals` is recomputed from
/// them. When only `grams` is given, per-100g values are derived from
/// `totals` so the entry can be rescaled later.
#[derive(Debug, Clone, Default)]
pub struct NewMeal {
    pub name: String,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub totals: MacroQuad,
    pub grams: Option<f64>,
    pub per_100g: Option<MacroQuad>,
    pub source: String,
    pub source_id: String,
}

/// Changes to a logged meal. `None` keeps the current value.
///
/// Macro fields overwrite the stored totals; they are then recomputed from
/// per-100g values when the meal has them.
#[derive(Debug, Clone, Default)]
pub struct MealEdit {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub meal_type: Option<MealType>,
    pub grams: Option<f64>,
    pub kcal: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

impl MealEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.meal_type.is_none()
            && self.grams.is_none()
            && self.kcal.is_none()
            && self.protein.is_none()
            && self.carbs.is_none()
            && self.fat.is_none()
    }
}

/// A food from a suggested plan, as sent back for logging.
///
/// `totals` are the client's numbers and are only used for foods missing
/// from the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanLogItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub grams: f64,
    #[serde(flatten)]
    pub totals: MacroQuad,
}

/// Result of logging a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogPlanOutcome {
    pub created: usize,
    pub seen: usize,
    pub errors: Vec<String>,
}

/// A recently logged food, ready to be logged again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentFood {
    pub name: String,
    pub default_grams: f64,
    pub per_100g: MacroQuad,
}

/// Owns the journal and implements every operation on it.
pub struct JournalManager {
    journal: Journal,
}

impl JournalManager {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn profile(&self) -> &NutritionProfile {
        &self.journal.profile
    }

    pub fn update_profile(&mut self, profile: NutritionProfile) {
        self.journal.profile = profile;
        info!("profile updated");
    }

    fn next_id(&mut self) -> u64 {
        let id = self.journal.next_id.max(1);
        self.journal.next_id = id + 1;
        id
    }

    /// Log a meal and return its id.
    pub fn add_meal(&mut self, new: NewMeal) -> u64 {
        let id = self.next_id();

        let mut per_100g = new.per_100g;
        if per_100g.is_none() {
            if let Some(grams) = new.grams.filter(|g| *g > 0.0) {
                per_100g = Some(per_100g_from_totals(&new.totals, grams, 1));
            }
        }

        let mut meal = LoggedMeal {
            id,
            name: new.name.trim().to_string(),
            date: new.date,
            meal_type: new.meal_type,
            totals: new.totals,
            grams: new.grams,
            per_100g,
            source: new.source,
            source_id: new.source_id,
        };
        meal.recalc_totals();

        debug!(id, name = %meal.name, kcal = meal.totals.kcal, "meal logged");
        self.journal.meals.push(meal);
        id
    }

    pub fn get_meal(&self, id: u64) -> Option<&LoggedMeal> {
        self.journal.meals.iter().find(|m| m.id == id)
    }

    pub fn delete_meal(&mut self, id: u64) -> Result<LoggedMeal> {
        let idx = self
            .journal
            .meals
            .iter()
            .position(|m| m.id == id)
            .ok_or(CoachError::MealNotFound(id))?;
        let meal = self.journal.meals.remove(idx);
        info!(id, name = %meal.name, "meal deleted");
        Ok(meal)
    }

    /// Apply an edit to a logged meal and rescale its totals.
    pub fn update_meal(&mut self, id: u64, edit: MealEdit) -> Result<&LoggedMeal> {
        let name = match edit.name.as_deref().map(str::trim) {
            Some("") => return Err(CoachError::InvalidInput("name must not be empty".to_string())),
            other => other.map(str::to_string),
        };
        for (field, value) in [
            ("grams", edit.grams),
            ("calories", edit.kcal),
            ("protein", edit.protein),
            ("carbs", edit.carbs),
            ("fat", edit.fat),
        ] {
            if value.is_some_and(|v| !v.is_finite() || v < 0.0) {
                return Err(CoachError::InvalidInput(format!(
                    "{}: must be a non-negative number",
                    field
                )));
            }
        }

        let meal = self
            .journal
            .meals
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(CoachError::MealNotFound(id))?;

        if let Some(name) = name {
            meal.name = name;
        }
        if let Some(date) = edit.date {
            meal.date = date;
        }
        if let Some(meal_type) = edit.meal_type {
            meal.meal_type = meal_type;
        }
        if let Some(grams) = edit.grams {
            meal.grams = Some(grams);
        }
        let totals = &mut meal.totals;
        totals.kcal = edit.kcal.unwrap_or(totals.kcal);
        totals.protein = edit.protein.unwrap_or(totals.protein);
        totals.carbs = edit.carbs.unwrap_or(totals.carbs);
        totals.fat = edit.fat.unwrap_or(totals.fat);
        meal.recalc_totals();

        info!(id, name = %meal.name, kcal = meal.totals.kcal, "meal updated");
        Ok(&*meal)
    }

    /// Meals on a day, newest first.
    pub fn meals_on(&self, date: NaiveDate) -> Vec<&LoggedMeal> {
        let mut meals: Vec<&LoggedMeal> =
            self.journal.meals.iter().filter(|m| m.date == date).collect();
        meals.sort_by(|a, b| b.id.cmp(&a.id));
        meals
    }

    /// Meals in an inclusive date range, ordered by date then id.
    pub fn meals_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&LoggedMeal> {
        let mut meals: Vec<&LoggedMeal> = self
            .journal
            .meals
            .iter()
            .filter(|m| m.date >= start && m.date <= end)
            .collect();
        meals.sort_by_key(|m| (m.date, m.id));
        meals
    }

    /// Every meal, ordered by date then id.
    pub fn all_meals(&self) -> Vec<&LoggedMeal> {
        let mut meals: Vec<&LoggedMeal> = self.journal.meals.iter().collect();
        meals.sort_by_key(|m| (m.date, m.id));
        meals
    }

    pub fn daily_totals(&self, date: NaiveDate) -> MacroQuad {
        sum_totals(
            self.journal
                .meals
                .iter()
                .filter(|m| m.date == date)
                .map(|m| &m.totals),
        )
    }

    /// What is left of the profile targets for a day.
    pub fn need_for(&self, date: NaiveDate) -> MacroNeed {
        let p = &self.journal.profile;
        let targets = MacroQuad::new(p.calories, p.protein, p.carbs, p.fat);
        targets.saturating_sub(&self.daily_totals(date))
    }

    pub fn progress_for(&self, date: NaiveDate) -> DayProgress {
        DayProgress::new(self.daily_totals(date), &self.journal.profile)
    }

    /// Calories per day for the seven days ending at `end`, oldest first.
    pub fn weekly_calories(&self, end: NaiveDate) -> Vec<(NaiveDate, f64)> {
        (0..7u64)
            .rev()
            .filter_map(|offset| end.checked_sub_days(Days::new(offset)))
            .map(|day| (day, self.daily_totals(day).kcal))
            .collect()
    }

    /// Distinct recently logged foods, newest first.
    pub fn recent_foods(&self, limit: usize) -> Vec<RecentFood> {
        let mut meals: Vec<&LoggedMeal> = self.journal.meals.iter().collect();
        meals.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        let mut seen = HashSet::new();
        let mut recents = Vec::new();
        for meal in meals.into_iter().take(RECENT_SCAN_LIMIT) {
            let key = meal.key();
            if key.is_empty() || !seen.insert(key) {
                continue;
            }
            recents.push(RecentFood {
                name: meal.name.clone(),
                default_grams: meal.grams.filter(|g| *g > 0.0).unwrap_or(DEFAULT_PORTION_G),
                per_100g: meal.per_100g_or_derived().unwrap_or_default(),
            });
            if recents.len() >= limit {
                break;
            }
        }
        recents
    }

    /// Copy every meal from the day before `target` onto `target`.
    ///
    /// Only names and totals are copied. Returns the number of meals copied.
    pub fn copy_day(&mut self, target: NaiveDate) -> usize {
        let Some(source) = target.pred_opt() else {
            return 0;
        };

        let clones: Vec<LoggedMeal> = self
            .journal
            .meals
            .iter()
            .filter(|m| m.date == source)
            .cloned()
            .collect();

        let count = clones.len();
        for meal in clones {
            let id = self.next_id();
            self.journal.meals.push(LoggedMeal {
                id,
                name: meal.name,
                date: target,
                meal_type: meal.meal_type,
                totals: meal.totals,
                grams: None,
                per_100g: None,
                source: String::new(),
                source_id: String::new(),
            });
        }

        info!(%source, %target, count, "copied meals");
        count
    }

    pub fn favorites(&self) -> &[FavoriteFood] {
        &self.journal.favorites
    }

    pub fn find_favorite(&self, name: &str) -> Option<&FavoriteFood> {
        let key = name.trim().to_lowercase();
        self.journal.favorites.iter().find(|f| f.key() == key)
    }

    /// Save a logged meal as a favorite, replacing one with the same name.
    ///
    /// Returns true when a new favorite was created.
    pub fn favorite_from_meal(&mut self, id: u64) -> Result<bool> {
        let meal = self.get_meal(id).ok_or(CoachError::MealNotFound(id))?;

        let favorite = FavoriteFood {
            name: meal.name.clone(),
            brand: String::new(),
            default_grams: Some(meal.grams.filter(|g| *g > 0.0).unwrap_or(DEFAULT_PORTION_G)),
            per_100g: meal.per_100g_or_derived(),
            source: meal.source.clone(),
            source_id: meal.source_id.clone(),
            created_at: Utc::now(),
        };

        let key = favorite.key();
        match self.journal.favorites.iter_mut().find(|f| f.key() == key) {
            Some(existing) => {
                let created_at = existing.created_at;
                *existing = FavoriteFood {
                    created_at,
                    ..favorite
                };
                Ok(false)
            }
            None => {
                self.journal.favorites.push(favorite);
                Ok(true)
            }
        }
    }

    /// Log a favorite for a day. Grams default to the favorite's default,
    /// then 100 g.
    pub fn quick_add_favorite(
        &mut self,
        name: &str,
        grams: Option<f64>,
        date: NaiveDate,
    ) -> Result<u64> {
        let fav = self
            .find_favorite(name)
            .ok_or_else(|| CoachError::FavoriteNotFound(name.to_string()))?
            .clone();

        let grams = grams
            .filter(|g| *g > 0.0)
            .or(fav.default_grams.filter(|g| *g > 0.0))
            .unwrap_or(DEFAULT_PORTION_G);

        Ok(self.add_meal(NewMeal {
            name: fav.name,
            date,
            grams: Some(grams),
            per_100g: fav.per_100g,
            source: fav.source,
            source_id: fav.source_id,
            ..Default::default()
        }))
    }

    /// Log a food database result. Totals are scaled from its per-100g values.
    pub fn log_food_record(&mut self, record: &FoodRecord, grams: f64, date: NaiveDate) -> Result<u64> {
        if !(grams > 0.0) {
            return Err(CoachError::InvalidInput(format!("{}: grams <= 0", record.name)));
        }

        Ok(self.add_meal(NewMeal {
            name: record.name.clone(),
            date,
            grams: Some(grams),
            per_100g: Some(record.per_100g()),
            source: FOOD_DB_SOURCE.to_string(),
            source_id: record.id.clone().unwrap_or_default(),
            ..Default::default()
        }))
    }

    /// Log the foods of a suggested plan.
    ///
    /// Catalog foods use the catalog's per-100g values; other foods fall back
    /// to the totals supplied with the item. Invalid items are skipped and
    /// reported in `errors`.
    pub fn log_plan(&mut self, date: NaiveDate, items: &[PlanLogItem]) -> LogPlanOutcome {
        let mut outcome = LogPlanOutcome::default();

        for item in items {
            outcome.seen += 1;
            let name = item.name.trim();

            if name.is_empty() {
                outcome.errors.push("Missing name".to_string());
                continue;
            }
            if !(item.grams > 0.0) {
                outcome.errors.push(format!("{}: grams <= 0", name));
                continue;
            }

            let per_100g = match food_lookup(name) {
                Some(food) => food.per_100g,
                None => {
                    if item.totals == MacroQuad::default() {
                        outcome
                            .errors
                            .push(format!("{}: not in library and no macros provided", name));
                        continue;
                    }
                    per_100g_from_totals(&item.totals, item.grams, 2)
                }
            };

            self.add_meal(NewMeal {
                name: name.to_string(),
                date,
                grams: Some(item.grams),
                per_100g: Some(per_100g),
                source: "coach".to_string(),
                source_id: "plan".to_string(),
                ..Default::default()
            });
            outcome.created += 1;
        }

        if !outcome.errors.is_empty() {
            warn!(errors = ?outcome.errors, "some plan items were skipped");
        }
        outcome
    }

    /// Store the recommended calorie target, if one can be computed.
    pub fn apply_calorie_recommendation(&mut self) -> Option<f64> {
        let recommended = recommend_calorie_target(&self.journal.profile).recommended()?;
        self.journal.profile.calories = recommended;
        info!(calories = recommended, "applied calorie recommendation");
        Some(recommended)
    }

    /// Store a recommended macro split.
    ///
    /// Uses the current calorie target, or the recommended one when
    /// `use_recommendation` is set and available (which is stored too).
    pub fn apply_macro_recommendation(&mut self, use_recommendation: bool) -> MacroSplit {
        let profile = &mut self.journal.profile;
        let mut calories = if profile.calories > 0.0 {
            profile.calories
        } else {
            DEFAULT_CALORIES
        };

        if use_recommendation {
            if let Some(recommended) = recommend_calorie_target(profile).recommended() {
                calories = recommended;
                profile.calories = recommended;
            }
        }

        let split = recommend_macros(profile, Some(calories));
        profile.protein = split.protein;
        profile.carbs = split.carbs;
        profile.fat = split.fat;
        info!(
            calories,
            protein = split.protein,
            carbs = split.carbs,
            fat = split.fat,
            "applied macro recommendation"
        );
        split
    }

    pub fn len(&self) -> usize {
        self.journal.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.journal.meals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn manual(name: &str, date: NaiveDate, kcal: f64, p: f64, c: f64, f: f64) -> NewMeal {
        NewMeal {
            name: name.to_string(),
            date,
            totals: MacroQuad::new(kcal, p, c, f),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_meal_assigns_increasing_ids() {
        let mut manager = JournalManager::new(Journal::default());
        let a = manager.add_meal(manual("Toast", day(1), 200.0, 6.0, 30.0, 4.0));
        let b = manager.add_meal(manual("Soup", day(1), 150.0, 5.0, 20.0, 3.0));
        assert!(b > a);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_add_meal_derives_per_100g() {
        let mut manager = JournalManager::new(Journal::default());
        let id = manager.add_meal(NewMeal {
            grams: Some(200.0),
            ..manual("Stew", day(1), 300.0, 20.0, 30.0, 10.0)
        });
        let meal = manager.get_meal(id).unwrap();
        assert_eq!(meal.per_100g, Some(MacroQuad::new(150.0, 10.0, 15.0, 5.0)));
        assert_eq!(meal.totals.kcal, 300.0);
    }

    #[test]
    fn test_update_meal_rescales_from_grams() {
        let mut manager = JournalManager::new(Journal::default());
        let id = manager.add_meal(NewMeal {
            grams: Some(50.0),
            per_100g: Some(MacroQuad::new(389.0, 17.0, 66.0, 7.0)),
            ..manual("Oats", day(1), 0.0, 0.0, 0.0, 0.0)
        });
        assert_eq!(manager.get_meal(id).unwrap().totals.kcal, 194.0);

        let meal = manager
            .update_meal(
                id,
                MealEdit {
                    grams: Some(80.0),
                    meal_type: Some(MealType::Breakfast),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(meal.totals, MacroQuad::new(311.0, 13.6, 52.8, 5.6));
        assert_eq!(meal.meal_type, MealType::Breakfast);
        assert_eq!(manager.daily_totals(day(1)).kcal, 311.0);
    }

    #[test]
    fn test_update_meal_without_per_100g_keeps_edited_totals() {
        let mut manager = JournalManager::new(Journal::default());
        let id = manager.add_meal(manual("Curry", day(1), 600.0, 25.0, 70.0, 22.0));

        let meal = manager
            .update_meal(
                id,
                MealEdit {
                    name: Some(" Green curry ".to_string()),
                    date: Some(day(2)),
                    kcal: Some(550.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(meal.name, "Green curry");
        assert_eq!(meal.totals, MacroQuad::new(550.0, 25.0, 70.0, 22.0));
        assert!(manager.meals_on(day(1)).is_empty());
        assert_eq!(manager.meals_on(day(2)).len(), 1);
    }

    #[test]
    fn test_update_meal_rejects_bad_input() {
        let mut manager = JournalManager::new(Journal::default());
        let id = manager.add_meal(manual("Toast", day(1), 200.0, 6.0, 30.0, 4.0));

        let blank = MealEdit {
            name: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            manager.update_meal(id, blank),
            Err(CoachError::InvalidInput(_))
        ));

        let negative = MealEdit {
            grams: Some(-10.0),
            ..Default::default()
        };
        assert!(manager.update_meal(id, negative).is_err());
        assert_eq!(manager.get_meal(id).unwrap().grams, None);

        assert!(matches!(
            manager.update_meal(99, MealEdit::default()),
            Err(CoachError::MealNotFound(99))
        ));
    }

    #[test]
    fn test_log_food_record() {
        let record = FoodRecord {
            id: Some("5000112637922".to_string()),
            name: "Skyr".to_string(),
            brand: "Arla".to_string(),
            per: 100,
            calories: 63.0,
            protein: 11.0,
            carbs: 4.0,
            fat: 0.2,
            serving_size: "150 g".to_string(),
        };

        let mut manager = JournalManager::new(Journal::default());
        let id = manager.log_food_record(&record, 150.0, day(4)).unwrap();
        let meal = manager.get_meal(id).unwrap();
        assert_eq!(meal.source, "OFF");
        assert_eq!(meal.source_id, "5000112637922");
        assert_eq!(meal.per_100g, Some(MacroQuad::new(63.0, 11.0, 4.0, 0.2)));
        assert_eq!(meal.totals, MacroQuad::new(94.0, 16.5, 6.0, 0.3));

        assert!(manager.log_food_record(&record, 0.0, day(4)).is_err());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_delete_missing_meal() {
        let mut manager = JournalManager::new(Journal::default());
        assert!(matches!(
            manager.delete_meal(42),
            Err(CoachError::MealNotFound(42))
        ));
    }

    #[test]
    fn test_need_clamps_to_zero() {
        let mut manager = JournalManager::new(Journal::default());
        manager.add_meal(manual("Feast", day(1), 2500.0, 100.0, 300.0, 40.0));
        let need = manager.need_for(day(1));
        assert_eq!(need, MacroQuad::new(0.0, 50.0, 0.0, 30.0));
    }

    #[test]
    fn test_weekly_calories() {
        let mut manager = JournalManager::new(Journal::default());
        manager.add_meal(manual("A", day(7), 500.0, 0.0, 0.0, 0.0));
        manager.add_meal(manual("B", day(1), 300.0, 0.0, 0.0, 0.0));
        manager.add_meal(manual("C", day(8), 900.0, 0.0, 0.0, 0.0));

        let week = manager.weekly_calories(day(7));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], (day(1), 300.0));
        assert_eq!(week[6], (day(7), 500.0));
    }

    #[test]
    fn test_copy_day() {
        let mut manager = JournalManager::new(Journal::default());
        manager.add_meal(manual("Porridge", day(1), 350.0, 12.0, 60.0, 7.0));
        manager.add_meal(manual("Salad", day(1), 250.0, 8.0, 15.0, 14.0));

        assert_eq!(manager.copy_day(day(2)), 2);
        assert_eq!(manager.meals_on(day(2)).len(), 2);
        assert_eq!(manager.daily_totals(day(2)).kcal, 600.0);
        assert_eq!(manager.copy_day(day(10)), 0);
    }

    #[test]
    fn test_recent_foods_distinct() {
        let mut manager = JournalManager::new(Journal::default());
        manager.add_meal(manual("Apple", day(1), 52.0, 0.3, 14.0, 0.2));
        manager.add_meal(manual("apple ", day(2), 52.0, 0.3, 14.0, 0.2));
        manager.add_meal(manual("Bagel", day(2), 250.0, 10.0, 48.0, 1.5));

        let recents = manager.recent_foods(8);
        let names: Vec<&str> = recents.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Bagel", "apple"]);
        assert_eq!(recents[0].default_grams, 100.0);
    }

    #[test]
    fn test_favorite_upsert_and_quick_add() {
        let mut manager = JournalManager::new(Journal::default());
        let id = manager.add_meal(NewMeal {
            grams: Some(150.0),
            per_100g: Some(MacroQuad::new(59.0, 10.0, 4.0, 0.0)),
            ..manual("Greek Yogurt", day(1), 0.0, 0.0, 0.0, 0.0)
        });

        assert!(manager.favorite_from_meal(id).unwrap());
        assert!(!manager.favorite_from_meal(id).unwrap());
        assert_eq!(manager.favorites().len(), 1);

        let logged = manager.quick_add_favorite("greek yogurt", Some(200.0), day(3)).unwrap();
        let meal = manager.get_meal(logged).unwrap();
        assert_eq!(meal.totals.kcal, 118.0);
        assert_eq!(meal.totals.protein, 20.0);

        let default_portion = manager.quick_add_favorite("Greek Yogurt", None, day(3)).unwrap();
        assert_eq!(manager.get_meal(default_portion).unwrap().grams, Some(150.0));

        manager.journal.favorites[0].default_grams = Some(-20.0);
        let fallback = manager.quick_add_favorite("Greek Yogurt", None, day(3)).unwrap();
        assert_eq!(manager.get_meal(fallback).unwrap().grams, Some(100.0));

        assert!(matches!(
            manager.quick_add_favorite("Pizza", None, day(3)),
            Err(CoachError::FavoriteNotFound(_))
        ));
    }

    #[test]
    fn test_apply_recommendations_need_anthropometrics() {
        let mut manager = JournalManager::new(Journal::default());
        assert_eq!(manager.apply_calorie_recommendation(), None);
        assert_eq!(manager.profile().calories, 2000.0);

        let split = manager.apply_macro_recommendation(true);
        assert_eq!(split.calories, 2000.0);
        assert_eq!(manager.profile().protein, 150.0);
        assert_eq!(manager.profile().fat, 55.0);
        assert_eq!(manager.profile().carbs, 225.0);
    }
}
