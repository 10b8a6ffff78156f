use serde::{Deserialize, Serialize};

/// Dietary constraints applied to meal suggestions.
///
/// Only the first five flags filter the catalog. `high_protein`, `low_carb`
/// and `low_fat` are recorded but do not change the suggestions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietaryPreferences {
    pub vegan: bool,
    pub vegetarian: bool,
    pub no_dairy: bool,
    pub no_nuts: bool,
    pub gluten_free: bool,
    pub high_protein: bool,
    pub low_carb: bool,
    pub low_fat: bool,
}

impl DietaryPreferences {
    /// Extract preference flags from a free-text request.
    pub fn from_message(message: &str) -> Self {
        let m = message.to_lowercase();
        let any = |keys: &[&str]| keys.iter().any(|k| m.contains(k));

        Self {
            high_protein: any(&["high protein", "more protein", "protein"]),
            low_carb: any(&["low carb", "less carbs", "keto"]),
            low_fat: any(&["low fat", "less fat"]),
            vegetarian: m.contains("vegetarian"),
            vegan: m.contains("vegan"),
            no_dairy: any(&["no dairy", "dairy-free", "lactose"]),
            no_nuts: m.contains("no nuts"),
            gluten_free: any(&["gluten-free", "no gluten"]),
        }
    }

    /// Names of the flags that are set, for display.
    pub fn active_flags(&self) -> Vec<&'static str> {
        [
            (self.vegan, "vegan"),
            (self.vegetarian, "vegetarian"),
            (self.no_dairy, "no_dairy"),
            (self.no_nuts, "no_nuts"),
            (self.gluten_free, "gluten_free"),
            (self.high_protein, "high_protein"),
            (self.low_carb, "low_carb"),
            (self.low_fat, "low_fat"),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .map(|(_, name)| name)
        .collect()
    }
}
