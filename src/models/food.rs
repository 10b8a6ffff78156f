use serde::{Deserialize, Serialize};

/// Calories plus the three macronutrients.
///
/// Used for per-100g values, computed totals and remaining needs alike.
/// Missing fields deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroQuad {
    pub kcal: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroQuad {
    pub const fn new(kcal: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            kcal,
            protein,
            carbs,
            fat,
        }
    }

    /// Value of a single macronutrient.
    #[inline]
    pub fn get(&self, macro_kind: Macro) -> f64 {
        match macro_kind {
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }

    /// Element-wise `self - other`, each dimension floored at zero.
    pub fn saturating_sub(&self, other: &MacroQuad) -> MacroQuad {
        MacroQuad {
            kcal: (self.kcal - other.kcal).max(0.0),
            protein: (self.protein - other.protein).max(0.0),
            carbs: (self.carbs - other.carbs).max(0.0),
            fat: (self.fat - other.fat).max(0.0),
        }
    }

    /// True when every dimension is non-negative.
    pub fn is_non_negative(&self) -> bool {
        self.kcal >= 0.0 && self.protein >= 0.0 && self.carbs >= 0.0 && self.fat >= 0.0
    }
}

impl std::ops::Add for MacroQuad {
    type Output = MacroQuad;

    fn add(self, rhs: MacroQuad) -> MacroQuad {
        MacroQuad {
            kcal: self.kcal + rhs.kcal,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl std::iter::Sum for MacroQuad {
    fn sum<I: Iterator<Item = MacroQuad>>(iter: I) -> Self {
        iter.fold(MacroQuad::default(), |acc, q| acc + q)
    }
}

/// One of the three macronutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macro {
    Protein,
    Carbs,
    Fat,
}

/// Dietary tag carried by a catalog food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietTag {
    Meat,
    Vegetarian,
    Vegan,
    Dairy,
    Nuts,
    GlutenFree,
}

/// A food with macros normalized to 100 grams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    pub per_100g: MacroQuad,

    #[serde(default)]
    pub tags: Vec<DietTag>,
}

impl FoodItem {
    pub fn new(name: &str, kcal: f64, protein: f64, carbs: f64, fat: f64, tags: &[DietTag]) -> Self {
        Self {
            name: name.to_string(),
            brand: None,
            per_100g: MacroQuad::new(kcal, protein, carbs, fat),
            tags: tags.to_vec(),
        }
    }

    #[inline]
    pub fn has_tag(&self, tag: DietTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Per-100g values must all be non-negative.
    pub fn is_valid(&self) -> bool {
        self.per_100g.is_non_negative()
    }

    /// Canonical key for lookups (trimmed, lowercase name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodItem {}
