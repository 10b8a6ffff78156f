pub mod food;
pub mod meal;
pub mod plan;
pub mod preferences;
pub mod profile;

pub use food::{DietTag, FoodItem, Macro, MacroQuad};
pub use meal::{FavoriteFood, LoggedMeal, MealType};
pub use plan::{PlanItem, SuggestionPlan};
pub use preferences::DietaryPreferences;
pub use profile::{ActivityLevel, NutritionProfile, Objective, Sex};

/// Remaining calories and macros for a day, each floored at zero.
pub type MacroNeed = MacroQuad;
