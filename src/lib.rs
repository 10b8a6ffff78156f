pub mod cli;
pub mod error;
pub mod food_db;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{CoachError, Result};
pub use models::{FoodItem, MacroQuad, NutritionProfile, SuggestionPlan};
