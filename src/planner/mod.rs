pub mod calculations;
pub mod constants;
pub mod progress;
pub mod suggestions;
pub mod targets;

pub use calculations::{
    activity_multiplier, estimate_bmr, round1, round5, round_to, scale_to_grams, sum_totals,
};
pub use constants::{CATALOG, catalog};
pub use progress::{Badge, BadgeKind, DayProgress, badge_status, percent_of};
pub use suggestions::{
    filter_by_preferences, food_lookup, grams_for_need, suggest_plans, suggest_plans_from,
    totals_for,
};
pub use targets::{
    CalorieRecommendation, EnergyEstimate, MacroSplit, SplitMethod, recommend_calorie_target,
    recommend_macros,
};
