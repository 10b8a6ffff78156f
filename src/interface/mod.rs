pub mod prompts;
pub mod render;

pub use prompts::{
    fuzzy_candidates, parse_amount, prompt_food_record, prompt_goals, prompt_meal,
    prompt_plan_choice, prompt_yes_no,
};
pub use render::{
    display_calorie_recommendation, display_day_summary, display_favorites, display_log_outcome,
    display_macro_split, display_plans, display_recent, display_search_results, display_weekly,
};
