// Core algorithm exports
pub mod error;
pub mod exercises;
pub mod export;
pub mod filters;
pub mod metrics;
pub mod planner;
pub mod random;
pub mod scoring;

pub use error::CoreError;
pub use exercises::{categorize_exercise, needs_low_intensity, recommend_exercises, CategoryWeights};
pub use export::{
    categorize_food, plan_summary, render_plan_text, render_shopping_list, shopping_list,
    FoodCategory, PlanSummary, ShoppingList,
};
pub use filters::{filter_by_diet, matches_diet, search_foods};
pub use metrics::{bmi, bmr, calorie_needs, derive_metrics, macro_split, record_progress};
pub use planner::MealPlanner;
pub use random::{plan_rng, PlanRng};
pub use scoring::{calculate_food_score, recommend_foods};
