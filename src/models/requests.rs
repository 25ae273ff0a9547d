use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{MealPlan, Profile};

/// Request to generate a meal plan
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeneratePlanRequest {
    pub profile: Profile,
    #[validate(range(min = 1, max = 30))]
    #[serde(default)]
    pub days: Option<usize>,
    #[validate(range(min = 3, max = 6))]
    #[serde(alias = "meals_per_day", rename = "mealsPerDay", default)]
    pub meals_per_day: Option<usize>,
}

/// Request for food or exercise recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    pub profile: Profile,
    #[validate(range(min = 1, max = 50))]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Request for derived profile metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsRequest {
    pub profile: Profile,
}

/// Request to record a new weigh-in
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProgressRequest {
    pub profile: Profile,
    #[validate(range(exclusive_min = 0.0, max = 700.0))]
    #[serde(alias = "weight_kg", rename = "weightKg")]
    pub weight_kg: f64,
}

/// Request carrying a previously generated plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDocumentRequest {
    pub plan: MealPlan,
}

/// Query string for the food search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FoodSearchQuery {
    #[validate(length(min = 1, max = 100))]
    pub q: String,
    #[validate(range(min = 1, max = 200))]
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

fn default_search_limit() -> usize {
    25
}
