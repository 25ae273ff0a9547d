use serde::{Deserialize, Serialize};
use crate::core::export::{PlanSummary, ShoppingList};
use crate::models::domain::{ExerciseRecommendations, FoodRecommendation, FoodRecord, MealPlan};

/// Response for the plan generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanResponse {
    pub plan: MealPlan,
    pub summary: PlanSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecommendationsResponse {
    pub goal: String,
    pub recommendations: Vec<FoodRecommendation>,
    pub total_results: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecommendationsResponse {
    pub goal: String,
    pub exercises: ExerciseRecommendations,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListResponse {
    pub list: ShoppingList,
    pub item_count: usize,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSearchResponse {
    pub query: String,
    pub foods: Vec<FoodRecord>,
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub foods: usize,
    pub exercises: usize,
    pub cached_recommendations: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
