// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ActivityLevel, Day, DietPreference, ExerciseCategory, ExerciseFocus, ExerciseRecommendations,
    ExerciseRecord, ExerciseSuggestion, FoodRecommendation, FoodRecord, Gender, Goal, Goals,
    HealthStatus, MacroTargets, Meal, MealFood, MealPlan, Profile, ProfileMetrics, ProgressEntry,
    ProgressUpdate,
};
pub use requests::{
    FoodSearchQuery, GeneratePlanRequest, MetricsRequest, PlanDocumentRequest, ProgressRequest,
    RecommendationRequest,
};
pub use responses::{
    ErrorResponse, ExerciseRecommendationsResponse, FoodRecommendationsResponse, FoodSearchResponse,
    GeneratePlanResponse, HealthResponse, ShoppingListResponse,
};
