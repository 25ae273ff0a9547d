//! Nutriplan - Personalized meal plans and recommendations
//!
//! This library derives calorie and macro targets from a user profile, assembles
//! multi-day meal plans from a food catalog and ranks foods and exercises
//! against the user's goal.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{derive_metrics, plan_rng, recommend_exercises, recommend_foods, CoreError, MealPlanner};
pub use crate::models::{DietPreference, ExerciseRecord, FoodRecord, MealPlan, Profile};
