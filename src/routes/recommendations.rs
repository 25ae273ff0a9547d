use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;
use crate::core::{plan_rng, recommend_exercises, recommend_foods, search_foods};
use crate::models::{
    ExerciseRecommendationsResponse, FoodRecommendationsResponse, FoodSearchQuery,
    FoodSearchResponse, RecommendationRequest,
};
use crate::routes::{core_error, validation_failed, AppState};
use crate::services::CacheKey;

/// Configure recommendation and search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/recommendations/foods", web::post().to(food_recommendations))
        .route("/recommendations/exercises", web::post().to(exercise_recommendations))
        .route("/foods/search", web::get().to(food_search));
}

/// Food recommendations endpoint
///
/// POST /api/v1/recommendations/foods
///
/// Results are cached per diet, goal text and limit.
async fn food_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let profile = &req.profile;
    let limit = req.limit.unwrap_or(state.settings.default_recommendations);
    let cache_key = CacheKey::food_recommendations(profile.diet_preference, &profile.goal, limit);

    let recommendations = match state.cache.get_foods(&cache_key).await {
        Some(cached) => cached,
        None => {
            let fresh = Arc::new(recommend_foods(profile, &state.catalog.foods, limit));
            state.cache.set_foods(cache_key, fresh.clone()).await;
            fresh
        }
    };

    HttpResponse::Ok().json(FoodRecommendationsResponse {
        goal: profile.goal.clone(),
        total_results: recommendations.len(),
        recommendations: recommendations.as_ref().clone(),
    })
}

/// POST /api/v1/recommendations/exercises
async fn exercise_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let limit = req.limit.unwrap_or(state.settings.default_recommendations);
    let mut rng = plan_rng(state.settings.seed);

    match recommend_exercises(&req.profile, &state.catalog.exercises, limit, &mut rng) {
        Ok(exercises) => HttpResponse::Ok().json(ExerciseRecommendationsResponse {
            goal: req.profile.goal.clone(),
            exercises,
        }),
        Err(e) => core_error(e),
    }
}

/// GET /api/v1/foods/search?q=oat&limit=10
async fn food_search(
    state: web::Data<AppState>,
    query: web::Query<FoodSearchQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }

    let foods: Vec<_> = search_foods(&state.catalog.foods, &query.q)
        .into_iter()
        .take(query.limit)
        .cloned()
        .collect();

    tracing::debug!("Food search '{}' matched {} foods", query.q, foods.len());

    HttpResponse::Ok().json(FoodSearchResponse {
        query: query.q.clone(),
        total_results: foods.len(),
        foods,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use crate::routes::{configure_routes, handle_query_payload_error, test_support::create_test_state};

    fn profile_json(diet: &str, goal: &str) -> Value {
        json!({
            "name": "Jo",
            "gender": "female",
            "age": 28,
            "heightCm": 165,
            "weightKg": 60,
            "dietPreference": diet,
            "goal": goal
        })
    }

    #[actix_web::test]
    async fn test_food_recommendations_cached() {
        let state = create_test_state();
        let cache = state.cache.clone();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let payload = json!({ "profile": profile_json("vegetarian", "Weight Loss"), "limit": 3 });

        let req = test::TestRequest::post()
            .uri("/api/v1/recommendations/foods")
            .set_json(payload.clone())
            .to_request();
        let first: Value = test::call_and_read_body_json(&app, req).await;

        let recs = first["recommendations"].as_array().unwrap();
        assert!(recs.len() <= 3);
        assert!(recs.iter().all(|r| r["name"] != "Chicken Breast" && r["name"] != "Salmon Fillet"));

        let key = CacheKey::food_recommendations(
            crate::models::DietPreference::Vegetarian,
            "Weight Loss",
            3,
        );
        assert!(cache.get_foods(&key).await.is_some());

        let req = test::TestRequest::post()
            .uri("/api/v1/recommendations/foods")
            .set_json(payload)
            .to_request();
        let second: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(first, second);
    }

    #[actix_web::test]
    async fn test_recommendation_limit_validated() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_test_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/recommendations/foods")
            .set_json(json!({ "profile": profile_json("both", "Weight Loss"), "limit": 0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_exercise_recommendations() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_test_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/recommendations/exercises")
            .set_json(json!({ "profile": profile_json("both", "Weight Loss"), "limit": 4 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        // Weight loss with limit 4: cardio quota 2, strength 0, flexibility 1
        assert_eq!(body["exercises"]["cardio"].as_array().unwrap().len(), 2);
        assert_eq!(body["exercises"]["flexibility"].as_array().unwrap().len(), 1);
        assert_eq!(body["exercises"]["lowIntensity"], false);
    }

    #[actix_web::test]
    async fn test_food_search() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_test_state()))
                .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/foods/search?q=RICE")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["totalResults"], 1);
        assert_eq!(body["foods"][0]["name"], "Brown Rice");

        let req = test::TestRequest::get()
            .uri("/api/v1/foods/search?limit=abc")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_query");
    }
}
