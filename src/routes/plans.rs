use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{
    derive_metrics, plan_rng, plan_summary, record_progress, render_plan_text,
    render_shopping_list, shopping_list,
};
use crate::models::{
    GeneratePlanRequest, GeneratePlanResponse, HealthResponse, MetricsRequest, PlanDocumentRequest,
    ProgressRequest, ShoppingListResponse,
};
use crate::routes::{core_error, validation_failed, AppState};

/// Configure health, profile and plan routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/metrics", web::post().to(profile_metrics))
        .route("/profile/progress", web::post().to(record_weigh_in))
        .route("/plans/generate", web::post().to(generate_plan))
        .route("/plans/text", web::post().to(plan_text))
        .route("/plans/shopping-list", web::post().to(plan_shopping_list));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        foods: state.catalog.foods.len(),
        exercises: state.catalog.exercises.len(),
        cached_recommendations: state.cache.stats().await.entries,
        timestamp: chrono::Utc::now(),
    })
}

/// POST /api/v1/metrics
async fn profile_metrics(req: web::Json<MetricsRequest>) -> impl Responder {
    HttpResponse::Ok().json(derive_metrics(&req.profile))
}

/// POST /api/v1/profile/progress
async fn record_weigh_in(req: web::Json<ProgressRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match record_progress(&req.profile, req.weight_kg, chrono::Utc::now()) {
        Ok(update) => {
            tracing::info!(
                "Recorded weigh-in for {}: {} kg, BMI {}",
                req.profile.name,
                update.weight_kg,
                update.bmi
            );
            HttpResponse::Ok().json(update)
        }
        Err(e) => core_error(e),
    }
}

/// Generate meal plan endpoint
///
/// POST /api/v1/plans/generate
///
/// Request body:
/// ```json
/// {
///   "profile": { "gender": "female", "age": 28, "heightCm": 165, "weightKg": 60,
///                "dietPreference": "vegetarian", "goal": "Weight Loss" },
///   "days": 7,
///   "mealsPerDay": 3
/// }
/// ```
async fn generate_plan(
    state: web::Data<AppState>,
    req: web::Json<GeneratePlanRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for generate_plan request: {:?}", errors);
        return validation_failed(errors);
    }

    let days = req.days.unwrap_or(state.settings.default_days);
    let meals_per_day = req.meals_per_day.unwrap_or(state.settings.default_meals_per_day);
    let mut rng = plan_rng(state.settings.seed);

    tracing::info!(
        "Generating {}-day plan with {} meals/day for {}",
        days,
        meals_per_day,
        req.profile.name
    );

    match state
        .planner
        .generate(&req.profile, &state.catalog.foods, days, meals_per_day, &mut rng)
    {
        Ok(plan) => {
            let summary = plan_summary(&plan);
            HttpResponse::Ok().json(GeneratePlanResponse { plan, summary })
        }
        Err(e) => core_error(e),
    }
}

/// POST /api/v1/plans/text
async fn plan_text(req: web::Json<PlanDocumentRequest>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(render_plan_text(&req.plan))
}

/// POST /api/v1/plans/shopping-list
async fn plan_shopping_list(req: web::Json<PlanDocumentRequest>) -> impl Responder {
    let list = shopping_list(&req.plan);
    let text = render_shopping_list(&list);

    HttpResponse::Ok().json(ShoppingListResponse {
        item_count: list.item_count(),
        list,
        text,
    })
}
