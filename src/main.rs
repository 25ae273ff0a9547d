use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use nutriplan::config::{LoggingSettings, Settings};
use nutriplan::core::MealPlanner;
use nutriplan::routes::{self, handle_json_payload_error, handle_query_payload_error, AppState};
use nutriplan::services::{Catalog, RecommendationCache};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// RUST_LOG wins over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    init_logging(&settings.logging);

    info!("Starting Nutriplan service...");

    let catalog = Catalog::load_from_files(
        &settings.catalog.foods_path,
        &settings.catalog.exercises_path,
    )
    .map_err(|e| {
        error!("Failed to load catalogs: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    let cache = RecommendationCache::new(settings.cache.capacity, settings.cache.ttl_secs);

    info!(
        "Recommendation cache initialized ({} entries, TTL: {}s)",
        settings.cache.capacity, settings.cache.ttl_secs
    );

    match settings.planner.seed {
        Some(seed) => info!("Planner seeded with {}; plans are reproducible", seed),
        None => info!("Planner seeded from OS entropy"),
    }

    // Build application state
    let app_state = AppState {
        catalog: Arc::new(catalog),
        cache: Arc::new(cache),
        planner: MealPlanner::with_default_tolerances(),
        settings: settings.planner.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
