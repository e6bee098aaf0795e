use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use bnuuy_time::config::Settings;
use bnuuy_time::core::Matcher;
use bnuuy_time::routes::{self, AppState};
use bnuuy_time::services::Catalog;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so its defaults can drive the subscriber
    let settings = Settings::load();

    let (default_level, default_format) = match &settings {
        Ok(s) => (s.logging.level.clone(), s.logging.format.clone()),
        Err(_) => ("info".to_string(), "json".to_string()),
    };
    let log_level = std::env::var("LOG_LEVEL").unwrap_or(default_level);
    let log_format = std::env::var("LOG_FORMAT").unwrap_or(default_format);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Bnuuy Time...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    let thresholds = settings.matching.thresholds().map_err(|e| {
        error!("Invalid matching configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let catalog = Catalog::load(&settings.catalog.path).map_err(|e| {
        error!("Failed to load catalog from {}: {}", settings.catalog.path, e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    info!("Catalog loaded: {} buns from {}", catalog.len(), settings.catalog.path);

    let matcher = Matcher::new(thresholds);

    info!("Matcher initialized with thresholds: {:?}", thresholds);

    let static_dir = settings.site.static_dir.clone();
    let app_state = AppState::new(catalog, matcher, settings.site);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(routes::handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .service(Files::new("/static", &static_dir))
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
