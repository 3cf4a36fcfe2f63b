use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use roomscout::config::Settings;
use roomscout::models::fallback_listings;
use roomscout::routes::{self, handle_json_payload_error, AppState};
use roomscout::services::{http_client, LlmClient, SpeechClient, Storage};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Roomscout recommendation service...");

    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Configuration loaded successfully");

    let client = http_client(&settings.http).map_err(|e| {
        error!("Failed to create HTTP client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    let llm = Arc::new(LlmClient::new(client.clone(), &settings.llm));
    if !llm.is_configured() {
        warn!("GROQ_API_KEY is not set. The API will not work properly.");
    }

    let speech = Arc::new(SpeechClient::new(client.clone(), &settings.speech));
    if !speech.is_configured() {
        warn!("ELEVENLABS_API_KEY is not set. Audio generation will not work.");
    }

    // Storage is optional - requests degrade to the fallback listings without it
    let storage = match Storage::from_settings(&settings.storage, client).await {
        Ok(storage) => storage,
        Err(e) => {
            error!("Failed to initialize {:?} storage ({}), using local storage only", settings.storage.backend, e);
            Storage::Local
        }
    };

    if storage.is_configured() && settings.storage.seed_on_startup {
        match storage.seed_if_empty(&fallback_listings()).await {
            Ok(true) => info!("Seeded listings table"),
            Ok(false) => info!("Listings table already populated"),
            Err(e) => error!("Error initializing database: {}", e),
        }
    }

    info!("Storage initialized ({})", storage.name());

    let app_state = AppState {
        llm,
        speech,
        storage: Arc::new(storage),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
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
