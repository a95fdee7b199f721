use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tripwise::config::{LoggingSettings, Settings};
use tripwise::error::handle_json_payload_error;
use tripwise::{configure_routes, AppState};

fn init_tracing(logging: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_tracing(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                e.to_string(),
            ));
        }
    };

    init_tracing(&settings.logging);

    info!("Starting Tripwise travel planning service...");
    info!("Configuration loaded successfully");

    let app_state = AppState::from_settings(&settings).map_err(|e| {
        error!("Failed to initialize forecast client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!(
        "Recommender initialized with {} destinations and weights: {:?}",
        app_state.recommender.catalog().len(),
        app_state.recommender.weights()
    );
    if app_state.live_forecast {
        info!("Live forecasts enabled ({} days)", app_state.forecast_days);
    }
    if let Some(seed) = app_state.rng_seed {
        info!("Using fixed planning seed {}", seed);
    }

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
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
