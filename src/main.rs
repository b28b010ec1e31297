//! Binary entry point: configuration, logging, Mongo client, HTTP server.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use mongodb::options::{ClientOptions, Credential};
use mongodb::Client;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use survey_api::adapters::http::{survey_routes, SurveyHandlers};
use survey_api::adapters::mongo::{MongoResponseRepository, MongoSurveyRepository};
use survey_api::application::handlers::survey::{
    CreateSurveyHandler, ListResponsesByAudienceHandler, SubmitResponseHandler,
    UpdateSurveyHandler,
};
use survey_api::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        // ANSI colors are a terminal convenience; log collectors get plain text.
        .with_ansi(!config.is_production())
        .init();

    let database = connect(&config).await?;

    let surveys = Arc::new(MongoSurveyRepository::new(&database));
    let responses = Arc::new(MongoResponseRepository::new(&database));

    // The unique title index is the authoritative duplicate guard; refuse to
    // start without it.
    surveys.ensure_indexes().await?;

    let handlers = SurveyHandlers::new(
        Arc::new(CreateSurveyHandler::new(surveys.clone())),
        Arc::new(UpdateSurveyHandler::new(surveys.clone())),
        Arc::new(SubmitResponseHandler::new(surveys, responses.clone())),
        Arc::new(ListResponsesByAudienceHandler::new(responses)),
    );

    let app = Router::new()
        .route("/health", get(health))
        .nest("/surveys", survey_routes(handlers))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, database = %config.database.name, "survey-api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn connect(config: &AppConfig) -> Result<mongodb::Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(&config.database.uri).await?;
    options.app_name = Some("survey-api".to_string());
    options.connect_timeout = Some(config.database.connect_timeout());
    options.server_selection_timeout = Some(config.database.server_selection_timeout());

    if let (Some(username), Some(password)) =
        (&config.database.username, &config.database.password)
    {
        options.credential = Some(
            Credential::builder()
                .username(username.clone())
                .password(password.clone())
                .build(),
        );
    }

    let client = Client::with_options(options)?;
    Ok(client.database(&config.database.name))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<http::HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if !origins.is_empty() {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else if config.allow_permissive_cors() {
        CorsLayer::permissive()
    } else {
        // Production with no configured origins serves same-origin only.
        CorsLayer::new()
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl-c");
    tracing::info!("shutdown signal received");
}
