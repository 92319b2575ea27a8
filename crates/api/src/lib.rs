//! # Agence API
//!
//! Web server for the agency's contact form. It exposes the endpoint the
//! form posts to, plus health and version probes.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Run the submission pipeline and call the repository
//! - **Middleware**: Error to HTTP response mapping
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx, through `agence-db`,
//! for storage.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error handling shared by all handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use agence_db::repositories::submission::{ContactRepository, PgContactRepository};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Handlers reach storage only through the repository trait, so tests can
/// swap in `agence_db::mock::repositories::MockContactRepo`.
pub struct ApiState {
    /// Transactional store for contact submissions
    pub contacts: Arc<dyn ContactRepository>,
}

impl ApiState {
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }

    pub fn from_pool(db_pool: PgPool) -> Self {
        Self::new(Arc::new(PgContactRepository::new(db_pool)))
    }
}

/// Builds the router with every route and the shared state attached.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Contact form endpoint
        .merge(routes::contact::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// CORS layer letting the listed browser origins post the form.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins)
}

/// Starts the API server with the provided configuration and database connection
///
/// Installs the log subscriber, builds the router with its CORS, timeout
/// and trace layers, and serves until the process stops.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// let config = agence_api::config::ApiConfig::from_env()?;
/// let db_pool = agence_db::create_pool(&config.database_url).await?;
/// agence_api::start_server(config, db_pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::from_pool(db_pool));
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(config.request_timeout())),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
