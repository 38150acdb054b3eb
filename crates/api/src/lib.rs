//! # Agenda API
//!
//! The API crate provides the web server for the Agenda appointment service.
//! Members look up free slots of a day and book one; staff list and revoke
//! bookings.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into calls on the scheduling core
//! - **Middleware**: Identity extraction and error to response mapping
//! - **Config**: Handle environment and application configuration
//!
//! Scheduling rules live in `agenda-core`; persistence is chosen at startup
//! (PostgreSQL through `agenda-db`, or the in-memory store).

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Identity extraction and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use agenda_core::{
    catalog::SlotCatalog,
    clock::Clock,
    resolver::AvailabilityResolver,
    revocation::AdminRevocation,
    service::BookingService,
    store::{BookingStore, RoleDirectory},
};
use axum::Router;
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    pub catalog: Arc<SlotCatalog>,
    pub resolver: AvailabilityResolver,
    pub bookings: BookingService,
    pub revocation: AdminRevocation,
    /// Authorization collaborator for staff routes
    pub roles: Arc<dyn RoleDirectory>,
    pub clock: Arc<dyn Clock>,
    /// Name of the booking store in use, reported by `/health`
    pub store_backend: &'static str,
}

impl ApiState {
    /// Wires the scheduling components around one booking store.
    pub fn new(
        catalog: SlotCatalog,
        store: Arc<dyn BookingStore>,
        roles: Arc<dyn RoleDirectory>,
        clock: Arc<dyn Clock>,
        store_backend: &'static str,
    ) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            resolver: AvailabilityResolver::new(catalog.clone(), store.clone()),
            bookings: BookingService::new(catalog.clone(), store.clone(), clock.clone()),
            revocation: AdminRevocation::new(store),
            catalog,
            roles,
            clock,
            store_backend,
        }
    }
}

/// Installs the global `tracing` subscriber.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the application router with all routes attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot catalog and availability endpoints
        .merge(routes::availability::routes())
        // Member booking endpoints
        .merge(routes::booking::routes())
        // Staff endpoints
        .merge(routes::admin::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and state
pub async fn start_server(config: config::ApiConfig, state: Arc<ApiState>) -> Result<()> {
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed = origins
            .iter()
            .filter_map(|origin| match origin.parse::<axum::http::HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect::<Vec<_>>();

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
                axum::http::HeaderName::from_static(middleware::auth::USER_ID_HEADER),
                axum::http::HeaderName::from_static(middleware::auth::USER_NAME_HEADER),
                axum::http::HeaderName::from_static(middleware::auth::USER_EMAIL_HEADER),
            ])
            .allow_origin(allowed)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
