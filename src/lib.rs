//! Electricity bill calculator.
//!
//! A slab-tariff billing engine (`tariff`) behind an Axum web form (`routes`)
//! and a JSON API (`tariff::routes`).

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod bill;
pub mod config;
pub mod error;
pub mod printing;
pub mod routes;
pub mod tariff;

pub use config::Config;
pub use error::{AppError, Result};

use printing::Printer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub printer: Arc<dyn Printer>,
}

impl AppState {
    pub fn new(config: Config, printer: Arc<dyn Printer>) -> Self {
        Self {
            config: Arc::new(config),
            printer,
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::bill::index))
        .nest("/bill", routes::bill::router())
        .nest("/api/tariff", tariff::router())
        .route("/health", get(routes::health))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
