//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for expense records
//! - Health check endpoint
//! - Mapping from domain errors to JSON error responses

pub mod error;
pub mod routes;

#[cfg(test)]
mod test_support;

use axum::Router;
use spendbook_core::expense::{ExpenseService, ExpenseStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Backing store for expense records, shared by every request.
    pub store: Arc<dyn ExpenseStore>,
}

impl AppState {
    /// Creates application state over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }

    /// Returns an expense service bound to the shared store.
    #[must_use]
    pub fn expenses(&self) -> ExpenseService {
        ExpenseService::new(Arc::clone(&self.store))
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
