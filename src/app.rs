use axum::{routing::get, Router};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    config::{Config, EnvelopeMode},
    fixtures::fixture_table,
    handlers::{dispatch, fixture_catalogue, health_check, Responder},
    middleware::create_middleware_stack,
    routing::FixtureTable,
};

/// Read-only state shared by every request.
pub struct AppState {
    pub table: FixtureTable<Responder>,
    pub taken_nicknames: Vec<String>,
    pub envelope_mode: EnvelopeMode,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let table = fixture_table(&config.base_path);

        for shadowing in table.shadowed() {
            let route = &table.routes()[shadowing.index];
            warn!(
                "Fixture #{} {} {} is shadowed by fixture #{} and will never answer",
                shadowing.index,
                route.method,
                route.pattern.template(),
                shadowing.shadowed_by
            );
        }

        info!(
            "Loaded {} fixture routes under base path '{}'",
            table.len(),
            config.base_path
        );

        AppState {
            table,
            taken_nicknames: config.taken_nicknames.clone(),
            envelope_mode: config.envelope_mode,
        }
    }
}

/// Create the Axum router with all endpoints and middleware
pub fn create_router(config: &Config) -> Router {
    let state = Arc::new(AppState::from_config(config));

    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Route listing, including which registrations are shadowed
        .route("/__fixtures", get(fixture_catalogue))
        // Everything else is looked up in the fixture table
        .fallback(dispatch)
        .with_state(state)
        // Apply middleware stack
        .layer(create_middleware_stack(config.request_timeout))
}
