// Library root for the crew fixture server

pub mod app;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routing;

// Re-export commonly used types
pub use app::{create_router, AppState};
pub use config::{Config, EnvelopeMode};
pub use error::{ApiError, ApiResult};
pub use routing::{FixtureTable, RouteHost, RoutePattern};
