//! Hackathon Marking API Library
//!
//! Settings bootstrap and route-group composition for the marking backend

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use handlers::{compose, compose_with, route_groups, AppContext, Application, RouteGroup, APP_TITLE};
pub use services::Stores;
pub use utils::error::{AppError, AppResult, ConfigError};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
