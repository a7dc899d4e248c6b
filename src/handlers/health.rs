//! Health check handlers
//!
//! Provides application health status check endpoints. Neither endpoint
//! connects to the database.

use crate::handlers::APP_TITLE;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Static facts reported by the health endpoints
#[derive(Debug)]
pub struct HealthInfo {
    /// `host:port/name` of the configured database
    pub database_target: String,
    /// Attached route groups, in attachment order
    pub route_groups: Vec<&'static str>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service name
    pub service: String,
    /// Version information
    pub version: String,
    /// Timestamp
    pub timestamp: String,
    /// Details (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HealthDetails>,
}

/// Check result
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthDetails {
    /// Configured database target
    pub database: String,
    /// Database status; never probed
    pub database_status: String,
    /// Attached route groups
    pub route_groups: Vec<String>,
    /// Uptime in seconds
    pub uptime_seconds: u64,
}

/// Basic health check
///
/// GET /health
pub async fn health_check(State(info): State<Arc<HealthInfo>>) -> Json<HealthResponse> {
    debug!("Executing health check");
    Json(build_response("healthy", &info))
}

/// Liveness check
///
/// GET /health/live
pub async fn liveness_check(State(info): State<Arc<HealthInfo>>) -> Json<HealthResponse> {
    debug!("Executing liveness check");
    Json(build_response("alive", &info))
}

fn build_response(status: &str, info: &HealthInfo) -> HealthResponse {
    HealthResponse {
        status: status.to_string(),
        service: APP_TITLE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        details: Some(HealthDetails {
            database: info.database_target.clone(),
            database_status: "not_checked".to_string(),
            route_groups: info.route_groups.iter().map(|g| g.to_string()).collect(),
            uptime_seconds: get_uptime_seconds(),
        }),
    }
}

/// Get service uptime in seconds
fn get_uptime_seconds() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START_TIME: OnceLock<Instant> = OnceLock::new();

    START_TIME.get_or_init(Instant::now).elapsed().as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_info() -> Arc<HealthInfo> {
        Arc::new(HealthInfo {
            database_target: "127.0.0.1:3306/hackathon_db".to_string(),
            route_groups: vec!["student", "papers"],
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check(State(create_test_info())).await.0;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.service, "Hackathon Marking API");

        let details = response.details.unwrap();
        assert_eq!(details.database_status, "not_checked");
        assert_eq!(details.route_groups, vec!["student", "papers"]);
    }

    #[tokio::test]
    async fn test_liveness_check() {
        let response = liveness_check(State(create_test_info())).await.0;
        assert_eq!(response.status, "alive");
        assert!(response.details.is_some());
    }

    #[test]
    fn test_uptime_calculation() {
        let uptime1 = get_uptime_seconds();
        std::thread::sleep(std::time::Duration::from_millis(100));
        let uptime2 = get_uptime_seconds();
        assert!(uptime2 >= uptime1);
    }
}
