//! HTTP handlers module
//!
//! Builds the application: shared context, the route-group capability and the
//! composer that attaches the six route groups in a fixed order.

pub mod answers;
pub mod docs;
pub mod health;
pub mod papers;
pub mod questions;
pub mod resource;
pub mod schemes;
pub mod student;
pub mod submissions;

use crate::config::{SecuritySettings, Settings};
use crate::middleware::logging::request_logging_middleware;
use crate::services::Stores;
use crate::utils::error::{AppError, AppResult};
use axum::{http::HeaderValue, middleware, routing::get, Router};
use docs::{GroupDoc, Operation};
use serde_json::Value;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};

/// Title of the HTTP application
pub const APP_TITLE: &str = "Hackathon Marking API";

/// Shared state handed to every route group
///
/// Settings are held behind an `Arc` and only ever lent out by shared
/// reference.
#[derive(Clone)]
pub struct AppContext {
    settings: Arc<Settings>,
    stores: Stores,
}

impl AppContext {
    pub fn new(settings: Settings, stores: Stores) -> Self {
        Self {
            settings: Arc::new(settings),
            stores,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Shared handle to the same settings instance
    pub fn shared_settings(&self) -> Arc<Settings> {
        Arc::clone(&self.settings)
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }
}

/// A group of related endpoints that can be attached to the application
pub trait RouteGroup: Send + Sync {
    /// Group name, also the documentation tag
    fn name(&self) -> &'static str;

    /// Path prefix of every endpoint in the group
    fn base_path(&self) -> &'static str;

    /// Documented operations
    fn operations(&self) -> Vec<Operation>;

    /// Build the group's handlers
    fn router(&self, ctx: &AppContext) -> AppResult<Router>;
}

/// The fixed, ordered list of route groups
pub fn route_groups() -> Vec<Box<dyn RouteGroup>> {
    vec![
        Box::new(student::StudentRoutes),
        Box::new(papers::PaperRoutes),
        Box::new(questions::QuestionRoutes),
        Box::new(schemes::SchemeRoutes),
        Box::new(submissions::SubmissionRoutes),
        Box::new(answers::AnswerRoutes),
    ]
}

/// Composed HTTP application
pub struct Application {
    title: &'static str,
    groups: Vec<&'static str>,
    docs: Arc<Value>,
    router: Router,
}

impl Application {
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Attached route groups, in attachment order
    pub fn route_groups(&self) -> &[&'static str] {
        &self.groups
    }

    /// Generated OpenAPI document
    pub fn docs(&self) -> &Value {
        &self.docs
    }

    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Create the application with the standard route groups
pub fn compose(ctx: AppContext) -> AppResult<Application> {
    compose_with(ctx, route_groups())
}

/// Create the application with the given route groups, attached in order
///
/// Touches no storage: groups only capture their collections.
pub fn compose_with(ctx: AppContext, groups: Vec<Box<dyn RouteGroup>>) -> AppResult<Application> {
    let mut router = Router::new();
    let mut names: Vec<&'static str> = Vec::with_capacity(groups.len());
    let mut documented = Vec::with_capacity(groups.len());

    for group in &groups {
        let name = group.name();
        if names.contains(&name) {
            return Err(AppError::Registration {
                group: name.to_string(),
                reason: "route group attached twice".to_string(),
            });
        }

        let group_router = group.router(&ctx).map_err(|e| match e {
            AppError::Registration { .. } => e,
            other => AppError::Registration {
                group: name.to_string(),
                reason: other.to_string(),
            },
        })?;

        router = router.merge(group_router);
        names.push(name);
        documented.push(GroupDoc {
            name,
            base_path: group.base_path(),
            operations: group.operations(),
        });

        debug!("Attached route group '{}' at {}", name, group.base_path());
    }

    let docs = Arc::new(docs::openapi(APP_TITLE, crate::VERSION, &documented));

    let health_state = Arc::new(health::HealthInfo {
        database_target: ctx.settings().database().target(),
        route_groups: names.clone(),
    });

    let router = router
        .merge(
            Router::new()
                .route("/openapi.json", get(docs::openapi_json))
                .with_state(Arc::clone(&docs)),
        )
        .merge(
            Router::new()
                .route("/health", get(health::health_check))
                .route("/health/live", get(health::liveness_check))
                .with_state(health_state),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http());

    let router = match cors_layer(ctx.settings().security()) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    info!("{} composed with route groups {:?}", APP_TITLE, names);

    Ok(Application {
        title: APP_TITLE,
        groups: names,
        docs,
        router,
    })
}

/// CORS layer for the configured origins, `None` when disabled
fn cors_layer(security: &SecuritySettings) -> Option<CorsLayer> {
    if !security.cors_enabled {
        return None;
    }

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    let layer = if security.allows_any_origin() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = security
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    };

    Some(layer)
}
