//! Generic record endpoints
//!
//! Create, list and fetch handlers shared by every record-backed route group.

use crate::handlers::docs::Operation;
use crate::models::Record;
use crate::services::Collection;
use crate::utils::error::{AppError, AppResult};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::{debug, info};

type Shared<R> = Arc<dyn Collection<R>>;

/// Router serving `base`, `base/` and `base/:id` from a collection
pub fn resource_router<R: Record>(
    group: &str,
    base: &str,
    collection: Shared<R>,
) -> AppResult<Router> {
    if !base.starts_with('/') || base.len() < 2 || base.ends_with('/') {
        return Err(AppError::Registration {
            group: group.to_string(),
            reason: format!("invalid base path {:?}", base),
        });
    }

    let router = Router::new()
        .route(base, get(list_records::<R>).post(create_record::<R>))
        .route(&format!("{}/", base), get(list_records::<R>).post(create_record::<R>))
        .route(&format!("{}/:id", base), get(get_record::<R>))
        .with_state(collection);

    Ok(router)
}

/// Documentation entries matching `resource_router`
pub fn resource_operations<R: Record>(base: &str) -> Vec<Operation> {
    vec![
        Operation {
            method: "post",
            path: format!("{}/", base),
            summary: format!("Create {}", R::KIND),
            query: Vec::new(),
            success_status: 201,
        },
        Operation {
            method: "get",
            path: format!("{}/", base),
            summary: format!("List {} records", R::KIND),
            query: R::FILTER_PARAMS.to_vec(),
            success_status: 200,
        },
        Operation {
            method: "get",
            path: format!("{}/{{id}}", base),
            summary: format!("Get {} by id", R::KIND),
            query: Vec::new(),
            success_status: 200,
        },
    ]
}

async fn create_record<R: Record>(
    State(collection): State<Shared<R>>,
    payload: Result<Json<R::Draft>, JsonRejection>,
) -> AppResult<(StatusCode, Json<R>)> {
    let Json(draft) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let record = collection.insert(draft).await?;
    info!("Created {} {}", R::KIND, record.id());
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_records<R: Record>(
    State(collection): State<Shared<R>>,
    query: Result<Query<R::Filter>, QueryRejection>,
) -> AppResult<Json<Vec<R>>> {
    let Query(filter) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let records = collection.list(&filter).await?;
    debug!("Listing {} {} records", records.len(), R::KIND);
    Ok(Json(records))
}

async fn get_record<R: Record>(
    State(collection): State<Shared<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<R>> {
    let Path(id) = path.map_err(|e| AppError::Validation(e.body_text()))?;
    collection
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("{} {}", R::KIND, id)))
}
