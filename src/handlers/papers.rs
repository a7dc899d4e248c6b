//! Exam paper endpoints

use super::resource::{resource_operations, resource_router};
use super::{docs::Operation, AppContext, RouteGroup};
use crate::models::marking::Paper;
use crate::utils::error::AppResult;
use axum::Router;

pub struct PaperRoutes;

impl RouteGroup for PaperRoutes {
    fn name(&self) -> &'static str {
        "papers"
    }

    fn base_path(&self) -> &'static str {
        "/papers"
    }

    fn operations(&self) -> Vec<Operation> {
        resource_operations::<Paper>(self.base_path())
    }

    fn router(&self, ctx: &AppContext) -> AppResult<Router> {
        resource_router(self.name(), self.base_path(), ctx.stores().papers.clone())
    }
}
