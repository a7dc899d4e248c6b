//! Marking scheme endpoints

use super::resource::{resource_operations, resource_router};
use super::{docs::Operation, AppContext, RouteGroup};
use crate::models::marking::Scheme;
use crate::utils::error::AppResult;
use axum::Router;

pub struct SchemeRoutes;

impl RouteGroup for SchemeRoutes {
    fn name(&self) -> &'static str {
        "schemes"
    }

    fn base_path(&self) -> &'static str {
        "/schemes"
    }

    fn operations(&self) -> Vec<Operation> {
        resource_operations::<Scheme>(self.base_path())
    }

    fn router(&self, ctx: &AppContext) -> AppResult<Router> {
        resource_router(self.name(), self.base_path(), ctx.stores().schemes.clone())
    }
}
