//! Answer endpoints

use super::resource::{resource_operations, resource_router};
use super::{docs::Operation, AppContext, RouteGroup};
use crate::models::marking::Answer;
use crate::utils::error::AppResult;
use axum::Router;

pub struct AnswerRoutes;

impl RouteGroup for AnswerRoutes {
    fn name(&self) -> &'static str {
        "answers"
    }

    fn base_path(&self) -> &'static str {
        "/answers"
    }

    fn operations(&self) -> Vec<Operation> {
        resource_operations::<Answer>(self.base_path())
    }

    fn router(&self, ctx: &AppContext) -> AppResult<Router> {
        resource_router(self.name(), self.base_path(), ctx.stores().answers.clone())
    }
}
