//! Question endpoints
//!
//! `GET /questions/?paper_id=N` narrows the list to one paper.

use super::resource::{resource_operations, resource_router};
use super::{docs::Operation, AppContext, RouteGroup};
use crate::models::marking::Question;
use crate::utils::error::AppResult;
use axum::Router;

pub struct QuestionRoutes;

impl RouteGroup for QuestionRoutes {
    fn name(&self) -> &'static str {
        "questions"
    }

    fn base_path(&self) -> &'static str {
        "/questions"
    }

    fn operations(&self) -> Vec<Operation> {
        resource_operations::<Question>(self.base_path())
    }

    fn router(&self, ctx: &AppContext) -> AppResult<Router> {
        resource_router(self.name(), self.base_path(), ctx.stores().questions.clone())
    }
}
