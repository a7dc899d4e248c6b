//! Submission endpoints
//!
//! Listing accepts `paper_id` and `student_id`; both must match when given.

use super::resource::{resource_operations, resource_router};
use super::{docs::Operation, AppContext, RouteGroup};
use crate::models::marking::Submission;
use crate::utils::error::AppResult;
use axum::Router;

pub struct SubmissionRoutes;

impl RouteGroup for SubmissionRoutes {
    fn name(&self) -> &'static str {
        "submissions"
    }

    fn base_path(&self) -> &'static str {
        "/submissions"
    }

    fn operations(&self) -> Vec<Operation> {
        resource_operations::<Submission>(self.base_path())
    }

    fn router(&self, ctx: &AppContext) -> AppResult<Router> {
        resource_router(self.name(), self.base_path(), ctx.stores().submissions.clone())
    }
}
