//! Student roster endpoints
//!
//! Students are addressed by the roster `student_id` in submissions; the
//! numeric `id` is assigned on create.

use super::resource::{resource_operations, resource_router};
use super::{docs::Operation, AppContext, RouteGroup};
use crate::models::marking::Student;
use crate::utils::error::AppResult;
use axum::Router;

pub struct StudentRoutes;

impl RouteGroup for StudentRoutes {
    fn name(&self) -> &'static str {
        "student"
    }

    fn base_path(&self) -> &'static str {
        "/students"
    }

    fn operations(&self) -> Vec<Operation> {
        resource_operations::<Student>(self.base_path())
    }

    fn router(&self, ctx: &AppContext) -> AppResult<Router> {
        resource_router(self.name(), self.base_path(), ctx.stores().students.clone())
    }
}
