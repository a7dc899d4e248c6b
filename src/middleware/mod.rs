//! Middleware module
//!
//! Cross-cutting request handling layered over every route group

pub mod logging;

pub use logging::request_logging_middleware;
