//! Services module
//!
//! Record storage used by the route groups

pub mod store;

pub use store::{Collection, MemoryCollection, Stores};
