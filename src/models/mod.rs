//! Data models module
//!
//! Request and response shapes served by the route groups

pub mod marking;

use serde::{de::DeserializeOwned, Serialize};

/// A stored entity served by a route group
///
/// `Draft` is the JSON body accepted on create, `Filter` the query string
/// accepted on list.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// Create payload
    type Draft: DeserializeOwned + Send + 'static;
    /// List filter, every field optional
    type Filter: DeserializeOwned + Default + Send + Sync + 'static;

    /// Singular name used in messages and documentation
    const KIND: &'static str;
    /// Query parameters accepted by `Filter`
    const FILTER_PARAMS: &'static [&'static str];

    /// Build the stored record from its assigned id and the draft
    fn assemble(id: i64, draft: Self::Draft) -> Self;

    /// Assigned id
    fn id(&self) -> i64;

    /// Whether the record passes every filter that is set
    fn matches(&self, filter: &Self::Filter) -> bool;
}

/// `true` when the filter is unset or equal to the value
pub(crate) fn matches_opt<T: PartialEq + ?Sized>(filter: Option<&T>, value: &T) -> bool {
    filter.map_or(true, |wanted| wanted == value)
}
