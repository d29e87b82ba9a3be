//! Shared response envelope types for API handlers.
//!
//! Single entities use the `{ "data": ... }` envelope; collection
//! endpoints that report their size use `{ "data": [...], "count": n }`.
//! Using these types instead of ad-hoc `serde_json::json!` keeps the
//! serialized shape consistent and type-checked.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": [...], "count": n }` envelope for collection responses.
///
/// `count` always equals `data.len()`; it is included so clients do not
/// have to count, matching the search response contract.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}
