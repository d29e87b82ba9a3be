//! Handlers for the `/catalog` resource.
//!
//! The catalog is read-only; these handlers only expose lookup, listing
//! and search over the seeded furniture set.

use arden_core::catalog::{CatalogEntry, Category};
use arden_core::error::CoreError;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::{CategoryParams, SearchParams};
use crate::response::ListResponse;
use crate::state::AppState;

/// Catalog listing with the closed category set for filter UIs.
#[derive(Debug, Serialize)]
pub struct CatalogListResponse {
    pub data: Vec<CatalogEntry>,
    pub categories: &'static [Category],
}

/// A catalog entry together with its advisory usage count.
#[derive(Debug, Serialize)]
pub struct CatalogEntryWithUsage {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub usage_count: u64,
}

/// GET /api/v1/catalog?category=seating
///
/// List catalog entries in seed order, optionally filtered by category.
/// An unknown category is a 400, not an empty result.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> AppResult<impl IntoResponse> {
    let category = params
        .category
        .as_deref()
        .map(Category::parse)
        .transpose()?;

    let entries: Vec<CatalogEntry> = state
        .catalog
        .list(category)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(CatalogListResponse {
        data: entries,
        categories: Category::ALL,
    }))
}

/// GET /api/v1/catalog/search?q=sofa
///
/// Case-insensitive substring search over name, category and description.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.q.unwrap_or_default();
    let hits: Vec<CatalogEntry> = state
        .catalog
        .search(&query)?
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ListResponse::new(hits)))
}

/// GET /api/v1/catalog/{model_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let entry = state
        .catalog
        .get(&model_id)
        .cloned()
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "catalog model",
            id: model_id.clone(),
        }))?;

    Ok(Json(CatalogEntryWithUsage {
        usage_count: state.catalog.usage_count(&model_id),
        entry,
    }))
}
