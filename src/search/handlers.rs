use std::sync::Arc;

use axum::extract::Query;
use axum::{Extension, Form, Json};

use super::projection::search_by_id;
use super::types::{ItemProjection, SearchParams};
use crate::error::InventoryError;
use crate::inventory::repository::InventoryRepository;

pub async fn handle_search_query(
    Query(params): Query<SearchParams>,
    Extension(repo): Extension<Arc<InventoryRepository>>,
) -> Result<Json<ItemProjection>, InventoryError> {
    run_search(&repo, params)
}

pub async fn handle_search_form(
    Extension(repo): Extension<Arc<InventoryRepository>>,
    Form(params): Form<SearchParams>,
) -> Result<Json<ItemProjection>, InventoryError> {
    run_search(&repo, params)
}

fn run_search(
    repo: &InventoryRepository,
    params: SearchParams,
) -> Result<Json<ItemProjection>, InventoryError> {
    let include_photo = flag_is_set(params.photo.as_deref());
    let projection = search_by_id(repo, params.id.as_deref(), include_photo)?;
    Ok(Json(projection))
}

/// HTML checkboxes post "on"; curl users tend to send "true" or "1".
fn flag_is_set(value: Option<&str>) -> bool {
    match value {
        Some(v) => {
            let v = v.trim().to_ascii_lowercase();
            matches!(v.as_str(), "on" | "true" | "1" | "yes")
        }
        None => false,
    }
}
