use super::types::ItemProjection;
use crate::error::InventoryError;
use crate::inventory::repository::InventoryRepository;
use crate::inventory::types::InventoryItem;

/// The lookup path for an item's photo, derived from its id.
///
/// Computed fresh at projection time so the URL always points at whatever asset
/// the record currently references, never a stale one.
pub fn photo_url(id: u64) -> String {
    format!("/inventory/{}/photo", id)
}

/// Builds the client-facing view of a record. Applied identically by list,
/// get-by-id, and search.
pub fn project(item: &InventoryItem) -> ItemProjection {
    ItemProjection {
        id: item.id,
        name: item.name.clone(),
        description: item.description.clone(),
        photo_url: item.photo_asset.as_ref().map(|_| photo_url(item.id)),
    }
}

/// Resolves a lookup-by-id request against the repository.
///
/// Rejects a missing or non-numeric id before touching the repository. The
/// photo URL is included only when the caller asked for it AND the item has a
/// photo; the flag never fabricates a URL for an item without one.
pub fn search_by_id(
    repo: &InventoryRepository,
    id_param: Option<&str>,
    include_photo: bool,
) -> Result<ItemProjection, InventoryError> {
    let raw = id_param
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| InventoryError::validation("id parameter is required"))?;

    let id = raw
        .parse::<u64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| InventoryError::validation(format!("invalid id: {}", raw)))?;

    let item = repo.get(id).ok_or(InventoryError::NotFound(id))?;

    let mut projection = project(&item);
    if !include_photo {
        projection.photo_url = None;
    }
    Ok(projection)
}
