//! Inventory Data Types
//!
//! Defines the stored item record and the Data Transfer Objects (DTOs) used by the
//! HTTP API for metadata updates and deletion acknowledgments.

use serde::{Deserialize, Serialize};

/// A stored inventory record.
///
/// `photo_asset` is the opaque on-disk name of the item's photo, if any. It is
/// never exposed to clients directly; the read side derives a lookup URL from the
/// item id instead, so the URL always reflects the current asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub photo_asset: Option<String>,
}

/// Request body for metadata updates (PUT /inventory/:id).
///
/// Fields are applied only when supplied; an absent or empty field leaves the
/// stored value unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Acknowledgment returned after a successful deletion.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: u64,
    pub status: String,
}
