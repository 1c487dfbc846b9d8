use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use super::types::InventoryItem;
use crate::assets::store::AssetStore;
use crate::error::InventoryError;

/// In-memory store of inventory records, coordinating photo lifecycle with the
/// asset layer.
///
/// Each mutation is atomic with respect to the others: record access goes through
/// the concurrent map's entry operations and id assignment through an atomic
/// counter, so no operation observes a half-applied mutation.
pub struct InventoryRepository {
    items: DashMap<u64, InventoryItem>,
    next_id: AtomicU64,
    assets: Arc<dyn AssetStore>,
}

impl InventoryRepository {
    pub fn new(assets: Arc<dyn AssetStore>) -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicU64::new(0),
            assets,
        }
    }

    /// The asset store this repository coordinates with. Handlers use it to stage
    /// uploads and serve photo bytes.
    pub fn assets(&self) -> &Arc<dyn AssetStore> {
        &self.assets
    }

    /// Registers a new item, attaching the staged photo if one was uploaded.
    ///
    /// Rejects an empty name, discarding the staged asset first so the rejected
    /// request leaves no file behind.
    pub async fn create(
        &self,
        name: &str,
        description: &str,
        staged: Option<String>,
    ) -> Result<InventoryItem, InventoryError> {
        if name.trim().is_empty() {
            if let Some(asset) = staged {
                self.discard_logged(&asset).await;
            }
            return Err(InventoryError::validation("item name is required"));
        }

        // Counter only ever moves forward, so ids stay unique across deletes.
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let item = InventoryItem {
            id,
            name: name.to_string(),
            description: description.to_string(),
            photo_asset: staged,
        };
        self.items.insert(id, item.clone());

        tracing::info!("Created item {} ({})", id, item.name);
        Ok(item)
    }

    pub fn get(&self, id: u64) -> Option<InventoryItem> {
        self.items.get(&id).map(|entry| entry.value().clone())
    }

    /// All items in creation order.
    pub fn list(&self) -> Vec<InventoryItem> {
        let mut items: Vec<InventoryItem> = self
            .items
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by_key(|item| item.id);
        items
    }

    /// Replaces name and/or description. A `None` or empty value means "not
    /// supplied" and leaves the stored field unchanged; there is no way to clear
    /// a description to empty through update.
    pub fn update(
        &self,
        id: u64,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<InventoryItem, InventoryError> {
        let mut entry = self
            .items
            .get_mut(&id)
            .ok_or(InventoryError::NotFound(id))?;

        if let Some(name) = supplied(name) {
            entry.name = name;
        }
        if let Some(description) = supplied(description) {
            entry.description = description;
        }

        Ok(entry.value().clone())
    }

    /// Swaps the item's photo for a freshly staged upload.
    ///
    /// The previous asset is discarded best-effort once the record points at the
    /// new one. A missing upload is rejected, and an unknown id discards the
    /// staged file before the error returns.
    pub async fn replace_photo(
        &self,
        id: u64,
        staged: Option<String>,
    ) -> Result<InventoryItem, InventoryError> {
        let staged = match staged {
            Some(name) => name,
            None => return Err(InventoryError::validation("photo file is required")),
        };

        // Swap inside the entry guard, then discard outside it so no lock is
        // held across file I/O.
        let swapped = match self.items.get_mut(&id) {
            Some(mut entry) => {
                let old = entry.photo_asset.replace(staged);
                Ok((entry.value().clone(), old))
            }
            None => Err(staged),
        };

        match swapped {
            Ok((item, old)) => {
                if let Some(old) = old {
                    self.discard_logged(&old).await;
                }
                tracing::info!("Replaced photo for item {}", id);
                Ok(item)
            }
            Err(staged) => {
                // The upload was already on disk; drop it so the failed request
                // leaves no orphan.
                self.discard_logged(&staged).await;
                Err(InventoryError::NotFound(id))
            }
        }
    }

    /// Removes the record and discards its asset.
    ///
    /// Asset discard is best-effort: a filesystem failure is logged and the record
    /// is removed regardless, prioritizing metadata consistency over disk hygiene.
    pub async fn delete(&self, id: u64) -> Result<(), InventoryError> {
        let (_, item) = self.items.remove(&id).ok_or(InventoryError::NotFound(id))?;

        if let Some(asset) = &item.photo_asset {
            self.discard_logged(asset).await;
        }

        tracing::info!("Deleted item {} ({})", id, item.name);
        Ok(())
    }

    async fn discard_logged(&self, name: &str) {
        if let Err(err) = self.assets.discard(name).await {
            tracing::warn!("Failed to discard asset {}: {}", name, err);
        }
    }
}

/// Treats `None` and empty/whitespace strings alike as "field not supplied".
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
