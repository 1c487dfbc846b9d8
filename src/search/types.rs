//! Search Data Types
//!
//! Defines the client-facing projection of an inventory item and the search
//! request parameters shared by the GET (query string) and POST (form) variants.

use serde::{Deserialize, Serialize};

/// The client-facing representation of an inventory item.
///
/// `photo_url` is omitted from the serialized body entirely when the item has no
/// photo (or the caller did not ask for it), rather than rendered as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemProjection {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Parameters for lookup-by-id, accepted as a query string or a posted form.
///
/// `id` arrives as raw text so that a missing or non-numeric value can be
/// rejected with 400 instead of a framework-level deserialization failure.
/// `photo` is the HTML-checkbox flag requesting the photo URL.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub id: Option<String>,
    pub photo: Option<String>,
}
