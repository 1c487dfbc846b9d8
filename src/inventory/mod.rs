//! Inventory Repository Module
//!
//! The record store at the center of the service. Keeps the in-memory collection of
//! inventory items consistent with the photo files held by the asset layer.
//!
//! ## Core Concepts
//! - **Id assignment**: A monotonic counter hands out strictly increasing ids. Ids are
//!   never reused, even after deletion.
//! - **Photo ownership**: A record's photo reference is owned by the repository, not
//!   the client. Every mutation that touches it (create, replace, delete) sequences
//!   the matching asset stage/discard before the response is produced, so a record
//!   never points at a file that is gone.
//! - **Cleanup on rejection**: A rejected creation or photo replacement discards the
//!   staged upload before the error is returned, leaving no orphan in the cache.
//!
//! ## Submodules
//! - **`repository`**: The `InventoryRepository` itself (create/get/list/update/delete).
//! - **`handlers`**: HTTP request handlers for the Axum web server, including
//!   multipart upload intake.
//! - **`types`**: Item record and Data Transfer Objects (DTOs) for API communication.

pub mod handlers;
pub mod repository;
pub mod types;
