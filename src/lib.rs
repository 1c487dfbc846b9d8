//! Inventory Tracking Service Library
//!
//! This library crate defines the core modules of the inventory service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`assets`**: The binary asset layer. Owns the on-disk cache directory and the
//!   lifecycle of uploaded photo files (stage, discard, read), keeping the directory
//!   free of orphaned files.
//! - **`inventory`**: The record store. An in-memory repository that assigns
//!   monotonically increasing item ids and coordinates with the asset layer so that
//!   every record's photo reference always points at an existing file.
//! - **`search`**: The read-side projection logic. Builds the client-facing view of
//!   an item (including the derived photo URL) and resolves lookup-by-id queries.

pub mod assets;
pub mod error;
pub mod inventory;
pub mod search;
