//! Asset Store Module
//!
//! Owns the on-disk cache directory and the lifecycle of uploaded binary files.
//!
//! ## Core Concepts
//! - **Staging**: An uploaded file is written under a freshly generated opaque name
//!   before any record references it. If the owning operation is rejected, the staged
//!   file is discarded so no orphan survives the request.
//! - **Discard**: Removal of a named asset. Missing files are a no-op, never an error,
//!   so replace/delete paths can run cleanup unconditionally.
//! - **Injection**: The store is a capability trait (`AssetStore`), letting the
//!   repository be exercised against an in-memory fake in tests.

pub mod store;

#[cfg(test)]
mod tests;
