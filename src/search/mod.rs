//! Search / Projection Module
//!
//! The read side of the service: builds the client-facing view of an inventory
//! item and resolves lookup-by-id queries.
//!
//! ## Responsibilities
//! - **Projection**: Deriving the API representation of a record (id, name,
//!   description, optional photo URL). The URL is computed from the item id at
//!   projection time and never stored, so it can never go stale after a photo
//!   replacement.
//! - **Lookup**: Validating the client-supplied id and fetching the matching
//!   projection, with an opt-in flag controlling whether the photo URL is included.
//!
//! ## Submodules
//! - **`projection`**: Core projection and lookup logic.
//! - **`handlers`**: HTTP request handlers for the Axum web server (GET and POST).
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod handlers;
pub mod projection;
pub mod types;
