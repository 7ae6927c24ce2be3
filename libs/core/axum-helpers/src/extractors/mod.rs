//! Custom extractors for Axum handlers.
//!
//! Reusable extractors that cut boilerplate and standardize boundary
//! error handling across the API.

pub mod uuid_path;
pub mod validated_json;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
