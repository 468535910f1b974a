//! API request and response data models.
//!
//! These models define the public API contract and are distinct from the
//! database models in [`crate::db::models`]: the API speaks camelCase JSON
//! while storage uses snake_case columns, and the two may evolve
//! independently. All models are annotated with `utoipa` for the generated
//! API docs.

pub mod employees;
