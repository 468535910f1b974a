//! Database record structures.
//!
//! These models mirror table schemas and are distinct from the API models in
//! [`crate::api::models`], allowing the storage representation to evolve
//! independently of the public API contract.

pub mod employees;
