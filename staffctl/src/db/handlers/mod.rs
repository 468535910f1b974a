//! Repository implementations for database access.
//!
//! Each repository:
//! - Wraps a SQLx connection
//! - Provides strongly-typed CRUD operations
//! - Handles query construction and parameter binding
//! - Returns domain models from [`crate::db::models`]
//!
//! # Available Repositories
//!
//! - [`Employees`]: Employee record management

pub mod employees;
pub mod repository;

pub use employees::Employees;
pub use repository::Repository;
