//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx over SQLite.
//! It follows the Repository pattern to provide clean abstractions over
//! database operations.
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations for CRUD operations
//! - [`models`]: Database record structures matching table schemas
//! - [`errors`]: Database-specific error types
//!
//! # Repository Pattern
//!
//! The [`handlers`] module provides the repository trait and an
//! implementation for each database table. Repositories encapsulate all
//! database access for a specific entity type and are constructed from a
//! pooled connection:
//!
//! ```ignore
//! use staffctl::db::handlers::{Employees, Repository};
//!
//! let mut conn = pool.acquire().await?;
//! let mut repo = Employees::new(&mut conn);
//! let employee = repo.create(&create_request).await?;
//! ```
//!
//! # Migrations
//!
//! Database migrations are managed by SQLx and located in the `migrations/`
//! directory. The [`crate::migrator`] function provides access to the
//! migrator, which runs automatically on startup.

pub mod errors;
pub mod handlers;
pub mod models;
