//! Database request/response models for employee records.

use crate::types::EmployeeId;
use chrono::{DateTime, Utc};

/// Payload for inserting a new employee row. The id is never supplied here;
/// storage assigns it.
#[derive(Debug, Clone)]
pub struct EmployeeCreateDBRequest {
    pub full_name: String,
    pub designation: String,
}

/// Partial update for an existing employee. `None` leaves the column
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdateDBRequest {
    pub full_name: Option<String>,
    pub designation: Option<String>,
}

/// Employee row as returned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDBResponse {
    pub id: EmployeeId,
    pub full_name: String,
    pub designation: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
