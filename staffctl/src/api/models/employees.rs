//! API request/response models for employee records.

use crate::db::models::employees::EmployeeDBResponse;
use crate::types::EmployeeId;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for listing employees
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListEmployeesQuery {
    /// Filter employees by name or designation (case-insensitive substring match)
    pub search: Option<String>,
}

/// Request body for creating a new employee. The id is assigned by storage;
/// a client-supplied id is rejected.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    /// Must be absent or null on create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    /// Employee's display name
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    /// Employee's job title/role
    #[schema(example = "Engineer")]
    pub designation: String,
}

/// Request body for updating an existing employee. `id` selects the record;
/// omitted fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    /// Identifier of the employee to update
    pub id: EmployeeId,
    /// New display name (null to keep unchanged)
    #[schema(example = "Jane Smith")]
    pub full_name: Option<String>,
    /// New job title/role (null to keep unchanged)
    #[schema(example = "Staff Engineer")]
    pub designation: Option<String>,
}

/// Employee record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    /// Unique identifier, assigned by storage
    pub id: EmployeeId,
    /// Employee's display name
    pub full_name: String,
    /// Employee's job title/role
    pub designation: String,
}

impl From<EmployeeDBResponse> for EmployeeResponse {
    fn from(db: EmployeeDBResponse) -> Self {
        Self {
            id: db.id,
            full_name: db.full_name,
            designation: db.designation,
        }
    }
}
