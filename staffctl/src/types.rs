//! Shared identifier types.

/// Identifier for an employee record. Assigned by storage on insert and
/// immutable thereafter; the sole lookup key for get/update/delete.
pub type EmployeeId = i64;
