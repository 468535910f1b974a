//! Database repository for employee records.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::employees::{EmployeeCreateDBRequest, EmployeeDBResponse, EmployeeUpdateDBRequest},
};
use crate::types::EmployeeId;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection};
use tracing::instrument;

/// Filter for listing employees
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub search: Option<String>, // Case-insensitive substring search on name and designation
}

impl EmployeeFilter {
    pub fn with_search(mut self, search: String) -> Self {
        self.search = Some(search);
        self
    }
}

// Database entity model
#[derive(Debug, Clone, FromRow)]
struct Employee {
    id: EmployeeId,
    full_name: String,
    designation: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeDBResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name,
            designation: employee.designation,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

pub struct Employees<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Employees<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Employees<'c> {
    type CreateRequest = EmployeeCreateDBRequest;
    type UpdateRequest = EmployeeUpdateDBRequest;
    type Response = EmployeeDBResponse;
    type Id = EmployeeId;
    type Filter = EmployeeFilter;

    #[instrument(skip(self, request), fields(full_name = %request.full_name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        // id, created_at and updated_at come from column defaults
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (full_name, designation)
            VALUES (?, ?)
            RETURNING id, full_name, designation, created_at, updated_at
            "#,
        )
        .bind(&request.full_name)
        .bind(&request.designation)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(EmployeeDBResponse::from(employee))
    }

    #[instrument(skip(self), fields(employee_id = id), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, full_name, designation, created_at, updated_at FROM employees WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(employee.map(EmployeeDBResponse::from))
    }

    #[instrument(skip(self, filter), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        use sqlx::QueryBuilder;

        let mut query: QueryBuilder<sqlx::Sqlite> =
            QueryBuilder::new("SELECT id, full_name, designation, created_at, updated_at FROM employees");

        // Case-insensitive substring match on name or designation
        if let Some(ref search) = filter.search {
            let search_pattern = format!("%{}%", search.to_lowercase());
            query.push(" WHERE (LOWER(full_name) LIKE ");
            query.push_bind(search_pattern.clone());
            query.push(" OR LOWER(designation) LIKE ");
            query.push_bind(search_pattern);
            query.push(")");
        }

        query.push(" ORDER BY id");

        let employees = query.build_query_as::<Employee>().fetch_all(&mut *self.db).await?;

        Ok(employees.into_iter().map(EmployeeDBResponse::from).collect())
    }

    #[instrument(skip(self), fields(employee_id = id), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), fields(employee_id = id), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        // Atomic update with conditional field updates
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees SET
                full_name = COALESCE(?, full_name),
                designation = COALESCE(?, designation),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            RETURNING id, full_name, designation, created_at, updated_at
            "#,
        )
        .bind(&request.full_name)
        .bind(&request.designation)
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(EmployeeDBResponse::from(employee))
    }
}
