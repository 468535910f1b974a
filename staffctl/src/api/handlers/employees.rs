use crate::api::Json;
use crate::api::models::employees::{EmployeeCreate, EmployeeResponse, EmployeeUpdate, ListEmployeesQuery};
use crate::db::errors::DbError;
use crate::db::handlers::{Employees, Repository, employees::EmployeeFilter};
use crate::db::models::employees::{EmployeeCreateDBRequest, EmployeeUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::types::EmployeeId;
use crate::AppState;
use axum::extract::{Path, Query, State};

#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    summary = "List employees",
    params(ListEmployeesQuery),
    responses(
        (status = 200, description = "List of employees", body = Vec<EmployeeResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListEmployeesQuery>,
) -> Result<Json<Vec<EmployeeResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Employees::new(&mut conn);

    let mut filter = EmployeeFilter::default();
    if let Some(search) = query.search {
        filter = filter.with_search(search);
    }

    let employees = repo.list(&filter).await?;
    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    summary = "Create employee",
    request_body = EmployeeCreate,
    responses(
        (status = 200, description = "Employee saved", body = String),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_employee(State(state): State<AppState>, Json(create): Json<EmployeeCreate>) -> Result<&'static str> {
    if create.id.is_some() {
        return Err(Error::BadRequest {
            message: "id must not be set on create; it is assigned by storage".to_string(),
        });
    }

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Employees::new(&mut conn);

    let request = EmployeeCreateDBRequest {
        full_name: create.full_name,
        designation: create.designation,
    };
    repo.create(&request).await?;

    Ok("Employee saved")
}

#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    summary = "Get employee",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee details", body = EmployeeResponse),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_employee(State(state): State<AppState>, Path(id): Path<EmployeeId>) -> Result<Json<EmployeeResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Employees::new(&mut conn);

    match repo.get_by_id(id).await? {
        Some(employee) => Ok(Json(EmployeeResponse::from(employee))),
        None => Err(Error::NotFound {
            resource: "Employee".to_string(),
            id: id.to_string(),
        }),
    }
}

#[utoipa::path(
    put,
    path = "/employees",
    tag = "employees",
    summary = "Update employee",
    request_body = EmployeeUpdate,
    responses(
        (status = 200, description = "Employee updated", body = String),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_employee(State(state): State<AppState>, Json(update): Json<EmployeeUpdate>) -> Result<&'static str> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Employees::new(&mut conn);

    let request = EmployeeUpdateDBRequest {
        full_name: update.full_name,
        designation: update.designation,
    };

    match repo.update(update.id, &request).await {
        Ok(_) => Ok("Employee updated"),
        Err(DbError::NotFound) => Err(Error::NotFound {
            resource: "Employee".to_string(),
            id: update.id.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "employees",
    summary = "Delete employee",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee deleted", body = String),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_employee(State(state): State<AppState>, Path(id): Path<EmployeeId>) -> Result<&'static str> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Employees::new(&mut conn);

    // Deleting an absent id is a 404, not a silent no-op
    if repo.delete(id).await? {
        Ok("Employee deleted")
    } else {
        Err(Error::NotFound {
            resource: "Employee".to_string(),
            id: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::api::models::employees::EmployeeResponse;
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::SqlitePool;

    #[test_log::test(sqlx::test)]
    async fn test_create_employee_returns_confirmation(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server
            .post("/employees")
            .json(&json!({"fullName": "Jane Doe", "designation": "Engineer"}))
            .await;

        response.assert_status_ok();
        assert_eq!(response.text(), "Employee saved");
    }

    #[sqlx::test]
    async fn test_create_rejects_client_supplied_id(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server
            .post("/employees")
            .json(&json!({"id": 42, "fullName": "Jane Doe", "designation": "Engineer"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[sqlx::test]
    async fn test_create_with_missing_field_is_bad_request(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.post("/employees").json(&json!({"fullName": "Jane Doe"})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[sqlx::test]
    async fn test_create_with_malformed_body_is_bad_request(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server
            .post("/employees")
            .text("{not json")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[sqlx::test]
    async fn test_get_employee_returns_created_record(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        server
            .post("/employees")
            .json(&json!({"fullName": "Jane Doe", "designation": "Engineer"}))
            .await
            .assert_status_ok();

        let response = server.get("/employees/1").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body, json!({"id": 1, "fullName": "Jane Doe", "designation": "Engineer"}));
    }

    #[sqlx::test]
    async fn test_get_absent_employee_is_not_found(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.get("/employees/9999").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    async fn test_list_employees_returns_all(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        for (name, designation) in [("Ada Lovelace", "Engineer"), ("Grace Hopper", "Admiral"), ("Jane Doe", "Engineer")] {
            server
                .post("/employees")
                .json(&json!({"fullName": name, "designation": designation}))
                .await
                .assert_status_ok();
        }

        let response = server.get("/employees").await;
        response.assert_status_ok();

        let employees: Vec<EmployeeResponse> = response.json();
        assert_eq!(employees.len(), 3);

        let names: std::collections::HashSet<_> = employees.iter().map(|e| e.full_name.as_str()).collect();
        assert_eq!(names, ["Ada Lovelace", "Grace Hopper", "Jane Doe"].into_iter().collect());
    }

    #[sqlx::test]
    async fn test_list_employees_with_search(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        for (name, designation) in [("Ada Lovelace", "Engineer"), ("Grace Hopper", "Admiral")] {
            server
                .post("/employees")
                .json(&json!({"fullName": name, "designation": designation}))
                .await
                .assert_status_ok();
        }

        let response = server.get("/employees").add_query_param("search", "admiral").await;
        response.assert_status_ok();

        let employees: Vec<EmployeeResponse> = response.json();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].full_name, "Grace Hopper");
    }

    #[sqlx::test]
    async fn test_update_employee_overwrites_fields(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        server
            .post("/employees")
            .json(&json!({"fullName": "Jane Doe", "designation": "Engineer"}))
            .await
            .assert_status_ok();

        let response = server
            .put("/employees")
            .json(&json!({"id": 1, "fullName": "Jane Smith", "designation": "Staff Engineer"}))
            .await;
        response.assert_status_ok();
        assert_eq!(response.text(), "Employee updated");

        let body: serde_json::Value = server.get("/employees/1").await.json();
        assert_eq!(body, json!({"id": 1, "fullName": "Jane Smith", "designation": "Staff Engineer"}));
    }

    #[sqlx::test]
    async fn test_update_with_partial_body_keeps_other_fields(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        server
            .post("/employees")
            .json(&json!({"fullName": "Jane Doe", "designation": "Engineer"}))
            .await
            .assert_status_ok();

        let response = server
            .put("/employees")
            .json(&json!({"id": 1, "designation": "Principal Engineer"}))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = server.get("/employees/1").await.json();
        assert_eq!(body, json!({"id": 1, "fullName": "Jane Doe", "designation": "Principal Engineer"}));
    }

    #[sqlx::test]
    async fn test_update_absent_employee_is_not_found(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server
            .put("/employees")
            .json(&json!({"id": 9999, "fullName": "Nobody", "designation": "Ghost"}))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    async fn test_delete_employee_removes_record(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        server
            .post("/employees")
            .json(&json!({"fullName": "Jane Doe", "designation": "Engineer"}))
            .await
            .assert_status_ok();

        let response = server.delete("/employees/1").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "Employee deleted");

        server.get("/employees/1").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    async fn test_delete_absent_employee_is_not_found(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.delete("/employees/9999").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}
