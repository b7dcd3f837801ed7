//! `/employees` handlers: listing, create/update/delete, subordinates and
//! the department summary for one employee.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Serialize;

use staffgraph_core::{
    DepartmentInfo, Employee, EmployeeFields, EmployeeSummary, ListQuery, NodeId,
};

use super::StatusResponse;
use crate::{error::HttpError, state::AppState};

#[derive(Debug, Serialize)]
pub struct EmployeesResponse {
    pub employees: Vec<Employee>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub status: &'static str,
    pub id: NodeId,
}

#[derive(Debug, Serialize)]
pub struct SubordinatesResponse {
    pub subordinates: Vec<EmployeeSummary>,
}

#[derive(Debug, Serialize)]
pub struct DepartmentInfoResponse {
    pub department_info: DepartmentInfo,
}

/// `GET /employees?{attr}={value}&sort_by={attr}`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<EmployeesResponse>, HttpError> {
    let query = ListQuery::from_params(params);
    let employees = state.directory.list_employees(&query).await?;
    Ok(Json(EmployeesResponse { employees }))
}

/// `POST /employees`
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<EmployeeFields>, JsonRejection>,
) -> Result<Json<CreatedResponse>, HttpError> {
    let Json(fields) = body?;
    let draft = fields.validate()?;

    let id = state.directory.create_employee(&draft).await?;
    tracing::info!(%id, department = %draft.department, "Employee created");

    Ok(Json(CreatedResponse {
        status: "success",
        id,
    }))
}

/// `PUT /employees/{id}`
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<EmployeeFields>, JsonRejection>,
) -> Result<Json<StatusResponse>, HttpError> {
    let Path(id) = path?;
    let Json(fields) = body?;
    let draft = fields.validate()?;

    state
        .directory
        .update_employee(NodeId(id), &draft, state.update_policy)
        .await?;
    tracing::info!(id, department = %draft.department, "Employee updated");

    Ok(Json(StatusResponse::success()))
}

/// `DELETE /employees/{id}`
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<StatusResponse>, HttpError> {
    let Path(id) = path?;
    state.directory.delete_employee(NodeId(id)).await?;
    tracing::info!(id, "Employee deleted");
    Ok(Json(StatusResponse::success()))
}

/// `GET /employees/{id}/subordinates`
pub async fn subordinates(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<SubordinatesResponse>, HttpError> {
    let Path(id) = path?;
    let subordinates = state.directory.subordinates(NodeId(id)).await?;
    Ok(Json(SubordinatesResponse { subordinates }))
}

/// `GET /employees/{id}/department`
pub async fn department(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DepartmentInfoResponse>, HttpError> {
    let Path(id) = path?;
    let department_info = state.directory.department_info(NodeId(id)).await?;
    Ok(Json(DepartmentInfoResponse { department_info }))
}
