//! `/departments` handlers.

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    Json,
};
use serde::Serialize;

use staffgraph_core::{DepartmentSummary, EmployeeSummary, ListQuery, NodeId};

use crate::{error::HttpError, state::AppState};

#[derive(Debug, Serialize)]
pub struct DepartmentsResponse {
    pub departments: Vec<DepartmentSummary>,
}

#[derive(Debug, Serialize)]
pub struct DepartmentEmployeesResponse {
    pub department_employees: Vec<EmployeeSummary>,
}

/// `GET /departments?{attr}={value}&sort_by={attr}`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<DepartmentsResponse>, HttpError> {
    let query = ListQuery::from_params(params);
    let departments = state.directory.list_departments(&query).await?;
    Ok(Json(DepartmentsResponse { departments }))
}

/// `GET /departments/{id}/employees`
pub async fn employees(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DepartmentEmployeesResponse>, HttpError> {
    let Path(id) = path?;
    let department_employees = state.directory.department_employees(NodeId(id)).await?;
    Ok(Json(DepartmentEmployeesResponse {
        department_employees,
    }))
}
