//! HTTP route table.
//!
//! Employee routes live under `/employees`, department routes under
//! `/departments`, plus `/health` for checking the database connection.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{departments, employees, health};
use crate::state::AppState;

/// Build the REST router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::check))
        .route("/employees", get(employees::list).post(employees::create))
        .route(
            "/employees/:id",
            put(employees::update).delete(employees::delete),
        )
        .route("/employees/:id/subordinates", get(employees::subordinates))
        .route("/employees/:id/department", get(employees::department))
        .route("/departments", get(departments::list))
        .route("/departments/:id/employees", get(departments::employees))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
