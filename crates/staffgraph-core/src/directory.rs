//! The store-facing seam used by the HTTP layer.

use async_trait::async_trait;

use crate::error::Result;
use crate::query::ListQuery;
use crate::types::{
    DepartmentInfo, DepartmentSummary, Employee, EmployeeDraft, EmployeeSummary, NodeId,
    UpdatePolicy,
};

/// Employee/department directory operations.
///
/// Each call is one transaction against the backing store.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Employees joined to their department, filtered and optionally sorted.
    async fn list_employees(&self, query: &ListQuery) -> Result<Vec<Employee>>;

    /// Create an employee in the named department and return its id.
    async fn create_employee(&self, draft: &EmployeeDraft) -> Result<NodeId>;

    /// Overwrite an employee's attributes and department.
    async fn update_employee(
        &self,
        id: NodeId,
        draft: &EmployeeDraft,
        policy: UpdatePolicy,
    ) -> Result<()>;

    /// Delete an employee together with all of its relationships.
    async fn delete_employee(&self, id: NodeId) -> Result<()>;

    /// Direct reports of a manager (one outgoing `MANAGES` hop).
    async fn subordinates(&self, manager_id: NodeId) -> Result<Vec<EmployeeSummary>>;

    /// The department of an employee with its headcount.
    async fn department_info(&self, employee_id: NodeId) -> Result<DepartmentInfo>;

    /// Departments with headcounts, including empty ones.
    async fn list_departments(&self, query: &ListQuery) -> Result<Vec<DepartmentSummary>>;

    /// Employees working in a department.
    async fn department_employees(&self, department_id: NodeId) -> Result<Vec<EmployeeSummary>>;

    /// Round-trip to the store to check connectivity.
    async fn ping(&self) -> Result<()>;
}
