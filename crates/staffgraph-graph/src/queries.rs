//! Read operations for the directory graph.

use neo4rs::Row;

use staffgraph_core::{
    DepartmentInfo, DepartmentSummary, Employee, EmployeeSummary, ListQuery, NodeId,
};

use crate::client::{column, GraphClient, GraphError};
use crate::cypher;

impl GraphClient {
    // ── Employees ────────────────────────────────────────────────

    /// List employees joined to their department.
    pub async fn list_employees(&self, query: &ListQuery) -> Result<Vec<Employee>, GraphError> {
        tracing::debug!(
            filters = query.filters.len(),
            sort_by = ?query.sort_by,
            "Listing employees"
        );

        let rows = self
            .query_rows(cypher::list_employees(query).into_query())
            .await?;

        rows.iter().map(row_to_employee).collect()
    }

    /// Employees reachable from a manager over one `MANAGES` edge.
    pub async fn subordinates(
        &self,
        manager_id: NodeId,
    ) -> Result<Vec<EmployeeSummary>, GraphError> {
        let rows = self
            .query_rows(cypher::subordinates(manager_id).into_query())
            .await?;
        rows.iter().map(row_to_summary).collect()
    }

    // ── Departments ──────────────────────────────────────────────

    /// Resolve an employee's department, then count its members.
    ///
    /// Both reads share one transaction. `manager` is whichever member name
    /// the database collects first.
    pub async fn department_info(&self, employee_id: NodeId) -> Result<DepartmentInfo, GraphError> {
        let mut txn = self.begin().await?;

        let result = async {
            let dept = txn
                .first(cypher::employee_department(employee_id).into_query())
                .await?
                .ok_or_else(|| GraphError::not_found("Department of employee", employee_id))?;

            let dept_id = NodeId(column(&dept, "dept_id")?);
            let name: String = column(&dept, "name")?;

            let headcount = txn
                .first(cypher::department_headcount(dept_id).into_query())
                .await?;
            row_to_info(name, headcount.as_ref())
        }
        .await;

        txn.finish(result).await
    }

    /// List departments with headcounts, including empty departments.
    pub async fn list_departments(
        &self,
        query: &ListQuery,
    ) -> Result<Vec<DepartmentSummary>, GraphError> {
        tracing::debug!(
            filters = query.filters.len(),
            sort_by = ?query.sort_by,
            "Listing departments"
        );

        let rows = self
            .query_rows(cypher::list_departments(query).into_query())
            .await?;

        rows.iter().map(row_to_department).collect()
    }

    /// Employees working in a department.
    pub async fn department_employees(
        &self,
        department_id: NodeId,
    ) -> Result<Vec<EmployeeSummary>, GraphError> {
        let rows = self
            .query_rows(cypher::department_employees(department_id).into_query())
            .await?;
        rows.iter().map(row_to_summary).collect()
    }

    // ── Health ───────────────────────────────────────────────────

    /// Round-trip a trivial statement.
    pub async fn ping(&self) -> Result<(), GraphError> {
        self.query_one(cypher::ping().into_query()).await?;
        Ok(())
    }
}

// ── Row decoding ─────────────────────────────────────────────────
//
// A missing or mistyped column is a `Serialization` error, never a blank value.

fn row_to_employee(row: &Row) -> Result<Employee, GraphError> {
    Ok(Employee {
        id: NodeId(column(row, "id")?),
        name: column(row, "name")?,
        position: column(row, "position")?,
        department: column(row, "department")?,
    })
}

fn row_to_summary(row: &Row) -> Result<EmployeeSummary, GraphError> {
    Ok(EmployeeSummary {
        id: NodeId(column(row, "id")?),
        name: column(row, "name")?,
        position: column(row, "position")?,
    })
}

fn row_to_department(row: &Row) -> Result<DepartmentSummary, GraphError> {
    Ok(DepartmentSummary {
        name: column(row, "name")?,
        num_employees: column(row, "num_employees")?,
    })
}

/// `manager` is nullable; the headcount row vanishes if the department does.
fn row_to_info(name: String, headcount: Option<&Row>) -> Result<DepartmentInfo, GraphError> {
    let (num_employees, manager) = match headcount {
        Some(row) => (column(row, "num_employees")?, column(row, "manager")?),
        None => (0, None),
    };
    Ok(DepartmentInfo {
        name,
        num_employees,
        manager,
    })
}
