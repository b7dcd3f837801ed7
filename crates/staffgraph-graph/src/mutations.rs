//! Write operations for the directory graph.
//!
//! Employees are the only nodes this layer mutates. Departments are matched
//! by exact name and never created here.

use neo4rs::Row;

use staffgraph_core::{EmployeeDraft, NodeId, UpdatePolicy};

use crate::client::{column, GraphClient, GraphError};
use crate::cypher;

impl GraphClient {
    /// Create an employee attached to the named department.
    ///
    /// Fails with `NotFound` and creates nothing when no department matches.
    pub async fn create_employee(&self, draft: &EmployeeDraft) -> Result<NodeId, GraphError> {
        let row = self
            .query_one(cypher::create_employee(draft).into_query())
            .await?
            .ok_or_else(|| GraphError::not_found("Department", &draft.department))?;

        let id = NodeId(column(&row, "id")?);
        tracing::debug!(%id, department = %draft.department, "Created employee");
        Ok(id)
    }

    /// Overwrite an employee's name, position and department.
    pub async fn update_employee(
        &self,
        id: NodeId,
        draft: &EmployeeDraft,
        policy: UpdatePolicy,
    ) -> Result<(), GraphError> {
        match policy {
            UpdatePolicy::Rewrite => {
                self.run(cypher::rewrite_employee(id, draft).into_query())
                    .await?;
            }
            UpdatePolicy::Validated => self.update_employee_validated(id, draft).await?,
        }

        tracing::debug!(%id, ?policy, department = %draft.department, "Updated employee");
        Ok(())
    }

    /// Check the department, then rewrite, all in one transaction.
    async fn update_employee_validated(
        &self,
        id: NodeId,
        draft: &EmployeeDraft,
    ) -> Result<(), GraphError> {
        let mut txn = self.begin().await?;

        let result = async {
            let exists = txn
                .first(cypher::department_exists(&draft.department).into_query())
                .await?;
            if !department_found(exists.as_ref())? {
                return Err(GraphError::not_found("Department", &draft.department));
            }

            txn.first(cypher::validated_update(id, draft).into_query())
                .await?
                .ok_or_else(|| GraphError::not_found("Employee", id))?;
            Ok(())
        }
        .await;

        txn.finish(result).await
    }

    /// Delete an employee and every relationship touching it.
    pub async fn delete_employee(&self, id: NodeId) -> Result<(), GraphError> {
        self.run(cypher::delete_employee(id).into_query()).await?;
        tracing::debug!(%id, "Deleted employee");
        Ok(())
    }
}

/// Read the `cnt` column of a department-existence check.
fn department_found(row: Option<&Row>) -> Result<bool, GraphError> {
    match row {
        Some(row) => Ok(column::<i64>(row, "cnt")? > 0),
        None => Ok(false),
    }
}
