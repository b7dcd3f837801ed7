//! `Directory` implementation backed by Neo4j.

use async_trait::async_trait;

use staffgraph_core::error::Result;
use staffgraph_core::{
    DepartmentInfo, DepartmentSummary, Directory, Employee, EmployeeDraft, EmployeeSummary,
    ListQuery, NodeId, UpdatePolicy,
};

use crate::client::GraphClient;

#[async_trait]
impl Directory for GraphClient {
    async fn list_employees(&self, query: &ListQuery) -> Result<Vec<Employee>> {
        Ok(GraphClient::list_employees(self, query).await?)
    }

    async fn create_employee(&self, draft: &EmployeeDraft) -> Result<NodeId> {
        Ok(GraphClient::create_employee(self, draft).await?)
    }

    async fn update_employee(
        &self,
        id: NodeId,
        draft: &EmployeeDraft,
        policy: UpdatePolicy,
    ) -> Result<()> {
        Ok(GraphClient::update_employee(self, id, draft, policy).await?)
    }

    async fn delete_employee(&self, id: NodeId) -> Result<()> {
        Ok(GraphClient::delete_employee(self, id).await?)
    }

    async fn subordinates(&self, manager_id: NodeId) -> Result<Vec<EmployeeSummary>> {
        Ok(GraphClient::subordinates(self, manager_id).await?)
    }

    async fn department_info(&self, employee_id: NodeId) -> Result<DepartmentInfo> {
        Ok(GraphClient::department_info(self, employee_id).await?)
    }

    async fn list_departments(&self, query: &ListQuery) -> Result<Vec<DepartmentSummary>> {
        Ok(GraphClient::list_departments(self, query).await?)
    }

    async fn department_employees(&self, department_id: NodeId) -> Result<Vec<EmployeeSummary>> {
        Ok(GraphClient::department_employees(self, department_id).await?)
    }

    async fn ping(&self) -> Result<()> {
        Ok(GraphClient::ping(self).await?)
    }
}
