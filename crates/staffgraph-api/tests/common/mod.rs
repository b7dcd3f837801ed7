//! In-memory `Directory` used to exercise the HTTP layer without Neo4j.
//!
//! Mirrors the graph semantics the Cypher statements implement: inner join on
//! `WORKS_IN` for employee listings, optional match for department counts,
//! detach-then-reattach on rewrite updates.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use staffgraph_api::{router, AppState};
use staffgraph_core::error::Result;
use staffgraph_core::{
    DepartmentInfo, DepartmentSummary, Directory, DirectoryError, Employee, EmployeeDraft,
    EmployeeSummary, ListQuery, NodeId, UpdatePolicy,
};

#[derive(Debug, Clone)]
struct EmployeeNode {
    name: String,
    position: String,
    works_in: Option<i64>,
}

impl EmployeeNode {
    fn attr(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(&self.name),
            "position" => Some(&self.position),
            _ => None,
        }
    }
}

#[derive(Default)]
struct Graph {
    next_id: i64,
    employees: BTreeMap<i64, EmployeeNode>,
    departments: BTreeMap<i64, String>,
    manages: Vec<(i64, i64)>,
}

impl Graph {
    fn allocate(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn department_named(&self, name: &str) -> Option<i64> {
        self.departments
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(id, _)| *id)
    }

    fn members(&self, dept_id: i64) -> impl Iterator<Item = (&i64, &EmployeeNode)> {
        self.employees
            .iter()
            .filter(move |(_, e)| e.works_in == Some(dept_id))
    }
}

#[derive(Default)]
pub struct MemoryDirectory {
    graph: Mutex<Graph>,
    offline: Mutex<bool>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_department(&self, name: &str) -> NodeId {
        let mut g = self.graph.lock().unwrap();
        let id = g.allocate();
        g.departments.insert(id, name.to_string());
        NodeId(id)
    }

    pub fn add_manages(&self, manager: NodeId, subordinate: NodeId) {
        self.graph.lock().unwrap().manages.push((manager.0, subordinate.0));
    }

    pub fn employee_count(&self) -> usize {
        self.graph.lock().unwrap().employees.len()
    }

    pub fn has_employee(&self, id: NodeId) -> bool {
        self.graph.lock().unwrap().employees.contains_key(&id.0)
    }

    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap() = offline;
    }

    fn check_online(&self) -> Result<()> {
        if *self.offline.lock().unwrap() {
            return Err(DirectoryError::Database("connection refused".into()));
        }
        Ok(())
    }
}

fn sort_key<'a>(attr: Option<&'a str>) -> (bool, &'a str) {
    // Cypher sorts nulls last in ascending order.
    (attr.is_none(), attr.unwrap_or_default())
}

#[async_trait]
impl Directory for MemoryDirectory {
    async fn list_employees(&self, query: &ListQuery) -> Result<Vec<Employee>> {
        self.check_online()?;
        let g = self.graph.lock().unwrap();

        let mut rows: Vec<(&EmployeeNode, Employee)> = g
            .employees
            .iter()
            .filter_map(|(id, e)| {
                let dept = g.departments.get(&e.works_in?)?;
                Some((
                    e,
                    Employee {
                        id: NodeId(*id),
                        name: e.name.clone(),
                        position: e.position.clone(),
                        department: dept.clone(),
                    },
                ))
            })
            .filter(|(e, _)| {
                query
                    .filters
                    .iter()
                    .all(|(k, v)| e.attr(k) == Some(v.as_str()))
            })
            .collect();

        if let Some(key) = &query.sort_by {
            rows.sort_by(|(a, _), (b, _)| sort_key(a.attr(key)).cmp(&sort_key(b.attr(key))));
        }

        Ok(rows.into_iter().map(|(_, e)| e).collect())
    }

    async fn create_employee(&self, draft: &EmployeeDraft) -> Result<NodeId> {
        self.check_online()?;
        let mut g = self.graph.lock().unwrap();
        let dept = g
            .department_named(&draft.department)
            .ok_or_else(|| DirectoryError::not_found("Department", &draft.department))?;

        let id = g.allocate();
        g.employees.insert(
            id,
            EmployeeNode {
                name: draft.name.clone(),
                position: draft.position.clone(),
                works_in: Some(dept),
            },
        );
        Ok(NodeId(id))
    }

    async fn update_employee(
        &self,
        id: NodeId,
        draft: &EmployeeDraft,
        policy: UpdatePolicy,
    ) -> Result<()> {
        self.check_online()?;
        let mut g = self.graph.lock().unwrap();
        let dept = g.department_named(&draft.department);

        if policy == UpdatePolicy::Validated {
            if dept.is_none() {
                return Err(DirectoryError::not_found("Department", &draft.department));
            }
            if !g.employees.contains_key(&id.0) {
                return Err(DirectoryError::not_found("Employee", id));
            }
        }

        if let Some(e) = g.employees.get_mut(&id.0) {
            e.name = draft.name.clone();
            e.position = draft.position.clone();
            e.works_in = dept;
        }
        Ok(())
    }

    async fn delete_employee(&self, id: NodeId) -> Result<()> {
        self.check_online()?;
        let mut g = self.graph.lock().unwrap();
        g.employees.remove(&id.0);
        g.manages.retain(|(m, s)| *m != id.0 && *s != id.0);
        Ok(())
    }

    async fn subordinates(&self, manager_id: NodeId) -> Result<Vec<EmployeeSummary>> {
        self.check_online()?;
        let g = self.graph.lock().unwrap();
        Ok(g.manages
            .iter()
            .filter(|(m, _)| *m == manager_id.0)
            .filter_map(|(_, s)| {
                g.employees.get(s).map(|e| EmployeeSummary {
                    id: NodeId(*s),
                    name: e.name.clone(),
                    position: e.position.clone(),
                })
            })
            .collect())
    }

    async fn department_info(&self, employee_id: NodeId) -> Result<DepartmentInfo> {
        self.check_online()?;
        let g = self.graph.lock().unwrap();
        let dept_id = g
            .employees
            .get(&employee_id.0)
            .and_then(|e| e.works_in)
            .filter(|d| g.departments.contains_key(d))
            .ok_or_else(|| DirectoryError::not_found("Department of employee", employee_id))?;

        let members: Vec<_> = g.members(dept_id).collect();
        Ok(DepartmentInfo {
            name: g.departments[&dept_id].clone(),
            num_employees: members.len() as i64,
            manager: members.first().map(|(_, e)| e.name.clone()),
        })
    }

    async fn list_departments(&self, query: &ListQuery) -> Result<Vec<DepartmentSummary>> {
        self.check_online()?;
        let g = self.graph.lock().unwrap();
        let attr = |name: &str, key: &str| -> Option<String> {
            (key == "name").then(|| name.to_string())
        };

        let mut rows: Vec<DepartmentSummary> = g
            .departments
            .iter()
            .filter(|(_, name)| {
                query
                    .filters
                    .iter()
                    .all(|(k, v)| attr(name, k).as_deref() == Some(v.as_str()))
            })
            .map(|(id, name)| DepartmentSummary {
                name: name.clone(),
                num_employees: g.members(*id).count() as i64,
            })
            .collect();

        if let Some(key) = &query.sort_by {
            rows.sort_by(|a, b| {
                let (ka, kb) = (attr(&a.name, key), attr(&b.name, key));
                sort_key(ka.as_deref()).cmp(&sort_key(kb.as_deref()))
            });
        }
        Ok(rows)
    }

    async fn department_employees(&self, department_id: NodeId) -> Result<Vec<EmployeeSummary>> {
        self.check_online()?;
        let g = self.graph.lock().unwrap();
        Ok(g.members(department_id.0)
            .map(|(id, e)| EmployeeSummary {
                id: NodeId(*id),
                name: e.name.clone(),
                position: e.position.clone(),
            })
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        self.check_online()
    }
}

// ── HTTP helpers ─────────────────────────────────────────────────

pub fn app(directory: Arc<MemoryDirectory>, policy: UpdatePolicy) -> Router {
    router(AppState::new(directory, policy))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}
