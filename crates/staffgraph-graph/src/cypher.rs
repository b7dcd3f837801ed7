//! Cypher statement builder for directory operations.
//!
//! Statements are assembled as plain text plus a parameter list so they can be
//! inspected without a database. Nothing supplied by an API caller is ever
//! spliced into the text: filter attribute names are bound through dynamic
//! property access (`emp[$filter_key_0]`), as are filter values and the sort
//! key.

use neo4rs::Query;

use staffgraph_core::{EmployeeDraft, ListQuery, NodeId};

/// A bound parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Str(String),
    Int(i64),
}

/// Cypher text with its bound parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub text: String,
    pub params: Vec<(String, Param)>,
}

impl Statement {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: Vec::new(),
        }
    }

    fn bind_str(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.push((key.to_string(), Param::Str(value.into())));
        self
    }

    fn bind_id(mut self, key: &str, id: NodeId) -> Self {
        self.params.push((key.to_string(), Param::Int(id.0)));
        self
    }

    /// Look up a bound parameter by name.
    pub fn param(&self, key: &str) -> Option<&Param> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Convert into a neo4rs query.
    pub fn into_query(self) -> Query {
        let mut q = neo4rs::query(&self.text);
        for (key, value) in self.params {
            q = match value {
                Param::Str(s) => q.param(&key, s),
                Param::Int(i) => q.param(&key, i),
            };
        }
        q
    }
}

/// Append `WHERE <alias>[$filter_key_N] = $filter_value_N AND ...` for every filter.
fn bind_filters(mut stmt: Statement, alias: &str, query: &ListQuery) -> Statement {
    if query.filters.is_empty() {
        return stmt;
    }

    let conditions: Vec<String> = (0..query.filters.len())
        .map(|i| format!("{alias}[$filter_key_{i}] = $filter_value_{i}"))
        .collect();
    stmt.text.push_str("\nWHERE ");
    stmt.text.push_str(&conditions.join(" AND "));

    for (i, (key, value)) in query.filters.iter().enumerate() {
        stmt = stmt
            .bind_str(&format!("filter_key_{i}"), key.clone())
            .bind_str(&format!("filter_value_{i}"), value.clone());
    }
    stmt
}

/// Append `ORDER BY <alias>[$sort_by]` when a sort key is present.
fn bind_sort(mut stmt: Statement, alias: &str, query: &ListQuery) -> Statement {
    match &query.sort_by {
        Some(key) => {
            stmt.text.push_str(&format!("\nORDER BY {alias}[$sort_by]"));
            stmt.bind_str("sort_by", key.clone())
        }
        None => stmt,
    }
}

// ── Reads ────────────────────────────────────────────────────────

pub fn list_employees(query: &ListQuery) -> Statement {
    let stmt = Statement::new("MATCH (emp:Employee)-[:WORKS_IN]->(dept:Department)");
    let mut stmt = bind_filters(stmt, "emp", query);
    stmt.text.push_str(
        "\nRETURN id(emp) AS id, emp.name AS name, emp.position AS position, dept.name AS department",
    );
    bind_sort(stmt, "emp", query)
}

pub fn list_departments(query: &ListQuery) -> Statement {
    let stmt = Statement::new("MATCH (dept:Department)");
    let mut stmt = bind_filters(stmt, "dept", query);
    stmt.text.push_str(
        "\nOPTIONAL MATCH (dept)<-[:WORKS_IN]-(emp:Employee)\
         \nWITH dept, count(emp) AS num_employees",
    );
    let mut stmt = bind_sort(stmt, "dept", query);
    stmt.text.push_str("\nRETURN dept.name AS name, num_employees");
    stmt
}

pub fn subordinates(manager_id: NodeId) -> Statement {
    Statement::new(
        "MATCH (manager:Employee)-[:MANAGES]->(sub:Employee)
WHERE id(manager) = $emp_id
RETURN id(sub) AS id, sub.name AS name, sub.position AS position",
    )
    .bind_id("emp_id", manager_id)
}

pub fn employee_department(employee_id: NodeId) -> Statement {
    Statement::new(
        "MATCH (emp:Employee)-[:WORKS_IN]->(dept:Department)
WHERE id(emp) = $emp_id
RETURN id(dept) AS dept_id, dept.name AS name
LIMIT 1",
    )
    .bind_id("emp_id", employee_id)
}

/// Headcount of a department plus the name of one arbitrary member.
pub fn department_headcount(department_id: NodeId) -> Statement {
    Statement::new(
        "MATCH (dept:Department)<-[:WORKS_IN]-(emp:Employee)
WHERE id(dept) = $dept_id
RETURN count(emp) AS num_employees, head(collect(emp.name)) AS manager",
    )
    .bind_id("dept_id", department_id)
}

pub fn department_employees(department_id: NodeId) -> Statement {
    Statement::new(
        "MATCH (dept:Department)<-[:WORKS_IN]-(emp:Employee)
WHERE id(dept) = $dept_id
RETURN id(emp) AS id, emp.name AS name, emp.position AS position",
    )
    .bind_id("dept_id", department_id)
}

pub fn department_exists(name: &str) -> Statement {
    Statement::new(
        "MATCH (dept:Department {name: $department})
RETURN count(dept) AS cnt",
    )
    .bind_str("department", name)
}

pub fn ping() -> Statement {
    Statement::new("RETURN 1 AS ok")
}

// ── Writes ───────────────────────────────────────────────────────

pub fn create_employee(draft: &EmployeeDraft) -> Statement {
    Statement::new(
        "MATCH (dept:Department {name: $department})
WITH dept LIMIT 1
CREATE (emp:Employee {name: $name, position: $position})-[:WORKS_IN]->(dept)
RETURN id(emp) AS id",
    )
    .bind_str("name", draft.name.clone())
    .bind_str("position", draft.position.clone())
    .bind_str("department", draft.department.clone())
}

/// Detach, overwrite, re-attach. The final MATCH silently drops the row when
/// the department is missing, leaving the employee without a department.
pub fn rewrite_employee(id: NodeId, draft: &EmployeeDraft) -> Statement {
    Statement::new(
        "MATCH (emp:Employee)
WHERE id(emp) = $emp_id
OPTIONAL MATCH (emp)-[old:WORKS_IN]->(:Department)
DELETE old
WITH DISTINCT emp
SET emp.name = $name, emp.position = $position
WITH emp
MATCH (dept:Department {name: $department})
WITH emp, dept LIMIT 1
MERGE (emp)-[:WORKS_IN]->(dept)",
    )
    .bind_id("emp_id", id)
    .bind_str("name", draft.name.clone())
    .bind_str("position", draft.position.clone())
    .bind_str("department", draft.department.clone())
}

/// Same rewrite, but only when both the employee and the department match.
/// Returns the employee id, or no row when nothing was changed.
pub fn validated_update(id: NodeId, draft: &EmployeeDraft) -> Statement {
    Statement::new(
        "MATCH (emp:Employee)
WHERE id(emp) = $emp_id
MATCH (dept:Department {name: $department})
WITH emp, dept LIMIT 1
OPTIONAL MATCH (emp)-[old:WORKS_IN]->(:Department)
DELETE old
WITH DISTINCT emp, dept
SET emp.name = $name, emp.position = $position
MERGE (emp)-[:WORKS_IN]->(dept)
RETURN id(emp) AS id",
    )
    .bind_id("emp_id", id)
    .bind_str("name", draft.name.clone())
    .bind_str("position", draft.position.clone())
    .bind_str("department", draft.department.clone())
}

pub fn delete_employee(id: NodeId) -> Statement {
    Statement::new(
        "MATCH (emp:Employee)
WHERE id(emp) = $emp_id
DETACH DELETE emp",
    )
    .bind_id("emp_id", id)
}
