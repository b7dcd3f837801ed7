//! Core domain types for the staffgraph directory.
//!
//! Nodes live in Neo4j and are identified by the database's internal node id.
//! The records here are the flattened shapes returned to API callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DirectoryError, Result};

// ── Identifiers ───────────────────────────────────────────────────

/// Internal Neo4j node identifier of an Employee or Department.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(pub i64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

// ── Records ───────────────────────────────────────────────────────

/// An employee joined to its department.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: NodeId,
    pub name: String,
    pub position: String,
    pub department: String,
}

/// An employee without department context (subordinates, department members).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeSummary {
    pub id: NodeId,
    pub name: String,
    pub position: String,
}

/// A department with the number of employees working in it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentSummary {
    pub name: String,
    pub num_employees: i64,
}

/// Department details resolved from one of its employees.
///
/// `manager` is the name of an arbitrary member of the department, not the
/// target of a `MANAGES` relationship.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentInfo {
    pub name: String,
    pub num_employees: i64,
    pub manager: Option<String>,
}

// ── Writes ────────────────────────────────────────────────────────

/// Raw create/update body as it arrives over the wire.
///
/// Every field is optional so that absence can be reported as
/// [`DirectoryError::MissingFields`] instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeFields {
    pub name: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
}

impl EmployeeFields {
    /// Check that all required fields are present. Null counts as absent.
    pub fn validate(self) -> Result<EmployeeDraft> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.position.is_none() {
            missing.push("position");
        }
        if self.department.is_none() {
            missing.push("department");
        }

        match (self.name, self.position, self.department) {
            (Some(name), Some(position), Some(department)) => Ok(EmployeeDraft {
                name,
                position,
                department,
            }),
            _ => Err(DirectoryError::MissingFields(missing)),
        }
    }
}

/// A validated create/update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub position: String,
    /// Name of the department to attach the employee to.
    pub department: String,
}

/// How an employee update handles a department that does not exist.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UpdatePolicy {
    /// Detach the old department, overwrite attributes, then attach the new
    /// department if it matches. A missing department leaves the employee
    /// without one.
    #[default]
    Rewrite,
    /// Require the department (and the employee) to exist before anything
    /// is changed.
    Validated,
}
