//! Employee identity and roster types.
//!
//! This module defines the EmployeeId token and the Roster, the authoritative
//! set of employees reported on by a reconciliation run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An opaque employee identifier.
///
/// Equality is exact string match; any trimming or quote-stripping happens in
/// the export loaders before an id reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        EmployeeId(value.to_string())
    }
}

impl From<String> for EmployeeId {
    fn from(value: String) -> Self {
        EmployeeId(value)
    }
}

/// The authoritative set of employees for a reconciliation run.
///
/// Employees in the leave export but absent from the roster are excluded from
/// analysis; employees in the roster but absent from the export are reported
/// as having no leave. Iteration order is the sorted id order, which fixes the
/// report's employee order across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    ids: BTreeSet<EmployeeId>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee id to the roster.
    ///
    /// Returns true if the id was not already present.
    pub fn insert(&mut self, id: EmployeeId) -> bool {
        self.ids.insert(id)
    }

    /// Returns true if the roster contains the given id.
    pub fn contains(&self, id: &EmployeeId) -> bool {
        self.ids.contains(id)
    }

    /// Returns the number of employees in the roster.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over the employee ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &EmployeeId> {
        self.ids.iter()
    }
}

impl FromIterator<EmployeeId> for Roster {
    fn from_iter<T: IntoIterator<Item = EmployeeId>>(iter: T) -> Self {
        Roster {
            ids: iter.into_iter().collect(),
        }
    }
}
