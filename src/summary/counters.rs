//! Mutation counters for a single statement execution

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tally of changes a statement made to the database
///
/// The eleven counts are independent of each other; no arithmetic
/// relationship between them is implied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counters {
    nodes_created: u64,
    nodes_deleted: u64,
    relationships_created: u64,
    relationships_deleted: u64,
    properties_set: u64,
    labels_added: u64,
    labels_removed: u64,
    indexes_added: u64,
    indexes_removed: u64,
    constraints_added: u64,
    constraints_removed: u64,
}

impl Counters {
    pub fn nodes_created(&self) -> u64 {
        self.nodes_created
    }

    pub fn nodes_deleted(&self) -> u64 {
        self.nodes_deleted
    }

    pub fn relationships_created(&self) -> u64 {
        self.relationships_created
    }

    pub fn relationships_deleted(&self) -> u64 {
        self.relationships_deleted
    }

    pub fn properties_set(&self) -> u64 {
        self.properties_set
    }

    pub fn labels_added(&self) -> u64 {
        self.labels_added
    }

    pub fn labels_removed(&self) -> u64 {
        self.labels_removed
    }

    pub fn indexes_added(&self) -> u64 {
        self.indexes_added
    }

    pub fn indexes_removed(&self) -> u64 {
        self.indexes_removed
    }

    pub fn constraints_added(&self) -> u64 {
        self.constraints_added
    }

    pub fn constraints_removed(&self) -> u64 {
        self.constraints_removed
    }

    pub fn with_nodes_created(mut self, count: u64) -> Self {
        self.nodes_created = count;
        self
    }

    pub fn with_nodes_deleted(mut self, count: u64) -> Self {
        self.nodes_deleted = count;
        self
    }

    pub fn with_relationships_created(mut self, count: u64) -> Self {
        self.relationships_created = count;
        self
    }

    pub fn with_relationships_deleted(mut self, count: u64) -> Self {
        self.relationships_deleted = count;
        self
    }

    pub fn with_properties_set(mut self, count: u64) -> Self {
        self.properties_set = count;
        self
    }

    pub fn with_labels_added(mut self, count: u64) -> Self {
        self.labels_added = count;
        self
    }

    pub fn with_labels_removed(mut self, count: u64) -> Self {
        self.labels_removed = count;
        self
    }

    pub fn with_indexes_added(mut self, count: u64) -> Self {
        self.indexes_added = count;
        self
    }

    pub fn with_indexes_removed(mut self, count: u64) -> Self {
        self.indexes_removed = count;
        self
    }

    pub fn with_constraints_added(mut self, count: u64) -> Self {
        self.constraints_added = count;
        self
    }

    pub fn with_constraints_removed(mut self, count: u64) -> Self {
        self.constraints_removed = count;
        self
    }

    /// Whether any counter is non-zero
    pub fn contains_updates(&self) -> bool {
        self.entries().iter().any(|(_, count)| *count > 0)
    }

    fn entries(&self) -> [(&'static str, u64); 11] {
        [
            ("nodes created", self.nodes_created),
            ("nodes deleted", self.nodes_deleted),
            ("relationships created", self.relationships_created),
            ("relationships deleted", self.relationships_deleted),
            ("properties set", self.properties_set),
            ("labels added", self.labels_added),
            ("labels removed", self.labels_removed),
            ("indexes added", self.indexes_added),
            ("indexes removed", self.indexes_removed),
            ("constraints added", self.constraints_added),
            ("constraints removed", self.constraints_removed),
        ]
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.contains_updates() {
            return write!(f, "no updates");
        }
        let mut first = true;
        for (name, count) in self.entries().iter().filter(|(_, c)| *c > 0) {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, count)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct_counters() -> Counters {
        Counters::default()
            .with_nodes_created(1)
            .with_nodes_deleted(2)
            .with_relationships_created(3)
            .with_relationships_deleted(4)
            .with_properties_set(5)
            .with_labels_added(6)
            .with_labels_removed(7)
            .with_indexes_added(8)
            .with_indexes_removed(9)
            .with_constraints_added(10)
            .with_constraints_removed(11)
    }

    #[test]
    fn test_fields_are_independent() {
        let c = distinct_counters();
        assert_eq!(c.nodes_created(), 1);
        assert_eq!(c.nodes_deleted(), 2);
        assert_eq!(c.relationships_created(), 3);
        assert_eq!(c.relationships_deleted(), 4);
        assert_eq!(c.properties_set(), 5);
        assert_eq!(c.labels_added(), 6);
        assert_eq!(c.labels_removed(), 7);
        assert_eq!(c.indexes_added(), 8);
        assert_eq!(c.indexes_removed(), 9);
        assert_eq!(c.constraints_added(), 10);
        assert_eq!(c.constraints_removed(), 11);
    }

    #[test]
    fn test_single_field_leaves_others_zero() {
        let c = Counters::default().with_properties_set(42);
        assert_eq!(c.properties_set(), 42);
        assert_eq!(c.nodes_created(), 0);
        assert_eq!(c.labels_added(), 0);
        assert_eq!(c.constraints_removed(), 0);
        assert!(c.contains_updates());
    }

    #[test]
    fn test_display() {
        assert_eq!(Counters::default().to_string(), "no updates");
        assert!(!Counters::default().contains_updates());

        let c = Counters::default()
            .with_nodes_created(3)
            .with_relationships_created(2);
        assert_eq!(c.to_string(), "nodes created: 3, relationships created: 2");
    }
}
