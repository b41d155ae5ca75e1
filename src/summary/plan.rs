//! Estimated and profiled execution plan trees
//!
//! `Plan` is what the planner intends to run (EXPLAIN); `ProfiledPlan` is
//! what actually ran, with per-operator storage and row metrics (PROFILE).
//! The two are parallel but independent types: a profiled tree is not
//! guaranteed to be isomorphic to the estimated tree of the same query.
//!
//! Each parent owns its children. Child order is the order the producer
//! supplied and is never re-sorted or filtered.

use crate::value::{Value, ValueMap};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One operator of an estimated execution plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    operator: String,
    arguments: ValueMap,
    identifiers: Vec<String>,
    children: Vec<Plan>,
}

impl Plan {
    pub fn new(
        operator: impl Into<String>,
        arguments: ValueMap,
        identifiers: Vec<String>,
        children: Vec<Plan>,
    ) -> Self {
        Self {
            operator: operator.into(),
            arguments,
            identifiers,
            children,
        }
    }

    /// Name of the physical or logical operation
    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn arguments(&self) -> &ValueMap {
        &self.arguments
    }

    pub fn argument(&self, key: &str) -> Option<&Value> {
        self.arguments.get(key)
    }

    /// Variables bound at this step
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn children(&self) -> &[Plan] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first, parent before children
    pub fn iter(&self) -> impl Iterator<Item = &Plan> + '_ {
        self.iter_with_depth().map(|(_, node)| node)
    }

    /// Depth-first walk yielding each node with its depth (root = 0)
    pub fn iter_with_depth(&self) -> DepthFirst<'_, Plan> {
        DepthFirst::new(self, Plan::children)
    }

    pub fn node_count(&self) -> usize {
        self.iter().count()
    }
}

/// One operator of an executed plan, with runtime metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfiledPlan {
    operator: String,
    arguments: ValueMap,
    identifiers: Vec<String>,
    db_hits: u64,
    records: u64,
    children: Vec<ProfiledPlan>,
}

impl ProfiledPlan {
    pub fn new(
        operator: impl Into<String>,
        arguments: ValueMap,
        identifiers: Vec<String>,
        db_hits: u64,
        records: u64,
        children: Vec<ProfiledPlan>,
    ) -> Self {
        Self {
            operator: operator.into(),
            arguments,
            identifiers,
            db_hits,
            records,
            children,
        }
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn arguments(&self) -> &ValueMap {
        &self.arguments
    }

    pub fn argument(&self, key: &str) -> Option<&Value> {
        self.arguments.get(key)
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Storage-engine accesses attributed to this operator.
    /// Only comparable against other nodes of the same tree.
    pub fn db_hits(&self) -> u64 {
        self.db_hits
    }

    /// Rows produced by this operator
    pub fn records(&self) -> u64 {
        self.records
    }

    pub fn children(&self) -> &[ProfiledPlan] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProfiledPlan> + '_ {
        self.iter_with_depth().map(|(_, node)| node)
    }

    pub fn iter_with_depth(&self) -> DepthFirst<'_, ProfiledPlan> {
        DepthFirst::new(self, ProfiledPlan::children)
    }

    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Sum of db hits over the whole tree
    pub fn total_db_hits(&self) -> u64 {
        self.iter()
            .fold(0u64, |acc, node| acc.saturating_add(node.db_hits))
    }

    /// Sum of records produced over the whole tree
    pub fn total_records(&self) -> u64 {
        self.iter()
            .fold(0u64, |acc, node| acc.saturating_add(node.records))
    }
}

/// Pre-order depth-first iterator over a plan tree
///
/// Uses an explicit stack, so deep trees do not recurse.
pub struct DepthFirst<'a, T> {
    stack: Vec<(usize, &'a T)>,
    children: fn(&'a T) -> &'a [T],
}

impl<'a, T> DepthFirst<'a, T> {
    fn new(root: &'a T, children: fn(&'a T) -> &'a [T]) -> Self {
        Self {
            stack: vec![(0, root)],
            children,
        }
    }
}

impl<'a, T> Iterator for DepthFirst<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reversed so the first child is popped next
        for child in (self.children)(node).iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

fn write_operator_line(
    f: &mut fmt::Formatter<'_>,
    depth: usize,
    operator: &str,
    identifiers: &[String],
    arguments: &ValueMap,
) -> fmt::Result {
    write!(f, "{:indent$}+{}", "", operator, indent = depth * 2)?;
    if !identifiers.is_empty() {
        write!(f, " [{}]", identifiers.join(", "))?;
    }
    if !arguments.is_empty() {
        write!(f, " {}", Value::Map(arguments.clone()))?;
    }
    Ok(())
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (depth, node)) in self.iter_with_depth().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write_operator_line(f, depth, &node.operator, &node.identifiers, &node.arguments)?;
        }
        Ok(())
    }
}

impl fmt::Display for ProfiledPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (depth, node)) in self.iter_with_depth().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write_operator_line(f, depth, &node.operator, &node.identifiers, &node.arguments)?;
            write!(f, " (db hits: {}, records: {})", node.db_hits, node.records)?;
        }
        Ok(())
    }
}
