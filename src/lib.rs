//! Graph query result summaries
//!
//! Immutable metadata describing what happened when a Cypher query ran:
//!
//! - `ServerInfo`: which server executed the query
//! - `Statement` / `StatementType`: what was run and how it is classified
//! - `Counters`: nodes, relationships, properties, labels, indexes and
//!   constraints touched
//! - `Plan` / `ProfiledPlan`: estimated and profiled operator trees
//! - `Notification` / `InputPosition`: server diagnostics
//! - `ResultSummary`: the aggregate of all of the above plus timings
//!
//! Summaries are produced by the query execution layer and read by callers.
//! They hold no interior mutability, so they can be shared across threads
//! freely.
//!
//! ## Example Usage
//!
//! ```rust
//! use graph_summary::{
//!     Counters, ResultSummaryBuilder, ServerInfo, Statement, StatementType,
//! };
//! use std::time::Duration;
//!
//! let summary = ResultSummaryBuilder::new(
//!     ServerInfo::new("localhost:7687", "5.13.0"),
//!     Statement::new("CREATE (a:Person)-[:KNOWS]->(b:Person)"),
//!     StatementType::WriteOnly,
//!     Counters::default()
//!         .with_nodes_created(2)
//!         .with_relationships_created(1)
//!         .with_labels_added(2),
//!     Duration::from_millis(3),
//!     Duration::from_millis(1),
//! )
//! .build();
//!
//! assert!(summary.counters().contains_updates());
//! assert!(summary.plan().is_none());
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod summary;
pub mod value;

// Re-export main types for convenience
pub use error::{SummaryError, SummaryResult};

pub use summary::{
    Counters, DepthFirst, InputPosition, Notification, Plan, ProfiledPlan, ResultSummary,
    ResultSummaryBuilder, ServerInfo, Statement, StatementType,
};

pub use value::{Value, ValueMap};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }

    #[test]
    fn test_summary_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResultSummary>();
        assert_send_sync::<Plan>();
        assert_send_sync::<ProfiledPlan>();
        assert_send_sync::<Value>();
    }
}
