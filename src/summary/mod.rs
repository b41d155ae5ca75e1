//! Result summary returned after a query completes
//!
//! A `ResultSummary` is assembled once, by whatever executed the query,
//! and handed to the caller as a read-only snapshot:
//! - server identity and the executed statement
//! - statement classification and mutation counters
//! - estimated plan (EXPLAIN/PROFILE) and profiled plan (PROFILE only)
//! - notifications, in the order the server emitted them
//! - time until the first result was available and until it was consumed

pub mod counters;
pub mod notification;
pub mod plan;
pub mod server;
pub mod statement;

pub use counters::Counters;
pub use notification::{InputPosition, Notification};
pub use plan::{DepthFirst, Plan, ProfiledPlan};
pub use server::ServerInfo;
pub use statement::{Statement, StatementType};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Post-execution report for one query
///
/// There is no way to change a summary once built; a new query yields a
/// new summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    server: ServerInfo,
    statement: Statement,
    statement_type: StatementType,
    counters: Counters,
    plan: Option<Plan>,
    profile: Option<ProfiledPlan>,
    notifications: Vec<Notification>,
    result_available_after: Duration,
    result_consumed_after: Duration,
}

impl ResultSummary {
    pub fn server(&self) -> &ServerInfo {
        &self.server
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn statement_type(&self) -> StatementType {
        self.statement_type
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Estimated plan, present only for explained or profiled queries
    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Profiled plan, present only for profiled queries
    pub fn profile(&self) -> Option<&ProfiledPlan> {
        self.profile.as_ref()
    }

    pub fn has_plan(&self) -> bool {
        self.plan.is_some()
    }

    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Time until the first record was available
    pub fn result_available_after(&self) -> Duration {
        self.result_available_after
    }

    /// Time until all records were consumed, measured independently
    pub fn result_consumed_after(&self) -> Duration {
        self.result_consumed_after
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Server: {}", self.server)?;
        writeln!(f, "Statement: {}", self.statement)?;
        writeln!(f, "Type: {}", self.statement_type)?;
        writeln!(f, "Counters: {}", self.counters)?;
        write!(
            f,
            "Available after: {} ms, consumed after: {} ms",
            self.result_available_after.as_millis(),
            self.result_consumed_after.as_millis()
        )?;
        for notification in &self.notifications {
            write!(f, "\nNotification: {}", notification)?;
        }
        if let Some(plan) = &self.plan {
            write!(f, "\nPlan:\n{}", plan)?;
        }
        if let Some(profile) = &self.profile {
            write!(f, "\nProfile:\n{}", profile)?;
        }
        Ok(())
    }
}

/// Assembles a `ResultSummary`
///
/// Every mandatory field is a `new` argument, so a summary can never be
/// observed without them. Plan, profile and notifications are optional.
#[derive(Debug, Clone)]
pub struct ResultSummaryBuilder {
    summary: ResultSummary,
}

impl ResultSummaryBuilder {
    pub fn new(
        server: ServerInfo,
        statement: Statement,
        statement_type: StatementType,
        counters: Counters,
        result_available_after: Duration,
        result_consumed_after: Duration,
    ) -> Self {
        Self {
            summary: ResultSummary {
                server,
                statement,
                statement_type,
                counters,
                plan: None,
                profile: None,
                notifications: Vec::new(),
                result_available_after,
                result_consumed_after,
            },
        }
    }

    pub fn plan(mut self, plan: Plan) -> Self {
        self.summary.plan = Some(plan);
        self
    }

    pub fn profile(mut self, profile: ProfiledPlan) -> Self {
        self.summary.profile = Some(profile);
        self
    }

    /// Append one notification after any already added
    pub fn notification(mut self, notification: Notification) -> Self {
        self.summary.notifications.push(notification);
        self
    }

    pub fn notifications(mut self, notifications: impl IntoIterator<Item = Notification>) -> Self {
        self.summary.notifications.extend(notifications);
        self
    }

    pub fn build(self) -> ResultSummary {
        let summary = self.summary;
        debug!(
            "Built result summary: type {}, {}, {} notifications, plan: {}, profile: {}",
            summary.statement_type,
            summary.counters,
            summary.notifications.len(),
            summary.plan.is_some(),
            summary.profile.is_some()
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueMap;

    fn builder() -> ResultSummaryBuilder {
        ResultSummaryBuilder::new(
            ServerInfo::new("localhost:7687", "Neo4j/3.4.0"),
            Statement::new("MATCH (n) RETURN n"),
            StatementType::ReadOnly,
            Counters::default(),
            Duration::from_millis(5),
            Duration::from_millis(2),
        )
    }

    fn scan_plan() -> Plan {
        Plan::new("AllNodesScan", ValueMap::new(), vec!["n".to_string()], vec![])
    }

    fn scan_profile() -> ProfiledPlan {
        ProfiledPlan::new("AllNodesScan", ValueMap::new(), vec!["n".to_string()], 3, 2, vec![])
    }

    #[test]
    fn test_mandatory_fields_round_trip() {
        let summary = builder().build();
        assert_eq!(summary.server().address(), "localhost:7687");
        assert_eq!(summary.server().version(), "Neo4j/3.4.0");
        assert_eq!(summary.statement().text(), "MATCH (n) RETURN n");
        assert_eq!(summary.statement_type(), StatementType::ReadOnly);
        assert_eq!(summary.counters(), &Counters::default());
        assert_eq!(summary.result_available_after(), Duration::from_millis(5));
        assert_eq!(summary.result_consumed_after(), Duration::from_millis(2));
        assert!(summary.notifications().is_empty());
    }

    #[test]
    fn test_plan_and_profile_presence_combinations() {
        let neither = builder().build();
        assert!(neither.plan().is_none() && neither.profile().is_none());

        let plan_only = builder().plan(scan_plan()).build();
        assert_eq!(plan_only.plan(), Some(&scan_plan()));
        assert!(plan_only.profile().is_none());

        let profile_only = builder().profile(scan_profile()).build();
        assert!(profile_only.plan().is_none());
        assert_eq!(profile_only.profile(), Some(&scan_profile()));

        let both = builder().plan(scan_plan()).profile(scan_profile()).build();
        assert!(both.has_plan());
        assert!(both.has_profile());
    }

    #[test]
    fn test_notifications_keep_order() {
        let info = Notification::new("code.info", "info", "", "INFORMATION");
        let warning = Notification::new("code.warn", "warn", "", "WARNING");
        let hint = Notification::new("code.hint", "hint", "", "INFORMATION");

        let summary = builder()
            .notification(info.clone())
            .notifications(vec![warning.clone(), hint.clone()])
            .build();

        assert_eq!(summary.notifications(), [info, warning, hint]);
    }

    #[test]
    fn test_display_report() {
        let summary = builder().plan(scan_plan()).build();
        let text = summary.to_string();
        assert!(text.starts_with("Server: Neo4j/3.4.0@localhost:7687\n"));
        assert!(text.contains("Type: ReadOnly"));
        assert!(text.contains("Counters: no updates"));
        assert!(text.contains("Available after: 5 ms, consumed after: 2 ms"));
        assert!(text.ends_with("Plan:\n+AllNodesScan [n]"));
        assert!(!text.contains("Profile:"));
    }
}
