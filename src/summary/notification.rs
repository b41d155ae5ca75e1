//! Server-emitted diagnostics and their source locations

use crate::error::{SummaryError, SummaryResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A single point in the query text
///
/// `offset` is 0-based; `line` and `column` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct InputPosition {
    offset: usize,
    line: usize,
    column: usize,
}

// Deserialization goes through the same checks as `InputPosition::new`
#[derive(Deserialize)]
struct RawPosition {
    offset: usize,
    line: usize,
    column: usize,
}

impl TryFrom<RawPosition> for InputPosition {
    type Error = SummaryError;

    fn try_from(raw: RawPosition) -> SummaryResult<Self> {
        InputPosition::new(raw.offset, raw.line, raw.column)
    }
}

impl InputPosition {
    pub fn new(offset: usize, line: usize, column: usize) -> SummaryResult<Self> {
        if line == 0 || column == 0 {
            warn!("Rejected input position line {} column {}", line, column);
            return Err(SummaryError::InvalidPosition { line, column });
        }
        Ok(Self {
            offset,
            line,
            column,
        })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for InputPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (offset {})",
            self.line, self.column, self.offset
        )
    }
}

/// Diagnostic attached to a query by the server (e.g. a performance hint)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    code: String,
    title: String,
    description: String,
    /// Free-form classification such as "WARNING" or "INFORMATION"
    severity: String,
    /// Not every notification refers to a location in the query
    position: Option<InputPosition>,
}

impl Notification {
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            description: description.into(),
            severity: severity.into(),
            position: None,
        }
    }

    pub fn with_position(mut self, position: InputPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn severity(&self) -> &str {
        &self.severity
    }

    pub fn position(&self) -> Option<&InputPosition> {
        self.position.as_ref()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.code, self.title)?;
        if let Some(pos) = &self.position {
            write!(f, " at {}", pos)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNKNOWN_LABEL: &str = "Neo.ClientNotification.Statement.UnknownLabelWarning";

    #[test]
    fn test_position_accessors() {
        let pos = InputPosition::new(10, 1, 11).unwrap();
        assert_eq!(pos.offset(), 10);
        assert_eq!(pos.line(), 1);
        assert_eq!(pos.column(), 11);
        assert_eq!(pos.to_string(), "line 1, column 11 (offset 10)");
    }

    #[test]
    fn test_zero_line_or_column_rejected() {
        assert_eq!(
            InputPosition::new(0, 0, 0),
            Err(SummaryError::InvalidPosition { line: 0, column: 0 })
        );
        assert!(InputPosition::new(0, 1, 0).is_err());
        assert!(InputPosition::new(0, 1, 1).is_ok());
    }

    #[test]
    fn test_notification_without_position() {
        let n = Notification::new(
            UNKNOWN_LABEL,
            "The provided label is not in the database.",
            "One of the labels in your query is not available in the database",
            "WARNING",
        );
        assert_eq!(n.code(), UNKNOWN_LABEL);
        assert_eq!(n.severity(), "WARNING");
        assert!(n.position().is_none());
        assert_eq!(
            n.to_string(),
            format!("WARNING {}: The provided label is not in the database.", UNKNOWN_LABEL)
        );
    }

    #[test]
    fn test_notification_with_position() {
        let pos = InputPosition::new(10, 1, 11).unwrap();
        let n = Notification::new(UNKNOWN_LABEL, "title", "description", "WARNING")
            .with_position(pos);

        assert_eq!(n.position(), Some(&pos));
        assert_eq!(n.title(), "title");
        assert_eq!(n.description(), "description");
        assert!(n.to_string().ends_with("at line 1, column 11 (offset 10)"));
    }

    #[test]
    fn test_deserialize_validates_position() {
        let pos: InputPosition =
            serde_json::from_str(r#"{"offset": 4, "line": 2, "column": 3}"#).unwrap();
        assert_eq!(pos, InputPosition::new(4, 2, 3).unwrap());

        let bad = serde_json::from_str::<InputPosition>(r#"{"offset": 0, "line": 0, "column": 1}"#);
        assert!(bad.is_err());
    }
}
