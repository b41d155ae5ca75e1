//! Executed statement and its classification

use crate::error::{SummaryError, SummaryResult};
use crate::value::{Value, ValueMap};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Classification of the executed statement
///
/// The set is closed: callers branch on every variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementType {
    #[default]
    Unknown,
    ReadOnly,
    ReadWrite,
    WriteOnly,
    SchemaWrite,
}

impl StatementType {
    /// Every variant, in code order
    pub const ALL: [StatementType; 5] = [
        StatementType::Unknown,
        StatementType::ReadOnly,
        StatementType::ReadWrite,
        StatementType::WriteOnly,
        StatementType::SchemaWrite,
    ];

    /// Numeric classification code (0..=4)
    pub fn code(&self) -> i64 {
        match self {
            StatementType::Unknown => 0,
            StatementType::ReadOnly => 1,
            StatementType::ReadWrite => 2,
            StatementType::WriteOnly => 3,
            StatementType::SchemaWrite => 4,
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, StatementType::ReadOnly)
    }

    /// Whether the statement may have changed data or schema
    pub fn has_writes(&self) -> bool {
        matches!(
            self,
            StatementType::ReadWrite | StatementType::WriteOnly | StatementType::SchemaWrite
        )
    }

    /// Get variant name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementType::Unknown => "Unknown",
            StatementType::ReadOnly => "ReadOnly",
            StatementType::ReadWrite => "ReadWrite",
            StatementType::WriteOnly => "WriteOnly",
            StatementType::SchemaWrite => "SchemaWrite",
        }
    }

    fn snake_case_name(&self) -> &'static str {
        match self {
            StatementType::Unknown => "unknown",
            StatementType::ReadOnly => "read_only",
            StatementType::ReadWrite => "read_write",
            StatementType::WriteOnly => "write_only",
            StatementType::SchemaWrite => "schema_write",
        }
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<i64> for StatementType {
    type Error = SummaryError;

    fn try_from(code: i64) -> SummaryResult<Self> {
        match code {
            0 => Ok(StatementType::Unknown),
            1 => Ok(StatementType::ReadOnly),
            2 => Ok(StatementType::ReadWrite),
            3 => Ok(StatementType::WriteOnly),
            4 => Ok(StatementType::SchemaWrite),
            other => {
                warn!("Rejected statement type code {}", other);
                Err(SummaryError::UnknownStatementTypeCode(other))
            }
        }
    }
}

/// Accepts the short server tags (`r`, `rw`, `w`, `s`) and variant names
/// in either `ReadWrite` or `read_write` spelling, ignoring ASCII case.
impl FromStr for StatementType {
    type Err = SummaryError;

    fn from_str(s: &str) -> SummaryResult<Self> {
        let name = s.trim();
        let parsed = match name {
            "r" => Some(StatementType::ReadOnly),
            "rw" => Some(StatementType::ReadWrite),
            "w" => Some(StatementType::WriteOnly),
            "s" => Some(StatementType::SchemaWrite),
            _ => StatementType::ALL.into_iter().find(|ty| {
                name.eq_ignore_ascii_case(ty.as_str())
                    || name.eq_ignore_ascii_case(ty.snake_case_name())
            }),
        };

        parsed.ok_or_else(|| {
            warn!("Rejected statement type {:?}", s);
            SummaryError::UnknownStatementType(s.to_string())
        })
    }
}

/// Query text and the parameters it was submitted with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    text: String,
    parameters: ValueMap,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameters: ValueMap::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: ValueMap) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parameters(&self) -> &ValueMap {
        &self.parameters
    }

    /// Look up a single parameter by name
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)?;
        if !self.parameters.is_empty() {
            write!(f, " {}", Value::Map(self.parameters.clone()))?;
        }
        Ok(())
    }
}
