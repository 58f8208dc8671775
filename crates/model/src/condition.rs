use crate::operator::{CompareOp, LogicalOp};
use serde::{Deserialize, Serialize};

/// One filter predicate in a condition chain.
///
/// `joined_by` is the logical operator linking this fragment to its
/// predecessor: `None` exactly for the first fragment of a chain, `Some`
/// for every later one. The value is carried verbatim into the rendered
/// SQL, unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub column: String,
    pub op: CompareOp,
    pub value: String,
    pub joined_by: Option<LogicalOp>,
}

impl Condition {
    pub fn first(column: impl Into<String>, op: CompareOp, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
            joined_by: None,
        }
    }

    pub fn joined(
        joiner: LogicalOp,
        column: impl Into<String>,
        op: CompareOp,
        value: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
            joined_by: Some(joiner),
        }
    }
}
