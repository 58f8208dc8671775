use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators available in a condition fragment.
///
/// Console code mapping: `1..=7` in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    Gt,
    Lt,
    Gte,
    Lte,
    Neq,
    Like,
}

impl CompareOp {
    /// Maps a console operator code to an operator; any code outside
    /// `1..=7` is `None` and the caller re-prompts.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(CompareOp::Eq),
            2 => Some(CompareOp::Gt),
            3 => Some(CompareOp::Lt),
            4 => Some(CompareOp::Gte),
            5 => Some(CompareOp::Lte),
            6 => Some(CompareOp::Neq),
            7 => Some(CompareOp::Like),
            _ => None,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Eq => write!(f, "="),
            CompareOp::Gt => write!(f, ">"),
            CompareOp::Lt => write!(f, "<"),
            CompareOp::Gte => write!(f, ">="),
            CompareOp::Lte => write!(f, "<="),
            CompareOp::Neq => write!(f, "!="),
            CompareOp::Like => write!(f, "LIKE"),
        }
    }
}

/// Logical operators joining two condition fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    And,
    Or,
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOp::And => write!(f, "AND"),
            LogicalOp::Or => write!(f, "OR"),
        }
    }
}

/// Answer to the "continue the chain?" prompt: join with a logical
/// operator or finish the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalChoice {
    Join(LogicalOp),
    Finish,
}

impl LogicalChoice {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(LogicalChoice::Join(LogicalOp::And)),
            2 => Some(LogicalChoice::Join(LogicalOp::Or)),
            3 => Some(LogicalChoice::Finish),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_op_codes() {
        assert_eq!(CompareOp::from_code(1), Some(CompareOp::Eq));
        assert_eq!(CompareOp::from_code(2), Some(CompareOp::Gt));
        assert_eq!(CompareOp::from_code(3), Some(CompareOp::Lt));
        assert_eq!(CompareOp::from_code(4), Some(CompareOp::Gte));
        assert_eq!(CompareOp::from_code(5), Some(CompareOp::Lte));
        assert_eq!(CompareOp::from_code(6), Some(CompareOp::Neq));
        assert_eq!(CompareOp::from_code(7), Some(CompareOp::Like));
        assert_eq!(CompareOp::from_code(0), None);
        assert_eq!(CompareOp::from_code(8), None);
    }

    #[test]
    fn test_compare_op_display() {
        assert_eq!(format!("{}", CompareOp::Eq), "=");
        assert_eq!(format!("{}", CompareOp::Gte), ">=");
        assert_eq!(format!("{}", CompareOp::Neq), "!=");
        assert_eq!(format!("{}", CompareOp::Like), "LIKE");
    }

    #[test]
    fn test_logical_choice_codes() {
        assert_eq!(
            LogicalChoice::from_code(1),
            Some(LogicalChoice::Join(LogicalOp::And))
        );
        assert_eq!(
            LogicalChoice::from_code(2),
            Some(LogicalChoice::Join(LogicalOp::Or))
        );
        assert_eq!(LogicalChoice::from_code(3), Some(LogicalChoice::Finish));
        assert_eq!(LogicalChoice::from_code(4), None);
    }

    #[test]
    fn test_logical_op_display() {
        assert_eq!(format!("{}", LogicalOp::And), "AND");
        assert_eq!(format!("{}", LogicalOp::Or), "OR");
    }
}
