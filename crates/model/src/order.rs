use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderDir {
    Asc,
    Desc,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown order direction: {0}")]
pub struct UnknownOrderDir(pub String);

impl FromStr for OrderDir {
    type Err = UnknownOrderDir;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(OrderDir::Asc),
            "desc" => Ok(OrderDir::Desc),
            other => Err(UnknownOrderDir(other.to_string())),
        }
    }
}

impl fmt::Display for OrderDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDir::Asc => write!(f, "ASC"),
            OrderDir::Desc => write!(f, "DESC"),
        }
    }
}

/// One ORDER BY entry. The column must belong to the active schema;
/// the builder enforces that at accumulation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSpec {
    pub column: String,
    pub direction: OrderDir,
}

impl OrderSpec {
    pub fn new(column: impl Into<String>, direction: OrderDir) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_dir_parse() {
        assert_eq!("asc".parse(), Ok(OrderDir::Asc));
        assert_eq!("DESC".parse(), Ok(OrderDir::Desc));
        assert_eq!("Asc".parse(), Ok(OrderDir::Asc));
        assert_eq!(
            "ascending".parse::<OrderDir>(),
            Err(UnknownOrderDir("ascending".to_string()))
        );
        assert!("".parse::<OrderDir>().is_err());
    }

    #[test]
    fn test_order_dir_display() {
        assert_eq!(format!("{}", OrderDir::Asc), "ASC");
        assert_eq!(format!("{}", OrderDir::Desc), "DESC");
    }
}
