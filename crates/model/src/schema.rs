use serde::{Deserialize, Serialize};

/// Validated column list and display metadata for one database table.
///
/// Built once per top-level command from a catalog lookup and discarded
/// when the command finishes. `columns` preserves catalog ordinal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub base_schema: String,
    pub table: String,
    pub columns: Vec<String>,
    /// One formatted row per column, display-only.
    pub describes: Vec<String>,
}

impl Schema {
    pub fn new(
        base_schema: impl Into<String>,
        table: impl Into<String>,
        columns: Vec<String>,
        describes: Vec<String>,
    ) -> Self {
        Self {
            base_schema: base_schema.into(),
            table: table.into(),
            columns,
            describes,
        }
    }

    /// Exact, case-sensitive membership test against the column list.
    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}
