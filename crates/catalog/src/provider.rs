use crate::error::CatalogError;
use async_trait::async_trait;
use model::schema::Schema;

/// One `information_schema.columns` row, in catalog ordinal order.
#[derive(Debug, Clone)]
pub struct ColumnRow {
    pub name: String,
    pub data_type: String,
    /// `YES` / `NO`, as reported by the catalog.
    pub is_nullable: String,
}

/// Catalog access as seen by the menu dispatcher.
///
/// A missing table is a normal negative outcome (`Ok(None)`), never an
/// error; callers report it and abort the current command. Transport
/// faults surface as `CatalogError` and are fatal for the command path.
#[async_trait]
pub trait SchemaCatalog {
    /// Looks up the named table and materializes its schema.
    async fn lookup(&self, base_schema: &str, table: &str)
    -> Result<Option<Schema>, CatalogError>;

    /// Executes rendered SELECT text and returns one display string per
    /// result row, column values joined by `", "`.
    async fn execute(&self, sql: &str) -> Result<Vec<String>, CatalogError>;
}

/// Assembles a `Schema` from catalog metadata rows. Zero rows means the
/// table does not exist.
pub fn schema_from_rows(base_schema: &str, table: &str, rows: Vec<ColumnRow>) -> Option<Schema> {
    if rows.is_empty() {
        return None;
    }
    let columns = rows.iter().map(|row| row.name.clone()).collect();
    let describes = rows
        .iter()
        .map(|row| format!("{} | {} | {}", row.name, row.data_type, row.is_nullable))
        .collect();
    Some(Schema::new(base_schema, table, columns, describes))
}
