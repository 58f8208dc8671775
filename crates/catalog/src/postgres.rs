use crate::{
    error::CatalogError,
    provider::{ColumnRow, SchemaCatalog, schema_from_rows},
};
use async_trait::async_trait;
use model::schema::Schema;
use tokio_postgres::{Client, NoTls, SimpleQueryMessage};
use tracing::{error, info};

// The information_schema columns are typed as identifier domains; cast
// to text so the driver decodes them as plain strings.
const COLUMNS_QUERY: &str = "SELECT column_name::text, data_type::text, is_nullable::text \
     FROM information_schema.columns \
     WHERE table_schema = $1 AND table_name = $2 \
     ORDER BY ordinal_position";

/// Catalog and transport over a single PostgreSQL connection.
///
/// One blocking round trip per invocation; no pooling, retries, or
/// backoff. The connection handler runs on a spawned task for the
/// lifetime of the process.
pub struct PgCatalog {
    client: Client,
}

impl PgCatalog {
    pub async fn connect(conn_str: &str) -> Result<Self, CatalogError> {
        info!("Connecting to Postgres at '{conn_str}'");
        let (client, connection) = tokio_postgres::connect(conn_str, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("Postgres connection error: {e}");
            }
        });

        Ok(Self { client })
    }
}

#[async_trait]
impl SchemaCatalog for PgCatalog {
    async fn lookup(
        &self,
        base_schema: &str,
        table: &str,
    ) -> Result<Option<Schema>, CatalogError> {
        let rows = self
            .client
            .query(COLUMNS_QUERY, &[&base_schema, &table])
            .await?;

        let columns = rows
            .iter()
            .map(|row| ColumnRow {
                name: row.get(0),
                data_type: row.get(1),
                is_nullable: row.get(2),
            })
            .collect();

        Ok(schema_from_rows(base_schema, table, columns))
    }

    async fn execute(&self, sql: &str) -> Result<Vec<String>, CatalogError> {
        info!("Executing: {sql}");
        let messages = self.client.simple_query(sql).await?;

        // The simple-query protocol returns every value in text form,
        // which is exactly what the console displays.
        let rows = messages
            .iter()
            .filter_map(|message| match message {
                SimpleQueryMessage::Row(row) => {
                    let values: Vec<&str> =
                        (0..row.len()).map(|i| row.get(i).unwrap_or("")).collect();
                    Some(values.join(", "))
                }
                _ => None,
            })
            .collect();

        Ok(rows)
    }
}
