use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// PostgreSQL driver error. Connection- or schema-level faults are
    /// not recovered here; they propagate out of the current command.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
}
