use catalog::CatalogError;
use query::error::QueryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// The console input stream failed or closed mid-prompt.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport fault from the catalog or query execution; fatal for
    /// the current command path.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Invariant violation inside query assembly. Validation happens at
    /// each accumulation step, so reaching this is a programmer error.
    #[error("Query assembly error: {0}")]
    Query(#[from] QueryError),
}
