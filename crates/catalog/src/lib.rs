pub mod error;
pub mod postgres;
pub mod provider;

pub use error::CatalogError;
pub use postgres::PgCatalog;
pub use provider::SchemaCatalog;
