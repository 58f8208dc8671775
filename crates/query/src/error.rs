use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// A selected, filtered, or ordered column is not part of the
    /// active schema.
    #[error("Column does not exist: {0}")]
    UnknownColumn(String),

    /// Explicit columns and the `*` wildcard were mixed in one build.
    #[error("Wildcard and explicit columns are mutually exclusive")]
    MixedProjection,

    /// `build()` was called before any column or wildcard was selected.
    #[error("No columns selected")]
    EmptyProjection,

    /// The condition chain violates the joiner invariant: the first
    /// fragment must be untagged and every later one tagged.
    #[error("Malformed condition chain at fragment {0}")]
    MalformedChain(usize),
}
