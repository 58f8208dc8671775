//! Defines the AST for a SELECT query.

use crate::ast::TableRef;
use model::{condition::Condition, order::OrderSpec};
use serde::{Deserialize, Serialize};

/// The column list to be returned: the literal wildcard or a non-empty
/// set of validated names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    Wildcard,
    Columns(Vec<String>),
}

/// An assembled SELECT statement.
///
/// Immutable once built; rendered to text exactly once, executed and
/// discarded. Rendering order is projection, table, conditions in chain
/// order, then order-by in chain order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Select {
    /// The primary table for the query, e.g. `FROM public.users`.
    pub table: TableRef,

    /// The columns to be returned.
    pub projection: Projection,

    /// The WHERE chain; empty means no filter clause at all.
    pub conditions: Vec<Condition>,

    /// The ORDER BY entries; empty means no ordering clause.
    pub order_by: Vec<OrderSpec>,
}
