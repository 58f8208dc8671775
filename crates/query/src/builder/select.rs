use crate::{
    ast::{
        TableRef,
        select::{Projection, Select},
    },
    error::QueryError,
};
use model::{
    condition::Condition,
    order::{OrderDir, OrderSpec},
    schema::Schema,
};

#[derive(Debug, Clone, PartialEq)]
enum ProjectionAcc {
    Empty,
    Wildcard,
    Columns(Vec<String>),
}

/// Accumulates the fragments of a SELECT one prompt-answer at a time.
///
/// Every accumulation step validates against the active schema, so
/// `build()` is pure assembly: the only failures left there are
/// invariant violations that validation should have prevented, and
/// callers treat those as programmer errors rather than user errors.
#[derive(Debug)]
pub struct SelectBuilder<'a> {
    schema: &'a Schema,
    projection: ProjectionAcc,
    conditions: Vec<Condition>,
    order_by: Vec<OrderSpec>,
}

impl<'a> SelectBuilder<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            projection: ProjectionAcc::Empty,
            conditions: Vec::new(),
            order_by: Vec::new(),
        }
    }

    /// Selects the literal `*`. Mutually exclusive with explicit columns.
    pub fn wildcard(mut self) -> Result<Self, QueryError> {
        match self.projection {
            ProjectionAcc::Empty | ProjectionAcc::Wildcard => {
                self.projection = ProjectionAcc::Wildcard;
                Ok(self)
            }
            ProjectionAcc::Columns(_) => Err(QueryError::MixedProjection),
        }
    }

    /// Adds one explicit column, verified against the schema.
    pub fn column(mut self, name: &str) -> Result<Self, QueryError> {
        if !self.schema.contains(name) {
            return Err(QueryError::UnknownColumn(name.to_string()));
        }
        match &mut self.projection {
            ProjectionAcc::Empty => {
                self.projection = ProjectionAcc::Columns(vec![name.to_string()]);
                Ok(self)
            }
            ProjectionAcc::Columns(cols) => {
                cols.push(name.to_string());
                Ok(self)
            }
            ProjectionAcc::Wildcard => Err(QueryError::MixedProjection),
        }
    }

    /// Installs a finalized condition chain. Column membership was
    /// already enforced by the predicate-entry loop; the joiner
    /// invariant is re-checked in `build()`.
    pub fn conditions(mut self, chain: Vec<Condition>) -> Self {
        self.conditions = chain;
        self
    }

    /// Adds one ORDER BY entry, verified against the schema.
    pub fn order(mut self, column: &str, direction: OrderDir) -> Result<Self, QueryError> {
        if !self.schema.contains(column) {
            return Err(QueryError::UnknownColumn(column.to_string()));
        }
        self.order_by.push(OrderSpec::new(column, direction));
        Ok(self)
    }

    pub fn build(self) -> Result<Select, QueryError> {
        let projection = match self.projection {
            ProjectionAcc::Empty => return Err(QueryError::EmptyProjection),
            ProjectionAcc::Wildcard => Projection::Wildcard,
            ProjectionAcc::Columns(cols) => Projection::Columns(cols),
        };

        // First fragment untagged, every later one tagged.
        for (i, cond) in self.conditions.iter().enumerate() {
            let tagged = cond.joined_by.is_some();
            if (i == 0 && tagged) || (i > 0 && !tagged) {
                return Err(QueryError::MalformedChain(i));
            }
        }

        Ok(Select {
            table: TableRef::new(&self.schema.base_schema, &self.schema.table),
            projection,
            conditions: self.conditions,
            order_by: self.order_by,
        })
    }
}
