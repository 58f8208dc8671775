//! Prompt loops for the column list and the ORDER BY specification.

use crate::{input::Console, labels::Label};
use model::{
    order::{OrderDir, OrderSpec},
    schema::Schema,
};
use std::io::{self, BufRead, Write};

/// The operator's answer to the column-list prompt, before validation;
/// the query builder verifies every explicit name on accumulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnsInput {
    Wildcard,
    Columns(Vec<String>),
}

/// Reads the comma-separated column list or the literal `*`.
pub fn read_columns<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<ColumnsInput> {
    let raw = console.prompt(Label::SelectColumns)?;
    if raw == "*" {
        return Ok(ColumnsInput::Wildcard);
    }
    let columns = raw.split(',').map(|col| col.trim().to_string()).collect();
    Ok(ColumnsInput::Columns(columns))
}

/// Reads the ORDER BY specification.
///
/// An empty column line skips ordering entirely. An unknown column, a
/// column/direction count mismatch, or an unparsable direction rejects
/// the whole specification and restarts the loop; unlike the predicate
/// chain, this sub-loop is retryable indefinitely because no partial
/// state is kept between attempts.
pub fn read_order_specs<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    schema: &Schema,
) -> io::Result<Vec<OrderSpec>> {
    loop {
        let raw_columns = console.prompt(Label::OrderColumns)?;
        if raw_columns.is_empty() {
            return Ok(Vec::new());
        }

        let columns: Vec<String> = raw_columns
            .split(',')
            .map(|col| col.trim().to_string())
            .collect();
        if columns.iter().any(|col| !schema.contains(col)) {
            console.print_line(Label::OrderInvalid)?;
            continue;
        }

        let raw_directions = console.prompt(Label::OrderDirections)?;
        let directions: Vec<OrderDir> = if raw_directions.is_empty() {
            // Omitted directions default every column to ascending.
            columns.iter().map(|_| OrderDir::Asc).collect()
        } else {
            match raw_directions
                .split(',')
                .map(|dir| dir.trim().parse())
                .collect::<Result<Vec<_>, _>>()
            {
                Ok(directions) => directions,
                Err(_) => {
                    console.print_line(Label::OrderInvalid)?;
                    continue;
                }
            }
        };

        if columns.len() != directions.len() {
            console.print_line(Label::OrderInvalid)?;
            continue;
        }

        let specs = columns
            .into_iter()
            .zip(directions)
            .map(|(column, direction)| OrderSpec::new(column, direction))
            .collect();
        return Ok(specs);
    }
}
