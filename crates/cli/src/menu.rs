//! The manipulate-data menu: reads a numeric command code and drives the
//! catalog, the interactive readers, the query builder, and the
//! paginated result display.

use crate::error::CliError;
use catalog::SchemaCatalog;
use console::{
    Console, Label,
    chain::{self, ChainOutcome},
    paginate::paginate,
    select::{self, ColumnsInput},
};
use model::{condition::Condition, operator::CompareOp};
use query::{builder::select::SelectBuilder, error::QueryError, renderer::render};
use std::io::{BufRead, Write};

const CHUNK_SIZE: usize = 10;
const SEPARATOR: &str = "======================================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowTables,
    DescribeTable,
    Select,
    Insert,
    Update,
    Delete,
    DropTable,
    Back,
}

impl MenuChoice {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(MenuChoice::ShowTables),
            2 => Some(MenuChoice::DescribeTable),
            3 => Some(MenuChoice::Select),
            4 => Some(MenuChoice::Insert),
            5 => Some(MenuChoice::Update),
            6 => Some(MenuChoice::Delete),
            7 => Some(MenuChoice::DropTable),
            8 => Some(MenuChoice::Back),
            _ => None,
        }
    }
}

/// The top-level menu loop. Returns when the operator chooses Back;
/// transport faults propagate out and end the process.
pub async fn run<C, R, W>(
    catalog: &C,
    console: &mut Console<R, W>,
    base_schema: &str,
) -> Result<(), CliError>
where
    C: SchemaCatalog,
    R: BufRead,
    W: Write,
{
    loop {
        let choice = console
            .prompt_code(Label::MenuInit)?
            .and_then(MenuChoice::from_code);
        let Some(choice) = choice else {
            console.print_line(Label::TryAgain)?;
            continue;
        };

        match choice {
            MenuChoice::ShowTables => run_show_tables(catalog, console, base_schema).await?,
            MenuChoice::DescribeTable => run_describe(catalog, console, base_schema).await?,
            MenuChoice::Select => run_select(catalog, console, base_schema).await?,
            MenuChoice::Insert
            | MenuChoice::Update
            | MenuChoice::Delete
            | MenuChoice::DropTable => console.print_line(Label::NotImplemented)?,
            MenuChoice::Back => return Ok(()),
        }
        console.write_line("")?;
    }
}

/// Lists the base schema's tables via `pg_catalog.pg_tables`, built
/// through the ordinary query pipeline.
async fn run_show_tables<C, R, W>(
    catalog: &C,
    console: &mut Console<R, W>,
    base_schema: &str,
) -> Result<(), CliError>
where
    C: SchemaCatalog,
    R: BufRead,
    W: Write,
{
    console.print_line(Label::ShowTablesHeader)?;
    let Some(schema) = catalog.lookup("pg_catalog", "pg_tables").await? else {
        console.print_line(Label::TableNotExists)?;
        console.print_line(Label::DescribeFailure)?;
        return Ok(());
    };

    let query = SelectBuilder::new(&schema)
        .column("tablename")?
        .conditions(vec![Condition::first(
            "schemaname",
            CompareOp::Eq,
            base_schema,
        )])
        .build()?;

    let rows = catalog.execute(&render(&query)).await?;
    for row in &rows {
        console.write_line(row)?;
    }
    Ok(())
}

async fn run_describe<C, R, W>(
    catalog: &C,
    console: &mut Console<R, W>,
    base_schema: &str,
) -> Result<(), CliError>
where
    C: SchemaCatalog,
    R: BufRead,
    W: Write,
{
    let table = console.prompt(Label::DescribeTableName)?;
    let Some(schema) = catalog.lookup(base_schema, &table).await? else {
        console.print_line(Label::TableNotExists)?;
        console.print_line(Label::DescribeFailure)?;
        return Ok(());
    };

    console.print_line(Label::DescribeHeader)?;
    for row in &schema.describes {
        console.write_line(row)?;
    }
    Ok(())
}

/// The SELECT command: schema lookup, projection, condition chain,
/// ordering, then render, execute, and paginate with chunk size 10.
async fn run_select<C, R, W>(
    catalog: &C,
    console: &mut Console<R, W>,
    base_schema: &str,
) -> Result<(), CliError>
where
    C: SchemaCatalog,
    R: BufRead,
    W: Write,
{
    let table = console.prompt(Label::SelectTableName)?;
    let Some(schema) = catalog.lookup(base_schema, &table).await? else {
        console.print_line(Label::TableNotExists)?;
        console.print_line(Label::SelectFailure)?;
        return Ok(());
    };

    let mut builder = SelectBuilder::new(&schema);
    builder = match select::read_columns(console)? {
        ColumnsInput::Wildcard => builder.wildcard()?,
        ColumnsInput::Columns(columns) => match apply_columns(builder, &columns) {
            Ok(builder) => builder,
            Err(QueryError::UnknownColumn(_)) => {
                console.print_line(Label::ColumnNotExists)?;
                console.print_line(Label::SelectFailure)?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        },
    };

    builder = match chain::read_chain(console, &schema)? {
        ChainOutcome::UnknownColumn(_) => {
            // The chain is left mid-entry; the whole command aborts.
            console.print_line(Label::ColumnNotExists)?;
            console.print_line(Label::SelectFailure)?;
            return Ok(());
        }
        ChainOutcome::Finished(conditions) | ChainOutcome::EarlyFinished(conditions) => {
            builder.conditions(conditions)
        }
    };

    // Order columns were already validated by the retry loop.
    for spec in select::read_order_specs(console, &schema)? {
        builder = builder.order(&spec.column, spec.direction)?;
    }

    let query = builder.build()?;
    let sql = render(&query);

    console.write_line(SEPARATOR)?;
    console.write_line(&schema.columns.join(" | "))?;
    console.write_line(SEPARATOR)?;
    console.write_line("")?;

    let rows = catalog.execute(&sql).await?;
    paginate(console, &rows, CHUNK_SIZE)?;
    Ok(())
}

fn apply_columns<'a>(
    builder: SelectBuilder<'a>,
    columns: &[String],
) -> Result<SelectBuilder<'a>, QueryError> {
    columns
        .iter()
        .try_fold(builder, |builder, column| builder.column(column))
}
