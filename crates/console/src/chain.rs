//! The predicate-entry loop: column, operator, value, then the logical
//! operator that decides whether the chain continues.

use crate::{input::Console, labels::Label};
use model::{
    condition::Condition,
    operator::{CompareOp, LogicalChoice, LogicalOp},
    schema::Schema,
};
use std::io::{self, BufRead, Write};

/// Terminal state of the predicate-entry loop.
///
/// `Finished` and `EarlyFinished` are equally valid end states and
/// callers proceed identically on both; only `UnknownColumn` aborts the
/// enclosing command, because the operator is left mid-chain with no way
/// to redo just the bad fragment. I/O faults surface separately as
/// `io::Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainOutcome {
    /// The loop ended with the FINISH code.
    Finished(Vec<Condition>),
    /// An empty column line ended the loop; fragments already built are
    /// kept (an empty chain and a partial chain are both legal).
    EarlyFinished(Vec<Condition>),
    /// A column was entered that the active schema does not contain.
    UnknownColumn(String),
}

/// Runs the predicate-entry state machine against the active schema.
///
/// The logical operator chosen in iteration i joins the fragment built
/// in iteration i+1, not the fragment just completed, so the choice is
/// carried forward explicitly rather than derived from chain indices.
pub fn read_chain<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    schema: &Schema,
) -> io::Result<ChainOutcome> {
    let mut chain: Vec<Condition> = Vec::new();
    let mut carried: Option<LogicalOp> = None;

    loop {
        let column = console.prompt(Label::ConditionColumn)?;
        if column.is_empty() {
            return Ok(ChainOutcome::EarlyFinished(chain));
        }
        if !schema.contains(&column) {
            return Ok(ChainOutcome::UnknownColumn(column));
        }

        // Operator code 1..=7; anything else re-prompts indefinitely.
        let op = loop {
            if let Some(op) = console
                .prompt_code(Label::ConditionOperator)?
                .and_then(CompareOp::from_code)
            {
                break op;
            }
            console.print_line(Label::TryAgain)?;
        };

        // The value is taken verbatim, no escaping or quoting.
        console.print(Label::ConditionValue)?;
        console.write(&format!(" ({column} {op} ?) : "))?;
        let value = console.read_line()?;

        // Logical code 1..=3; anything else re-prompts indefinitely.
        let choice = loop {
            if let Some(choice) = console
                .prompt_code(Label::ConditionLogical)?
                .and_then(LogicalChoice::from_code)
            {
                break choice;
            }
            console.print_line(Label::TryAgain)?;
        };

        // Tagged with the PREVIOUS iteration's choice; the one made just
        // now joins the next fragment, if any.
        chain.push(Condition {
            column,
            op,
            value,
            joined_by: carried,
        });

        match choice {
            LogicalChoice::Finish => return Ok(ChainOutcome::Finished(chain)),
            LogicalChoice::Join(joiner) => carried = Some(joiner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn users_schema() -> Schema {
        Schema::new(
            "public",
            "users",
            vec!["id".to_string(), "name".to_string()],
            vec![],
        )
    }

    fn run_chain(input: &str) -> ChainOutcome {
        let schema = users_schema();
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        read_chain(&mut console, &schema).unwrap()
    }

    #[test]
    fn test_single_fragment_is_untagged() {
        let outcome = run_chain("name\n1\nbob\n3\n");
        assert_eq!(
            outcome,
            ChainOutcome::Finished(vec![Condition::first("name", CompareOp::Eq, "bob")])
        );
    }

    #[test]
    fn test_joiner_is_carried_to_the_next_fragment() {
        // id > 5, joined OR; name LIKE %a%, finish.
        let outcome = run_chain("id\n2\n5\n2\nname\n7\n%a%\n3\n");
        assert_eq!(
            outcome,
            ChainOutcome::Finished(vec![
                Condition::first("id", CompareOp::Gt, "5"),
                Condition::joined(LogicalOp::Or, "name", CompareOp::Like, "%a%"),
            ])
        );
    }

    #[test]
    fn test_three_fragments_keep_their_own_tags() {
        let outcome = run_chain("id\n2\n5\n2\nname\n7\n%a%\n1\nid\n5\n100\n3\n");
        assert_eq!(
            outcome,
            ChainOutcome::Finished(vec![
                Condition::first("id", CompareOp::Gt, "5"),
                Condition::joined(LogicalOp::Or, "name", CompareOp::Like, "%a%"),
                Condition::joined(LogicalOp::And, "id", CompareOp::Lte, "100"),
            ])
        );
    }

    #[test]
    fn test_empty_first_column_finishes_early_with_empty_chain() {
        assert_eq!(run_chain("\n"), ChainOutcome::EarlyFinished(vec![]));
    }

    #[test]
    fn test_empty_column_mid_chain_keeps_built_fragments() {
        let outcome = run_chain("id\n1\n5\n1\n\n");
        assert_eq!(
            outcome,
            ChainOutcome::EarlyFinished(vec![Condition::first("id", CompareOp::Eq, "5")])
        );
    }

    #[test]
    fn test_unknown_column_aborts_regardless_of_position() {
        assert_eq!(
            run_chain("email\n"),
            ChainOutcome::UnknownColumn("email".to_string())
        );
        assert_eq!(
            run_chain("id\n1\n5\n1\nemail\n"),
            ChainOutcome::UnknownColumn("email".to_string())
        );
    }

    #[test]
    fn test_bad_operator_codes_reprompt_until_valid() {
        // "x" fails to parse, "9" is unmapped, then 2 = '>'.
        let outcome = run_chain("id\nx\n9\n2\n5\n3\n");
        assert_eq!(
            outcome,
            ChainOutcome::Finished(vec![Condition::first("id", CompareOp::Gt, "5")])
        );
    }

    #[test]
    fn test_bad_logical_codes_reprompt_until_valid() {
        let outcome = run_chain("id\n1\n5\nzz\n0\n3\n");
        assert_eq!(
            outcome,
            ChainOutcome::Finished(vec![Condition::first("id", CompareOp::Eq, "5")])
        );
    }

    #[test]
    fn test_value_prompt_echoes_the_pending_fragment() {
        let schema = users_schema();
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new(b"name\n7\n%a%\n3\n".to_vec()), &mut output);
        read_chain(&mut console, &schema).unwrap();
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("(name LIKE ?) : "));
    }
}
