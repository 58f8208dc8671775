use crate::{input::Console, labels::Label};
use std::io::{self, BufRead, Write};

/// Prints `rows` in consecutive chunks of at most `chunk_size`, pausing
/// for one acknowledgment read between chunks whenever more than one
/// chunk exists, and closes with the row-count summary line.
///
/// `chunk_size` must be positive. Zero rows prints only the summary.
pub fn paginate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    rows: &[String],
    chunk_size: usize,
) -> io::Result<()> {
    let chunks: Vec<&[String]> = rows.chunks(chunk_size).collect();

    for (i, chunk) in chunks.iter().enumerate() {
        for row in *chunk {
            console.write_line(row)?;
        }
        if i + 1 < chunks.len() {
            // The answer carries no meaning; the read itself is the pacing.
            console.prompt(Label::PressEnter)?;
        }
    }

    console.write_line(&format!("<{} rows selected>", rows.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn rows(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("row-{i}")).collect()
    }

    fn run(rows: &[String], chunk_size: usize, acks: &str) -> (String, usize) {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new(acks.as_bytes().to_vec()), &mut output);
        paginate(&mut console, rows, chunk_size).unwrap();
        let printed = String::from_utf8(output).unwrap();
        let waits = printed.matches(Label::PressEnter.text()).count();
        (printed, waits)
    }

    #[test]
    fn test_23_rows_in_chunks_of_10_wait_twice() {
        let rows = rows(23);
        let (printed, waits) = run(&rows, 10, "\n\n");
        assert_eq!(waits, 2);
        assert_eq!(printed.matches("row-").count(), 23);
        assert!(printed.ends_with("<23 rows selected>\n"));
    }

    #[test]
    fn test_single_chunk_never_waits() {
        let rows = rows(10);
        let (printed, waits) = run(&rows, 10, "");
        assert_eq!(waits, 0);
        assert!(printed.ends_with("<10 rows selected>\n"));
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_wait() {
        let rows = rows(20);
        let (_, waits) = run(&rows, 10, "\n");
        assert_eq!(waits, 1);
    }

    #[test]
    fn test_zero_rows_prints_only_the_summary() {
        let (printed, waits) = run(&[], 10, "");
        assert_eq!(waits, 0);
        assert_eq!(printed, "<0 rows selected>\n");
    }

    #[test]
    fn test_rows_keep_their_order_across_chunks() {
        let rows = rows(5);
        let (printed, _) = run(&rows, 2, "\n\n");
        let positions: Vec<usize> = rows
            .iter()
            .map(|row| printed.find(row.as_str()).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}
