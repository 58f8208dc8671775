use crate::labels::Label;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// The single line-oriented input/output pair every prompt goes through.
///
/// Components take a `Console` instead of touching process-global
/// streams, so tests drive them with a `Cursor` and capture output in a
/// `Vec<u8>`. One value per line; reads block until the operator answers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Console::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    pub fn print(&mut self, label: Label) -> io::Result<()> {
        self.write(label.text())
    }

    pub fn print_line(&mut self, label: Label) -> io::Result<()> {
        self.write_line(label.text())
    }

    /// Reads one line with the trailing newline stripped. A closed input
    /// stream is an error: every caller needs an answer to continue.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    pub fn prompt(&mut self, label: Label) -> io::Result<String> {
        self.print(label)?;
        self.read_line()
    }

    /// Prompts for a numeric code; `None` when the answer does not parse.
    pub fn prompt_code(&mut self, label: Label) -> io::Result<Option<u32>> {
        Ok(self.prompt(label)?.trim().parse().ok())
    }
}
