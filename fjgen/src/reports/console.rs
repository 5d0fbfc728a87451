//! Terminal rendering for command reports.

use std::{
    fmt::Display,
    io::{self, Stderr, Stdout, Write},
};

use fjgen_codegen::pipeline::Severity;

/// Width of the label column in [`Console::row`].
const LABEL_WIDTH: usize = 12;

/// A report that knows how to print itself.
pub trait Report {
    fn render<O: Write, E: Write>(&self, console: &mut Console<O, E>) -> io::Result<()>;
}

/// How a generated file ended up on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Written,
    Unchanged,
}

impl FileStatus {
    fn marker(self) -> char {
        match self {
            Self::Written => '+',
            Self::Unchanged => '=',
        }
    }
}

/// Report lines go to `out`; diagnostics go to `err` so piping the
/// dry-run source stays clean.
pub struct Console<O, E> {
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Indented title underlined to its own width.
    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "  {}", text)?;
        writeln!(self.out, "  {}", "─".repeat(text.chars().count()))
    }

    /// Indented label/value pair with aligned values.
    pub fn row(&mut self, label: &str, value: impl Display) -> io::Result<()> {
        writeln!(self.out, "  {:<width$}{}", label, value, width = LABEL_WIDTH)
    }

    pub fn file(&mut self, status: FileStatus, path: &str) -> io::Result<()> {
        writeln!(self.out, "  {} {}", status.marker(), path)
    }

    /// A generated source preceded by a divider naming its path.
    pub fn source(&mut self, path: &str, content: &str) -> io::Result<()> {
        writeln!(self.out, "── {} ──", path)?;
        write!(self.out, "{}", content)?;
        if !content.ends_with('\n') {
            writeln!(self.out)?;
        }
        Ok(())
    }

    pub fn diagnostic(&mut self, severity: Severity, message: &str) -> io::Result<()> {
        writeln!(self.err, "{}: {}", severity, message)
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}
