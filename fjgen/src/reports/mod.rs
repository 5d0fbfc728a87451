//! Report data structures for commands.
//!
//! Operations build reports; commands print them through a [`Console`].

mod check;
mod console;
mod generate;
mod info;

pub use check::CheckReport;
pub use console::{Console, FileStatus, Report};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};
pub use info::{InfoReport, Stats};

/// Renders a report into memory, returning what went to stdout and stderr.
#[cfg(test)]
pub(crate) fn render_to_strings(report: &impl Report) -> (String, String) {
    let mut console = Console::new(Vec::new(), Vec::new());
    report.render(&mut console).unwrap();
    let (out, err) = console.into_parts();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}
