//! Where walk output goes
//!
//! The walker builds styled [`ratatui::text::Line`]s and hands them to a
//! [`Terminal`]:
//! - [`MockTerminal`]: records the plain text of every line (tests)
//! - [`stdout::StdoutTerminal`]: writes to stdout, colored only on a TTY
//!
//! [`format`] holds the line layouts and the escaping rules; [`theme`] the colors.

pub mod format;
pub mod stdout;
pub mod theme;

use ratatui::text::Line;
use std::io;

/// A sink for rendered lines
pub trait Terminal {
    fn emit(&mut self, line: Line<'_>) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Mock terminal for capturing walk output
#[derive(Debug, Clone, Default)]
pub struct MockTerminal {
    pub lines: Vec<String>,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal { lines: Vec::new() }
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> &[String] {
        &self.lines
    }
}

impl Terminal for MockTerminal {
    fn emit(&mut self, line: Line<'_>) -> io::Result<()> {
        self.lines.push(format::plain(&line));
        Ok(())
    }
}
