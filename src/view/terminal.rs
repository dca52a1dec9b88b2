//! Terminal view: writes every render as a line of text.

use super::{Row, View};
use std::io::Write;

/// Line-oriented view over any writer (stdout in the binary).
///
/// Write errors are logged and otherwise ignored; a broken terminal must not
/// take the polling loop down with it.
pub struct TerminalView<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        let result = self
            .out
            .write_fmt(text)
            .and_then(|()| self.out.write_all(b"\n"))
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            tracing::warn!("Terminal write failed: {}", e);
        }
    }
}

impl<W: Write + Send> View for TerminalView<W> {
    fn set_text(&mut self, id: &str, text: &str) {
        self.line(format_args!("{}: {}", id, text));
    }

    fn clear(&mut self, container: &str) {
        self.line(format_args!("{}:", container));
    }

    fn append_row(&mut self, _container: &str, row: Row) {
        let cells: Vec<&str> = row.slots().iter().map(|(_, text)| text.as_str()).collect();
        self.line(format_args!("  {}", cells.join("  ")));
    }

    fn notify(&mut self, message: &str) {
        tracing::warn!("{}", message);
        self.line(format_args!("! {}", message));
    }
}
