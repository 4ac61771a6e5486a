//! Display adapter over a raw-mode terminal.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use termfolio_terminal::Display;

/// Writes shell output to a terminal in raw mode.
///
/// Raw mode disables newline translation, so every `\n` is sent as `\r\n`.
/// Write failures are logged and dropped; the shell keeps running.
pub struct TerminalScreen<W: Write> {
    out: W,
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) -> io::Result<()> {
        if text.contains('\n') {
            self.out.write_all(text.replace('\n', "\r\n").as_bytes())?;
        } else {
            self.out.write_all(text.as_bytes())?;
        }
        self.out.flush()
    }
}

impl<W: Write> Display for TerminalScreen<W> {
    fn write_line(&mut self, text: &str) {
        if let Err(e) = self.emit(text).and_then(|()| self.emit("\n")) {
            log::warn!("screen write failed: {e}");
        }
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = self.emit(text) {
            log::warn!("screen write failed: {e}");
        }
    }

    fn clear(&mut self) {
        if let Err(e) = execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)) {
            log::warn!("screen clear failed: {e}");
        }
    }
}
