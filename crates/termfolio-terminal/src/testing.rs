//! Recording test doubles for the display and link opener.

use crate::host::{Display, LinkOpener};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Write(String),
    Line(String),
    Clear,
}

/// Records every display call in order.
#[derive(Debug, Default)]
pub struct Transcript {
    pub ops: Vec<Op>,
}

impl Transcript {
    /// Everything written, rendered as text. Clears are ignored.
    pub fn full(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            match op {
                Op::Write(t) => out.push_str(t),
                Op::Line(t) => {
                    out.push_str(t);
                    out.push('\n');
                },
                Op::Clear => {},
            }
        }
        out
    }

    pub fn clears(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Clear).count()
    }

    /// Occurrences of `needle` across everything written.
    pub fn count(&self, needle: &str) -> usize {
        self.full().matches(needle).count()
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Display for Transcript {
    fn write_line(&mut self, text: &str) {
        self.ops.push(Op::Line(text.to_string()));
    }

    fn write(&mut self, text: &str) {
        self.ops.push(Op::Write(text.to_string()));
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
}

/// Records every URL it is asked to open.
#[derive(Debug, Default)]
pub struct Links {
    pub opened: Vec<String>,
}

impl LinkOpener for Links {
    fn open_external(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}
