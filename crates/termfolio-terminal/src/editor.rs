//! Line editor: one key event in, display writes out.
//!
//! The input line only grows and shrinks at its end. There is no cursor, no
//! history, and no selection.

use termfolio_types::input::{Key, KeyEvent};

use crate::completion::{AutocompleteResult, complete};
use crate::host::Host;
use crate::session::{NextPrompt, Session};

/// Move back, blank the cell, move back again.
const ERASE: &str = "\u{8} \u{8}";

/// What a single key press did to the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No binding, or nothing to do (Backspace on an empty line).
    Ignored,
    Inserted(char),
    Erased,
    /// The line was handed to the dispatcher. `deferred` means a scheduled
    /// task owns the next prompt.
    Submitted { deferred: bool },
    /// Tab replaced the line with its only completion.
    Completed,
    /// Tab printed two or more candidates.
    Listed,
    /// Tab found nothing. The key is still consumed.
    NoCompletion,
    /// The screen was cleared, by the shortcut or by submitting `clear`.
    /// No prompt follows.
    Cleared,
}

/// Apply one key event to `session`.
pub fn handle_key(session: &mut Session, event: &KeyEvent, host: &mut Host<'_>) -> KeyOutcome {
    if event.is_clear_shortcut() {
        host.display.clear();
        session.input.clear();
        return KeyOutcome::Cleared;
    }
    if let Some(ch) = event.printable() {
        session.input.push(ch);
        let mut buf = [0u8; 4];
        host.display.write(ch.encode_utf8(&mut buf));
        return KeyOutcome::Inserted(ch);
    }
    if event.modifiers.is_command() {
        return KeyOutcome::Ignored;
    }

    match event.key {
        Key::Backspace => {
            if session.input.pop().is_none() {
                return KeyOutcome::Ignored;
            }
            host.display.write(ERASE);
            KeyOutcome::Erased
        },
        Key::Enter => {
            host.display.write_line("");
            let line = std::mem::take(&mut session.input);
            match session.submit(line.trim(), host) {
                NextPrompt::Now => {
                    host.display.write(&session.prompt());
                    KeyOutcome::Submitted { deferred: false }
                },
                NextPrompt::Deferred => KeyOutcome::Submitted { deferred: true },
                NextPrompt::Suppressed => KeyOutcome::Cleared,
            }
        },
        Key::Tab => tab(session, host),
        Key::Char(_) | Key::Escape | Key::Other => KeyOutcome::Ignored,
    }
}

fn tab(session: &mut Session, host: &mut Host<'_>) -> KeyOutcome {
    match complete(&session.input) {
        AutocompleteResult::Completed(line) => {
            let echoed = session.input.chars().count();
            if echoed > 0 {
                host.display.write(&ERASE.repeat(echoed));
            }
            host.display.write(&line);
            session.input = line;
            KeyOutcome::Completed
        },
        AutocompleteResult::Candidates(list) => {
            host.display.write_line("");
            host.display.write_line(&list.join(" "));
            host.display.write(&session.prompt());
            host.display.write(&session.input);
            KeyOutcome::Listed
        },
        AutocompleteResult::NoMatch => KeyOutcome::NoCompletion,
    }
}
