use crossterm::event::{KeyCode, KeyEvent as TermKeyEvent, KeyEventKind, KeyModifiers};
use termfolio_types::input::{Key, KeyEvent, Modifiers};

/// Result of reading a single terminal key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Forward this event to the shell session.
    Key(KeyEvent),
    /// Nothing to do (key release, repeat on some platforms).
    Skip,
    Quit,
}

/// Translate a crossterm key event.
///
/// Ctrl+C and Esc leave the program instead of reaching the shell.
pub fn translate(event: &TermKeyEvent) -> InputResult {
    if event.kind != KeyEventKind::Press {
        return InputResult::Skip;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => return InputResult::Quit,
        _ => {},
    }

    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        _ => Key::Other,
    };
    InputResult::Key(KeyEvent::new(key, modifiers(event.modifiers)))
}

fn modifiers(m: KeyModifiers) -> Modifiers {
    Modifiers {
        shift: m.contains(KeyModifiers::SHIFT),
        ctrl: m.contains(KeyModifiers::CONTROL),
        alt: m.contains(KeyModifiers::ALT),
        meta: m.intersects(KeyModifiers::SUPER | KeyModifiers::META),
    }
}
