use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::keybindings::{Action, KeyBindings};

pub enum InputResult {
    Continue,
    Quit,
    Action(Action),
    Char(char),
    Newline,
    Backspace,
    Paste(String),
}

/// The app has a single screen with the editor always focused, so every
/// key is either a bound chord or text input.
pub fn handle_input(event: Event, bindings: &KeyBindings) -> InputResult {
    match event {
        Event::Key(key_event) => handle_key(key_event, bindings),
        Event::Paste(text) => InputResult::Paste(text),
        _ => InputResult::Continue,
    }
}

fn handle_key(key: KeyEvent, bindings: &KeyBindings) -> InputResult {
    // Ignore key release events (kitty protocol terminals emit them)
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // Check for mapped action first
    if let Some(action) = bindings.get(&key) {
        if action == Action::Quit {
            return InputResult::Quit;
        }
        return InputResult::Action(action);
    }

    // Everything else is text input
    match key.code {
        // SHIFT produces capitals; CONTROL/ALT chords never type
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            InputResult::Char(c)
        }
        KeyCode::Enter => InputResult::Newline,
        KeyCode::Backspace => InputResult::Backspace,
        _ => InputResult::Continue,
    }
}
