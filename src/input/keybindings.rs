use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Everything a key chord can do. Plain printable keys never map here —
/// they always type into the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Tone selection
    PrevTone,
    NextTone,

    // Workflow
    Rewrite,
    CopyRewritten,
    ClearInput,
    DismissError,
    LoadExample,

    Quit,
}

pub struct KeyBindings {
    bindings: HashMap<KeyEvent, Action>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut map = HashMap::new();

        // Tone selection
        map.insert(key_code(KeyCode::Left), Action::PrevTone);
        map.insert(key_code(KeyCode::Right), Action::NextTone);

        // Workflow
        map.insert(ctrl_key('r'), Action::Rewrite);
        map.insert(ctrl_key('y'), Action::CopyRewritten);
        map.insert(ctrl_key('l'), Action::ClearInput);
        map.insert(ctrl_key('e'), Action::LoadExample);
        map.insert(key_code(KeyCode::Esc), Action::DismissError);

        map.insert(ctrl_key('q'), Action::Quit);
        map.insert(ctrl_key('c'), Action::Quit);

        Self { bindings: map }
    }

    pub fn get(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings.get(event).copied()
    }

    /// Key hints for the help bar, most important first.
    pub fn hints() -> &'static [(&'static str, &'static str)] {
        &[
            ("^R", "rewrite"),
            ("←/→", "tone"),
            ("^Y", "copy"),
            ("^L", "clear"),
            ("^E", "example"),
            ("Esc", "dismiss error"),
            ("^Q", "quit"),
        ]
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
