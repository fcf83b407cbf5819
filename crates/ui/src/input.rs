//! Maps raw input to the two things a learner can ask for.

use dioxus::prelude::{Code, Key};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Click, Space or Enter.
    Advance,
    /// Escape or `q`.
    Quit,
}

/// Intent for a key press, or `None` for keys the app ignores.
#[must_use]
pub fn intent_for_key(key: &Key, code: Code) -> Option<Intent> {
    match key {
        Key::Escape => Some(Intent::Quit),
        Key::Enter => Some(Intent::Advance),
        Key::Character(value) => match value.as_str() {
            " " => Some(Intent::Advance),
            "q" | "Q" => Some(Intent::Quit),
            _ => None,
        },
        _ if code == Code::Space => Some(Intent::Advance),
        _ => None,
    }
}
