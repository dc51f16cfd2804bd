use serde::Serialize;

/// Successful result of parsing scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedScan {
    pub serial_number: String,
    pub link: Option<String>,
}

/// One row of the scan table. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: u32,
    pub serial_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// State of the scan input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputState {
    #[default]
    Idle,
    Composing(String),
}

impl InputState {
    pub fn text(&self) -> &str {
        match self {
            InputState::Idle => "",
            InputState::Composing(text) => text,
        }
    }

    pub fn from_text(text: String) -> Self {
        if text.is_empty() {
            InputState::Idle
        } else {
            InputState::Composing(text)
        }
    }
}

/// Keystrokes the dispatcher distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Enter,
    Space,
    Other,
}

impl Keystroke {
    /// Maps the text of a key event (Slint reports Return as `"\n"`).
    pub fn from_key_text(text: &str) -> Self {
        match text {
            "\n" | "\r" => Keystroke::Enter,
            " " => Keystroke::Space,
            _ => Keystroke::Other,
        }
    }
}
