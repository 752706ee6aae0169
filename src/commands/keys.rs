use crate::error::{VaadinError, VaadinResult};

/// Key sequences dispatched for the named arrow keys.
pub const ARROW_LEFT: &str = "\\37";
pub const ARROW_UP: &str = "\\38";
pub const ARROW_RIGHT: &str = "\\39";
pub const ARROW_DOWN: &str = "\\40";

/// Translate an arrow key name (`left`, `right`, `up`, `down`, any case) into
/// its key sequence. Anything else is returned unchanged.
pub fn arrow_key_sequence(value: &str) -> &str {
    match value.to_lowercase().as_str() {
        "left" => ARROW_LEFT,
        "right" => ARROW_RIGHT,
        "up" => ARROW_UP,
        "down" => ARROW_DOWN,
        _ => value,
    }
}

/// A key sequence in the Selenium Core notation.
///
/// `\NNN` (one to three digits) names a key code directly; a single character
/// stands for its own code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySequence {
    pub key_code: u32,
}

impl KeySequence {
    pub fn parse(sequence: &str) -> VaadinResult<Self> {
        if let Some(digits) = sequence.strip_prefix('\\') {
            if !digits.is_empty()
                && digits.len() <= 3
                && digits.chars().all(|c| c.is_ascii_digit())
            {
                let key_code =
                    digits.parse().map_err(|_| VaadinError::InvalidKeySequence(sequence.to_string()))?;
                return Ok(KeySequence {
                    key_code,
                });
            }
        }

        let mut chars = sequence.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(KeySequence {
                key_code: u32::from(c),
            }),
            _ => Err(VaadinError::InvalidKeySequence(sequence.to_string())),
        }
    }

    /// The `key` value reported on the synthesized keyboard event.
    pub fn key_name(&self) -> String {
        match self.key_code {
            8 => "Backspace".to_string(),
            9 => "Tab".to_string(),
            13 => "Enter".to_string(),
            27 => "Escape".to_string(),
            37 => "ArrowLeft".to_string(),
            38 => "ArrowUp".to_string(),
            39 => "ArrowRight".to_string(),
            40 => "ArrowDown".to_string(),
            46 => "Delete".to_string(),
            code => std::char::from_u32(code).map(String::from).unwrap_or_default(),
        }
    }
}
