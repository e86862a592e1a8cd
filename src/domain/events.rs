#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// Returns the typed character when the key is a single printable char
    /// without modifiers.
    pub fn printable_char(&self) -> Option<char> {
        if self.ctrl {
            return None;
        }

        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.is_control() => Some(ch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_char_keys_are_printable() {
        assert_eq!(KeyInput::new("a", false).printable_char(), Some('a'));
        assert_eq!(KeyInput::new("7", false).printable_char(), Some('7'));
    }

    #[test]
    fn named_and_ctrl_keys_are_not_printable() {
        assert_eq!(KeyInput::new("enter", false).printable_char(), None);
        assert_eq!(KeyInput::new("b", true).printable_char(), None);
        assert_eq!(KeyInput::new("", false).printable_char(), None);
    }
}
