//! Key classification for key-release handling.

/// The keys the block distinguishes on key release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Backspace,
    Delete,
    Other,
}

impl KeyKind {
    /// Classify a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "Backspace" => KeyKind::Backspace,
            // "Del" is what older Edge reports
            "Delete" | "Del" => KeyKind::Delete,
            _ => KeyKind::Other,
        }
    }

    /// Classify a legacy `KeyboardEvent.keyCode` value.
    pub fn from_key_code(code: u32) -> Self {
        match code {
            8 => KeyKind::Backspace,
            46 => KeyKind::Delete,
            _ => KeyKind::Other,
        }
    }

    /// Backspace or Delete.
    pub fn is_deletion(self) -> bool {
        matches!(self, KeyKind::Backspace | KeyKind::Delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_key_names() {
        assert_eq!(KeyKind::from_key("Backspace"), KeyKind::Backspace);
        assert_eq!(KeyKind::from_key("Delete"), KeyKind::Delete);
        assert_eq!(KeyKind::from_key("Del"), KeyKind::Delete);
        assert_eq!(KeyKind::from_key("x"), KeyKind::Other);
        assert_eq!(KeyKind::from_key("Enter"), KeyKind::Other);
    }

    #[test]
    fn classifies_key_codes() {
        assert_eq!(KeyKind::from_key_code(8), KeyKind::Backspace);
        assert_eq!(KeyKind::from_key_code(46), KeyKind::Delete);
        assert_eq!(KeyKind::from_key_code(13), KeyKind::Other);
    }

    #[test]
    fn only_backspace_and_delete_are_deletions() {
        assert!(KeyKind::Backspace.is_deletion());
        assert!(KeyKind::Delete.is_deletion());
        assert!(!KeyKind::Other.is_deletion());
    }
}
