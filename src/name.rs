#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

//===========================================================================//

/// Width of one name field in an iconset file, in bytes (including the
/// terminating NUL).
pub const NAME_FIELD_LEN: usize = 32;

/// Longest name that still leaves room for a terminator.
pub const MAX_NAME_LEN: usize = NAME_FIELD_LEN - 1;

//===========================================================================//

/// The label of one icon, stored as the raw fixed-width field it occupies on
/// disk.
///
/// The visible text is everything before the first NUL byte.  Bytes after
/// the terminator are preserved so that files round-trip exactly.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct IconName {
    bytes: [u8; NAME_FIELD_LEN],
}

impl IconName {
    /// Returns the empty ("unnamed") label.
    pub const fn empty() -> IconName {
        IconName { bytes: [0; NAME_FIELD_LEN] }
    }

    /// Creates a label from text, truncated to at most `MAX_NAME_LEN` bytes
    /// on a character boundary.  Anything from an embedded NUL onward is
    /// dropped.
    pub fn new(text: &str) -> IconName {
        let text = match text.find('\0') {
            Some(end) => &text[..end],
            None => text,
        };
        let mut end = text.len().min(MAX_NAME_LEN);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let mut bytes = [0; NAME_FIELD_LEN];
        bytes[..end].copy_from_slice(&text.as_bytes()[..end]);
        IconName { bytes }
    }

    /// Wraps a raw name field exactly as read from a file.
    pub const fn from_bytes(bytes: [u8; NAME_FIELD_LEN]) -> IconName {
        IconName { bytes }
    }

    /// Returns the raw name field.
    pub fn as_bytes(&self) -> &[u8; NAME_FIELD_LEN] {
        &self.bytes
    }

    /// Returns the bytes before the first NUL.
    pub fn text_bytes(&self) -> &[u8] {
        let end = self
            .bytes
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(NAME_FIELD_LEN);
        &self.bytes[..end]
    }

    /// Returns the visible text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.text_bytes())
    }

    /// Returns true if the visible text is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes[0] == 0
    }
}

impl Default for IconName {
    fn default() -> IconName {
        IconName::empty()
    }
}

impl From<&str> for IconName {
    fn from(text: &str) -> IconName {
        IconName::new(text)
    }
}

impl fmt::Debug for IconName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "IconName({:?})", self.text())
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.text())
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{IconName, MAX_NAME_LEN, NAME_FIELD_LEN};

    #[test]
    fn short_name_is_zero_padded() {
        let name = IconName::new("FOLDER_OPEN");
        assert_eq!(name.text(), "FOLDER_OPEN");
        assert_eq!(&name.as_bytes()[..11], b"FOLDER_OPEN");
        assert!(name.as_bytes()[11..].iter().all(|&byte| byte == 0));
        assert!(!name.is_empty());
    }

    #[test]
    fn long_name_is_truncated() {
        let long = "A".repeat(40);
        let name = IconName::new(&long);
        assert_eq!(name.text_bytes().len(), MAX_NAME_LEN);
        assert_eq!(name.as_bytes()[NAME_FIELD_LEN - 1], 0);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 30 ASCII bytes followed by a two-byte character straddling the
        // 31-byte limit.
        let text = format!("{}é", "x".repeat(30));
        let name = IconName::new(&text);
        assert_eq!(name.text(), "x".repeat(30));
    }

    #[test]
    fn embedded_nul_ends_the_text() {
        let name = IconName::new("ARROW\0HIDDEN");
        assert_eq!(name.text(), "ARROW");
        assert!(name.as_bytes()[5..].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn raw_bytes_after_terminator_are_kept() {
        let mut bytes = [0u8; NAME_FIELD_LEN];
        bytes[..3].copy_from_slice(b"CUT");
        bytes[4..7].copy_from_slice(b"OLD");
        let name = IconName::from_bytes(bytes);
        assert_eq!(name.text(), "CUT");
        assert_eq!(name.as_bytes(), &bytes);
    }

    #[test]
    fn unterminated_field_uses_all_bytes() {
        let name = IconName::from_bytes([b'Z'; NAME_FIELD_LEN]);
        assert_eq!(name.text_bytes().len(), NAME_FIELD_LEN);
    }

    #[test]
    fn empty_name() {
        assert!(IconName::empty().is_empty());
        assert!(IconName::new("").is_empty());
        assert_eq!(IconName::default(), IconName::empty());
    }
}

//===========================================================================//
