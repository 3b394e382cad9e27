//! Permanent text buffer owned by the host.
//!
//! The buffer stores text that has already been committed (finished syllables,
//! Latin letters, digits, separators). The syllable still being composed is
//! never stored here; it lives in the composer and is rendered after the
//! buffer as preedit.

/// Append-only text buffer with single-character removal from the end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Get the committed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters (Unicode scalars) in the buffer.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether the buffer holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Append a single character.
    pub fn push_char(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Append a string.
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Remove the last character (backspace on committed text).
    /// Returns the removed character, or `None` if the buffer was empty.
    pub fn pop_char(&mut self) -> Option<char> {
        self.text.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop() {
        let mut buf = InputBuffer::new();
        buf.push_char('한');
        buf.push_str("글 ");
        assert_eq!(buf.text(), "한글 ");
        assert_eq!(buf.len(), 3);

        assert_eq!(buf.pop_char(), Some(' '));
        assert_eq!(buf.pop_char(), Some('글'));
        assert_eq!(buf.text(), "한");
    }

    #[test]
    fn test_pop_empty() {
        let mut buf = InputBuffer::new();
        assert_eq!(buf.pop_char(), None);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_blank() {
        let mut buf = InputBuffer::new();
        assert!(buf.is_blank());
        buf.push_str(" \n ");
        assert!(buf.is_blank());
        assert!(!buf.is_empty());
        buf.push_char('a');
        assert!(!buf.is_blank());

        buf.clear();
        assert!(buf.is_empty());
    }
}
