//! IME context for platform communication.
//!
//! The `ImeContext` struct is a simple data container with public fields that
//! the kiosk UI reads after every `process_key()` call to redraw the display
//! area and the keyboard (mode key, shift highlight, submit button state).
//!
//! Design philosophy: just data transfer. No callbacks, no traits. Platform
//! code reads fields directly.

use crate::session::InputMode;

/// IME context for platform communication.
///
/// # Fields
///
/// - `buffer_text`: committed text (the host's permanent buffer)
/// - `preedit_text`: syllable being composed, drawn after the buffer
/// - `commit_text`: text committed by the last key (consume and clear)
/// - `submit_text`: full text published by a successful submit
/// - `auxiliary_text`: mode indicator for the language key
#[derive(Debug, Clone, Default)]
pub struct ImeContext {
    /// Committed text
    pub buffer_text: String,

    /// Open syllable (rendered highlighted after the buffer)
    pub preedit_text: String,

    /// Text committed to the buffer by the most recent key
    pub commit_text: String,

    /// Text handed over on submit (empty unless the last key submitted)
    pub submit_text: String,

    /// Mode indicator, e.g. "한" or "A⇧"
    pub auxiliary_text: String,

    /// Current input mode
    pub mode: InputMode,

    /// Whether the shift key is latched
    pub shift_active: bool,

    /// Whether a submit key press would be accepted right now
    pub submit_enabled: bool,
}

impl ImeContext {
    /// Create a new empty IME context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear visible state. Does NOT clear `commit_text` or `submit_text`
    /// (the platform should consume them first).
    pub fn clear(&mut self) {
        self.buffer_text.clear();
        self.preedit_text.clear();
        self.auxiliary_text.clear();
        self.shift_active = false;
        self.submit_enabled = false;
    }

    /// Buffer followed by the open syllable, i.e. what the user sees.
    pub fn display_text(&self) -> String {
        let mut out = String::with_capacity(self.buffer_text.len() + self.preedit_text.len());
        out.push_str(&self.buffer_text);
        out.push_str(&self.preedit_text);
        out
    }

    /// Take the commit text, leaving it empty.
    pub fn take_commit(&mut self) -> String {
        std::mem::take(&mut self.commit_text)
    }

    /// Take the submitted text, leaving it empty.
    pub fn take_submit(&mut self) -> String {
        std::mem::take(&mut self.submit_text)
    }

    /// Check if there's any visible state.
    pub fn has_visible_state(&self) -> bool {
        !self.buffer_text.is_empty() || !self.preedit_text.is_empty()
    }

    pub fn has_commit(&self) -> bool {
        !self.commit_text.is_empty()
    }
}
