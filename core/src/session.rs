//! IME session management.
//!
//! The `ImeSession` struct combines the host text buffer, the rendered preview
//! of the open syllable, the input mode and the shift latch into one record
//! that tracks state across key events.

use serde::{Deserialize, Serialize};

use crate::context::ImeContext;
use crate::input_buffer::InputBuffer;

/// Current input mode of the IME session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Keys go through the syllable composer
    #[default]
    Compose,
    /// Plain Latin letters, appended directly
    Latin,
}

impl InputMode {
    /// The other mode (language key).
    pub fn toggled(self) -> Self {
        match self {
            Self::Compose => Self::Latin,
            Self::Latin => Self::Compose,
        }
    }

    /// Short label for the language key.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Compose => "한",
            Self::Latin => "A",
        }
    }
}

/// IME session state.
///
/// The session is separate from the composer: the composer owns the open
/// syllable, the session only keeps its last rendering in `preview`.
#[derive(Debug, Clone, Default)]
pub struct ImeSession {
    /// Committed text
    buffer: InputBuffer,

    /// Rendering of the composer's open syllable
    preview: String,

    /// Current input mode
    mode: InputMode,

    /// Shift latch
    shift: bool,
}

impl ImeSession {
    /// Create a new empty session in `Compose` mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session starting in the given mode.
    pub fn with_mode(mode: InputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut InputBuffer {
        &mut self.buffer
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn set_preview(&mut self, preview: String) {
        self.preview = preview;
    }

    /// Move the preview into the buffer. Returns the flushed text.
    ///
    /// The caller is responsible for resetting the composer.
    pub fn flush_preview(&mut self) -> String {
        let preview = std::mem::take(&mut self.preview);
        self.buffer.push_str(&preview);
        preview
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn shift_active(&self) -> bool {
        self.shift
    }

    pub fn set_shift(&mut self, active: bool) {
        self.shift = active;
    }

    pub fn toggle_shift(&mut self) {
        self.shift = !self.shift;
    }

    /// Buffer followed by the preview.
    pub fn display_text(&self) -> String {
        format!("{}{}", self.buffer.text(), self.preview)
    }

    /// Whether there is anything worth submitting (non-blank buffer or an
    /// open syllable).
    pub fn has_submittable_text(&self) -> bool {
        !self.buffer.is_blank() || !self.preview.is_empty()
    }

    /// Clear buffer and preview. Mode and shift latch are kept.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.preview.clear();
    }

    /// Sync session state to an ImeContext for platform communication.
    pub fn sync_to_context(&self, context: &mut ImeContext) {
        context.buffer_text = self.buffer.text().to_string();
        context.preedit_text = self.preview.clone();
        context.mode = self.mode;
        context.shift_active = self.shift;

        let mut aux = self.mode.indicator().to_string();
        if self.shift {
            aux.push('⇧');
        }
        context.auxiliary_text = aux;
    }
}
