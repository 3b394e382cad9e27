//! IME engine with session management and key event processing.
//!
//! The `ImeEngine` owns a composer-backed editor, a Latin editor, the session
//! and the context record. `process_key()` routes each key from the on-screen
//! keyboard and keeps the host side of the composer contract: committed
//! characters land in the buffer immediately, separators flush the open
//! syllable first, and backspace reaches the buffer only when the composer has
//! nothing to undo.

use tracing::{debug, trace};

use crate::composer::SyllableComposer;
use crate::context::ImeContext;
use crate::editor::{ComposeEditor, Editor, EditorResult, LatinEditor};
use crate::session::{ImeSession, InputMode};
use crate::Config;

/// Key event types that the IME can process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Character key (jamo, Latin letter, ...)
    Char(char),
    /// Digit key (0-9), appended directly in every mode
    Digit(u8),
    /// Backspace key
    Backspace,
    /// Space key (commit open syllable, then a space)
    Space,
    /// Enter key (commit open syllable, then a newline)
    Enter,
    /// Shift key (toggles the shift latch)
    Shift,
    /// Language key (Compose <-> Latin)
    ToggleMode,
    /// Submit the whole text (the kiosk's print key)
    Submit,
    /// Discard everything (the kiosk's back-to-start key)
    Escape,
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key was handled by the IME
    Handled,
    /// Key was not handled (pass through to application)
    NotHandled,
    /// The full text was published in `ImeContext::submit_text`
    Submitted,
}

/// IME engine with session management.
///
/// Generic over C: the composer driven in `Compose` mode.
pub struct ImeEngine<C: SyllableComposer> {
    /// Composer-backed editor
    compose_editor: ComposeEditor<C>,

    /// Latin letter editor
    latin_editor: LatinEditor,

    /// Session state
    session: ImeSession,

    /// Context for platform communication
    context: ImeContext,

    config: Config,
}

impl<C: SyllableComposer> ImeEngine<C> {
    /// Create a new IME engine around the given composer.
    pub fn new(composer: C, config: Config) -> Self {
        let session = ImeSession::with_mode(config.initial_mode);
        let mut engine = Self {
            compose_editor: ComposeEditor::new(composer),
            latin_editor: LatinEditor::new(),
            session,
            context: ImeContext::new(),
            config,
        };
        engine.sync_context();
        engine
    }

    /// Get a reference to the context for reading IME state.
    pub fn context(&self) -> &ImeContext {
        &self.context
    }

    /// Get a mutable reference to the context.
    pub fn context_mut(&mut self) -> &mut ImeContext {
        &mut self.context
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &ImeSession {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a reference to the composer.
    pub fn composer(&self) -> &C {
        self.compose_editor.composer()
    }

    /// Buffer plus open syllable.
    pub fn display_text(&self) -> String {
        self.session.display_text()
    }

    /// Reset the IME to initial state (empty buffer, nothing open, shift off).
    /// The current mode is kept.
    pub fn reset(&mut self) {
        self.compose_editor.reset();
        self.latin_editor.reset();
        self.session.clear();
        self.session.set_shift(false);
        self.context.clear();
        self.sync_context();
    }

    /// Process a key event and update IME state.
    ///
    /// After calling this, the platform should read `context()` to update the
    /// UI (buffer, preedit, commit text, submit state).
    pub fn process_key(&mut self, key: KeyEvent) -> KeyResult {
        // Clear per-key outputs from the previous key
        self.context.commit_text.clear();
        self.context.submit_text.clear();

        // Digit characters are digit keys regardless of where they came from
        let key = match key {
            KeyEvent::Char(ch) if ch.is_ascii_digit() => {
                KeyEvent::Digit(ch.to_digit(10).map_or(0, |d| d as u8))
            }
            other => other,
        };

        trace!(?key, mode = ?self.session.mode(), "process_key");

        let result = match key {
            KeyEvent::Shift => {
                self.session.toggle_shift();
                KeyResult::Handled
            }
            KeyEvent::ToggleMode => {
                let flushed = self.compose_editor.flush(&mut self.session);
                self.context.commit_text = flushed;
                let mode = self.session.mode().toggled();
                self.session.set_mode(mode);
                debug!(?mode, "input mode switched");
                KeyResult::Handled
            }
            KeyEvent::Space => self.commit_with_separator(Some(' ')),
            KeyEvent::Enter => {
                let separator = self.config.enter_inserts_newline.then_some('\n');
                self.commit_with_separator(separator)
            }
            KeyEvent::Digit(d) => match char::from_digit(u32::from(d), 10) {
                Some(digit) => self.commit_with_separator(Some(digit)),
                None => KeyResult::NotHandled,
            },
            KeyEvent::Submit => self.submit(),
            KeyEvent::Escape => {
                self.compose_editor.reset();
                self.session.clear();
                self.session.set_shift(false);
                debug!("input discarded");
                KeyResult::Handled
            }
            KeyEvent::Char(_) | KeyEvent::Backspace => self.route_to_editor(key),
        };

        self.sync_context();
        result
    }

    fn route_to_editor(&mut self, key: KeyEvent) -> KeyResult {
        let mode = self.session.mode();
        let editor: &mut dyn Editor = match mode {
            InputMode::Compose => &mut self.compose_editor,
            InputMode::Latin => &mut self.latin_editor,
        };
        let result = editor.process_key(key, &mut self.session);
        trace!(editor = editor.name(), ?result, "editor result");

        match result {
            EditorResult::Handled => {
                self.maybe_release_shift(key);
                KeyResult::Handled
            }
            EditorResult::Commit(text) => {
                self.context.commit_text = text;
                self.maybe_release_shift(key);
                KeyResult::Handled
            }
            EditorResult::PassThrough => KeyResult::NotHandled,
        }
    }

    /// Flush the open syllable, then append the separator (if any).
    fn commit_with_separator(&mut self, separator: Option<char>) -> KeyResult {
        let mut committed = self.compose_editor.flush(&mut self.session);
        if let Some(sep) = separator {
            self.session.buffer_mut().push_char(sep);
            committed.push(sep);
        }
        self.context.commit_text = committed;
        KeyResult::Handled
    }

    fn submit(&mut self) -> KeyResult {
        if self.config.require_text_for_submit && !self.session.has_submittable_text() {
            debug!("submit ignored: nothing to submit");
            return KeyResult::NotHandled;
        }
        let flushed = self.compose_editor.flush(&mut self.session);
        self.context.commit_text = flushed;
        self.context.submit_text = self.session.buffer().text().to_string();
        debug!(text = %self.context.submit_text, "text submitted");
        KeyResult::Submitted
    }

    fn maybe_release_shift(&mut self, key: KeyEvent) {
        if !matches!(key, KeyEvent::Char(_)) || !self.session.shift_active() {
            return;
        }
        let oneshot = match self.session.mode() {
            InputMode::Compose => self.config.compose_shift_oneshot,
            InputMode::Latin => self.config.latin_shift_oneshot,
        };
        if oneshot {
            self.session.set_shift(false);
        }
    }

    fn sync_context(&mut self) {
        self.session.sync_to_context(&mut self.context);
        self.context.submit_enabled =
            !self.config.require_text_for_submit || self.session.has_submittable_text();
    }
}
