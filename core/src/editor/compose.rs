//! Composing editor.
//!
//! Drives a `SyllableComposer` and keeps the session buffer and preview in
//! step with it: committed characters go to the buffer immediately, the open
//! syllable is rendered as preview.

use tracing::{debug, warn};

use super::{Editor, EditorResult};
use crate::composer::SyllableComposer;
use crate::ime_engine::KeyEvent;
use crate::session::ImeSession;

/// Editor for keys that go through a syllable composer.
///
/// Generic over C: the composer type (e.g. the Hangul composer).
pub struct ComposeEditor<C: SyllableComposer> {
    composer: C,
}

impl<C: SyllableComposer> ComposeEditor<C> {
    pub fn new(composer: C) -> Self {
        Self { composer }
    }

    /// Get a reference to the composer.
    pub fn composer(&self) -> &C {
        &self.composer
    }

    fn handle_char(&mut self, ch: char, session: &mut ImeSession) -> EditorResult {
        let Some(symbol) = self.composer.map_key(ch, session.shift_active()) else {
            return EditorResult::PassThrough;
        };

        match self.composer.push(symbol) {
            Ok(step) => {
                session.set_preview(step.preview);
                match step.committed {
                    Some(committed) => {
                        session.buffer_mut().push_char(committed);
                        EditorResult::Commit(committed.to_string())
                    }
                    None => EditorResult::Handled,
                }
            }
            Err(err) => {
                warn!(key = %ch, symbol = %symbol, error = %err, "composer rejected symbol");
                EditorResult::PassThrough
            }
        }
    }

    fn handle_backspace(&mut self, session: &mut ImeSession) -> EditorResult {
        // Nothing open: the edit applies to committed text.
        if session.preview().is_empty() {
            return match session.buffer_mut().pop_char() {
                Some(_) => EditorResult::Handled,
                None => EditorResult::PassThrough,
            };
        }

        let erase = self.composer.erase();
        if !erase.changed {
            session.buffer_mut().pop_char();
        }
        session.set_preview(erase.preview);
        EditorResult::Handled
    }
}

impl<C: SyllableComposer> Editor for ComposeEditor<C> {
    fn process_key(&mut self, key: KeyEvent, session: &mut ImeSession) -> EditorResult {
        match key {
            KeyEvent::Char(ch) => self.handle_char(ch, session),
            KeyEvent::Backspace => self.handle_backspace(session),
            _ => EditorResult::PassThrough,
        }
    }

    fn flush(&mut self, session: &mut ImeSession) -> String {
        let flushed = session.flush_preview();
        self.composer.reset();
        if !flushed.is_empty() {
            debug!(text = %flushed, "flushed open syllable");
        }
        flushed
    }

    fn reset(&mut self) {
        self.composer.reset();
    }

    fn name(&self) -> &'static str {
        "compose"
    }
}
