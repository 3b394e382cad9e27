//! Editor trait and implementations for different input modes.
//!
//! The editor architecture provides pluggable input handlers for the two
//! keyboard modes (composing and Latin). Each editor implements the `Editor`
//! trait and processes character and backspace keys in its own context;
//! separators, digits, mode switches and submit are routed by `ImeEngine`.

pub mod compose;
pub mod latin;

pub use compose::ComposeEditor;
pub use latin::LatinEditor;

use crate::ime_engine::KeyEvent;
use crate::session::ImeSession;

/// Result of processing a key event in an editor.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorResult {
    /// Key was handled, session state updated
    Handled,

    /// Key was handled and the given text was appended to the buffer
    Commit(String),

    /// Key not handled by this editor, pass to parent
    PassThrough,
}

/// Editor trait for handling input in specific modes.
///
/// # Example
///
/// ```ignore
/// use libime_core::{Editor, LatinEditor, ImeSession, KeyEvent};
///
/// let mut editor = LatinEditor::new();
/// let mut session = ImeSession::new();
/// let result = editor.process_key(KeyEvent::Char('a'), &mut session);
/// ```
pub trait Editor {
    /// Process a key event in this editor's context.
    ///
    /// The editor updates the session state (buffer and preview) and returns
    /// an appropriate result.
    fn process_key(&mut self, key: KeyEvent, session: &mut ImeSession) -> EditorResult;

    /// Move any pending, uncommitted text into the session buffer and return it.
    ///
    /// Called before separators, digits, mode switches and submit.
    fn flush(&mut self, session: &mut ImeSession) -> String;

    /// Reset editor state, discarding anything pending.
    fn reset(&mut self);

    /// Get a human-readable name for this editor (for logging).
    fn name(&self) -> &'static str;
}
