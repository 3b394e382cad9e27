//! Latin editor: plain letter append with a shift latch, no state machine.

use super::{Editor, EditorResult};
use crate::ime_engine::KeyEvent;
use crate::session::ImeSession;

/// Editor for the Latin keyboard page.
#[derive(Debug, Default)]
pub struct LatinEditor;

impl LatinEditor {
    pub fn new() -> Self {
        Self
    }
}

impl Editor for LatinEditor {
    fn process_key(&mut self, key: KeyEvent, session: &mut ImeSession) -> EditorResult {
        match key {
            KeyEvent::Char(ch) if ch.is_ascii_alphabetic() => {
                let ch = if session.shift_active() {
                    ch.to_ascii_uppercase()
                } else {
                    ch.to_ascii_lowercase()
                };
                session.buffer_mut().push_char(ch);
                EditorResult::Commit(ch.to_string())
            }
            KeyEvent::Backspace => match session.buffer_mut().pop_char() {
                Some(_) => EditorResult::Handled,
                None => EditorResult::PassThrough,
            },
            _ => EditorResult::PassThrough,
        }
    }

    fn flush(&mut self, _session: &mut ImeSession) -> String {
        String::new()
    }

    fn reset(&mut self) {}

    fn name(&self) -> &'static str {
        "latin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_follows_shift() {
        let mut editor = LatinEditor::new();
        let mut session = ImeSession::new();

        assert_eq!(
            editor.process_key(KeyEvent::Char('A'), &mut session),
            EditorResult::Commit("a".to_string())
        );
        session.set_shift(true);
        assert_eq!(
            editor.process_key(KeyEvent::Char('b'), &mut session),
            EditorResult::Commit("B".to_string())
        );
        assert_eq!(session.buffer().text(), "aB");
    }

    #[test]
    fn test_backspace_pops_buffer() {
        let mut editor = LatinEditor::new();
        let mut session = ImeSession::new();
        session.buffer_mut().push_str("ab");

        assert_eq!(
            editor.process_key(KeyEvent::Backspace, &mut session),
            EditorResult::Handled
        );
        assert_eq!(session.buffer().text(), "a");
        editor.process_key(KeyEvent::Backspace, &mut session);
        assert_eq!(
            editor.process_key(KeyEvent::Backspace, &mut session),
            EditorResult::PassThrough
        );
    }

    #[test]
    fn test_non_letters_pass_through() {
        let mut editor = LatinEditor::new();
        let mut session = ImeSession::new();
        assert_eq!(
            editor.process_key(KeyEvent::Char('ㄱ'), &mut session),
            EditorResult::PassThrough
        );
        assert_eq!(
            editor.process_key(KeyEvent::Char('!'), &mut session),
            EditorResult::PassThrough
        );
    }
}
