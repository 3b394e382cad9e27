//! # libhangul
//!
//! Hangul jamo composition engine built on libime-core.
//!
//! Users press individual jamo keys; the composer assembles them into
//! precomposed syllables (ㅎ ㅏ ㄴ → 한), committing a syllable once the next
//! key can no longer extend it.

pub mod error;
pub mod jamo;
pub mod syllable;
pub mod composer;
pub mod layout;
pub mod config;
pub mod engine;

// Re-export IME components from core
pub use libime_core::{
    ComposeStep, EraseStep, ImeContext, ImeEngine, ImeSession, InputBuffer, InputMode, KeyEvent,
    KeyResult, SyllableComposer,
};

pub use composer::{HangulComposer, Syllable};
pub use config::HangulConfig;
pub use engine::{
    compose_text, create_ime_engine, create_ime_engine_dubeolsik, create_ime_engine_kiosk,
    HangulImeEngine,
};
pub use error::HangulError;
pub use jamo::{tables, JamoTables, Lead, Tail, Vowel, LEADS, TAILS, VOWELS};
pub use layout::{KeyboardLayout, KIOSK_ROWS};
pub use syllable::{compose, decompose, is_syllable, to_jamo_string};
