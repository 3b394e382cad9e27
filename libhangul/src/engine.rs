//! Engine factories and whole-string helpers.
//!
//! The keyboard engine itself lives in `libime_core`; this module wires it to
//! the Hangul composer with the right layout.

use libime_core::ImeEngine;
use tracing::debug;

use crate::composer::HangulComposer;
use crate::config::HangulConfig;
use crate::jamo::{tables, Tail};
use crate::layout::KeyboardLayout;

/// Keyboard engine driving a Hangul composer.
pub type HangulImeEngine = ImeEngine<HangulComposer>;

/// Create an IME engine from a full configuration.
pub fn create_ime_engine(config: HangulConfig) -> HangulImeEngine {
    debug!(layout = config.layout.name(), "creating hangul ime engine");
    let composer = HangulComposer::with_layout(config.layout);
    ImeEngine::new(composer, config.into_base())
}

/// Engine for the on-screen jamo keyboard with default behavior.
pub fn create_ime_engine_kiosk() -> HangulImeEngine {
    create_ime_engine(HangulConfig::with_layout(KeyboardLayout::Jamo))
}

/// Engine for a physical QWERTY keyboard using the 2-set layout.
pub fn create_ime_engine_dubeolsik() -> HangulImeEngine {
    create_ime_engine(HangulConfig::with_layout(KeyboardLayout::Dubeolsik))
}

/// Compose a string of compatibility jamo into syllables (ㅎㅏㄴㄱㅡㄹ → 한글).
///
/// Compound finals in the input (ㄺ) are typed as their two components.
/// Characters that are not jamo commit the open syllable and are copied
/// through, the way a separator would be.
pub fn compose_text(jamo: &str) -> String {
    let t = tables();
    let mut composer = HangulComposer::new();
    let mut out = String::with_capacity(jamo.len());

    for ch in jamo.chars() {
        if t.is_jamo(ch) {
            feed(&mut composer, &mut out, ch);
        } else if let Some((first, second)) = Tail::from_char(ch).and_then(|c| t.split_cluster(c)) {
            feed(&mut composer, &mut out, first.as_char());
            feed(&mut composer, &mut out, second.as_char());
        } else {
            out.extend(composer.commit());
            out.push(ch);
        }
    }
    out.extend(composer.commit());
    out
}

fn feed(composer: &mut HangulComposer, out: &mut String, jamo: char) {
    match composer.add_jamo(jamo) {
        Ok(step) => out.extend(step.committed),
        Err(_) => out.push(jamo),
    }
}
