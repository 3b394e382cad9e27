//! Key layouts feeding the composer.
//!
//! ## Supported layouts
//!
//! 1. **Jamo** - the kiosk's on-screen keyboard. Keys already carry jamo
//!    glyphs; shift turns the five plain stops into tense ones and ㅐ/ㅔ into
//!    ㅒ/ㅖ.
//! 2. **Dubeolsik** (두벌식) - the standard Korean 2-set layout over a QWERTY
//!    keyboard (`gksrmf` → 한글). Upper case letters act as shifted keys.
//!
//! The on-screen keyboard follows the Dubeolsik key positions, so
//! [`KIOSK_ROWS`] is the QWERTY letter grid read through the Dubeolsik map.

use phf::phf_map;
use serde::{Deserialize, Serialize};

/// Jamo keys of the on-screen keyboard, top row first.
pub const KIOSK_ROWS: [&[char]; 3] = [
    &['ㅂ', 'ㅈ', 'ㄷ', 'ㄱ', 'ㅅ', 'ㅛ', 'ㅕ', 'ㅑ', 'ㅐ', 'ㅔ'],
    &['ㅁ', 'ㄴ', 'ㅇ', 'ㄹ', 'ㅎ', 'ㅗ', 'ㅓ', 'ㅏ', 'ㅣ'],
    &['ㅋ', 'ㅌ', 'ㅊ', 'ㅍ', 'ㅠ', 'ㅜ', 'ㅡ'],
];

/// Shifted glyph for keys that have one.
static SHIFTED: phf::Map<char, char> = phf_map! {
    'ㅂ' => 'ㅃ',
    'ㅈ' => 'ㅉ',
    'ㄷ' => 'ㄸ',
    'ㄱ' => 'ㄲ',
    'ㅅ' => 'ㅆ',
    'ㅐ' => 'ㅒ',
    'ㅔ' => 'ㅖ',
};

static DUBEOLSIK: phf::Map<char, char> = phf_map! {
    'q' => 'ㅂ', 'w' => 'ㅈ', 'e' => 'ㄷ', 'r' => 'ㄱ', 't' => 'ㅅ',
    'y' => 'ㅛ', 'u' => 'ㅕ', 'i' => 'ㅑ', 'o' => 'ㅐ', 'p' => 'ㅔ',
    'a' => 'ㅁ', 's' => 'ㄴ', 'd' => 'ㅇ', 'f' => 'ㄹ', 'g' => 'ㅎ',
    'h' => 'ㅗ', 'j' => 'ㅓ', 'k' => 'ㅏ', 'l' => 'ㅣ',
    'z' => 'ㅋ', 'x' => 'ㅌ', 'c' => 'ㅊ', 'v' => 'ㅍ', 'b' => 'ㅠ',
    'n' => 'ㅜ', 'm' => 'ㅡ',
};

/// Keyboard layouts understood by the Hangul composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardLayout {
    /// Keys carry jamo glyphs (on-screen keyboard)
    #[default]
    Jamo,
    /// Korean 2-set over QWERTY letters
    Dubeolsik,
}

impl KeyboardLayout {
    /// Layout name for display and config files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Jamo => "jamo",
            Self::Dubeolsik => "dubeolsik",
        }
    }

    /// Translate a key press into a jamo glyph.
    ///
    /// Non-ASCII keys are taken as jamo glyphs in both layouts, so a
    /// Dubeolsik host can still forward on-screen jamo keys. The result is not
    /// checked against the composer's alphabets; the composer does that.
    pub fn map_key(self, ch: char, shifted: bool) -> Option<char> {
        match self {
            Self::Dubeolsik if ch.is_ascii() => {
                let base = *DUBEOLSIK.get(&ch.to_ascii_lowercase())?;
                Some(shift_jamo(base, shifted || ch.is_ascii_uppercase()))
            }
            _ if ch.is_ascii() => None,
            _ => Some(shift_jamo(ch, shifted)),
        }
    }
}

/// Apply shift to a jamo key. Keys without a shifted glyph are unchanged.
pub fn shift_jamo(jamo: char, shifted: bool) -> char {
    if shifted {
        SHIFTED.get(&jamo).copied().unwrap_or(jamo)
    } else {
        jamo
    }
}

/// Label a key shows under the current shift state.
pub fn key_label(jamo: char, shifted: bool) -> char {
    shift_jamo(jamo, shifted)
}
