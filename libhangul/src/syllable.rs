//! Precomposed syllable arithmetic (U+AC00..U+D7A3).
//!
//! A syllable's code point is
//! `SYLLABLE_BASE + lead * 588 + vowel * 28 + tail`, with tail slot 0 for
//! "no trailing consonant".

use crate::jamo::{Lead, Tail, Vowel};

/// First precomposed syllable (가).
pub const SYLLABLE_BASE: u32 = 0xAC00;
pub const LEAD_COUNT: u32 = 19;
pub const VOWEL_COUNT: u32 = 21;
pub const TAIL_COUNT: u32 = 28;
/// Syllables per leading consonant (`VOWEL_COUNT * TAIL_COUNT`).
pub const LEAD_STRIDE: u32 = VOWEL_COUNT * TAIL_COUNT;
pub const SYLLABLE_COUNT: u32 = LEAD_COUNT * LEAD_STRIDE;

/// Combine a lead, a vowel and an optional tail into one syllable.
pub fn compose(lead: Lead, vowel: Vowel, tail: Option<Tail>) -> char {
    let code = SYLLABLE_BASE
        + lead.index() * LEAD_STRIDE
        + vowel.index() * TAIL_COUNT
        + tail.map_or(0, Tail::index);
    // Every index triple lands inside the syllable block, which holds no
    // surrogates.
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

pub fn is_syllable(ch: char) -> bool {
    (SYLLABLE_BASE..SYLLABLE_BASE + SYLLABLE_COUNT).contains(&(ch as u32))
}

/// Split a precomposed syllable back into its lead, vowel and tail.
pub fn decompose(ch: char) -> Option<(Lead, Vowel, Option<Tail>)> {
    if !is_syllable(ch) {
        return None;
    }
    let offset = ch as u32 - SYLLABLE_BASE;
    let lead = Lead::from_index(offset / LEAD_STRIDE)?;
    let vowel = Vowel::from_index((offset % LEAD_STRIDE) / TAIL_COUNT)?;
    let tail = Tail::from_index(offset % TAIL_COUNT);
    Some((lead, vowel, tail))
}

/// Expand every precomposed syllable into compatibility jamo.
///
/// Compound finals and diphthongs stay single glyphs (한글 → ㅎㅏㄴㄱㅡㄹ,
/// 닭 → ㄷㅏㄺ). Anything else is copied through.
pub fn to_jamo_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for ch in text.chars() {
        match decompose(ch) {
            Some((lead, vowel, tail)) => {
                out.push(lead.as_char());
                out.push(vowel.as_char());
                if let Some(tail) = tail {
                    out.push(tail.as_char());
                }
            }
            None => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(ch: char) -> Lead {
        Lead::from_char(ch).unwrap()
    }

    fn vowel(ch: char) -> Vowel {
        Vowel::from_char(ch).unwrap()
    }

    fn tail(ch: char) -> Tail {
        Tail::from_char(ch).unwrap()
    }

    #[test]
    fn test_compose_known_syllables() {
        assert_eq!(compose(lead('ㄱ'), vowel('ㅏ'), None), '가');
        assert_eq!(compose(lead('ㅎ'), vowel('ㅏ'), Some(tail('ㄴ'))), '한');
        assert_eq!(compose(lead('ㄷ'), vowel('ㅏ'), Some(tail('ㄺ'))), '닭');
        assert_eq!(compose(lead('ㅎ'), vowel('ㅣ'), Some(tail('ㅎ'))), '힣');
    }

    #[test]
    fn test_round_trip_every_triple() {
        let mut count = 0;
        for l in 0..LEAD_COUNT {
            for v in 0..VOWEL_COUNT {
                for t in 0..TAIL_COUNT {
                    let triple = (
                        Lead::from_index(l).unwrap(),
                        Vowel::from_index(v).unwrap(),
                        Tail::from_index(t),
                    );
                    let ch = compose(triple.0, triple.1, triple.2);
                    assert!(is_syllable(ch));
                    assert_eq!(decompose(ch), Some(triple));
                    count += 1;
                }
            }
        }
        assert_eq!(count, SYLLABLE_COUNT);
    }

    #[test]
    fn test_decompose_outside_block() {
        assert_eq!(decompose('ㄱ'), None);
        assert_eq!(decompose('a'), None);
        assert_eq!(decompose('\u{D7A4}'), None);
        assert!(!is_syllable('\u{ABFF}'));
    }

    #[test]
    fn test_to_jamo_string() {
        assert_eq!(to_jamo_string("한글"), "ㅎㅏㄴㄱㅡㄹ");
        assert_eq!(to_jamo_string("닭 2마리"), "ㄷㅏㄺ 2ㅁㅏㄹㅣ");
        assert_eq!(to_jamo_string("과"), "ㄱㅘ");
        assert_eq!(to_jamo_string("abc"), "abc");
    }
}
