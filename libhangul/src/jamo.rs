//! Jamo classification and combination tables.
//!
//! Three ordered alphabets drive syllable composition:
//!
//! - leading consonants (초성, 19 members)
//! - vowels (중성, 21 members)
//! - trailing consonants (종성, 28 slots, slot 0 meaning "none")
//!
//! The same glyph can be a leading consonant and a trailing consonant with
//! different indices (ㄱ is lead 0 and tail 1); tense consonants ㄸ ㅃ ㅉ are
//! leads only, compound finals such as ㄳ are tails only. Each alphabet has its
//! own index type, so a glyph is simply tested against each alphabet.
//!
//! All glyphs are Hangul Compatibility Jamo (U+3131..U+3163), which is what
//! an on-screen keyboard emits.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use phf::phf_map;

use crate::error::{HangulError, Result};

/// Leading consonants in composition order.
pub const LEADS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', //
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Vowels in composition order.
pub const VOWELS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', //
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Trailing consonants in composition order, `None` at slot 0.
pub const TAILS: [Option<char>; 28] = [
    None,
    Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'), Some('ㄷ'),
    Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'), Some('ㄿ'),
    Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'),
    Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

static LEAD_INDEX: phf::Map<char, u8> = phf_map! {
    'ㄱ' => 0, 'ㄲ' => 1, 'ㄴ' => 2, 'ㄷ' => 3, 'ㄸ' => 4, 'ㄹ' => 5, 'ㅁ' => 6,
    'ㅂ' => 7, 'ㅃ' => 8, 'ㅅ' => 9, 'ㅆ' => 10, 'ㅇ' => 11, 'ㅈ' => 12, 'ㅉ' => 13,
    'ㅊ' => 14, 'ㅋ' => 15, 'ㅌ' => 16, 'ㅍ' => 17, 'ㅎ' => 18,
};

static VOWEL_INDEX: phf::Map<char, u8> = phf_map! {
    'ㅏ' => 0, 'ㅐ' => 1, 'ㅑ' => 2, 'ㅒ' => 3, 'ㅓ' => 4, 'ㅔ' => 5, 'ㅕ' => 6,
    'ㅖ' => 7, 'ㅗ' => 8, 'ㅘ' => 9, 'ㅙ' => 10, 'ㅚ' => 11, 'ㅛ' => 12, 'ㅜ' => 13,
    'ㅝ' => 14, 'ㅞ' => 15, 'ㅟ' => 16, 'ㅠ' => 17, 'ㅡ' => 18, 'ㅢ' => 19, 'ㅣ' => 20,
};

static TAIL_INDEX: phf::Map<char, u8> = phf_map! {
    'ㄱ' => 1, 'ㄲ' => 2, 'ㄳ' => 3, 'ㄴ' => 4, 'ㄵ' => 5, 'ㄶ' => 6, 'ㄷ' => 7,
    'ㄹ' => 8, 'ㄺ' => 9, 'ㄻ' => 10, 'ㄼ' => 11, 'ㄽ' => 12, 'ㄾ' => 13, 'ㄿ' => 14,
    'ㅀ' => 15, 'ㅁ' => 16, 'ㅂ' => 17, 'ㅄ' => 18, 'ㅅ' => 19, 'ㅆ' => 20, 'ㅇ' => 21,
    'ㅈ' => 22, 'ㅊ' => 23, 'ㅋ' => 24, 'ㅌ' => 25, 'ㅍ' => 26, 'ㅎ' => 27,
};

/// Two simple finals forming one compound final, keyed by the pair.
static CLUSTERS: phf::Map<&'static str, char> = phf_map! {
    "ㄱㅅ" => 'ㄳ',
    "ㄴㅈ" => 'ㄵ',
    "ㄴㅎ" => 'ㄶ',
    "ㄹㄱ" => 'ㄺ',
    "ㄹㅁ" => 'ㄻ',
    "ㄹㅂ" => 'ㄼ',
    "ㄹㅅ" => 'ㄽ',
    "ㄹㅌ" => 'ㄾ',
    "ㄹㅍ" => 'ㄿ',
    "ㄹㅎ" => 'ㅀ',
    "ㅂㅅ" => 'ㅄ',
};

/// Two vowels forming one compound vowel, keyed by the pair.
static DIPHTHONGS: phf::Map<&'static str, char> = phf_map! {
    "ㅗㅏ" => 'ㅘ',
    "ㅗㅐ" => 'ㅙ',
    "ㅗㅣ" => 'ㅚ',
    "ㅜㅓ" => 'ㅝ',
    "ㅜㅔ" => 'ㅞ',
    "ㅜㅣ" => 'ㅟ',
    "ㅡㅣ" => 'ㅢ',
};

static TABLES: Lazy<JamoTables> = Lazy::new(|| match JamoTables::build() {
    Ok(tables) => tables,
    Err(err) => panic!("built-in jamo tables are inconsistent: {err}"),
});

/// A leading consonant (index 0..19).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lead(u8);

/// A vowel (index 0..21).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vowel(u8);

/// A trailing consonant (index 1..28; "no tail" is `Option::None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tail(u8);

impl Lead {
    pub fn from_char(ch: char) -> Option<Self> {
        LEAD_INDEX.get(&ch).map(|&i| Self(i))
    }

    pub fn from_index(index: u32) -> Option<Self> {
        (index < LEADS.len() as u32).then(|| Self(index as u8))
    }

    pub fn index(self) -> u32 {
        u32::from(self.0)
    }

    pub fn as_char(self) -> char {
        LEADS[self.0 as usize]
    }
}

impl Vowel {
    pub fn from_char(ch: char) -> Option<Self> {
        VOWEL_INDEX.get(&ch).map(|&i| Self(i))
    }

    pub fn from_index(index: u32) -> Option<Self> {
        (index < VOWELS.len() as u32).then(|| Self(index as u8))
    }

    pub fn index(self) -> u32 {
        u32::from(self.0)
    }

    pub fn as_char(self) -> char {
        VOWELS[self.0 as usize]
    }
}

impl Tail {
    pub fn from_char(ch: char) -> Option<Self> {
        TAIL_INDEX.get(&ch).map(|&i| Self(i))
    }

    /// `index` 0 is the "no trailing consonant" slot and yields `None`.
    pub fn from_index(index: u32) -> Option<Self> {
        (index > 0 && index < TAILS.len() as u32).then(|| Self(index as u8))
    }

    pub fn index(self) -> u32 {
        u32::from(self.0)
    }

    pub fn as_char(self) -> char {
        // Slot 0 is never constructed.
        TAILS[self.0 as usize].unwrap_or(' ')
    }

    /// The same glyph read as a leading consonant, when it can be one.
    /// Simple finals can, compound finals cannot.
    pub fn as_lead(self) -> Option<Lead> {
        Lead::from_char(self.as_char())
    }
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for Tail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

fn pair_key(a: char, b: char) -> String {
    let mut key = String::with_capacity(a.len_utf8() + b.len_utf8());
    key.push(a);
    key.push(b);
    key
}

/// Read-only classification and combination tables.
///
/// Built once per process (see [`tables`]) and shared by reference between
/// all composers.
#[derive(Debug)]
pub struct JamoTables {
    split_clusters: HashMap<Tail, (Tail, Tail)>,
}

impl JamoTables {
    /// Build the inverse cluster map and check that the cluster map is a
    /// bijection over tails.
    fn build() -> Result<Self> {
        let mut split_clusters = HashMap::with_capacity(CLUSTERS.len());
        for (key, &compound) in CLUSTERS.entries() {
            let mut parts = key.chars().map(Tail::from_char);
            let (first, second) = match (parts.next(), parts.next(), parts.next()) {
                (Some(Some(first)), Some(Some(second)), None) => (first, second),
                _ => {
                    return Err(HangulError::InternalInvariantViolation(format!(
                        "cluster key {key:?} is not a pair of trailing consonants"
                    )))
                }
            };
            let compound = Tail::from_char(compound).ok_or(HangulError::UnknownJamo(compound))?;
            if split_clusters.insert(compound, (first, second)).is_some() {
                return Err(HangulError::InternalInvariantViolation(format!(
                    "cluster {compound} formed by more than one pair"
                )));
            }
        }
        Ok(Self { split_clusters })
    }

    pub fn is_lead(&self, ch: char) -> bool {
        LEAD_INDEX.contains_key(&ch)
    }

    pub fn is_vowel(&self, ch: char) -> bool {
        VOWEL_INDEX.contains_key(&ch)
    }

    pub fn is_tail(&self, ch: char) -> bool {
        TAIL_INDEX.contains_key(&ch)
    }

    /// Any glyph the composer accepts as input.
    pub fn is_jamo(&self, ch: char) -> bool {
        self.is_lead(ch) || self.is_vowel(ch)
    }

    pub fn lead_index(&self, ch: char) -> Result<u32> {
        Lead::from_char(ch)
            .map(Lead::index)
            .ok_or(HangulError::UnknownJamo(ch))
    }

    pub fn vowel_index(&self, ch: char) -> Result<u32> {
        Vowel::from_char(ch)
            .map(Vowel::index)
            .ok_or(HangulError::UnknownJamo(ch))
    }

    pub fn tail_index(&self, ch: char) -> Result<u32> {
        Tail::from_char(ch)
            .map(Tail::index)
            .ok_or(HangulError::UnknownJamo(ch))
    }

    /// Compound final formed by `first` followed by `second`, if any.
    pub fn combine_cluster(&self, first: Tail, second: Tail) -> Option<Tail> {
        CLUSTERS
            .get(pair_key(first.as_char(), second.as_char()).as_str())
            .and_then(|&c| Tail::from_char(c))
    }

    /// The pair a compound final was formed from; `None` for simple finals.
    pub fn split_cluster(&self, compound: Tail) -> Option<(Tail, Tail)> {
        self.split_clusters.get(&compound).copied()
    }

    /// Compound vowel formed by `first` followed by `second`, if any.
    pub fn combine_diphthong(&self, first: Vowel, second: Vowel) -> Option<Vowel> {
        DIPHTHONGS
            .get(pair_key(first.as_char(), second.as_char()).as_str())
            .and_then(|&v| Vowel::from_char(v))
    }

    /// Number of compound finals.
    pub fn cluster_count(&self) -> usize {
        self.split_clusters.len()
    }

    /// Iterate `(first, second, compound)` over every cluster.
    pub fn clusters(&self) -> impl Iterator<Item = (Tail, Tail, Tail)> + '_ {
        self.split_clusters
            .iter()
            .map(|(&compound, &(first, second))| (first, second, compound))
    }
}

/// The process-wide tables.
pub fn tables() -> &'static JamoTables {
    &TABLES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tail(ch: char) -> Tail {
        Tail::from_char(ch).unwrap()
    }

    fn vowel(ch: char) -> Vowel {
        Vowel::from_char(ch).unwrap()
    }

    #[test]
    fn test_index_maps_match_ordered_alphabets() {
        for (i, &ch) in LEADS.iter().enumerate() {
            assert_eq!(Lead::from_char(ch).unwrap().index(), i as u32);
        }
        for (i, &ch) in VOWELS.iter().enumerate() {
            assert_eq!(Vowel::from_char(ch).unwrap().index(), i as u32);
        }
        for (i, ch) in TAILS.iter().enumerate().skip(1) {
            let ch = ch.unwrap();
            assert_eq!(Tail::from_char(ch).unwrap().index(), i as u32);
            assert_eq!(Tail::from_index(i as u32).unwrap().as_char(), ch);
        }
        assert_eq!(LEAD_INDEX.len(), 19);
        assert_eq!(VOWEL_INDEX.len(), 21);
        assert_eq!(TAIL_INDEX.len(), 27);
    }

    #[test]
    fn test_roles() {
        let t = tables();
        // Basic consonant: lead and tail with different indices
        assert!(t.is_lead('ㄱ') && t.is_tail('ㄱ'));
        assert_eq!(t.lead_index('ㄱ').unwrap(), 0);
        assert_eq!(t.tail_index('ㄱ').unwrap(), 1);

        // Tense consonant that can't close a syllable
        assert!(t.is_lead('ㄸ') && !t.is_tail('ㄸ'));
        // Compound final that can't open one
        assert!(!t.is_lead('ㄳ') && t.is_tail('ㄳ'));

        assert!(t.is_vowel('ㅘ'));
        assert!(!t.is_jamo('a'));
        assert!(!t.is_jamo('가'));
    }

    #[test]
    fn test_unknown_jamo() {
        let t = tables();
        assert_eq!(t.lead_index('ㅏ'), Err(HangulError::UnknownJamo('ㅏ')));
        assert_eq!(t.vowel_index('ㄱ'), Err(HangulError::UnknownJamo('ㄱ')));
        assert_eq!(t.tail_index('ㅃ'), Err(HangulError::UnknownJamo('ㅃ')));
    }

    #[test]
    fn test_tail_slot_zero_is_none() {
        assert!(Tail::from_index(0).is_none());
        assert!(Tail::from_index(28).is_none());
        assert!(Lead::from_index(19).is_none());
        assert!(Vowel::from_index(21).is_none());
    }

    #[test]
    fn test_cluster_bijection() {
        let t = tables();
        assert_eq!(t.cluster_count(), CLUSTERS.len());

        for (key, &compound) in CLUSTERS.entries() {
            let mut chars = key.chars();
            let first = tail(chars.next().unwrap());
            let second = tail(chars.next().unwrap());
            let compound = tail(compound);

            assert_eq!(t.combine_cluster(first, second), Some(compound));
            assert_eq!(t.split_cluster(compound), Some((first, second)));
        }

        let mut seen = std::collections::HashSet::new();
        for (_, _, compound) in t.clusters() {
            assert!(seen.insert(compound), "duplicate compound {compound}");
        }
    }

    #[test]
    fn test_cluster_misses() {
        let t = tables();
        assert_eq!(t.combine_cluster(tail('ㄴ'), tail('ㅁ')), None);
        assert_eq!(t.combine_cluster(tail('ㅅ'), tail('ㄱ')), None);
        assert_eq!(t.split_cluster(tail('ㄴ')), None);
        assert_eq!(t.split_cluster(tail('ㄲ')), None);
    }

    #[test]
    fn test_diphthongs() {
        let t = tables();
        assert_eq!(t.combine_diphthong(vowel('ㅗ'), vowel('ㅏ')), Some(vowel('ㅘ')));
        assert_eq!(t.combine_diphthong(vowel('ㅜ'), vowel('ㅔ')), Some(vowel('ㅞ')));
        assert_eq!(t.combine_diphthong(vowel('ㅡ'), vowel('ㅣ')), Some(vowel('ㅢ')));
        assert_eq!(t.combine_diphthong(vowel('ㅏ'), vowel('ㅗ')), None);
        assert_eq!(t.combine_diphthong(vowel('ㅘ'), vowel('ㅣ')), None);
    }

    #[test]
    fn test_tail_as_lead() {
        assert_eq!(tail('ㄴ').as_lead(), Lead::from_char('ㄴ'));
        assert_eq!(tail('ㅆ').as_lead(), Lead::from_char('ㅆ'));
        assert_eq!(tail('ㄺ').as_lead(), None);
    }
}
