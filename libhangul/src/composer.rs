//! Hangul composition automaton.
//!
//! The composer holds one open syllable and turns a stream of jamo, one per
//! keystroke, into precomposed syllables:
//!
//! - a consonant after a complete syllable becomes its trailing consonant,
//!   or joins the existing one into a compound final (ㄹ + ㄱ → ㄺ);
//! - a vowel after a trailing consonant pulls that consonant (or the second
//!   half of a compound final) into a new syllable (한 + ㅏ → 하나);
//! - a vowel after a vowel may form a diphthong (ㅗ + ㅏ → ㅘ);
//! - anything else commits the open syllable and starts the next one.
//!
//! Backspace undoes one sub-unit of the open syllable: compound final →
//! simple final → no final → no vowel → nothing.

use libime_core::{ComposeStep, EraseStep, SyllableComposer};
use tracing::{debug, trace, warn};

use crate::error::{HangulError, Result};
use crate::jamo::{tables, JamoTables, Lead, Tail, Vowel};
use crate::layout::KeyboardLayout;
use crate::syllable::compose;

/// Occupancy of the open syllable.
///
/// A trailing consonant only exists together with a lead and a vowel; a vowel
/// without a lead is a standalone vowel waiting to be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Syllable {
    #[default]
    Empty,
    Lead(Lead),
    Vowel(Vowel),
    LeadVowel(Lead, Vowel),
    Full(Lead, Vowel, Tail),
}

impl Syllable {
    /// Render the syllable: a precomposed syllable when lead and vowel are
    /// present, otherwise the lone jamo glyph.
    pub fn combine(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Lead(lead) => Some(lead.as_char()),
            Self::Vowel(vowel) => Some(vowel.as_char()),
            Self::LeadVowel(lead, vowel) => Some(compose(lead, vowel, None)),
            Self::Full(lead, vowel, tail) => Some(compose(lead, vowel, Some(tail))),
        }
    }

    pub fn lead(self) -> Option<Lead> {
        match self {
            Self::Lead(lead) | Self::LeadVowel(lead, _) | Self::Full(lead, _, _) => Some(lead),
            Self::Empty | Self::Vowel(_) => None,
        }
    }

    pub fn vowel(self) -> Option<Vowel> {
        match self {
            Self::Vowel(vowel) | Self::LeadVowel(_, vowel) | Self::Full(_, vowel, _) => Some(vowel),
            Self::Empty | Self::Lead(_) => None,
        }
    }

    pub fn tail(self) -> Option<Tail> {
        match self {
            Self::Full(_, _, tail) => Some(tail),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

/// Hangul composer owning one open syllable.
///
/// One instance per input field; instances share the read-only tables.
#[derive(Debug, Clone)]
pub struct HangulComposer {
    tables: &'static JamoTables,
    layout: KeyboardLayout,
    state: Syllable,
}

impl HangulComposer {
    /// Composer for the on-screen jamo keyboard.
    pub fn new() -> Self {
        Self::with_layout(KeyboardLayout::default())
    }

    pub fn with_layout(layout: KeyboardLayout) -> Self {
        Self {
            tables: tables(),
            layout,
            state: Syllable::Empty,
        }
    }

    pub fn layout(&self) -> KeyboardLayout {
        self.layout
    }

    pub fn tables(&self) -> &'static JamoTables {
        self.tables
    }

    /// The open syllable.
    pub fn state(&self) -> Syllable {
        self.state
    }

    /// Current rendering of the open syllable ("" when nothing is open).
    pub fn preview(&self) -> String {
        self.state.combine().map(String::from).unwrap_or_default()
    }

    pub fn is_composing(&self) -> bool {
        !self.state.is_empty()
    }

    /// Feed one jamo.
    ///
    /// Returns the character committed by this call (at most one) and the new
    /// preview. Glyphs that are neither leading consonants nor vowels are
    /// rejected with [`HangulError::UnknownJamo`] and leave the state untouched.
    pub fn add_jamo(&mut self, jamo: char) -> Result<ComposeStep> {
        let committed = if let Some(lead) = Lead::from_char(jamo) {
            self.add_lead(lead)
        } else if let Some(vowel) = Vowel::from_char(jamo) {
            self.add_vowel(vowel)?
        } else {
            warn!(jamo = %jamo, "not a composing jamo");
            return Err(HangulError::UnknownJamo(jamo));
        };

        let preview = self.preview();
        trace!(jamo = %jamo, state = ?self.state, ?committed, %preview, "add_jamo");
        Ok(ComposeStep::new(committed, preview))
    }

    fn add_lead(&mut self, lead: Lead) -> Option<char> {
        match self.state {
            Syllable::Empty => {
                self.state = Syllable::Lead(lead);
                None
            }
            Syllable::LeadVowel(l, v) => match Tail::from_char(lead.as_char()) {
                Some(tail) => {
                    self.state = Syllable::Full(l, v, tail);
                    None
                }
                None => self.commit_then(Syllable::Lead(lead)),
            },
            Syllable::Full(l, v, t) => {
                let cluster = Tail::from_char(lead.as_char())
                    .and_then(|next| self.tables.combine_cluster(t, next));
                match cluster {
                    Some(compound) => {
                        self.state = Syllable::Full(l, v, compound);
                        None
                    }
                    None => self.commit_then(Syllable::Lead(lead)),
                }
            }
            Syllable::Lead(_) | Syllable::Vowel(_) => self.commit_then(Syllable::Lead(lead)),
        }
    }

    fn add_vowel(&mut self, vowel: Vowel) -> Result<Option<char>> {
        let committed = match self.state {
            Syllable::LeadVowel(l, v) => match self.tables.combine_diphthong(v, vowel) {
                Some(diphthong) => {
                    self.state = Syllable::LeadVowel(l, diphthong);
                    None
                }
                None => self.commit_then(Syllable::Vowel(vowel)),
            },
            Syllable::Full(l, v, t) => {
                // The trailing consonant (or the second half of a compound
                // final) moves over to lead the new syllable.
                let (kept, moved) = match self.tables.split_cluster(t) {
                    Some((first, second)) => (Some(first), second),
                    None => (None, t),
                };
                let next_lead = moved.as_lead().ok_or_else(|| {
                    HangulError::InternalInvariantViolation(format!(
                        "trailing consonant {moved} cannot lead a syllable"
                    ))
                })?;
                self.state = match kept {
                    Some(first) => Syllable::Full(l, v, first),
                    None => Syllable::LeadVowel(l, v),
                };
                self.commit_then(Syllable::LeadVowel(next_lead, vowel))
            }
            Syllable::Lead(l) => {
                self.state = Syllable::LeadVowel(l, vowel);
                None
            }
            Syllable::Empty | Syllable::Vowel(_) => self.commit_then(Syllable::Vowel(vowel)),
        };
        Ok(committed)
    }

    fn commit_then(&mut self, next: Syllable) -> Option<char> {
        let committed = self.commit();
        self.state = next;
        committed
    }

    /// Finalize the open syllable and clear all slots.
    pub fn commit(&mut self) -> Option<char> {
        let committed = self.state.combine();
        self.state = Syllable::Empty;
        if let Some(ch) = committed {
            debug!(committed = %ch, "syllable committed");
        }
        committed
    }

    /// Undo one sub-unit of the open syllable.
    ///
    /// A compound final falls back to its first component, a simple final is
    /// dropped, then the vowel (a diphthong goes as a whole). A syllable with
    /// no vowel, a standalone vowel or an empty state is reset. `changed` is
    /// always `true`: hosts check for an empty preview before calling this.
    pub fn backspace(&mut self) -> EraseStep {
        self.state = match self.state {
            Syllable::Full(l, v, t) => match self.tables.split_cluster(t) {
                Some((first, _)) => Syllable::Full(l, v, first),
                None => Syllable::LeadVowel(l, v),
            },
            Syllable::LeadVowel(l, _) => Syllable::Lead(l),
            Syllable::Lead(_) | Syllable::Vowel(_) | Syllable::Empty => Syllable::Empty,
        };
        let preview = self.preview();
        trace!(state = ?self.state, %preview, "backspace");
        EraseStep::new(preview, true)
    }

    /// Discard the open syllable without committing it.
    pub fn reset(&mut self) {
        self.state = Syllable::Empty;
    }
}

impl Default for HangulComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl SyllableComposer for HangulComposer {
    type Error = HangulError;

    fn map_key(&self, ch: char, shifted: bool) -> Option<char> {
        self.layout
            .map_key(ch, shifted)
            .filter(|&jamo| self.tables.is_jamo(jamo))
    }

    fn push(&mut self, symbol: char) -> Result<ComposeStep> {
        self.add_jamo(symbol)
    }

    fn erase(&mut self) -> EraseStep {
        self.backspace()
    }

    fn reset(&mut self) {
        HangulComposer::reset(self);
    }

    fn preview(&self) -> String {
        HangulComposer::preview(self)
    }

    fn is_composing(&self) -> bool {
        HangulComposer::is_composing(self)
    }
}
