// core/src/composer.rs
//
// Seam between the generic keyboard engine and a script-specific syllable
// composer (Hangul today). The engine owns the host text buffer; the composer
// owns exactly one open syllable.

/// Outcome of feeding one symbol to a composer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposeStep {
    /// Character finalized by this call, if any. Never more than one.
    pub committed: Option<char>,
    /// The open syllable as it should be rendered after this call.
    pub preview: String,
}

impl ComposeStep {
    pub fn new(committed: Option<char>, preview: impl Into<String>) -> Self {
        Self {
            committed,
            preview: preview.into(),
        }
    }
}

/// Outcome of one backspace press routed to a composer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EraseStep {
    /// The open syllable after the edit.
    pub preview: String,
    /// `true` if the composer absorbed the edit. When `false` the host must
    /// remove the last committed character itself.
    pub changed: bool,
}

impl EraseStep {
    pub fn new(preview: impl Into<String>, changed: bool) -> Self {
        Self {
            preview: preview.into(),
            changed,
        }
    }
}

/// Trait that syllable composers must implement to be driven by `ImeEngine`.
///
/// Calls are synchronous and a composer instance belongs to exactly one input
/// field; the engine never shares one across sessions.
pub trait SyllableComposer {
    /// Error raised when a symbol outside the composer's alphabet is pushed.
    type Error: std::error::Error;

    /// Translate a key press into the symbol this composer consumes.
    ///
    /// Returns `None` for keys the host should handle itself.
    fn map_key(&self, ch: char, shifted: bool) -> Option<char>;

    /// Feed one symbol (already produced by `map_key`).
    fn push(&mut self, symbol: char) -> Result<ComposeStep, Self::Error>;

    /// Undo one sub-unit of the open syllable.
    fn erase(&mut self) -> EraseStep;

    /// Discard the open syllable.
    fn reset(&mut self);

    /// Current rendering of the open syllable ("" when nothing is open).
    fn preview(&self) -> String;

    fn is_composing(&self) -> bool {
        !self.preview().is_empty()
    }
}
