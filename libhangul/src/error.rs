use thiserror::Error;

/// Errors raised by the Hangul composer.
///
/// Both variants are integration/programming errors: hosts filter keys with
/// the membership predicates before feeding the composer, and the built-in
/// tables are checked once when first used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HangulError {
    /// The glyph is not a member of the alphabet it was looked up in.
    #[error("unknown jamo {0:?}")]
    UnknownJamo(char),

    /// The composer reached a state its tables should make impossible.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, HangulError>;
