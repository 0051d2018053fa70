//! Diagnostic error types for the dubsar engine.
//!
//! Each fallible subsystem defines its own error enum with miette
//! `#[diagnostic]` derives (error codes, help text), and the top-level
//! [`DubsarError`] wraps them transparently so the full diagnostic chain
//! reaches the user.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the dubsar engine.
#[derive(Debug, Error, Diagnostic)]
pub enum DubsarError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Pack(#[from] crate::mapping::pack::PackError),
}

// ---------------------------------------------------------------------------
// Syllable table errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum MappingError {
    #[error("empty syllable key")]
    #[diagnostic(
        code(dubsar::mapping::empty_key),
        help("Every mapping entry needs a syllable of 1 to 4 lowercase ASCII letters.")
    )]
    EmptyKey,

    #[error("syllable key \"{syllable}\" is {length} characters long (maximum is 4)")]
    #[diagnostic(
        code(dubsar::mapping::key_too_long),
        help(
            "The longest-match scan only probes substrings up to 4 characters, \
             so a longer key could never be matched. Split the mapping into \
             shorter syllables."
        )
    )]
    KeyTooLong { syllable: String, length: usize },

    #[error("syllable key \"{syllable}\" contains characters outside a-z")]
    #[diagnostic(
        code(dubsar::mapping::invalid_key),
        help(
            "Keys are compared against normalized input, which is lowercase \
             ASCII letters only. Lowercase the key and drop any punctuation \
             or diacritics."
        )
    )]
    InvalidKey { syllable: String },

    #[error("duplicate syllable key: \"{syllable}\"")]
    #[diagnostic(
        code(dubsar::mapping::duplicate_key),
        help("Each syllable may appear once per table. Remove or merge the duplicate entry.")
    )]
    DuplicateKey { syllable: String },
}

// ---------------------------------------------------------------------------
// Composition matching errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum MatchError {
    #[error("negative {axis} tolerance: {value}")]
    #[diagnostic(
        code(dubsar::wedge::negative_tolerance),
        help(
            "Tolerance is a per-axis allowance of stroke-count difference and \
             cannot be negative. Use 0 for an exact match on that axis."
        )
    )]
    NegativeTolerance { axis: &'static str, value: i64 },

    #[error("negative {axis} stroke count: {value}")]
    #[diagnostic(
        code(dubsar::wedge::negative_count),
        help(
            "A wedge composition counts stroke impressions and cannot go \
             below zero. Check the caller that produced this value."
        )
    )]
    NegativeCount { axis: &'static str, value: i64 },
}

/// Convenience alias for functions returning dubsar results.
pub type DubsarResult<T> = std::result::Result<T, DubsarError>;

/// Alias for syllable-table construction results.
pub type MappingResult<T> = std::result::Result<T, MappingError>;

/// Alias for composition-matching results.
pub type MatchResult<T> = std::result::Result<T, MatchError>;
