//! # Error Types

use crate::regex::ErrorWrapper;

/// Broad classification of a [`RanktokError`].
///
/// Callers use this to decide whether a failure is a broken setup,
/// a refused input, or a problem with the surrounding environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The vocabulary, pattern, or registry lookup is unusable.
    Configuration,

    /// The input was refused by the special-token policy.
    Policy,

    /// The input has no representation in the vocabulary.
    Input,

    /// Filesystem or network failure.
    Environment,
}

/// Errors from ranktok operations.
#[derive(Debug, thiserror::Error)]
pub enum RanktokError {
    /// No registered encoding has this name.
    #[error("unknown encoding: {0:?}")]
    UnknownEncoding(String),

    /// No registered encoding matches this model name.
    #[error("no encoding registered for model: {0:?}")]
    UnknownModel(String),

    /// A vocabulary file line could not be parsed.
    #[error("malformed vocabulary line {line}: {reason}")]
    VocabFormat {
        /// The 1-based line number.
        line: usize,

        /// What was wrong with it.
        reason: String,
    },

    /// The vocabulary does not have the expected number of entries.
    #[error("vocabulary size mismatch: expected {expected}, found {actual}")]
    VocabSizeMismatch {
        /// The declared vocabulary size.
        expected: usize,

        /// The number of ordinary plus special entries.
        actual: usize,
    },

    /// The largest token does not sit at the end of the declared vocabulary.
    #[error("max token value {max_token} does not match vocabulary size {expected}")]
    MaxTokenMismatch {
        /// The declared vocabulary size.
        expected: usize,

        /// The largest ordinary or special token.
        max_token: usize,
    },

    /// The rank table is missing a single-byte entry.
    #[error("rank table has no entry for byte {byte:#04x}")]
    MissingByteRank {
        /// The missing byte.
        byte: u8,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Token value out of range for the target type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// A split or special pattern failed to compile or to run.
    #[error("pattern error: {0}")]
    Pattern(#[from] ErrorWrapper),

    /// The text contains a special token the caller disallowed.
    #[error(
        "text contains the disallowed special token {token:?}; \
         add it to the allowed set to encode it as a special token, \
         or remove it from the disallowed set to encode it as ordinary text"
    )]
    DisallowedSpecial {
        /// The offending literal.
        token: String,
    },

    /// The bytes are neither a single ordinary token nor a special token.
    #[error("no single token for bytes {0:?}")]
    UnknownSingleToken(Vec<u8>),

    /// A strict decode found ids outside the vocabulary.
    #[error("incomplete decode: {skipped} unknown tokens")]
    IncompleteDecode {
        /// The number of ids that were dropped.
        skipped: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

impl RanktokError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        use RanktokError::*;
        match self {
            UnknownEncoding(_)
            | UnknownModel(_)
            | VocabFormat { .. }
            | VocabSizeMismatch { .. }
            | MaxTokenMismatch { .. }
            | MissingByteRank { .. }
            | VocabConflict(_)
            | TokenOutOfRange
            | Pattern(_) => ErrorKind::Configuration,
            DisallowedSpecial { .. } => ErrorKind::Policy,
            UnknownSingleToken(_) | IncompleteDecode { .. } => ErrorKind::Input,
            Io(_) | External(_) => ErrorKind::Environment,
        }
    }

    /// Is this a [`ErrorKind::Configuration`] error?
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// Is this a [`ErrorKind::Policy`] error?
    pub fn is_policy(&self) -> bool {
        self.kind() == ErrorKind::Policy
    }
}

/// Result type for ranktok operations.
pub type RTResult<T> = Result<T, RanktokError>;
