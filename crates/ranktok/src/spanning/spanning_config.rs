//! # Spanning Configuration
use crate::{regex::RegexWrapperPattern, types::TokenType, vocab::SpecialVocab};

/// Word split pattern + special words.
///
/// This is the uncompiled description of how text is cut into words
/// before merging; the encoder compiles it once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningConfig<T: TokenType> {
    /// Regex pattern for word splitting.
    pattern: RegexWrapperPattern,

    /// Special tokens vocabulary.
    specials: SpecialVocab<T>,
}

impl<T: TokenType> From<RegexWrapperPattern> for SpanningConfig<T> {
    fn from(pattern: RegexWrapperPattern) -> Self {
        Self::new(pattern, SpecialVocab::default())
    }
}

impl<T: TokenType> SpanningConfig<T> {
    /// Create a new spanning configuration.
    ///
    /// ## Arguments
    /// * `pattern` - The word split pattern.
    /// * `specials` - The special words.
    pub fn new(
        pattern: RegexWrapperPattern,
        specials: SpecialVocab<T>,
    ) -> Self {
        Self { pattern, specials }
    }

    /// Replace the special tokens vocabulary.
    pub fn with_specials(
        self,
        specials: SpecialVocab<T>,
    ) -> Self {
        Self { specials, ..self }
    }

    /// Get the word split pattern.
    pub fn pattern(&self) -> &RegexWrapperPattern {
        &self.pattern
    }

    /// Get the special tokens vocabulary.
    pub fn specials(&self) -> &SpecialVocab<T> {
        &self.specials
    }
}
