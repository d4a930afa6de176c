//! # Special Token Scanner

use core::ops::Range;
use std::collections::BTreeSet;

use crate::{
    errors::RTResult,
    regex::{RegexWrapper, regex_wrapper::next_char_boundary},
    types::TokenType,
    vocab::{SpecialVocab, special_vocab::special_words_pattern},
};

/// Finds special words in text.
///
/// Holds one compiled alternation over every special word of a vocab.
#[derive(Debug, Clone)]
pub struct SpecialScanner {
    words: BTreeSet<String>,
    regex: Option<RegexWrapper>,
}

impl SpecialScanner {
    /// Compile the scanner for a special vocab.
    pub fn from_specials<T: TokenType>(specials: &SpecialVocab<T>) -> RTResult<Self> {
        let regex = match specials.special_pattern() {
            Some(pattern) => Some(pattern.compile()?),
            None => None,
        };
        Ok(Self {
            words: specials.words(),
            regex,
        })
    }

    /// The special words this scanner knows.
    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    /// Find the first allowed special word at or after `start`.
    ///
    /// Special words outside `allowed` are skipped over; the search resumes
    /// one character after where the skipped word began, so a word starting
    /// inside a skipped one can still be found.
    ///
    /// The alternation prefers the longest word at a given offset. When a
    /// longer word that is not allowed starts at the same offset as a shorter
    /// allowed one, the shorter one is not reported there; the text is
    /// encoded as ordinary bytes up to the next hit.
    ///
    /// ## Arguments
    /// * `text` - The full text.
    /// * `start` - The byte offset to search from.
    /// * `allowed` - The special words to stop at.
    ///
    /// ## Returns
    /// The byte range of the allowed special word, if any.
    pub fn next_allowed(
        &self,
        text: &str,
        start: usize,
        allowed: &BTreeSet<String>,
    ) -> RTResult<Option<Range<usize>>> {
        let Some(regex) = &self.regex else {
            return Ok(None);
        };
        if allowed.is_empty() {
            return Ok(None);
        }

        let mut from = start;
        while from <= text.len() {
            let Some(m) = regex.find_at(text, from)? else {
                return Ok(None);
            };
            if !m.is_empty() && allowed.contains(&text[m.clone()]) {
                return Ok(Some(m));
            }
            from = next_char_boundary(text, m.start);
        }
        Ok(None)
    }

    /// Scan the whole text for any of the `disallowed` words.
    ///
    /// This is a separate pass from [`Self::next_allowed`]. It matches the
    /// disallowed words as given, whether or not they are special words of
    /// this vocab.
    ///
    /// ## Returns
    /// The first disallowed word found, if any.
    pub fn find_disallowed(
        &self,
        text: &str,
        disallowed: &BTreeSet<String>,
    ) -> RTResult<Option<String>> {
        if disallowed.is_empty() || text.is_empty() {
            return Ok(None);
        }

        let found = match &self.regex {
            Some(regex) if disallowed == &self.words => regex.find_at(text, 0)?,
            _ => match special_words_pattern(disallowed) {
                Some(pattern) => pattern.compile()?.find_at(text, 0)?,
                None => None,
            },
        };
        Ok(found.map(|m| text[m].to_string()))
    }
}
