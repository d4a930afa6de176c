//! # Word Spanner
//!
//! Cuts text into the words that the merge engine encodes one at a time.

use core::ops::Range;

use crate::{
    errors::RTResult,
    regex::{RegexWrapper, RegexWrapperPattern, regex_wrapper::next_char_boundary},
};

/// Offset-driven pre-tokenizer over a compiled split pattern.
#[derive(Debug, Clone)]
pub struct WordSpanner {
    regex: RegexWrapper,
}

impl From<RegexWrapper> for WordSpanner {
    fn from(regex: RegexWrapper) -> Self {
        Self::new(regex)
    }
}

impl WordSpanner {
    /// Wrap a compiled split pattern.
    pub fn new(regex: RegexWrapper) -> Self {
        Self { regex }
    }

    /// Compile a split pattern.
    pub fn from_pattern(pattern: &RegexWrapperPattern) -> RTResult<Self> {
        Ok(Self::new(pattern.compile()?))
    }

    /// Get the compiled split pattern.
    pub fn regex(&self) -> &RegexWrapper {
        &self.regex
    }

    /// Lazily split `text` into word ranges.
    ///
    /// Every byte of `text` lands in exactly one yielded range, in order:
    /// text the pattern does not match comes out as its own range.
    pub fn split_words<'r, 'h>(
        &'r self,
        text: &'h str,
    ) -> WordSpans<'r, 'h> {
        WordSpans {
            regex: &self.regex,
            text,
            offset: 0,
            pending: None,
        }
    }
}

/// Iterator over the word ranges of a text.
///
/// The scan position is the only state, so a clone restarts from
/// wherever the original currently is.
#[derive(Debug, Clone)]
pub struct WordSpans<'r, 'h> {
    regex: &'r RegexWrapper,
    text: &'h str,
    offset: usize,
    pending: Option<Range<usize>>,
}

impl WordSpans<'_, '_> {
    /// The next non-empty match at or after `from`.
    fn next_match(
        &self,
        mut from: usize,
    ) -> RTResult<Option<Range<usize>>> {
        while from <= self.text.len() {
            match self.regex.find_at(self.text, from)? {
                None => return Ok(None),
                Some(m) if m.is_empty() => from = next_char_boundary(self.text, m.start),
                Some(m) => return Ok(Some(m)),
            }
        }
        Ok(None)
    }
}

impl Iterator for WordSpans<'_, '_> {
    type Item = RTResult<Range<usize>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(word) = self.pending.take() {
            self.offset = word.end;
            return Some(Ok(word));
        }

        let start = self.offset;
        if start >= self.text.len() {
            return None;
        }

        let word = match self.next_match(start) {
            Err(err) => {
                self.offset = self.text.len();
                return Some(Err(err));
            }
            Ok(None) => start..self.text.len(),
            Ok(Some(m)) if m.start > start => {
                let gap = start..m.start;
                self.pending = Some(m);
                gap
            }
            Ok(Some(m)) => m,
        };
        self.offset = word.end;
        Some(Ok(word))
    }
}
