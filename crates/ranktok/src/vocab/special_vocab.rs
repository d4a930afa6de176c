//! # Special Words Vocabulary

use std::collections::BTreeSet;

use crate::{
    errors::{RTResult, RanktokError},
    regex::{RegexWrapperPattern, exact_match_union_regex_pattern},
    types::{RTHashMap, TokenType},
};

/// Token vocabulary for special words.
///
/// Special words are literal strings mapped to reserved ids, outside the
/// rank table. They never take part in merging.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SpecialVocab<T: TokenType> {
    word_map: RTHashMap<String, T>,
    token_map: RTHashMap<T, String>,
}

impl<T: TokenType> SpecialVocab<T> {
    /// Build a special vocab from `(word, token)` pairs.
    ///
    /// ## Returns
    /// `VocabConflict` on an empty word, or when a word or token repeats
    /// with a different partner.
    pub fn try_from_words<W, S>(words: W) -> RTResult<Self>
    where
        W: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut vocab = Self {
            word_map: Default::default(),
            token_map: Default::default(),
        };
        for (word, token) in words {
            vocab.try_add_word(word.as_ref(), token)?;
        }
        Ok(vocab)
    }

    fn try_add_word(
        &mut self,
        word: &str,
        token: T,
    ) -> RTResult<()> {
        if word.is_empty() {
            return Err(RanktokError::VocabConflict(
                "special words must be non-empty".to_string(),
            ));
        }
        if let Some(&prior) = self.word_map.get(word)
            && prior != token
        {
            return Err(RanktokError::VocabConflict(format!(
                "special word {word:?} is assigned to both {prior} and {token}"
            )));
        }
        if let Some(prior) = self.token_map.get(&token)
            && prior != word
        {
            return Err(RanktokError::VocabConflict(format!(
                "special token {token} is assigned to both {prior:?} and {word:?}"
            )));
        }
        self.word_map.insert(word.to_string(), token);
        self.token_map.insert(token, word.to_string());
        Ok(())
    }

    /// Get the number of special words in the vocab.
    pub fn len(&self) -> usize {
        self.word_map.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The set of special words.
    pub fn words(&self) -> BTreeSet<String> {
        self.word_map.keys().cloned().collect()
    }

    /// Iterate `(word, token)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> {
        self.word_map.iter().map(|(word, &token)| (word.as_str(), token))
    }

    /// The largest special token, if any.
    pub fn max_token(&self) -> Option<T> {
        self.token_map.keys().copied().max()
    }

    /// Return the associated token for the word, if any.
    pub fn lookup_token(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word_map.get(word).copied()
    }

    /// Get the associated word for a token, if any.
    pub fn lookup_word(
        &self,
        token: T,
    ) -> Option<&str> {
        self.token_map.get(&token).map(String::as_str)
    }

    /// Get the regex pattern matching any special word.
    ///
    /// ## Returns
    /// `None` if no special words are present;
    /// and `Some(RegexWrapperPattern)` otherwise.
    pub fn special_pattern(&self) -> Option<RegexWrapperPattern> {
        special_words_pattern(self.word_map.keys())
    }
}

/// Build an alternation pattern over literal words.
///
/// Longer words come first, so a word that is a prefix of another never
/// shadows it; ties are broken lexicographically so the pattern is stable.
pub fn special_words_pattern<I, S>(words: I) -> Option<RegexWrapperPattern>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut alts: Vec<String> = words
        .into_iter()
        .map(|w| w.as_ref().to_string())
        .filter(|w| !w.is_empty())
        .collect();
    if alts.is_empty() {
        return None;
    }
    alts.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    alts.dedup();
    Some(exact_match_union_regex_pattern(&alts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::testing::test_special_vocab;

    #[test]
    fn test_lookup() {
        let specials = test_special_vocab::<u32>();
        assert_eq!(specials.len(), 2);
        assert!(!specials.is_empty());

        assert_eq!(specials.lookup_token("<|endoftext|>"), Some(300));
        assert_eq!(specials.lookup_token("<|nope|>"), None);
        assert_eq!(specials.lookup_word(301), Some("<|fim_prefix|>"));
        assert_eq!(specials.lookup_word(7), None);
        assert_eq!(specials.max_token(), Some(301));
        assert_eq!(specials.iter().count(), 2);
        assert_eq!(
            specials.words().into_iter().collect::<Vec<_>>(),
            vec!["<|endoftext|>".to_string(), "<|fim_prefix|>".to_string()]
        );
    }

    #[test]
    fn test_conflicts() {
        assert!(SpecialVocab::<u32>::try_from_words([("", 1)]).is_err());
        assert!(SpecialVocab::<u32>::try_from_words([("<|a|>", 1), ("<|a|>", 2)]).is_err());
        assert!(SpecialVocab::<u32>::try_from_words([("<|a|>", 1), ("<|b|>", 1)]).is_err());

        let specials = SpecialVocab::<u32>::try_from_words([("<|a|>", 1), ("<|a|>", 1)]).unwrap();
        assert_eq!(specials.len(), 1);
    }

    #[test]
    fn test_special_pattern() {
        assert!(SpecialVocab::<u32>::default().special_pattern().is_none());

        let specials = test_special_vocab::<u32>();
        assert_eq!(
            specials.special_pattern().unwrap().as_str(),
            r"(<\|fim_prefix\|>|<\|endoftext\|>)"
        );

        let pattern = special_words_pattern(["ab", "abc", "b", "ab"]).unwrap();
        assert_eq!(pattern.as_str(), "(abc|ab|b)");
    }
}
