//! # Encoding Vocabulary

use crate::{
    errors::{RTResult, RanktokError},
    spanning::SpanningConfig,
    types::TokenType,
    vocab::{RankTable, SpecialVocab},
};

/// Everything an encoding needs besides its name:
/// the spanning configuration and the rank table.
#[derive(Debug, Clone)]
pub struct EncodingVocab<T: TokenType> {
    spanning: SpanningConfig<T>,
    ranks: RankTable<T>,
}

impl<T: TokenType> EncodingVocab<T> {
    /// Combine a spanning configuration and a rank table.
    ///
    /// ## Returns
    /// `VocabConflict` if a special token id is also an ordinary rank.
    pub fn new(
        spanning: SpanningConfig<T>,
        ranks: RankTable<T>,
    ) -> RTResult<Self> {
        let specials = spanning.specials();
        if !specials.is_empty() {
            for (span, rank) in ranks.iter() {
                if let Some(word) = specials.lookup_word(rank) {
                    return Err(RanktokError::VocabConflict(format!(
                        "special word {word:?} -> ({rank}) collides with rank table entry {:?}",
                        String::from_utf8_lossy(span)
                    )));
                }
            }
        }
        Ok(Self { spanning, ranks })
    }

    /// Get the [`SpanningConfig`].
    pub fn spanning(&self) -> &SpanningConfig<T> {
        &self.spanning
    }

    /// Get the [`RankTable`].
    pub fn rank_table(&self) -> &RankTable<T> {
        &self.ranks
    }

    /// Get the [`SpecialVocab`].
    pub fn special_vocab(&self) -> &SpecialVocab<T> {
        self.spanning.specials()
    }

    /// The number of ordinary plus special entries.
    pub fn len(&self) -> usize {
        self.ranks.len() + self.special_vocab().len()
    }

    /// Never true for a constructed vocab.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The largest ordinary or special token.
    pub fn max_token(&self) -> T {
        let max_rank = self.ranks.max_rank();
        match self.special_vocab().max_token() {
            Some(special) if special > max_rank => special,
            _ => max_rank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::testing::{TEST_MERGES, TEST_PATTERN, test_encoding_vocab, test_rank_table};

    #[test]
    fn test_vocab() {
        let vocab = test_encoding_vocab::<u32>();
        assert_eq!(vocab.len(), 256 + TEST_MERGES.len() + 2);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.max_token(), 301);
        assert_eq!(vocab.rank_table().rank_of(b"hello"), Some(259));
        assert_eq!(vocab.special_vocab().lookup_token("<|endoftext|>"), Some(300));
        assert_eq!(vocab.spanning().pattern().as_str(), TEST_PATTERN.as_str());
    }

    #[test]
    fn test_special_collision() {
        let specials = SpecialVocab::try_from_words([("<|x|>", 259u32)]).unwrap();
        let err = EncodingVocab::new(
            SpanningConfig::new(TEST_PATTERN.into(), specials),
            test_rank_table(),
        )
        .unwrap_err();
        assert!(matches!(err, RanktokError::VocabConflict(_)));
    }
}
