//! # Rank Merge Encoder

use std::{collections::BTreeSet, sync::Arc};

use crate::{
    encoders::{TokenEncoder, byte_pair::byte_pair_encode},
    errors::{RTResult, RanktokError},
    spanning::{SpecialScanner, WordSpanner},
    types::TokenType,
    vocab::EncodingVocab,
};

/// A [`TokenEncoder`] over a rank table.
///
/// Words found verbatim in the rank table are emitted directly;
/// everything else goes through the byte-pair merge engine.
#[derive(Debug, Clone)]
pub struct RankMergeEncoder<T: TokenType> {
    vocab: Arc<EncodingVocab<T>>,
    spanner: WordSpanner,
    scanner: SpecialScanner,
}

impl<T: TokenType> RankMergeEncoder<T> {
    /// Compile the split and special patterns of `vocab`.
    pub fn new(vocab: Arc<EncodingVocab<T>>) -> RTResult<Self> {
        let spanner = WordSpanner::from_pattern(vocab.spanning().pattern())?;
        let scanner = SpecialScanner::from_specials(vocab.special_vocab())?;
        Ok(Self {
            vocab,
            spanner,
            scanner,
        })
    }

    /// Get the vocab.
    pub fn vocab(&self) -> &Arc<EncodingVocab<T>> {
        &self.vocab
    }

    /// Get the word spanner.
    pub fn spanner(&self) -> &WordSpanner {
        &self.spanner
    }

    /// Get the special scanner.
    pub fn scanner(&self) -> &SpecialScanner {
        &self.scanner
    }

    /// Encode one pre-tokenized word.
    pub fn encode_word_append(
        &self,
        word: &[u8],
        tokens: &mut Vec<T>,
    ) -> RTResult<()> {
        let ranks = self.vocab.rank_table();
        match ranks.rank_of(word) {
            Some(token) => tokens.push(token),
            None => tokens.extend(byte_pair_encode(ranks, word)?),
        }
        Ok(())
    }
}

impl<T: TokenType> TokenEncoder<T> for RankMergeEncoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn try_encode_ordinary_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> RTResult<()> {
        for word in self.spanner.split_words(text) {
            self.encode_word_append(text[word?].as_bytes(), tokens)?;
        }
        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, allowed, tokens)))]
    fn try_encode_append(
        &self,
        text: &str,
        allowed: &BTreeSet<String>,
        tokens: &mut Vec<T>,
    ) -> RTResult<()> {
        let mut start = 0;
        loop {
            let special = self.scanner.next_allowed(text, start, allowed)?;
            let end = special.as_ref().map_or(text.len(), |m| m.start);

            self.try_encode_ordinary_append(&text[start..end], tokens)?;

            let Some(m) = special else {
                return Ok(());
            };
            let word = &text[m.clone()];
            let token = self.vocab.special_vocab().lookup_token(word).ok_or_else(|| {
                RanktokError::VocabConflict(format!("special word {word:?} has no token"))
            })?;
            tokens.push(token);
            start = m.end;
        }
    }
}
