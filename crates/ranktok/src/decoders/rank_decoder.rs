//! # Rank Table Decoder

use std::sync::Arc;

use crate::{decoders::TokenDecoder, types::TokenType, vocab::EncodingVocab};

/// A [`TokenDecoder`] over a rank table and its special words.
///
/// Ordinary ranks are looked up first, then special words.
#[derive(Debug, Clone)]
pub struct RankDecoder<T: TokenType> {
    vocab: Arc<EncodingVocab<T>>,
}

impl<T: TokenType> RankDecoder<T> {
    /// Create a decoder over `vocab`.
    pub fn new(vocab: Arc<EncodingVocab<T>>) -> Self {
        Self { vocab }
    }

    /// Get the vocab.
    pub fn vocab(&self) -> &Arc<EncodingVocab<T>> {
        &self.vocab
    }

    fn lookup(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.vocab.rank_table().bytes_of(token).or_else(|| {
            self.vocab
                .special_vocab()
                .lookup_word(token)
                .map(str::as_bytes)
        })
    }
}

impl<T: TokenType> TokenDecoder<T> for RankDecoder<T> {
    fn decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> usize {
        let mut skipped = 0;
        for &token in tokens {
            match self.lookup(token) {
                Some(bytes) => buf.extend_from_slice(bytes),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            log::trace!("dropped {skipped} unknown tokens while decoding");
        }
        skipped
    }

    fn decode_token_bytes(
        &self,
        token: T,
    ) -> Option<Vec<u8>> {
        self.lookup(token).map(<[u8]>::to_vec)
    }
}
