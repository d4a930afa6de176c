//! # Combined Tokenizer

use std::{collections::BTreeSet, sync::Arc};

use crate::{
    decoders::{RankDecoder, TokenDecoder},
    encoders::{RankMergeEncoder, TokenEncoder},
    errors::{RTResult, RanktokError},
    tokenizer::{
        special_selection::{SpecialSelection, resolve_special_policy},
        text_views::{utf8_or_wide, wide_to_string},
    },
    types::TokenType,
    vocab::EncodingVocab,
};

/// A named encoding: vocabulary, encoder, and decoder.
///
/// Cheap to clone; clones share the compiled patterns and tables.
#[derive(Debug, Clone)]
pub struct Tokenizer<T: TokenType> {
    name: String,
    vocab: Arc<EncodingVocab<T>>,
    special_words: BTreeSet<String>,
    encoder: RankMergeEncoder<T>,
    decoder: RankDecoder<T>,
}

impl<T: TokenType> Tokenizer<T> {
    /// Build a tokenizer.
    ///
    /// ## Arguments
    /// * `name` - The encoding name.
    /// * `vocab` - The vocabulary.
    /// * `explicit_n_vocab` - The expected vocabulary size, if declared.
    ///
    /// ## Errors
    /// * `VocabSizeMismatch` if ordinary plus special entries differ from
    ///   `explicit_n_vocab`.
    /// * `MaxTokenMismatch` if the largest token is not `explicit_n_vocab - 1`.
    /// * `Pattern` if the split or special pattern does not compile.
    pub fn new(
        name: impl Into<String>,
        vocab: EncodingVocab<T>,
        explicit_n_vocab: Option<usize>,
    ) -> RTResult<Self> {
        if let Some(expected) = explicit_n_vocab {
            let actual = vocab.len();
            if actual != expected {
                return Err(RanktokError::VocabSizeMismatch { expected, actual });
            }
            let max_token = vocab
                .max_token()
                .to_usize()
                .ok_or(RanktokError::TokenOutOfRange)?;
            if max_token + 1 != expected {
                return Err(RanktokError::MaxTokenMismatch {
                    expected,
                    max_token,
                });
            }
        }

        let vocab = Arc::new(vocab);
        let encoder = RankMergeEncoder::new(vocab.clone())?;
        let decoder = RankDecoder::new(vocab.clone());
        Ok(Self {
            name: name.into(),
            special_words: vocab.special_vocab().words(),
            vocab,
            encoder,
            decoder,
        })
    }

    /// The encoding name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<EncodingVocab<T>> {
        &self.vocab
    }

    /// Get the underlying encoder.
    pub fn encoder(&self) -> &RankMergeEncoder<T> {
        &self.encoder
    }

    /// Get the underlying decoder.
    pub fn decoder(&self) -> &RankDecoder<T> {
        &self.decoder
    }

    /// The largest ordinary or special token.
    pub fn max_token_value(&self) -> T {
        self.vocab.max_token()
    }

    /// One more than [`Self::max_token_value`].
    pub fn n_vocab(&self) -> usize {
        self.max_token_value().to_usize().unwrap_or(usize::MAX).saturating_add(1)
    }

    /// The special words of this encoding.
    pub fn special_tokens_set(&self) -> &BTreeSet<String> {
        &self.special_words
    }

    /// Is `token` a special token?
    pub fn is_special_token(
        &self,
        token: T,
    ) -> bool {
        self.vocab.special_vocab().lookup_word(token).is_some()
    }

    /// The id of a special word, if it is one.
    pub fn special_token(
        &self,
        word: &str,
    ) -> Option<T> {
        self.vocab.special_vocab().lookup_token(word)
    }

    /// Encode text, treating special words as ordinary text.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn encode_ordinary(
        &self,
        text: &str,
    ) -> RTResult<Vec<T>> {
        self.encoder.try_encode_ordinary(text)
    }

    /// Encode text under a special-word policy.
    ///
    /// The whole text is first checked for `disallowed` words; finding one
    /// fails the call before anything is encoded. Then `allowed` words become
    /// their reserved ids, and all other text (including special words that
    /// are neither allowed nor disallowed) is encoded as ordinary text.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `allowed` - Special words to emit as reserved ids.
    /// * `disallowed` - Special words that must not appear;
    ///   [`SpecialSelection::All`] means every special word not allowed.
    ///
    /// ## Errors
    /// * `DisallowedSpecial` naming the first disallowed word found.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn encode(
        &self,
        text: &str,
        allowed: &SpecialSelection,
        disallowed: &SpecialSelection,
    ) -> RTResult<Vec<T>> {
        let (allowed, disallowed) =
            resolve_special_policy(allowed, disallowed, &self.special_words);

        if let Some(token) = self.encoder.scanner().find_disallowed(text, &disallowed)? {
            return Err(RanktokError::DisallowedSpecial { token });
        }

        self.encoder.try_encode(text, &allowed)
    }

    /// Encode text with every special word allowed.
    pub fn encode_with_special_tokens(
        &self,
        text: &str,
    ) -> RTResult<Vec<T>> {
        self.encoder.try_encode(text, &self.special_words)
    }

    /// [`Self::encode_ordinary`] over bytes.
    ///
    /// Bytes that are not valid UTF-8 are encoded through the UTF-16 view
    /// described in [`crate::tokenizer::text_views`].
    pub fn encode_ordinary_bytes(
        &self,
        bytes: &[u8],
    ) -> RTResult<Vec<T>> {
        self.encode_ordinary(&utf8_or_wide(bytes))
    }

    /// [`Self::encode`] over bytes.
    ///
    /// Bytes that are not valid UTF-8 are encoded through the UTF-16 view
    /// described in [`crate::tokenizer::text_views`].
    pub fn encode_bytes(
        &self,
        bytes: &[u8],
        allowed: &SpecialSelection,
        disallowed: &SpecialSelection,
    ) -> RTResult<Vec<T>> {
        self.encode(&utf8_or_wide(bytes), allowed, disallowed)
    }

    /// [`Self::encode_ordinary`] over UTF-16 units.
    ///
    /// Unpaired surrogates are replaced with U+FFFD.
    pub fn encode_ordinary_wide(
        &self,
        units: &[u16],
    ) -> RTResult<Vec<T>> {
        self.encode_ordinary(&wide_to_string(units))
    }

    /// [`Self::encode`] over UTF-16 units.
    ///
    /// Unpaired surrogates are replaced with U+FFFD.
    pub fn encode_wide(
        &self,
        units: &[u16],
        allowed: &SpecialSelection,
        disallowed: &SpecialSelection,
    ) -> RTResult<Vec<T>> {
        self.encode(&wide_to_string(units), allowed, disallowed)
    }

    /// Encode bytes that must be exactly one token.
    ///
    /// ## Errors
    /// * `UnknownSingleToken` if the bytes are neither a rank table entry
    ///   nor a special word.
    pub fn encode_single_token(
        &self,
        bytes: &[u8],
    ) -> RTResult<T> {
        if let Some(token) = self.vocab.rank_table().rank_of(bytes) {
            return Ok(token);
        }
        std::str::from_utf8(bytes)
            .ok()
            .and_then(|word| self.special_token(word))
            .ok_or_else(|| RanktokError::UnknownSingleToken(bytes.to_vec()))
    }

    /// Decode tokens to bytes; unknown ids are dropped.
    pub fn decode_bytes(
        &self,
        tokens: &[T],
    ) -> Vec<u8> {
        self.decoder.decode_to_bytes(tokens).value
    }

    /// Decode tokens to text; unknown ids are dropped,
    /// and invalid UTF-8 becomes U+FFFD.
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> String {
        self.decoder.decode_to_string(tokens).value
    }

    /// The bytes of a single token.
    pub fn decode_single_token_bytes(
        &self,
        token: T,
    ) -> Option<Vec<u8>> {
        self.decoder.decode_token_bytes(token)
    }

    /// The bytes of each token, in order; unknown ids are dropped.
    pub fn decode_tokens_bytes(
        &self,
        tokens: &[T],
    ) -> Vec<Vec<u8>> {
        tokens
            .iter()
            .filter_map(|&token| self.decode_single_token_bytes(token))
            .collect()
    }

    /// [`Self::encode_ordinary`] over a batch.
    pub fn encode_ordinary_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> RTResult<Vec<Vec<T>>> {
        batch_map(batch, |text| self.encode_ordinary(text.as_ref()))
            .into_iter()
            .collect()
    }

    /// [`Self::encode`] over a batch.
    pub fn encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
        allowed: &SpecialSelection,
        disallowed: &SpecialSelection,
    ) -> RTResult<Vec<Vec<T>>> {
        batch_map(batch, |text| self.encode(text.as_ref(), allowed, disallowed))
            .into_iter()
            .collect()
    }

    /// [`Self::decode`] over a batch.
    pub fn decode_batch<B: AsRef<[T]> + Sync>(
        &self,
        batch: &[B],
    ) -> Vec<String> {
        batch_map(batch, |tokens| self.decode(tokens.as_ref()))
    }

    /// [`Self::decode_bytes`] over a batch.
    pub fn decode_bytes_batch<B: AsRef<[T]> + Sync>(
        &self,
        batch: &[B],
    ) -> Vec<Vec<u8>> {
        batch_map(batch, |tokens| self.decode_bytes(tokens.as_ref()))
    }
}

/// Map over a batch; in parallel when ``rayon`` is enabled.
fn batch_map<I, O, F>(
    batch: &[I],
    f: F,
) -> Vec<O>
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> O + Sync + Send,
{
    cfg_if::cfg_if! {
        if #[cfg(feature = "rayon")] {
            use rayon::prelude::*;
            batch.par_iter().map(f).collect()
        } else {
            batch.iter().map(f).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        spanning::SpanningConfig,
        vocab::testing::{TEST_PATTERN, test_encoding_vocab, test_rank_table},
    };

    fn tokenizer() -> Tokenizer<u32> {
        Tokenizer::new("test_base", test_encoding_vocab(), None).unwrap()
    }

    #[test]
    fn test_metadata() {
        let tok = tokenizer();
        assert_eq!(tok.name(), "test_base");
        assert_eq!(tok.max_token_value(), 301);
        assert_eq!(tok.n_vocab(), 302);
        assert_eq!(tok.special_tokens_set().len(), 2);
        assert!(tok.is_special_token(300));
        assert!(!tok.is_special_token(259));
        assert_eq!(tok.special_token("<|endoftext|>"), Some(300));
    }

    #[test]
    fn test_explicit_n_vocab() {
        let ranks = test_rank_table::<u32>();
        let n = ranks.len();
        let specials =
            crate::vocab::SpecialVocab::try_from_words([("<|endoftext|>", n as u32)]).unwrap();
        let vocab = EncodingVocab::new(SpanningConfig::new(TEST_PATTERN.into(), specials), ranks)
            .unwrap();

        assert!(Tokenizer::new("ok", vocab.clone(), Some(n + 1)).is_ok());

        let err = Tokenizer::new("short", vocab.clone(), Some(n)).unwrap_err();
        assert!(matches!(err, RanktokError::VocabSizeMismatch { actual, .. } if actual == n + 1));

        // The right count, but with a hole below the max token.
        let err = Tokenizer::new("gapped", test_encoding_vocab::<u32>(), Some(n + 2)).unwrap_err();
        assert!(matches!(err, RanktokError::MaxTokenMismatch { max_token: 301, .. }));
    }

    #[test]
    fn test_round_trip() {
        let tok = tokenizer();
        for text in [
            "",
            "hello world",
            "hello <|endoftext|> world",
            "tiktoken is great!",
            "Hi，试一下中文字符！",
            "Hello, 😀\n\n  trailing  ",
        ] {
            let tokens = tok.encode_ordinary(text).unwrap();
            assert_eq!(tok.decode(&tokens), text);
            assert_eq!(tok.decode_bytes(&tokens), text.as_bytes());

            let tokens = tok.encode_with_special_tokens(text).unwrap();
            assert_eq!(tok.decode(&tokens), text);
        }
    }

    #[test]
    fn test_deterministic() {
        let tok = tokenizer();
        let text = "hello world hellohe aaaaa singing";
        let first = tok.encode_ordinary(text).unwrap();
        for _ in 0..3 {
            assert_eq!(tok.encode_ordinary(text).unwrap(), first);
        }
        assert_eq!(tok.clone().encode_ordinary(text).unwrap(), first);
    }

    #[test]
    fn test_special_gating() {
        let tok = tokenizer();
        let text = "hello <|endoftext|>";

        // Neither allowed nor disallowed: ordinary bytes.
        let tokens = tok
            .encode(text, &SpecialSelection::none(), &SpecialSelection::none())
            .unwrap();
        assert_eq!(tokens, tok.encode_ordinary(text).unwrap());
        assert!(!tokens.contains(&300));

        // All allowed.
        assert_eq!(
            tok.encode(text, &SpecialSelection::All, &SpecialSelection::All)
                .unwrap(),
            vec![259, 32, 300]
        );

        // Explicitly allowed.
        assert_eq!(
            tok.encode(
                "<|endoftext|>",
                &SpecialSelection::explicit(["<|endoftext|>"]),
                &SpecialSelection::All
            )
            .unwrap(),
            vec![300]
        );
    }

    #[test]
    fn test_disallowed_rejection() {
        let tok = tokenizer();

        let err = tok
            .encode(
                "hello <|endoftext|>",
                &SpecialSelection::none(),
                &SpecialSelection::All,
            )
            .unwrap_err();
        assert!(err.is_policy());
        assert!(matches!(
            &err,
            RanktokError::DisallowedSpecial { token } if token == "<|endoftext|>"
        ));

        // Allowing one word does not allow the other.
        let err = tok
            .encode(
                "<|endoftext|><|fim_prefix|>",
                &SpecialSelection::explicit(["<|endoftext|>"]),
                &SpecialSelection::All,
            )
            .unwrap_err();
        assert!(matches!(
            &err,
            RanktokError::DisallowedSpecial { token } if token == "<|fim_prefix|>"
        ));

        // Plain text passes the check.
        assert_eq!(
            tok.encode("hello world", &SpecialSelection::none(), &SpecialSelection::All)
                .unwrap(),
            vec![259, 264]
        );
    }

    #[test]
    fn test_single_token() {
        let tok = tokenizer();
        assert_eq!(tok.encode_single_token(b"hello").unwrap(), 259);
        assert_eq!(tok.encode_single_token(b"<|fim_prefix|>").unwrap(), 301);
        assert!(matches!(
            tok.encode_single_token(b"hello world"),
            Err(RanktokError::UnknownSingleToken(_))
        ));
    }

    #[test]
    fn test_token_symbols() {
        let tok = tokenizer();
        let tokens = tok.encode_ordinary("hello hellohe").unwrap();
        assert_eq!(
            tok.decode_tokens_bytes(&tokens),
            vec![b"hello".to_vec(), b" hello".to_vec(), b"he".to_vec()]
        );
        assert_eq!(tok.decode_tokens_bytes(&[259, 5000, 300]).len(), 2);
        assert_eq!(tok.decode_single_token_bytes(5000), None);
    }

    #[test]
    fn test_byte_fallback() {
        let tok = tokenizer();

        // Valid UTF-8 takes the direct path.
        assert_eq!(
            tok.encode_ordinary_bytes(b"hello world").unwrap(),
            vec![259, 264]
        );

        // A lone surrogate half becomes U+FFFD.
        let tokens = tok.encode_ordinary_bytes(b"hello\xED\xA0\x80").unwrap();
        assert_eq!(tok.decode(&tokens), "hello\u{FFFD}");

        let tokens = tok
            .encode_bytes(
                b"\xFF<|endoftext|>",
                &SpecialSelection::All,
                &SpecialSelection::All,
            )
            .unwrap();
        assert_eq!(tokens.last(), Some(&300));
        assert_eq!(tok.decode(&tokens), "\u{FFFD}<|endoftext|>");
    }

    #[test]
    fn test_wide_input() {
        let tok = tokenizer();
        let units: Vec<u16> = "hello world".encode_utf16().collect();
        assert_eq!(tok.encode_ordinary_wide(&units).unwrap(), vec![259, 264]);

        let mut units: Vec<u16> = "hello ".encode_utf16().collect();
        units.push(0xDC00);
        let tokens = tok
            .encode_wide(&units, &SpecialSelection::none(), &SpecialSelection::All)
            .unwrap();
        assert_eq!(tok.decode(&tokens), "hello \u{FFFD}");
    }

    #[test]
    fn test_batches() {
        let tok = tokenizer();
        let batch = ["hello world", "", "hello <|endoftext|>"];

        let ordinary = tok.encode_ordinary_batch(&batch).unwrap();
        assert_eq!(ordinary[0], vec![259, 264]);
        assert!(ordinary[1].is_empty());

        let with_specials = tok
            .encode_batch(&batch, &SpecialSelection::All, &SpecialSelection::All)
            .unwrap();
        assert_eq!(with_specials[2], vec![259, 32, 300]);

        assert!(
            tok.encode_batch(&batch, &SpecialSelection::none(), &SpecialSelection::All)
                .is_err()
        );

        assert_eq!(tok.decode_batch(&with_specials), batch.to_vec());
        assert_eq!(tok.decode_bytes_batch(&with_specials)[0], b"hello world".to_vec());
    }
}
