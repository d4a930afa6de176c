//! # Token Decoder Trait

use crate::{decoders::DecodeResult, types::TokenType};

/// A trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decode tokens into bytes, appending to a target buffer.
    ///
    /// ## Returns
    /// The number of ids that had no entry and were dropped.
    fn decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> usize;

    /// The bytes of a single token, if it is known.
    fn decode_token_bytes(
        &self,
        token: T,
    ) -> Option<Vec<u8>>;

    /// Decode tokens into bytes.
    fn decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> DecodeResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(tokens.len() * 4);
        let skipped = self.decode_append(tokens, &mut buf);
        DecodeResult::new(buf, skipped)
    }

    /// Decode tokens into a string.
    ///
    /// Byte sequences that are not valid UTF-8, such as a code point split
    /// across a cut in the token stream, become U+FFFD.
    fn decode_to_string(
        &self,
        tokens: &[T],
    ) -> DecodeResult<String> {
        self.decode_to_bytes(tokens)
            .convert(|buf| String::from_utf8_lossy(&buf).into_owned())
    }
}
