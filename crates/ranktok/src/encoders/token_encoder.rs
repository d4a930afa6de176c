//! # Token Encoder Trait

use std::collections::BTreeSet;

use crate::{errors::RTResult, types::TokenType};

/// Expected average bytes per token; used for buffer pre-sizing.
pub const EXPECTED_BYTES_PER_TOKEN: f64 = 4.0;

/// A trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Encode text as ordinary text, appending to a target buffer.
    ///
    /// Special words in `text` are encoded like any other bytes.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `tokens` - The target token buffer to append to.
    fn try_encode_ordinary_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> RTResult<()>;

    /// Encode text, emitting reserved ids for allowed special words.
    ///
    /// Special words not in `allowed` are encoded as ordinary text;
    /// policy checks are the caller's concern.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `allowed` - Special words to emit as their reserved ids.
    /// * `tokens` - The target token buffer to append to.
    fn try_encode_append(
        &self,
        text: &str,
        allowed: &BTreeSet<String>,
        tokens: &mut Vec<T>,
    ) -> RTResult<()>;

    /// Encode text as ordinary text.
    ///
    /// ## Returns
    /// A `Result` containing the vector of tokens or an error.
    fn try_encode_ordinary(
        &self,
        text: &str,
    ) -> RTResult<Vec<T>> {
        let mut tokens = token_buffer(text);
        self.try_encode_ordinary_append(text, &mut tokens)?;
        Ok(tokens)
    }

    /// Encode text, emitting reserved ids for allowed special words.
    ///
    /// ## Returns
    /// A `Result` containing the vector of tokens or an error.
    fn try_encode(
        &self,
        text: &str,
        allowed: &BTreeSet<String>,
    ) -> RTResult<Vec<T>> {
        let mut tokens = token_buffer(text);
        self.try_encode_append(text, allowed, &mut tokens)?;
        Ok(tokens)
    }
}

fn token_buffer<T>(text: &str) -> Vec<T> {
    let capacity = text.len() as f64 / (EXPECTED_BYTES_PER_TOKEN * 0.5);
    Vec::with_capacity(capacity as usize)
}
