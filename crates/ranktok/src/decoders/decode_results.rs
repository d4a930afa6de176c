//! # `TokenDecoder` Result Types

use core::fmt::Debug;

use crate::errors::{RTResult, RanktokError};

/// The result of decoding tokens.
///
/// Decoding never fails: ids with no entry in either table are dropped,
/// and counted in `skipped`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult<V: Debug> {
    /// The number of unknown ids that were dropped.
    pub skipped: usize,

    /// The decoded result.
    pub value: V,
}

impl<V: Debug> DecodeResult<V> {
    /// Construct a new result.
    pub fn new(
        value: V,
        skipped: usize,
    ) -> Self {
        Self { skipped, value }
    }

    /// Returns `true` if no ids were dropped.
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }

    /// Unwrap the value, ignoring dropped ids.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Unwrap the value, failing if any ids were dropped.
    pub fn try_complete(self) -> RTResult<V> {
        if self.skipped > 0 {
            return Err(RanktokError::IncompleteDecode {
                skipped: self.skipped,
            });
        }
        Ok(self.value)
    }

    /// Convert the result using a conversion function.
    pub fn convert<F, U>(
        self,
        f: F,
    ) -> DecodeResult<U>
    where
        F: FnOnce(V) -> U,
        U: Debug,
    {
        DecodeResult {
            skipped: self.skipped,
            value: f(self.value),
        }
    }
}
