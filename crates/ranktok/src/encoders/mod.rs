//! # Token Encoders
//!
//! * [`byte_pair`] - the rank-driven merge engine for a single word.
//! * [`RankMergeEncoder`] - spanning, special-word interleaving, and merging.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::{collections::BTreeSet, sync::Arc};
//!
//! use ranktok::{RTResult, TokenEncoder, encoders::RankMergeEncoder, vocab::EncodingVocab};
//!
//! fn example(vocab: Arc<EncodingVocab<u32>>) -> RTResult<Vec<u32>> {
//!     let encoder = RankMergeEncoder::new(vocab)?;
//!     encoder.try_encode("hello <|endoftext|>", &BTreeSet::new())
//! }
//! ```

pub mod byte_pair;
mod rank_encoder;
mod token_encoder;

#[doc(inline)]
pub use rank_encoder::*;
#[doc(inline)]
pub use token_encoder::*;
