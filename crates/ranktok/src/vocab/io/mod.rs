//! # Vocabulary IO
//!
//! Rank files hold one `<base64 bytes> <decimal rank>` entry per line.
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use ranktok::{
//!     pretrained::openai::OA_CL100K_BASE_PATTERN,
//!     spanning::SpanningConfig,
//!     vocab::{EncodingVocab, io::load_base64_encoding_vocab_path},
//! };
//!
//! fn example() -> ranktok::RTResult<EncodingVocab<u32>> {
//!     load_base64_encoding_vocab_path(
//!         "cl100k_base.tiktoken",
//!         SpanningConfig::from(OA_CL100K_BASE_PATTERN.to_pattern()),
//!     )
//! }
//! ```

mod base64_vocab;

#[doc(inline)]
pub use base64_vocab::*;
