//! # `ranktok` Byte-Pair Tokenizer
//!
//! Turns text into integer token ids and back, using fixed rank tables in
//! the `*.tiktoken` format (`r50k_base`, `p50k_base`, `p50k_edit`,
//! `cl100k_base`, `o200k_base`). Decoding recovers the original bytes exactly.
//!
//! See:
//! * [`Tokenizer`] for the combined encode / decode surface.
//! * [`pretrained`] for named encodings and model name resolution.
//! * [`vocab`] for rank tables, special words, and rank file io.
//! * [`encoders`] and [`decoders`] for the underlying pipeline.
//!
//! ## Encoding
//!
//! Text is cut into words by a regex pattern, and each word is merged
//! bottom-up from single bytes, always joining the adjacent pair whose
//! concatenation has the lowest rank. Special words (like `<|endoftext|>`)
//! bypass merging, subject to an allow / disallow policy per call.
//!
//! ```rust,no_run
//! use ranktok::{SpecialSelection, Tokenizer, pretrained::EncodingName};
//!
//! fn example() -> ranktok::RTResult<()> {
//!     let tok: Tokenizer<u32> = EncodingName::Cl100kBase.load_path("cl100k_base.tiktoken")?;
//!
//!     assert_eq!(tok.encode_ordinary("hello world")?, vec![15339, 1917]);
//!     assert_eq!(
//!         tok.encode(
//!             "hello <|endoftext|>",
//!             &SpecialSelection::All,
//!             &SpecialSelection::All
//!         )?,
//!         vec![15339, 220, 100257]
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``download``
//! * ``rayon``
//!
//! #### feature: ``download``
//!
//! Pulls in ``ranktok-disk-cache`` (re-exported as [`disk_cache`]) to fetch
//! and cache rank files.
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``.
//!
//! This is done by the ``types::RTHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! Runs the [`Tokenizer`] batch helpers on the ``rayon`` global pool.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
#![warn(missing_docs, unused)]

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod pretrained;
pub mod regex;
pub mod spanning;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[cfg(feature = "download")]
#[doc(inline)]
pub use ranktok_disk_cache as disk_cache;

#[doc(inline)]
pub use decoders::TokenDecoder;
#[doc(inline)]
pub use encoders::TokenEncoder;
#[doc(inline)]
pub use errors::{ErrorKind, RTResult, RanktokError};
#[doc(inline)]
pub use tokenizer::{SpecialSelection, Tokenizer};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{EncodingVocab, RankTable, SpecialVocab};
