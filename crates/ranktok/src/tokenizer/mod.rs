//! # Tokenizer
//!
//! [`Tokenizer`] ties an [`crate::vocab::EncodingVocab`] to its encoder and
//! decoder, and applies the special-word policy of each call.
//!
//! ## Special-word policy
//!
//! Each `encode` call takes an `allowed` and a `disallowed`
//! [`SpecialSelection`]:
//! * allowed words become their reserved ids;
//! * a disallowed word anywhere in the text fails the whole call;
//! * any other special word is encoded as ordinary text.
//!
//! A disallowed [`SpecialSelection::All`] means every special word that is
//! not allowed.

mod special_selection;
pub mod text_views;
#[allow(clippy::module_inception)]
mod tokenizer;

#[doc(inline)]
pub use special_selection::*;
#[doc(inline)]
pub use tokenizer::*;
