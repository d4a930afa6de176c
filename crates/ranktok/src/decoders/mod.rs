//! # Token Decoders
//!
//! Decoding concatenates the bytes of each id, looking in the rank table
//! first and the special words second. Unknown ids are dropped, never an
//! error; [`DecodeResult::skipped`] reports how many there were.

mod decode_results;
mod rank_decoder;
mod token_decoder;

#[doc(inline)]
pub use decode_results::*;
#[doc(inline)]
pub use rank_decoder::*;
#[doc(inline)]
pub use token_decoder::*;
