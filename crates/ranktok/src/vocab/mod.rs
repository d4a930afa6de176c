//! # Vocabulary
//!
//! * [`RankTable`] - the ordinary ``{ Vec<u8> <-> T }`` table; ids are merge priorities.
//! * [`SpecialVocab`] - reserved literal words, outside the rank table.
//! * [`EncodingVocab`] - a spanning configuration plus a rank table.
//! * [`io`] - rank file reading and writing.

pub mod encoding_vocab;
pub mod io;
pub mod rank_table;
pub mod special_vocab;

#[cfg(test)]
pub(crate) mod testing;

#[doc(inline)]
pub use encoding_vocab::EncodingVocab;
#[doc(inline)]
pub use rank_table::RankTable;
#[doc(inline)]
pub use special_vocab::SpecialVocab;
#[doc(inline)]
pub use crate::types::{SpanTokenMap, TokenSpanMap};
