//! Public `OpenAI` patterns, special words, and rank file locations.

pub mod patterns;
pub mod resources;
pub mod specials;

#[doc(inline)]
pub use patterns::*;
