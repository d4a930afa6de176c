//! # Text Spanning
//!
//! Spanning runs before merging:
//! * [`WordSpanner`] cuts ordinary text into words with the split pattern.
//! * [`SpecialScanner`] finds special words, and enforces which are allowed.
//!
//! [`SpanningConfig`] is the uncompiled description of both.

pub mod special_scanner;
pub mod spanning_config;
pub mod word_spanner;

#[doc(inline)]
pub use spanning_config::SpanningConfig;
#[doc(inline)]
pub use special_scanner::SpecialScanner;
#[doc(inline)]
pub use word_spanner::{WordSpanner, WordSpans};
