//! # Regex Utilities
//!
//! The shipped split patterns use negative lookahead (`\s+(?!\S)`), which the
//! [`regex`] crate cannot express; those run on [`fancy_regex`]. Special-token
//! alternations are plain literals and run on [`regex`].
//!
//! * Labeling Patterns - [`RegexWrapperPattern`]
//!   * [`RegexWrapperPattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`RegexWrapperPattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`RegexWrapperPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//!
//! Both spanning and scanning restart searches from byte offsets, so the one
//! operation a [`RegexWrapper`] needs is [`RegexWrapper::find_at`].

pub mod exact_match_union;
pub mod regex_wrapper;

#[doc(inline)]
pub use exact_match_union::exact_match_union_regex_pattern;
#[doc(inline)]
pub use regex_wrapper::{ConstRegexWrapperPattern, ErrorWrapper, RegexWrapper, RegexWrapperPattern};
