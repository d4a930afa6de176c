//! # `OpenAI` Word Patterns
//!
//! All of these use lookahead, so they compile with ``fancy-regex``.

use crate::regex::ConstRegexWrapperPattern;

/// The "`r50k_base`" word pattern.
pub const OA_R50K_BASE_PATTERN: ConstRegexWrapperPattern = ConstRegexWrapperPattern::Fancy(
    r"'s|'t|'re|'ve|'m|'ll|'d| ?\p{L}+| ?\p{N}+| ?[^\s\p{L}\p{N}]+|\s+(?!\S)|\s+",
);

/// The "`p50k_base`" and "`p50k_edit`" word pattern.
pub const OA_P50K_BASE_PATTERN: ConstRegexWrapperPattern = OA_R50K_BASE_PATTERN;

/// The "`cl100k_base`" word pattern.
pub const OA_CL100K_BASE_PATTERN: ConstRegexWrapperPattern = ConstRegexWrapperPattern::Fancy(
    r"(?i:'s|'t|'re|'ve|'m|'ll|'d)|[^\r\n\p{L}\p{N}]?\p{L}+|\p{N}{1,3}| ?[^\s\p{L}\p{N}]+[\r\n]*|\s*[\r\n]+|\s+(?!\S)|\s+",
);

/// The "`o200k_base`" word pattern.
pub const OA_O200K_BASE_PATTERN: ConstRegexWrapperPattern = ConstRegexWrapperPattern::Fancy(concat!(
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]*[\p{Ll}\p{Lm}\p{Lo}\p{M}]+(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"|[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]+[\p{Ll}\p{Lm}\p{Lo}\p{M}]*(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"|\p{N}{1,3}",
    r"| ?[^\s\p{L}\p{N}]+[\r\n/]*",
    r"|\s*[\r\n]+",
    r"|\s+(?!\S)",
    r"|\s+",
));
