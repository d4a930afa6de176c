//! Small synthetic vocabularies for unit tests.

use crate::{
    regex::ConstRegexWrapperPattern,
    spanning::SpanningConfig,
    types::{SpanTokenMap, TokenType},
    vocab::{EncodingVocab, RankTable, SpecialVocab},
};

/// Merged entries, ranked from 256 in order.
///
/// Each entry is the concatenation of two lower-ranked entries.
pub const TEST_MERGES: &[&str] = &[
    "he",     // 256
    "ll",     // 257
    "llo",    // 258
    "hello",  // 259
    "or",     // 260
    "ld",     // 261
    "orld",   // 262
    "world",  // 263
    " world", // 264
    "aa",     // 265
    "in",     // 266
    "ing",    // 267
    " hello", // 268
];

/// Special tokens, placed above the ordinary ranks with a gap.
pub const TEST_SPECIALS: &[(&str, usize)] = &[("<|endoftext|>", 300), ("<|fim_prefix|>", 301)];

/// A word pattern in the style of the GPT-2 family.
pub const TEST_PATTERN: ConstRegexWrapperPattern = ConstRegexWrapperPattern::Fancy(
    r"'s|'t|'re|'ve|'m|'ll|'d| ?\p{L}+| ?\p{N}+| ?[^\s\p{L}\p{N}]+|\s+(?!\S)|\s+",
);

/// Every single byte, ranked by its own value.
pub fn byte_span_map<T: TokenType>() -> SpanTokenMap<T> {
    (0..=255u8)
        .map(|b| (vec![b], T::from_u8(b).unwrap()))
        .collect()
}

/// All bytes plus [`TEST_MERGES`].
pub fn test_rank_table<T: TokenType>() -> RankTable<T> {
    let mut span_map = byte_span_map::<T>();
    for (idx, word) in TEST_MERGES.iter().enumerate() {
        span_map.insert(word.as_bytes().to_vec(), T::from_usize(256 + idx).unwrap());
    }
    RankTable::try_from_span_map(span_map).unwrap()
}

/// [`TEST_SPECIALS`] as a special vocab.
pub fn test_special_vocab<T: TokenType>() -> SpecialVocab<T> {
    SpecialVocab::try_from_words(
        TEST_SPECIALS
            .iter()
            .map(|&(word, token)| (word, T::from_usize(token).unwrap())),
    )
    .unwrap()
}

/// A complete test vocabulary.
pub fn test_encoding_vocab<T: TokenType>() -> EncodingVocab<T> {
    EncodingVocab::new(
        SpanningConfig::new(TEST_PATTERN.into(), test_special_vocab()),
        test_rank_table(),
    )
    .unwrap()
}
