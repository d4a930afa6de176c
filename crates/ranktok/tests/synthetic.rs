#![allow(missing_docs)]

//! End-to-end checks over a small rank file written to a temp dir.

use std::{fs, io::Cursor, path::Path};

use ranktok::{
    ErrorKind,
    RanktokError,
    SpecialSelection,
    SpecialVocab,
    TokenDecoder,
    Tokenizer,
    encoders::byte_pair::byte_pair_split,
    pretrained::openai::OA_R50K_BASE_PATTERN,
    spanning::SpanningConfig,
    types::SpanTokenMap,
    vocab::io::{
        load_base64_encoding_vocab_path,
        load_base64_span_map_path,
        read_base64_span_map,
        save_base64_span_map_path,
    },
};
use tempdir::TempDir;

/// Merged entries, ranked from 256 in order.
const MERGES: &[&str] = &[
    "aa",     // 256
    "bc",     // 257
    "ab",     // 258
    "abc",    // 259
    "ll",     // 260
    "llo",    // 261
    "he",     // 262
    "hello",  // 263
    " w",     // 264
    "or",     // 265
    " wor",   // 266
    "ld",     // 267
    " world", // 268
];

const SPECIALS: &[(&str, u32)] = &[("<|endoftext|>", 269), ("<|fim_prefix|>", 270)];

const N_VOCAB: usize = 271;

fn span_map() -> SpanTokenMap<u32> {
    let mut span_map: SpanTokenMap<u32> = (0..=255u8).map(|b| (vec![b], b as u32)).collect();
    for (idx, word) in MERGES.iter().enumerate() {
        span_map.insert(word.as_bytes().to_vec(), 256 + idx as u32);
    }
    span_map
}

fn spanning() -> SpanningConfig<u32> {
    SpanningConfig::new(
        OA_R50K_BASE_PATTERN.into(),
        SpecialVocab::try_from_words(SPECIALS.iter().copied()).unwrap(),
    )
}

fn write_rank_file(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("synthetic.tiktoken");
    save_base64_span_map_path(&span_map(), &path).unwrap();
    path
}

fn load_tokenizer(dir: &Path) -> Tokenizer<u32> {
    let vocab = load_base64_encoding_vocab_path(write_rank_file(dir), spanning()).unwrap();
    Tokenizer::new("synthetic", vocab, Some(N_VOCAB)).unwrap()
}

#[test]
fn test_rank_file_round_trip() {
    let dir = TempDir::new("ranktok_synthetic").unwrap();
    let path = write_rank_file(dir.path());

    let loaded: SpanTokenMap<u32> = load_base64_span_map_path(&path).unwrap();
    assert_eq!(loaded, span_map());

    // Entries are written in rank order.
    let text = fs::read_to_string(&path).unwrap();
    let ranks: Vec<u32> = text
        .lines()
        .map(|line| line.split_once(' ').unwrap().1.parse().unwrap())
        .collect();
    assert_eq!(ranks, (0..N_VOCAB as u32 - 2).collect::<Vec<_>>());
}

#[test]
fn test_encode_ordinary() {
    let dir = TempDir::new("ranktok_synthetic").unwrap();
    let tok = load_tokenizer(dir.path());

    assert_eq!(tok.encode_ordinary("hello world").unwrap(), vec![263, 268]);
    assert!(tok.encode_ordinary("").unwrap().is_empty());
    assert_eq!(tok.n_vocab(), N_VOCAB);
}

#[test]
fn test_merge_order() {
    let dir = TempDir::new("ranktok_synthetic").unwrap();
    let tok = load_tokenizer(dir.path());

    // Lowest rank first: "bc" (257) beats "ab" (258).
    assert_eq!(tok.encode_ordinary("abc").unwrap(), vec![259]);
    assert_eq!(tok.encode_ordinary("abd").unwrap(), vec![258, 100]);
    assert_eq!(tok.encode_ordinary("abcabd").unwrap(), vec![259, 258, 100]);

    // Equal ranks: the leftmost pair merges first.
    assert_eq!(tok.encode_ordinary("aaa").unwrap(), vec![256, 97]);
    assert_eq!(tok.encode_ordinary("aaaa").unwrap(), vec![256, 256]);

    let ranks = tok.vocab().rank_table();
    assert_eq!(
        byte_pair_split(ranks, b"abcabd"),
        vec![&b"abc"[..], &b"ab"[..], &b"d"[..]]
    );
}

#[test]
fn test_words_partition_the_input() {
    let dir = TempDir::new("ranktok_synthetic").unwrap();
    let tok = load_tokenizer(dir.path());

    for text in [
        "hello world",
        "  leading and trailing  ",
        "line1\nline2\r\n\r\nline3",
        "it's 2024's  ¿qué?  ",
        "\u{3000}ideographic\u{3000}space",
    ] {
        let tokens = tok.encode_ordinary(text).unwrap();
        let symbols = tok.decode_tokens_bytes(&tokens);
        assert_eq!(symbols.len(), tokens.len());
        assert_eq!(symbols.concat(), text.as_bytes(), "{text:?}");
    }
}

#[test]
fn test_special_policy() {
    let dir = TempDir::new("ranktok_synthetic").unwrap();
    let tok = load_tokenizer(dir.path());

    let text = "hello<|endoftext|> world<|fim_prefix|>";

    let tokens = tok
        .encode(text, &SpecialSelection::All, &SpecialSelection::All)
        .unwrap();
    assert_eq!(tokens, vec![263, 269, 268, 270]);
    assert_eq!(tok.decode(&tokens), text);

    // Only one allowed; the other is neither, so it is ordinary text.
    let tokens = tok
        .encode(
            text,
            &SpecialSelection::explicit(["<|fim_prefix|>"]),
            &SpecialSelection::none(),
        )
        .unwrap();
    assert_eq!(tokens.last(), Some(&270));
    assert!(!tokens.contains(&269));
    assert_eq!(tok.decode(&tokens), text);

    // Ordinary encoding never emits special ids.
    let tokens = tok.encode_ordinary(text).unwrap();
    assert!(tokens.iter().all(|t| !tok.is_special_token(*t)));
    assert_eq!(tok.decode(&tokens), text);
}

#[test]
fn test_disallowed_special() {
    let dir = TempDir::new("ranktok_synthetic").unwrap();
    let tok = load_tokenizer(dir.path());

    let err = tok
        .encode(
            "hello <|fim_prefix|>",
            &SpecialSelection::explicit(["<|endoftext|>"]),
            &SpecialSelection::All,
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Policy);
    assert!(matches!(
        &err,
        RanktokError::DisallowedSpecial { token } if token == "<|fim_prefix|>"
    ));

    // An explicit disallowed set only guards its own words.
    assert!(
        tok.encode(
            "<|endoftext|>",
            &SpecialSelection::none(),
            &SpecialSelection::explicit(["<|fim_prefix|>"]),
        )
        .is_ok()
    );
}

#[test]
fn test_decode_drops_unknown_ids() {
    let dir = TempDir::new("ranktok_synthetic").unwrap();
    let tok = load_tokenizer(dir.path());

    let result = tok.decoder().decode_to_bytes(&[263, 5000, 268, 271]);
    assert_eq!(result.skipped, 2);
    assert_eq!(result.value, b"hello world".to_vec());
    assert!(result.try_complete().is_err());

    assert_eq!(tok.decode(&[263, 5000]), "hello");
}

#[test]
fn test_vocab_size_is_checked() {
    let dir = TempDir::new("ranktok_synthetic").unwrap();
    let path = write_rank_file(dir.path());

    let vocab = load_base64_encoding_vocab_path(&path, spanning()).unwrap();
    let err = Tokenizer::new("synthetic", vocab, Some(N_VOCAB + 1)).unwrap_err();
    assert!(err.is_configuration());
    assert!(matches!(
        err,
        RanktokError::VocabSizeMismatch {
            expected: 272,
            actual: 271
        }
    ));
}

#[test]
fn test_malformed_rank_files() {
    let err = read_base64_span_map::<u32, _>(Cursor::new("YQ== 0\n!!! 1\n")).unwrap_err();
    assert!(matches!(err, RanktokError::VocabFormat { line: 2, .. }));

    let err = read_base64_span_map::<u32, _>(Cursor::new("YQ==\n")).unwrap_err();
    assert!(matches!(err, RanktokError::VocabFormat { line: 1, .. }));

    let err = read_base64_span_map::<u32, _>(Cursor::new("YQ== x\n")).unwrap_err();
    assert!(matches!(err, RanktokError::VocabFormat { line: 1, .. }));

    let err = read_base64_span_map::<u16, _>(Cursor::new("YQ== 70000\n")).unwrap_err();
    assert!(matches!(err, RanktokError::TokenOutOfRange));

    // Reading stops at the first empty line.
    let span_map = read_base64_span_map::<u32, _>(Cursor::new("YQ== 0\r\n\r\n!!! 1\n")).unwrap();
    assert_eq!(span_map.len(), 1);
}

#[test]
fn test_invalid_utf8_input() {
    let dir = TempDir::new("ranktok_synthetic").unwrap();
    let tok = load_tokenizer(dir.path());

    // A surrogate pair spelled as two 3-byte sequences is rejoined.
    let tokens = tok.encode_ordinary_bytes(b"hello \xED\xA0\xBD\xED\xB8\x80").unwrap();
    assert_eq!(tok.decode(&tokens), "hello 😀");

    let tokens = tok.encode_ordinary_bytes(b"ab\xC0d").unwrap();
    assert_eq!(tok.decode(&tokens), "ab\u{FFFD}d");
}

#[test]
fn test_batches() {
    let dir = TempDir::new("ranktok_synthetic").unwrap();
    let tok = load_tokenizer(dir.path());

    let texts: Vec<String> = (0..32).map(|i| format!("hello {i} world")).collect();
    let batch = tok.encode_ordinary_batch(&texts).unwrap();
    assert_eq!(batch.len(), texts.len());
    for (text, tokens) in texts.iter().zip(&batch) {
        assert_eq!(tokens, &tok.encode_ordinary(text).unwrap());
    }
    assert_eq!(tok.decode_batch(&batch), texts);
}
