//! # Base64 Rank File IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use base64::{
    Engine,
    prelude::{BASE64_STANDARD, BASE64_URL_SAFE},
};

use crate::{
    errors::{RTResult, RanktokError},
    spanning::SpanningConfig,
    types::{SpanTokenMap, TokenType, hash_map_with_capacity, token_from_u64},
    vocab::{EncodingVocab, RankTable},
};

/// Build an [`EncodingVocab`] from a base64 rank file.
///
/// ## Arguments
/// * `path` - path to the file.
/// * `spanning` - the word split pattern and special words.
pub fn load_base64_encoding_vocab_path<T: TokenType>(
    path: impl AsRef<Path>,
    spanning: SpanningConfig<T>,
) -> RTResult<EncodingVocab<T>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let vocab = read_base64_encoding_vocab(reader, spanning)?;
    log::info!(
        "loaded {} ranks from {}",
        vocab.rank_table().len(),
        path.display()
    );
    Ok(vocab)
}

/// Build an [`EncodingVocab`] from a base64 rank line reader.
pub fn read_base64_encoding_vocab<T: TokenType, R: BufRead>(
    reader: R,
    spanning: SpanningConfig<T>,
) -> RTResult<EncodingVocab<T>> {
    let ranks = RankTable::try_from_span_map(read_base64_span_map(reader)?)?;
    EncodingVocab::new(spanning, ranks)
}

/// Load a [`SpanTokenMap`] from a base64 rank file.
///
/// Lines are:
/// ```terminaloutput
/// {BASE64 SPAN} {RANK}
/// ```
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_base64_span_map_path<T, P>(path: P) -> RTResult<SpanTokenMap<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_base64_span_map(reader)
}

/// Read a [`SpanTokenMap`] from a base64 rank line reader.
///
/// Reading stops at the first empty line, or at end of input.
/// A trailing `\r` on a line is ignored. Spans are standard base64,
/// with URL-safe base64 accepted as a fallback.
///
/// ## Errors
/// * `VocabFormat` for a line without a separator, bad base64, or a bad rank.
/// * `TokenOutOfRange` for a rank that does not fit `T`.
pub fn read_base64_span_map<T, R>(reader: R) -> RTResult<SpanTokenMap<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut span_map: SpanTokenMap<T> = hash_map_with_capacity(1 << 16);

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.is_empty() {
            break;
        }
        let (span, rank) = parse_line(line).map_err(|reason| RanktokError::VocabFormat {
            line: idx + 1,
            reason,
        })?;
        span_map.insert(span, token_from_u64(rank)?);
    }

    Ok(span_map)
}

fn parse_line(line: &str) -> Result<(Vec<u8>, u64), String> {
    let (encoded, rank) = line
        .split_once(' ')
        .ok_or_else(|| "expected `<base64> <rank>`".to_string())?;

    let span = BASE64_STANDARD
        .decode(encoded)
        .or_else(|_| BASE64_URL_SAFE.decode(encoded))
        .map_err(|e| format!("bad base64 {encoded:?}: {e}"))?;

    let rank = rank
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("bad rank {rank:?}: {e}"))?;

    Ok((span, rank))
}

/// Save a [`SpanTokenMap`] to a base64 rank file.
///
/// # Arguments
/// * `span_map` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_base64_span_map_path<T: TokenType, P: AsRef<Path>>(
    span_map: &SpanTokenMap<T>,
    path: P,
) -> RTResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_base64_span_map(span_map, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`SpanTokenMap`] to a [`Write`] writer, in rank order.
///
/// # Arguments
/// * `span_map` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_base64_span_map<T, W>(
    span_map: &SpanTokenMap<T>,
    writer: &mut W,
) -> RTResult<()>
where
    T: TokenType,
    W: Write,
{
    let mut items: Vec<(T, &Vec<u8>)> = span_map
        .iter()
        .map(|(chunk, &token)| (token, chunk))
        .collect();
    items.sort_by_key(|(t, _)| *t);

    for (token, chunk) in items {
        writeln!(writer, "{} {}", BASE64_STANDARD.encode(chunk), token)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::vocab::testing::{TEST_PATTERN, test_rank_table, test_special_vocab};

    #[test]
    fn test_save_load() {
        type T = u32;

        let mut span_map: SpanTokenMap<T> = Default::default();
        span_map.insert("apple".as_bytes().to_vec(), 300);
        span_map.insert("banana".as_bytes().to_vec(), 301);
        span_map.insert(vec![0xff, 0x00], 302);

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.tiktoken");

                save_base64_span_map_path(&span_map, &path).expect("Failed to save vocab");

                let loaded: SpanTokenMap<T> =
                    load_base64_span_map_path(&path).expect("Failed to load vocab");

                assert_eq!(&loaded, &span_map);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_write_is_rank_ordered() {
        let mut span_map: SpanTokenMap<u32> = Default::default();
        span_map.insert(b"b".to_vec(), 1);
        span_map.insert(b"a".to_vec(), 0);
        span_map.insert(b"hi".to_vec(), 2);

        let mut buf = Vec::new();
        write_base64_span_map(&span_map, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "YQ== 0\nYg== 1\naGk= 2\n");
    }

    #[test]
    fn test_stops_at_empty_line() {
        let text = "YQ== 0\r\nYg== 1\n\nthis is not a vocab line\n";
        let span_map: SpanTokenMap<u32> = read_base64_span_map(Cursor::new(text)).unwrap();
        assert_eq!(span_map.len(), 2);
        assert_eq!(span_map.get(b"a".as_slice()), Some(&0));
        assert_eq!(span_map.get(b"b".as_slice()), Some(&1));
    }

    #[test]
    fn test_url_safe_fallback() {
        // 0xfb 0xff is "+/8=" in standard base64 and "-_8=" in url-safe.
        let span_map: SpanTokenMap<u32> = read_base64_span_map(Cursor::new("-_8= 7\n")).unwrap();
        assert_eq!(span_map.get([0xfbu8, 0xff].as_slice()), Some(&7));
    }

    #[test]
    fn test_format_errors() {
        let err = read_base64_span_map::<u32, _>(Cursor::new("YQ== 0\nYg==\n")).unwrap_err();
        assert!(matches!(err, RanktokError::VocabFormat { line: 2, .. }));

        let err = read_base64_span_map::<u32, _>(Cursor::new("!!!! 0\n")).unwrap_err();
        assert!(matches!(err, RanktokError::VocabFormat { line: 1, .. }));

        let err = read_base64_span_map::<u32, _>(Cursor::new("YQ== zero\n")).unwrap_err();
        assert!(matches!(err, RanktokError::VocabFormat { line: 1, .. }));

        let err = read_base64_span_map::<u16, _>(Cursor::new("YQ== 70000\n")).unwrap_err();
        assert!(matches!(err, RanktokError::TokenOutOfRange));
    }

    #[test]
    fn test_read_encoding_vocab() {
        let ranks = test_rank_table::<u32>();
        let mut buf = Vec::new();
        write_base64_span_map(ranks.span_map(), &mut buf).unwrap();

        let vocab = read_base64_encoding_vocab::<u32, _>(
            Cursor::new(buf),
            SpanningConfig::new(TEST_PATTERN.into(), test_special_vocab()),
        )
        .unwrap();
        assert_eq!(vocab.rank_table().len(), ranks.len());
        assert_eq!(vocab.rank_table().rank_of(b" world"), Some(264));
        assert_eq!(vocab.special_vocab().len(), 2);
    }

    #[test]
    fn test_missing_bytes_rejected() {
        let err = read_base64_encoding_vocab::<u32, _>(
            Cursor::new("YQ== 0\n"),
            SpanningConfig::new(TEST_PATTERN.into(), Default::default()),
        )
        .unwrap_err();
        assert!(matches!(err, RanktokError::MissingByteRank { byte: 0 }));
    }
}
