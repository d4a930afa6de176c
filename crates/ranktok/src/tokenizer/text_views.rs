//! # Text Views
//!
//! The encoder works on `&str`. Byte input that is not valid UTF-8 is viewed
//! through UTF-16 instead: the bytes are read as generalized UTF-8, where
//! encoded surrogate halves (`ED A0..BF xx`) are kept as UTF-16 units, and
//! the units are then decoded with unpaired surrogates replaced by U+FFFD.
//!
//! A surrogate pair written as two 3-byte sequences therefore recovers the
//! supplementary character; everything else malformed becomes U+FFFD.
//! Text repaired this way does not round-trip to the original bytes.

use std::borrow::Cow;

/// View `bytes` as text, falling back to the UTF-16 view when they are
/// not valid UTF-8.
pub fn utf8_or_wide(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(err) => {
            log::debug!(
                "input is not valid UTF-8 (valid up to byte {}); encoding through a UTF-16 view",
                err.valid_up_to()
            );
            Cow::Owned(wide_to_string(&generalized_utf8_to_wide(bytes)))
        }
    }
}

/// Decode UTF-16 units, replacing unpaired surrogates with U+FFFD.
pub fn wide_to_string(units: &[u16]) -> String {
    char::decode_utf16(units.iter().copied())
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Transcode generalized UTF-8 into UTF-16 units.
///
/// Surrogate code points pass through as single units; bytes that do not
/// form a sequence become U+FFFD.
pub fn generalized_utf8_to_wide(bytes: &[u8]) -> Vec<u16> {
    let mut units = Vec::with_capacity(bytes.len());
    let mut rest = bytes;
    while !rest.is_empty() {
        let (code_point, len) = decode_code_point(rest);
        match code_point {
            Some(cp) if cp >= 0x10000 => {
                let cp = cp - 0x10000;
                units.push(0xD800 | (cp >> 10) as u16);
                units.push(0xDC00 | (cp & 0x3FF) as u16);
            }
            Some(cp) => units.push(cp as u16),
            None => units.push(0xFFFD),
        }
        rest = &rest[len..];
    }
    units
}

/// Decode one sequence from the front of `bytes`.
///
/// ## Returns
/// The code point (or `None` for a malformed sequence), and the number
/// of bytes consumed; always at least one.
fn decode_code_point(bytes: &[u8]) -> (Option<u32>, usize) {
    let lead = bytes[0];
    let (len, mut cp) = match lead {
        0x00..=0x7F => return (Some(u32::from(lead)), 1),
        0xC2..=0xDF => (2, u32::from(lead & 0x1F)),
        0xE0..=0xEF => (3, u32::from(lead & 0x0F)),
        0xF0..=0xF4 => (4, u32::from(lead & 0x07)),
        _ => return (None, 1),
    };

    for k in 1..len {
        match bytes.get(k) {
            Some(&b) if b & 0xC0 == 0x80 => cp = (cp << 6) | u32::from(b & 0x3F),
            _ => return (None, k),
        }
    }

    let min = match len {
        2 => 0x80,
        3 => 0x800,
        _ => 0x10000,
    };
    if cp < min || cp > 0x10FFFF {
        return (None, len);
    }
    (Some(cp), len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_is_borrowed() {
        let view = utf8_or_wide("héllo 😀".as_bytes());
        assert!(matches!(view, Cow::Borrowed("héllo 😀")));
    }

    #[test]
    fn test_lone_surrogate() {
        let bytes = b"ab\xED\xA0\x80cd";
        assert_eq!(generalized_utf8_to_wide(bytes), vec![0x61, 0x62, 0xD800, 0x63, 0x64]);
        assert_eq!(utf8_or_wide(bytes), "ab\u{FFFD}cd");
    }

    #[test]
    fn test_surrogate_pair_is_joined() {
        // U+1F600 as a pair of encoded surrogate halves.
        let bytes = b"\xED\xA0\xBD\xED\xB8\x80!";
        assert_eq!(utf8_or_wide(bytes), "😀!");
    }

    #[test]
    fn test_malformed_bytes() {
        assert_eq!(utf8_or_wide(b"\xFFa"), "\u{FFFD}a");
        assert_eq!(utf8_or_wide(b"\xE2\x82x"), "\u{FFFD}x");
        assert_eq!(utf8_or_wide(b"\xC0\xAF"), "\u{FFFD}\u{FFFD}");
        assert_eq!(utf8_or_wide(b"\xE0\x80\x80"), "\u{FFFD}");
        assert_eq!(utf8_or_wide(b"x\xF0\x9F\x98\x80\x80"), "x😀\u{FFFD}");
    }

    #[test]
    fn test_wide_to_string() {
        assert_eq!(wide_to_string(&[0x68, 0x69]), "hi");
        assert_eq!(wide_to_string(&[0xDC00, 0x68]), "\u{FFFD}h");
        assert_eq!(wide_to_string(&[0xD83D, 0xDE00]), "😀");
    }
}
