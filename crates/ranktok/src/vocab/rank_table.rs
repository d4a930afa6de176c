//! # Rank Table
//!
//! The ordinary (non-special) byte-sequence vocabulary, where the token id of
//! an entry is also its merge priority: lower ranks merge first.

use std::sync::OnceLock;

use crate::{
    errors::{RTResult, RanktokError},
    types::{RTHashSet, SpanTokenMap, TokenSpanMap, TokenType},
};

/// Immutable `{ bytes <-> rank }` table.
///
/// Every single byte `0x00..=0xFF` has an entry; this is checked at
/// construction, and is what lets the merge engine always terminate
/// in valid tokens.
///
/// The reverse `{ rank -> bytes }` map is only needed for decoding;
/// it is built on first use, exactly once, even under concurrent callers.
#[derive(Debug, Clone)]
pub struct RankTable<T: TokenType> {
    span_map: SpanTokenMap<T>,
    byte_ranks: [T; 256],
    token_spans: OnceLock<TokenSpanMap<T>>,
}

impl<T: TokenType> RankTable<T> {
    /// Build a rank table from a span map.
    ///
    /// ## Arguments
    /// * `span_map` - The `{ bytes -> rank }` entries.
    ///
    /// ## Returns
    /// * `MissingByteRank` if any single byte is absent.
    /// * `VocabConflict` if two entries share a rank.
    pub fn try_from_span_map(span_map: SpanTokenMap<T>) -> RTResult<Self> {
        let mut byte_ranks = [T::zero(); 256];
        for byte in 0..=255u8 {
            match span_map.get([byte].as_slice()) {
                Some(&rank) => byte_ranks[byte as usize] = rank,
                None => return Err(RanktokError::MissingByteRank { byte }),
            }
        }

        let mut seen: RTHashSet<T> = RTHashSet::with_capacity(span_map.len());
        for (span, &rank) in span_map.iter() {
            if !seen.insert(rank) {
                let other = span_map
                    .iter()
                    .find(|&(s, &r)| r == rank && s != span)
                    .map(|(s, _)| s.clone())
                    .unwrap_or_default();
                return Err(RanktokError::VocabConflict(format!(
                    "rank {rank} is assigned to both {other:?} and {span:?}"
                )));
            }
        }

        Ok(Self {
            span_map,
            byte_ranks,
            token_spans: OnceLock::new(),
        })
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.span_map.len()
    }

    /// Is the table empty? Never true for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.span_map.is_empty()
    }

    /// The forward map.
    pub fn span_map(&self) -> &SpanTokenMap<T> {
        &self.span_map
    }

    /// Iterate `(bytes, rank)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], T)> {
        self.span_map.iter().map(|(span, &rank)| (span.as_slice(), rank))
    }

    /// The largest rank in the table.
    pub fn max_rank(&self) -> T {
        self.span_map.values().copied().max().unwrap_or_else(T::zero)
    }

    /// The rank for a single byte.
    pub fn byte_rank(
        &self,
        byte: u8,
    ) -> T {
        self.byte_ranks[byte as usize]
    }

    /// Look up the rank of a byte sequence.
    pub fn rank_of(
        &self,
        span: &[u8],
    ) -> Option<T> {
        match span {
            [byte] => Some(self.byte_rank(*byte)),
            _ => self.span_map.get(span).copied(),
        }
    }

    /// The reverse map, built on first call.
    pub fn token_spans(&self) -> &TokenSpanMap<T> {
        self.token_spans.get_or_init(|| {
            log::debug!("building reverse rank table ({} entries)", self.span_map.len());
            self.span_map
                .iter()
                .map(|(span, &rank)| (rank, span.clone()))
                .collect()
        })
    }

    /// Look up the bytes for a rank.
    pub fn bytes_of(
        &self,
        rank: T,
    ) -> Option<&[u8]> {
        self.token_spans().get(&rank).map(Vec::as_slice)
    }
}
