//! # Byte-Pair Merge Engine
//!
//! Rank-driven merging over a single word's bytes.
//!
//! The working state is a list of part boundaries; each boundary carries the
//! rank of the span covering it and the next two parts, i.e. the merge that
//! would remove the boundary after it. Each step performs the lowest-ranked
//! merge (leftmost on ties), and only the two neighbouring annotations change.
//!
//! The scan for the minimum is linear, so a word of `n` bytes costs `O(n^2)`
//! lookups in the worst case; words are short in practice.

use core::ops::Range;

use crate::{
    errors::{RTResult, RanktokError},
    types::TokenType,
    vocab::RankTable,
};

/// Rank of `piece[parts[i].0 .. parts[i + skip + 2].0]`, if that span exists.
fn span_rank<T: TokenType>(
    ranks: &RankTable<T>,
    piece: &[u8],
    parts: &[(usize, Option<T>)],
    i: usize,
    skip: usize,
) -> Option<T> {
    if i + skip + 2 < parts.len() {
        ranks.rank_of(&piece[parts[i].0..parts[i + skip + 2].0])
    } else {
        None
    }
}

/// Merge `piece` down to its final parts, and map each part through `f`.
///
/// ## Arguments
/// * `ranks` - The rank table.
/// * `piece` - The word bytes; at least two bytes.
/// * `f` - Called once per final part, left to right, with its byte range.
pub fn byte_pair_merge<T, R, F>(
    ranks: &RankTable<T>,
    piece: &[u8],
    mut f: F,
) -> Vec<R>
where
    T: TokenType,
    F: FnMut(Range<usize>) -> R,
{
    debug_assert!(piece.len() >= 2);

    let mut parts: Vec<(usize, Option<T>)> = (0..=piece.len()).map(|i| (i, None)).collect();
    for i in 0..parts.len() - 2 {
        parts[i].1 = span_rank(ranks, piece, &parts, i, 0);
    }

    while parts.len() > 1 {
        let mut min: Option<(T, usize)> = None;
        for (i, &(_, rank)) in parts[..parts.len() - 1].iter().enumerate() {
            if let Some(rank) = rank
                && min.is_none_or(|(best, _)| rank < best)
            {
                min = Some((rank, i));
            }
        }
        let Some((_, i)) = min else {
            break;
        };

        parts[i].1 = span_rank(ranks, piece, &parts, i, 1);
        if i > 0 {
            parts[i - 1].1 = span_rank(ranks, piece, &parts, i - 1, 1);
        }
        parts.remove(i + 1);
    }

    parts.windows(2).map(|w| f(w[0].0..w[1].0)).collect()
}

/// Encode one word into tokens.
///
/// ## Errors
/// * `MissingByteRank` if a single byte has no rank.
/// * `VocabConflict` if a final part has no rank; this means the table
///   is not closed under its own merges.
pub fn byte_pair_encode<T: TokenType>(
    ranks: &RankTable<T>,
    piece: &[u8],
) -> RTResult<Vec<T>> {
    match piece {
        [] => Ok(Vec::new()),
        [byte] => ranks
            .rank_of(piece)
            .map(|t| vec![t])
            .ok_or(RanktokError::MissingByteRank { byte: *byte }),
        _ => byte_pair_merge(ranks, piece, |r| {
            ranks.rank_of(&piece[r.clone()]).ok_or_else(|| {
                RanktokError::VocabConflict(format!(
                    "merged part {:?} has no rank",
                    String::from_utf8_lossy(&piece[r])
                ))
            })
        })
        .into_iter()
        .collect(),
    }
}

/// Split one word into the byte spans its tokens cover.
pub fn byte_pair_split<'a, T: TokenType>(
    ranks: &RankTable<T>,
    piece: &'a [u8],
) -> Vec<&'a [u8]> {
    match piece.len() {
        0 => Vec::new(),
        1 => vec![piece],
        _ => byte_pair_merge(ranks, piece, |r| &piece[r]),
    }
}
