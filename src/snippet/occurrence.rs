// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Occurrence scanning and clustering.
//!
//! Scanning is plain substring search over folded text. Each term is scanned
//! on its own, resuming after the end of the previous match, so a term never
//! overlaps itself but two different terms may report overlapping positions.
//! Term identity is dropped: the caller gets one pooled list.
//!
//! Clustering keeps a position only if it is at least `min_separation` away
//! from *every* position kept so far. With sorted input that is the same as
//! checking the most recent kept position, but the all-pairs form is the
//! contract and is what the tests pin down.

use crate::util::fold::find_from;

/// Collect every non-overlapping match position of every term.
///
/// Positions are character indices into `folded`, in scan order (grouped by
/// term, ascending within a term). Empty terms never match.
pub fn scan_occurrences(folded: &[char], terms: &[Vec<char>]) -> Vec<usize> {
    let mut positions = Vec::new();
    for term in terms {
        let mut from = 0;
        while let Some(pos) = find_from(folded, term, from) {
            positions.push(pos);
            from = pos + term.len();
        }
    }
    positions
}

/// Keep positions that are pairwise at least `min_separation` apart.
///
/// `sorted` must be ascending. The earliest position of each cluster wins.
pub fn cluster_positions(sorted: &[usize], min_separation: usize) -> Vec<usize> {
    let mut kept: Vec<usize> = Vec::new();
    for &pos in sorted {
        let too_close = kept.iter().any(|&k| pos.abs_diff(k) < min_separation);
        if !too_close {
            kept.push(pos);
        }
    }
    kept
}
