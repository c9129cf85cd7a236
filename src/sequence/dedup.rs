//! Order-preserving deduplication.
//!
//! Two strategies produce the same output: a single pass backed by a
//! `HashSet` (O(n) average) and a linear scan of the output built so far
//! (O(n²), but only needs `PartialEq`, so it also works for floats).

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// How `deduplicate_with` detects values it has already emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DedupStrategy {
    /// Remember seen values in a hash set.
    #[default]
    HashSet,
    /// Search the output for each candidate.
    LinearScan,
}

/// Returns each distinct value of `seq` once, in order of first occurrence.
///
/// Uses the hash-set strategy.
///
/// ```
/// use seqkit::deduplicate;
///
/// let uniq = deduplicate(&[1, 2, 3, 4, 5, 6, 7, 2, 5, 1, 4]);
/// assert_eq!(uniq, vec![1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn deduplicate<T>(seq: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(seq.len());
    let out: Vec<T> = seq
        .iter()
        .filter(|value| seen.insert(*value))
        .cloned()
        .collect();
    trace!(input = seq.len(), output = out.len(), "deduplicate (hash set)");
    out
}

/// Same result as [`deduplicate`], found by scanning the output for each
/// element instead of hashing.
pub fn deduplicate_by_scan<T>(seq: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut out: Vec<T> = Vec::new();
    for value in seq {
        if !out.contains(value) {
            out.push(value.clone());
        }
    }
    trace!(input = seq.len(), output = out.len(), "deduplicate (linear scan)");
    out
}

/// Deduplicates with an explicit strategy.
pub fn deduplicate_with<T>(seq: &[T], strategy: DedupStrategy) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    match strategy {
        DedupStrategy::HashSet => deduplicate(seq),
        DedupStrategy::LinearScan => deduplicate_by_scan(seq),
    }
}

// =============================================================================
// TESTS
// =============================================================================
