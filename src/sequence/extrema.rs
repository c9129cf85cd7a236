//! Largest and smallest element of a sequence.
//!
//! Both are folds seeded with the first comparable element, so all-negative
//! or all-positive inputs give the true extremum. Values that do not compare
//! equal to themselves (float NaN) are skipped wherever they sit. A sequence
//! with no comparable element has no extremum and yields
//! [`UtilError::EmptyInput`].

use tracing::{debug, trace};

use crate::error::{UtilError, UtilResult};

/// Folds the comparable values of `seq`, keeping the running value whenever
/// `replace(candidate, current)` is false. The first comparable value seeds
/// the fold.
fn fold_extreme<T, F>(seq: &[T], operation: &'static str, replace: F) -> UtilResult<T>
where
    T: PartialOrd + Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut comparable = seq.iter().filter(|v| v.partial_cmp(v).is_some());
    let Some(first) = comparable.next() else {
        debug!(operation, input = seq.len(), "no comparable element");
        return Err(UtilError::empty_input(operation));
    };
    let best =
        comparable.fold(first, |best, candidate| if replace(candidate, best) { candidate } else { best });
    trace!(operation, input = seq.len(), "fold complete");
    Ok(best.clone())
}

/// Returns the largest value in `seq`. Of several equal maxima, the first wins.
///
/// ```
/// use seqkit::maximum;
///
/// assert_eq!(maximum(&[1, 2, 3, 0, 4, 5, -6, -10, -1, 10, 100, 9]).unwrap(), 100);
/// assert_eq!(maximum(&[-5, -2, -9]).unwrap(), -2);
/// assert!(maximum::<i32>(&[]).is_err());
/// ```
pub fn maximum<T: PartialOrd + Clone>(seq: &[T]) -> UtilResult<T> {
    fold_extreme(seq, "maximum", |candidate, best| candidate > best)
}

/// Returns the smallest value in `seq`. Of several equal minima, the first wins.
pub fn minimum<T: PartialOrd + Clone>(seq: &[T]) -> UtilResult<T> {
    fold_extreme(seq, "minimum", |candidate, best| candidate < best)
}

// =============================================================================
// TESTS
// =============================================================================
