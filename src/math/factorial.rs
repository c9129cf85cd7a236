//! Factorial with a recursive and an iterative construction.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{UtilError, UtilResult};

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_FACTORIAL_INPUT: u32 = 34;

/// How `factorial_with` builds the product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactorialStrategy {
    /// Multiply an accumulator by `n, n-1, ..., 1`.
    #[default]
    Iterative,
    /// `n * (n-1)!`, bottoming out at `n <= 1`.
    Recursive,
}

/// Computes `n!` iteratively.
///
/// ```
/// use seqkit::factorial;
///
/// assert_eq!(factorial(4).unwrap(), 24);
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> UtilResult<u128> {
    factorial_with(n, FactorialStrategy::Iterative)
}

/// Computes `n!` with the given strategy.
///
/// Fails with `InvalidArgument` for negative `n` and `Overflow` for
/// `n > 34`.
pub fn factorial_with(n: i64, strategy: FactorialStrategy) -> UtilResult<u128> {
    if n < 0 {
        debug!(n, "factorial of a negative number");
        return Err(UtilError::invalid_argument(format!(
            "factorial is undefined for negative n ({n})"
        )));
    }
    let n = n.unsigned_abs();

    let result = match strategy {
        FactorialStrategy::Iterative => iterative(n),
        FactorialStrategy::Recursive => recursive(n),
    };
    match result {
        Some(value) => {
            trace!(n, ?strategy, "factorial");
            Ok(value)
        }
        None => {
            debug!(n, ?strategy, "factorial overflowed u128");
            Err(UtilError::overflow(n))
        }
    }
}

fn iterative(n: u64) -> Option<u128> {
    let mut acc: u128 = 1;
    for i in (1..=n).rev() {
        acc = acc.checked_mul(u128::from(i))?;
    }
    Some(acc)
}

fn recursive(n: u64) -> Option<u128> {
    if n <= 1 {
        return Some(1);
    }
    // Bail before descending so huge n can't exhaust the stack.
    if n > u64::from(MAX_FACTORIAL_INPUT) {
        return None;
    }
    recursive(n - 1)?.checked_mul(u128::from(n))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [FactorialStrategy; 2] = [FactorialStrategy::Iterative, FactorialStrategy::Recursive];

    #[test]
    fn test_base_cases() {
        for strategy in BOTH {
            assert_eq!(factorial_with(0, strategy).unwrap(), 1);
            assert_eq!(factorial_with(1, strategy).unwrap(), 1);
        }
    }

    #[test]
    fn test_small_values() {
        assert_eq!(factorial(4).unwrap(), 24);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(10).unwrap(), 3_628_800);
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_recurrence_holds() {
        for n in 1..=MAX_FACTORIAL_INPUT as i64 {
            let prev = factorial(n - 1).unwrap();
            assert_eq!(factorial(n).unwrap(), n as u128 * prev, "n = {}", n);
        }
    }

    #[test]
    fn test_strategies_agree() {
        for n in 0..=MAX_FACTORIAL_INPUT as i64 {
            assert_eq!(
                factorial_with(n, FactorialStrategy::Iterative).unwrap(),
                factorial_with(n, FactorialStrategy::Recursive).unwrap()
            );
        }
    }

    #[test]
    fn test_negative_is_invalid() {
        for strategy in BOTH {
            let err = factorial_with(-3, strategy).unwrap_err();
            assert!(matches!(err, UtilError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_overflow_boundary() {
        for strategy in BOTH {
            assert!(factorial_with(34, strategy).is_ok());
            assert_eq!(
                factorial_with(35, strategy).unwrap_err(),
                UtilError::Overflow { n: 35 }
            );
        }
    }

    #[test]
    fn test_huge_argument() {
        for strategy in BOTH {
            assert_eq!(
                factorial_with(i64::MAX, strategy).unwrap_err(),
                UtilError::Overflow { n: i64::MAX as u64 }
            );
            assert_eq!(
                factorial_with(5_000_000_000, strategy).unwrap_err(),
                UtilError::Overflow { n: 5_000_000_000 }
            );
            assert!(matches!(
                factorial_with(1_000_000, strategy),
                Err(UtilError::Overflow { n: 1_000_000 })
            ));
        }
    }
}
