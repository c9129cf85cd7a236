//! Even/odd filters.
//!
//! Parity is tested arithmetically (`v % 2 == 0`) through the [`Parity`]
//! trait. For numbers given as decimal text, the last digit is enough, which
//! is what [`ParityCheck::LastDigit`] does; for integers both checks agree.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Values that have a remainder modulo two.
///
/// For floats, every non-integral value, infinity and NaN is odd, so
/// `filter_even` and `filter_odd` always split a sequence exactly in two.
pub trait Parity {
    /// Returns true when `self % 2 == 0`.
    fn is_even(&self) -> bool;

    /// Complement of [`Parity::is_even`].
    fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

macro_rules! impl_parity_int {
    ($($t:ty),*) => {
        $(
            impl Parity for $t {
                #[inline]
                fn is_even(&self) -> bool {
                    *self % 2 == 0
                }
            }
        )*
    };
}

macro_rules! impl_parity_float {
    ($($t:ty),*) => {
        $(
            impl Parity for $t {
                #[inline]
                fn is_even(&self) -> bool {
                    *self % 2.0 == 0.0
                }
            }
        )*
    };
}

impl_parity_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_parity_float!(f32, f64);

impl<T: Parity + ?Sized> Parity for &T {
    #[inline]
    fn is_even(&self) -> bool {
        (**self).is_even()
    }
}

/// Which test decides whether a value is even.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParityCheck {
    /// `v % 2 == 0`.
    #[default]
    Modulus,
    /// Last character of the decimal rendering is `0`, `2`, `4`, `6` or `8`.
    LastDigit,
}

impl ParityCheck {
    fn is_even<T: Parity + Display>(self, value: &T) -> bool {
        match self {
            ParityCheck::Modulus => value.is_even(),
            ParityCheck::LastDigit => is_even_by_last_digit(value),
        }
    }
}

/// Tests parity by looking only at the last decimal digit.
///
/// Agrees with `%` for every integer. Non-integral floats are judged by their
/// last printed fractional digit, and `NaN`/`inf` are never even.
pub fn is_even_by_last_digit<T: Display + ?Sized>(value: &T) -> bool {
    matches!(
        value.to_string().chars().last(),
        Some('0' | '2' | '4' | '6' | '8')
    )
}

/// Returns the even values of `seq`, in order.
///
/// ```
/// use seqkit::filter_even;
///
/// assert_eq!(filter_even(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0]), vec![2, 4, 6, 8, 0]);
/// ```
pub fn filter_even<T: Parity + Clone>(seq: &[T]) -> Vec<T> {
    let out: Vec<T> = seq.iter().filter(|v| v.is_even()).cloned().collect();
    trace!(input = seq.len(), output = out.len(), "filter_even");
    out
}

/// Returns the odd values of `seq`, in order.
pub fn filter_odd<T: Parity + Clone>(seq: &[T]) -> Vec<T> {
    let out: Vec<T> = seq.iter().filter(|v| v.is_odd()).cloned().collect();
    trace!(input = seq.len(), output = out.len(), "filter_odd");
    out
}

/// [`filter_even`] with an explicit parity test.
pub fn filter_even_with<T>(seq: &[T], check: ParityCheck) -> Vec<T>
where
    T: Parity + Display + Clone,
{
    let out: Vec<T> = seq.iter().filter(|v| check.is_even(*v)).cloned().collect();
    trace!(input = seq.len(), output = out.len(), ?check, "filter_even");
    out
}

/// [`filter_odd`] with an explicit parity test.
pub fn filter_odd_with<T>(seq: &[T], check: ParityCheck) -> Vec<T>
where
    T: Parity + Display + Clone,
{
    let out: Vec<T> = seq.iter().filter(|v| !check.is_even(*v)).cloned().collect();
    trace!(input = seq.len(), output = out.len(), ?check, "filter_odd");
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_even_and_odd() {
        let input = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];
        assert_eq!(filter_even(&input), vec![2, 4, 6, 8, 0]);
        assert_eq!(filter_odd(&input), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_negative_values() {
        let input = [-4, -3, -2, -1];
        assert_eq!(filter_even(&input), vec![-4, -2]);
        assert_eq!(filter_odd(&input), vec![-3, -1]);
    }

    #[test]
    fn test_empty() {
        let empty: [i64; 0] = [];
        assert!(filter_even(&empty).is_empty());
        assert!(filter_odd(&empty).is_empty());
    }

    #[test]
    fn test_partition_is_exact() {
        let samples: &[&[i32]] = &[&[], &[0], &[1, 1, 2, 2], &[9, -8, 7, -6, 0, 13]];
        for sample in samples {
            let even = filter_even(sample);
            let odd = filter_odd(sample);
            assert_eq!(even.len() + odd.len(), sample.len());
            // Each element lands in exactly one side.
            let (mut e, mut o) = (even.iter(), odd.iter());
            for value in sample.iter() {
                if value.is_even() {
                    assert_eq!(e.next(), Some(value));
                } else {
                    assert_eq!(o.next(), Some(value));
                }
            }
        }
    }

    #[test]
    fn test_float_partition() {
        let input = [4.0, 2.5, -0.0, 3.0, f64::NAN, f64::INFINITY];
        let even = filter_even(&input);
        let odd = filter_odd(&input);
        assert_eq!(even, vec![4.0, -0.0]);
        assert_eq!(odd.len(), 4);
        assert_eq!(even.len() + odd.len(), input.len());
    }

    #[test]
    fn test_last_digit_on_long_number() {
        assert!(is_even_by_last_digit(&100_000_990_u64));
        assert!(!is_even_by_last_digit(&100_000_991_u64));
        assert!(is_even_by_last_digit("123456789012345678901234567890"));
        assert!(!is_even_by_last_digit(&f64::NAN));
    }

    #[test]
    fn test_checks_agree_for_integers() {
        let input: Vec<i64> = (-25..=25).chain([i64::MIN, i64::MAX]).collect();
        assert_eq!(
            filter_even_with(&input, ParityCheck::Modulus),
            filter_even_with(&input, ParityCheck::LastDigit)
        );
        assert_eq!(
            filter_odd_with(&input, ParityCheck::Modulus),
            filter_odd_with(&input, ParityCheck::LastDigit)
        );
        assert_eq!(filter_even_with(&input, ParityCheck::Modulus), filter_even(&input));
    }

    #[test]
    fn test_unsigned_and_wide_types() {
        assert_eq!(filter_even(&[1u8, 2, 255]), vec![2u8]);
        assert_eq!(filter_odd(&[u128::MAX, 0]), vec![u128::MAX]);
    }

    #[test]
    fn test_check_serde_names() {
        let parsed: ParityCheck = serde_json::from_str("\"last-digit\"").unwrap();
        assert_eq!(parsed, ParityCheck::LastDigit);
    }
}
