use num::traits::CheckedAdd;
use num_integer::Integer;

/// Yields every `n` in `[0, max)` divisible by `multiple1` or `multiple2`,
/// in ascending order.
#[derive(Debug, Copy, Clone)]
pub struct Multiples<T> {
    curr: T,
    max: T,
    multiple1: T,
    multiple2: T,
}

impl<T> Multiples<T>
where
    T: Integer + Copy,
{
    pub fn new(multiple1: T, multiple2: T, max: T) -> Multiples<T> {
        Multiples {
            curr: T::zero(),
            max,
            multiple1,
            multiple2,
        }
    }
}

impl<T> Iterator for Multiples<T>
where
    T: Integer + Copy,
{
    type Item = T;
    fn next(&mut self) -> Option<T> {
        while self.curr < self.max {
            let n = self.curr;
            self.curr = n + T::one();
            if (n % self.multiple1).is_zero() || (n % self.multiple2).is_zero() {
                return Some(n);
            }
        }
        None
    }
}

/// Sum of all integers in `[0, max)` divisible by `multiple1` or `multiple2`.
///
/// A `max` of zero or below scans an empty range and sums to zero.
///
/// # Panics
///
/// Panics if either divisor is zero, or on overflow in debug builds.
pub fn sum_multiples<T>(multiple1: T, multiple2: T, max: T) -> T
where
    T: Integer + Copy,
{
    Multiples::new(multiple1, multiple2, max).fold(T::zero(), |sum, n| sum + n)
}

/// Like `sum_multiples`, but returns `None` for a zero divisor or when the
/// sum overflows `T`.
pub fn checked_sum_multiples<T>(multiple1: T, multiple2: T, max: T) -> Option<T>
where
    T: Integer + Copy + CheckedAdd,
{
    if multiple1.is_zero() || multiple2.is_zero() {
        return None;
    }
    Multiples::new(multiple1, multiple2, max).try_fold(T::zero(), |sum, n| sum.checked_add(&n))
}

#[test]
fn multiples_test() {
    let values: Vec<u32> = Multiples::new(3, 5, 16).collect();
    assert_eq!(values, [0, 3, 5, 6, 9, 10, 12, 15]);
}

#[test]
fn empty_and_reverse_ranges() {
    assert_eq!(Multiples::new(3, 5, 0).count(), 0);
    assert_eq!(Multiples::new(3, 5, -10).count(), 0);
    assert_eq!(sum_multiples(3, 5, -10), 0);
}

#[test]
fn equal_divisors_not_double_counted() {
    assert_eq!(sum_multiples(3, 3, 10), 18);
    assert_eq!(sum_multiples(3u64, 3, 1000), 166_833);
}

#[test]
fn negative_divisors_match_positive() {
    assert_eq!(sum_multiples(-3i32, -5, 10), sum_multiples(3, 5, 10));
}

#[test]
#[should_panic]
fn zero_divisor_panics() {
    sum_multiples(0u32, 5, 10);
}

#[test]
fn checked_rejects_zero_divisor() {
    assert_eq!(checked_sum_multiples(0u32, 5, 10), None);
    assert_eq!(checked_sum_multiples(3u32, 0, 10), None);
}

#[test]
fn checked_detects_overflow() {
    assert_eq!(checked_sum_multiples(3u8, 5, 100), None);
    assert_eq!(checked_sum_multiples(3u16, 5, 100), Some(2318));
}

#[test]
fn checked_agrees_with_unchecked() {
    assert_eq!(checked_sum_multiples(3i64, 5, 1000), Some(sum_multiples(3, 5, 1000)));
}
