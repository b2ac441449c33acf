use std::cmp::Ordering;

use crate::smoothsort::{self, fibonacci::FibForest};

sort_impl!("rust_smoothsort_fib_unstable");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// Smoothsort with stretch lengths `1, 2, 4, 7, 12, ...` (Fibonacci numbers minus one). Compared
/// to the Leonardo variant a pair of elements already forms a stretch, at the price of stretches
/// with a single child.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    smoothsort::sort::<FibForest, T, _>(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, L>(v: &mut [T], mut compare: L)
where
    L: FnMut(&T, &T) -> Ordering,
{
    smoothsort::sort::<FibForest, T, _>(v, &mut |a: &T, b: &T| {
        compare(a, b) == Ordering::Less
    });
}
