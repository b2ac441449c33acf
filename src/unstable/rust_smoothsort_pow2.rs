use std::cmp::Ordering;

use crate::smoothsort::{self, balanced::BalancedForest};

sort_impl!("rust_smoothsort_pow2_unstable");

/// Smoothsort over perfectly balanced stretches of `2^k - 1` elements.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    smoothsort::sort::<BalancedForest, T, _>(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, L>(v: &mut [T], mut compare: L)
where
    L: FnMut(&T, &T) -> Ordering,
{
    smoothsort::sort::<BalancedForest, T, _>(v, &mut |a: &T, b: &T| {
        compare(a, b) == Ordering::Less
    });
}
