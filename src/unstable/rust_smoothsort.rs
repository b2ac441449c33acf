use std::cmp::Ordering;

use crate::smoothsort::{self, leonardo::LeonardoForest};

sort_impl!("rust_smoothsort_unstable");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n* \* log(*n*)) worst-case.
///
/// # Current implementation
///
/// Dijkstra's smoothsort, with stretch lengths following the Leonardo numbers. The slice is
/// turned into a forest of heaps whose roots ascend from left to right, then the maximum is taken
/// from the rightmost root until the forest is gone. Already sorted input needs *O*(*n*)
/// comparisons, and so does input where all elements are equal.
///
/// Slices longer than `u32::MAX` elements are not supported.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    smoothsort::sort::<LeonardoForest, T, _>(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n* \* log(*n*)) worst-case.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but the slice will still
/// contain exactly the elements it started with. For example `f64` can be sorted with
/// `|a, b| a.total_cmp(b)`.
#[inline]
pub fn sort_by<T, L>(v: &mut [T], mut compare: L)
where
    L: FnMut(&T, &T) -> Ordering,
{
    smoothsort::sort::<LeonardoForest, T, _>(v, &mut |a: &T, b: &T| {
        compare(a, b) == Ordering::Less
    });
}
