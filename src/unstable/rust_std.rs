use std::cmp::Ordering;

// The standard library pattern-defeating quicksort. Baseline for benchmarks and the reference
// result every other sort is checked against.
sort_impl!("rust_std_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    v.sort_unstable();
}

#[inline]
pub fn sort_by<T, L>(v: &mut [T], compare: L)
where
    L: FnMut(&T, &T) -> Ordering,
{
    v.sort_unstable_by(compare);
}
