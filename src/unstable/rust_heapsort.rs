use std::cmp::Ordering;

sort_impl!("rust_heapsort_unstable");

/// Sorts the slice with a plain binary max-heap.
///
/// The same sift is used to build the heap and to reinsert the last element after every
/// extraction, so a slice of all equal elements only needs *O*(*n*) comparisons. Everything else
/// is *O*(*n* \* log(*n*)).
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    heapsort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, L>(v: &mut [T], mut compare: L)
where
    L: FnMut(&T, &T) -> Ordering,
{
    heapsort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn heapsort<T, L>(v: &mut [T], is_less: &mut L)
where
    L: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    // Build the heap in linear time.
    for i in (0..v.len() / 2).rev() {
        sift_down(v, i, is_less);
    }

    // Pop maximal elements from the heap.
    for i in (1..v.len()).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0, is_less);
    }
}

/// Pushes `node` down until it is no smaller than its children. This binary heap respects the
/// invariant `parent >= child`.
#[inline]
pub(crate) fn sift_down<T, L>(v: &mut [T], mut node: usize, is_less: &mut L)
where
    L: FnMut(&T, &T) -> bool,
{
    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= v.len() {
            break;
        }

        // Choose the greater child.
        if child + 1 < v.len() && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(&v[node], &v[child]) {
            break;
        }

        // Swap `node` with the greater child, move one step down, and continue sifting.
        v.swap(node, child);
        node = child;
    }
}
