use std::cmp::Ordering;

use super::rust_heapsort::sift_down;

sort_impl!("rust_heapsort_floyd_unstable");

/// Sorts the slice with a binary max-heap, using Floyd's bottom-up reinsertion.
///
/// The element taken from the end of the heap is almost always small, so instead of comparing it
/// on every level on the way down it is sunk to a leaf unconditionally and then moved back up as
/// far as needed. That saves roughly half the comparisons of the extraction phase, but makes every
/// input *O*(*n* \* log(*n*)), including all equal elements.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    heapsort_floyd(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, L>(v: &mut [T], mut compare: L)
where
    L: FnMut(&T, &T) -> Ordering,
{
    heapsort_floyd(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn heapsort_floyd<T, L>(v: &mut [T], is_less: &mut L)
where
    L: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    for i in (0..v.len() / 2).rev() {
        sift_down(v, i, is_less);
    }

    for i in (1..v.len()).rev() {
        v.swap(0, i);
        sink_and_rise(&mut v[..i], is_less);
    }
}

/// Reinserts the element at the root: first follow the greater children to a leaf without
/// looking at the element, then move it back up while its parent is smaller.
#[inline]
fn sink_and_rise<T, L>(v: &mut [T], is_less: &mut L)
where
    L: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut node = 0;

    loop {
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        if child + 1 < len && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        v.swap(node, child);
        node = child;
    }

    while node > 0 {
        let parent = (node - 1) / 2;
        if !is_less(&v[parent], &v[node]) {
            break;
        }

        v.swap(parent, node);
        node = parent;
    }
}
