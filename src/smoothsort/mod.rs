//! Smoothsort family
//!
//! In-place, allocation free sorts that keep the input as a forest of heap-ordered "stretches"
//! laid out in post-order: the root of every stretch is its rightmost element and its child
//! stretches sit immediately to the left of it. The stretch lengths are drawn from a fixed number
//! sequence, the [`Sequence`], and the set of stretches currently alive is tracked by a compact
//! [`Forest`] descriptor.
//!
//! The sort runs in two passes:
//!
//! 1. `heapify` scans left to right and grows the forest one element at a time. Stretches that
//!    will be fused into a bigger one before the scan ends only get their own heap order repaired,
//!    everything else also gets its root sifted leftward so that stretch roots ascend from left to
//!    right.
//! 2. `extract` scans right to left. The rightmost root is always the maximum of the unsorted
//!    prefix, so a leaf stretch is simply dropped, and a bigger stretch is replaced by its
//!    children whose roots are then sifted back into order.
//!
//! With the Leonardo sequence this is Dijkstra's smoothsort and runs in *O*(*n*) on sorted input.
//! Worst case is *O*(*n* \* log(*n*)) for every sequence.
//!
//! All element moves are swaps inside the slice. Every comparison is therefore done on the real
//! elements, and a panicking comparison function leaves the slice as a permutation of the input.

pub mod balanced;
pub mod fibonacci;
pub mod leonardo;

mod sift;

use sift::{interheap_sift, sift_in};

/// Largest slice length the size tables are built for.
///
/// Sorting a longer slice indexes past the end of the tables and panics.
pub const MAX_LEN: usize = u32::MAX as usize;

/// Orders of the direct sub-stretches of a stretch.
///
/// The right (or only) child's root sits at `root - 1`, the left child's root directly left of
/// the right child, at `root - 1 - len(right)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Children {
    pub left: Option<usize>,
    pub right: usize,
}

/// A stretch size sequence and the tree shape it implies.
pub trait Sequence {
    /// Stretch length of every order, ascending. Covers every length below `2^32`.
    const LENS: &'static [usize];

    /// Number of elements of this stretch order.
    #[inline(always)]
    fn len_of(order: usize) -> usize {
        Self::LENS[order]
    }

    /// Sub-stretches of a stretch of `order`, `None` for a leaf.
    fn children(order: usize) -> Option<Children>;
}

/// Compact description of which stretch orders are currently alive, smallest last.
///
/// Only the sizes are stored, positions follow from the slice index the drivers are at. The
/// descriptor is `Copy` because the inter-stretch sift walks a scratch copy of it.
pub trait Forest: Copy {
    type Seq: Sequence;

    /// Number of trailing elements `extract` never touches, they are sorted once everything to
    /// their right is.
    const TAIL_LEN: usize;

    /// A forest made of a single minimal stretch holding the first element.
    fn new() -> Self;

    /// Order of the rightmost, smallest, stretch.
    fn order(&self) -> usize;

    /// `true` if the rightmost stretch is the only one.
    fn is_single(&self) -> bool;

    /// Appends one element to the right of the forest, either as a new minimal stretch or by
    /// fusing the two rightmost stretches under it.
    fn push(&mut self);

    /// `true` if the stretch created by the last `push`, whose root is at `i`, is going to be
    /// fused into a bigger one before the scan reaches `len`.
    fn will_fuse(&self, i: usize, len: usize) -> bool;

    /// Forgets the rightmost stretch. Its element(s) stay where they are.
    fn pop(&mut self);

    /// Replaces the rightmost stretch by its children.
    ///
    /// `self` ends up describing the forest with both children present. If the stretch has a
    /// left child, the returned descriptor is the intermediate forest that only has the left
    /// child added, which is what the left child's root must be sifted under.
    fn split(&mut self) -> Option<Self>;
}

/// Sorts `v` with the smoothsort variant described by `F`.
#[inline]
pub fn sort<F, T, L>(v: &mut [T], is_less: &mut L)
where
    F: Forest,
    L: FnMut(&T, &T) -> bool,
{
    // Everything below assumes at least 2 elements.
    if v.len() < 2 {
        return;
    }

    debug_assert!(v.len() <= MAX_LEN);

    let forest = heapify::<F, T, L>(v, is_less);
    extract(v, forest, is_less);
}

/// Builds the forest over all of `v`, stretch roots ascending from left to right.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn heapify<F, T, L>(v: &mut [T], is_less: &mut L) -> F
where
    F: Forest,
    L: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut forest = F::new();

    for i in 1..len {
        forest.push();

        // A stretch that gets fused later will have a new root on top of it before its own root
        // is ever exposed, so the order between roots can wait until then.
        if forest.will_fuse(i, len) {
            sift_in::<F::Seq, T, L>(v, i, forest.order(), is_less);
        } else {
            interheap_sift(v, i, forest, is_less);
        }
    }

    forest
}

/// Consumes the forest built by `heapify`, leaving `v` sorted.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn extract<F, T, L>(v: &mut [T], mut forest: F, is_less: &mut L)
where
    F: Forest,
    L: FnMut(&T, &T) -> bool,
{
    for i in (F::TAIL_LEN..v.len()).rev() {
        match F::Seq::children(forest.order()) {
            None => forest.pop(),
            Some(children) => {
                let right_root = i - 1;
                let left_forest = forest.split();

                debug_assert_eq!(children.left.is_some(), left_forest.is_some());

                if let Some(left_forest) = left_forest {
                    let left_root = right_root - F::Seq::len_of(children.right);
                    interheap_sift(v, left_root, left_forest, is_less);
                }

                interheap_sift(v, right_root, forest, is_less);
            }
        }
    }
}

/// `(root, order)` of every stretch of `forest`, right to left. The rightmost root is `last`.
#[cfg(test)]
pub(crate) fn stretches<F: Forest>(mut forest: F, last: usize) -> Vec<(usize, usize)> {
    let mut root = last;
    let mut out = vec![(root, forest.order())];

    while !forest.is_single() {
        root -= F::Seq::len_of(forest.order());
        forest.pop();
        out.push((root, forest.order()));
    }

    out
}
