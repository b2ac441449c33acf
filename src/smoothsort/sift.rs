use super::{Forest, Sequence};

/// Restores heap order inside the stretch of `order` rooted at `root`, where only the root itself
/// may be out of place.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn sift_in<S, T, L>(v: &mut [T], mut root: usize, mut order: usize, is_less: &mut L)
where
    S: Sequence,
    L: FnMut(&T, &T) -> bool,
{
    while let Some(children) = S::children(order) {
        // Choose the greater child. On ties the right one, it is the smaller stretch.
        let mut next = root - 1;
        let mut next_order = children.right;

        if let Some(left) = children.left {
            let left_root = next - S::len_of(children.right);
            if is_less(&v[next], &v[left_root]) {
                next = left_root;
                next_order = left;
            }
        }

        // Stop if the invariant holds at `root`.
        if !is_less(&v[root], &v[next]) {
            break;
        }

        v.swap(root, next);
        root = next;
        order = next_order;
    }
}

/// Moves the value at `root`, the root of the rightmost stretch described by `forest`, leftward
/// across stretch roots until roots are in ascending order again, then sifts it into the stretch
/// it stopped in.
///
/// `forest` is a scratch copy, stretches passed on the way are popped from it only.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn interheap_sift<F, T, L>(
    v: &mut [T],
    mut root: usize,
    mut forest: F,
    is_less: &mut L,
) where
    F: Forest,
    L: FnMut(&T, &T) -> bool,
{
    while !forest.is_single() {
        let order = forest.order();

        // The value may still sink below its children, so compare the neighbour against the
        // largest of the three.
        let mut max = root;
        if let Some(children) = F::Seq::children(order) {
            let right_root = root - 1;
            if is_less(&v[max], &v[right_root]) {
                max = right_root;
            }

            if children.left.is_some() {
                let left_root = right_root - F::Seq::len_of(children.right);
                if is_less(&v[max], &v[left_root]) {
                    max = left_root;
                }
            }
        }

        let next = root - F::Seq::len_of(order);
        if !is_less(&v[max], &v[next]) {
            break;
        }

        v.swap(root, next);
        root = next;
        forest.pop();
    }

    sift_in::<F::Seq, T, L>(v, root, forest.order(), is_less);
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::smoothsort::leonardo::{Leonardo, LeonardoForest};

    #[test]
    fn sift_in_leonardo_stretch() {
        // A single stretch of order 3 (5 elements): children of order 2 (left, 3 elements) and 1.
        let mut v = [2, 4, 6, 7, 1];
        sift_in::<Leonardo, _, _>(&mut v, 4, 3, &mut |a: &i32, b: &i32| a.lt(b));
        assert_eq!(v, [2, 4, 6, 1, 7]);

        // Already a heap, nothing moves.
        let mut v = [1, 2, 3, 0, 9];
        sift_in::<Leonardo, _, _>(&mut v, 4, 3, &mut |a: &i32, b: &i32| a.lt(b));
        assert_eq!(v, [1, 2, 3, 0, 9]);
    }

    #[test]
    fn sift_in_leaf_does_not_compare() {
        let mut v = [5];
        let mut comps = 0;
        sift_in::<Leonardo, _, _>(&mut v, 0, 1, &mut |a: &i32, b: &i32| {
            comps += 1;
            a.lt(b)
        });
        assert_eq!(comps, 0);
    }

    #[test]
    fn interheap_sift_moves_root_left() {
        // Forest of a 3 stretch [0..3) and a 1 stretch [3], with a small value at 3.
        let mut forest = LeonardoForest::new();
        for _ in 1..4 {
            forest.push();
        }
        assert_eq!(forest.order(), 1);

        let mut v = [1, 2, 8, 0];
        interheap_sift(&mut v, 3, forest, &mut |a: &i32, b: &i32| a.lt(b));
        assert_eq!(v, [1, 0, 2, 8]);
        crate::smoothsort::tests::assert_valid_forest(&v, forest);
    }
}
