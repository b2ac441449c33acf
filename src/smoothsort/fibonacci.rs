//! Nonzero Fibonacci-minus-one numbers.
//!
//! ```text
//!     O     O      __O        __O
//!          /     _/ /       _/ /
//!         O     O  O     __O  O
//!              /       _/ /  /
//!             O       O  O  O
//!                    /
//!                   O
//! ```
//!
//! Same recurrence as the Leonardo numbers but starting at `1, 2`. The smallest non-leaf stretch
//! is built as soon as a second element shows up, and it has a single child. Every bigger stretch
//! has two.

use super::{Children, Forest, Sequence};

const ORDERS: usize = 45;

/// `E(0) = 1`, `E(1) = 2`, `E(k) = E(k - 1) + E(k - 2) + 1`, every value below `2^32`.
pub const FIB_MINUS_ONE: [usize; ORDERS] = fib_minus_one_numbers();

const fn fib_minus_one_numbers() -> [usize; ORDERS] {
    let mut lens = [0; ORDERS];
    let (mut a, mut b) = (1u64, 2u64);

    let mut i = 0;
    while i < ORDERS {
        lens[i] = a as usize;
        let next = a + b + 1;
        a = b;
        b = next;
        i += 1;
    }

    lens
}

pub struct FibMinusOne;

impl Sequence for FibMinusOne {
    const LENS: &'static [usize] = &FIB_MINUS_ONE;

    #[inline(always)]
    fn children(order: usize) -> Option<Children> {
        match order {
            0 => None,
            1 => Some(Children {
                left: None,
                right: 0,
            }),
            _ => Some(Children {
                left: Some(order - 1),
                right: order - 2,
            }),
        }
    }
}

/// Same encoding as the Leonardo forest: bit `n` of `mask` is order `offset + n`.
#[derive(Copy, Clone, Debug)]
pub struct FibForest {
    mask: u64,
    offset: usize,
}

impl Forest for FibForest {
    type Seq = FibMinusOne;

    // The last three elements form a stretch of order 1 followed by one of order 0.
    const TAIL_LEN: usize = 3;

    #[inline(always)]
    fn new() -> Self {
        Self { mask: 1, offset: 0 }
    }

    #[inline(always)]
    fn order(&self) -> usize {
        self.offset
    }

    #[inline(always)]
    fn is_single(&self) -> bool {
        self.mask == 1
    }

    #[inline]
    fn push(&mut self) {
        if self.mask & 2 != 0 {
            self.mask = (self.mask >> 2) | 1;
            self.offset += 2;
        } else if self.offset == 0 {
            // Grow the lone leaf into a stretch of order 1.
            self.mask = (self.mask >> 1) | 1;
            self.offset = 1;
        } else {
            self.mask = (self.mask << self.offset) | 1;
            self.offset = 0;
        }
    }

    #[inline]
    fn will_fuse(&self, i: usize, len: usize) -> bool {
        let (i, len) = (i as u64, len as u64);

        (self.mask & 2 != 0 && i + 1 < len)
            || (self.offset > 0 && i + 1 + (FIB_MINUS_ONE[self.offset - 1] as u64) < len)
    }

    #[inline]
    fn pop(&mut self) {
        debug_assert!(!self.is_single());

        loop {
            self.mask >>= 1;
            self.offset += 1;

            if self.mask & 1 != 0 {
                break;
            }
        }
    }

    #[inline]
    fn split(&mut self) -> Option<Self> {
        debug_assert!(self.offset >= 1);

        self.mask &= !1;

        let left = if self.offset > 1 {
            self.mask = (self.mask << 1) | 1;
            self.offset -= 1;
            Some(*self)
        } else {
            None
        };

        self.mask = (self.mask << 1) | 1;
        self.offset -= 1;

        left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::smoothsort::tests::{check_heapify, check_table};

    #[test]
    fn table() {
        assert_eq!(&FIB_MINUS_ONE[..10], &[1, 2, 4, 7, 12, 20, 33, 54, 88, 143]);
        assert_eq!(FIB_MINUS_ONE[ORDERS - 1], 2_971_215_072);
        assert!(
            FIB_MINUS_ONE[ORDERS - 1] as u64 + FIB_MINUS_ONE[ORDERS - 2] as u64 + 1
                > u32::MAX as u64
        );

        check_table::<FibMinusOne>();
    }

    #[test]
    fn second_element_builds_pair() {
        let mut forest = FibForest::new();
        assert_eq!(forest.order(), 0);

        forest.push();
        assert_eq!(forest.order(), 1);
        assert!(forest.is_single());

        forest.push();
        assert_eq!(forest.order(), 0);
        assert!(!forest.is_single());

        // 2 + 1 + root
        forest.push();
        assert_eq!(forest.order(), 2);
        assert!(forest.is_single());
    }

    #[test]
    fn split_single_child() {
        let mut forest = FibForest::new();
        for _ in 1..6 {
            forest.push();
        }
        // 4 + 2
        assert_eq!(forest.order(), 1);
        assert!(!forest.is_single());

        assert!(forest.split().is_none());
        assert_eq!(forest.order(), 0);

        forest.pop();
        assert_eq!(forest.order(), 2);
        assert!(forest.is_single());
    }

    #[test]
    fn heapify_builds_valid_forest() {
        check_heapify::<FibForest>();
    }
}
