//! Leonardo numbers, Dijkstra's original stretch lengths.
//!
//! ```text
//!     O    __O      __O          ___O
//!         / /      / /       ___/  /
//!        O O    __O O     __O   __O
//!              / /       / /   / /
//!             O O     __O O   O O
//!                    / /
//!                   O O
//! ```
//!
//! Every non-leaf stretch has exactly two children, of the two preceding orders.

use super::{Children, Forest, Sequence};

const ORDERS: usize = 46;

/// `L(0) = L(1) = 1`, `L(k) = L(k - 1) + L(k - 2) + 1`, every value below `2^32`.
pub const LEONARDO: [usize; ORDERS] = leonardo_numbers();

const fn leonardo_numbers() -> [usize; ORDERS] {
    let mut lens = [0; ORDERS];
    let (mut a, mut b) = (1u64, 1u64);

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

pub struct Leonardo;

impl Sequence for Leonardo {
    const LENS: &'static [usize] = &LEONARDO;

    #[inline(always)]
    fn children(order: usize) -> Option<Children> {
        (order >= 2).then(|| Children {
            left: Some(order - 1),
            right: order - 2,
        })
    }
}

/// Bit `n` of `mask` set means a stretch of order `offset + n` exists. Bit 0 is always set, so
/// `offset` is also the order of the rightmost stretch.
#[derive(Copy, Clone, Debug)]
pub struct LeonardoForest {
    mask: u64,
    offset: usize,
}

impl Forest for LeonardoForest {
    type Seq = Leonardo;

    // The last two elements form stretches of order 1 and 0.
    const TAIL_LEN: usize = 2;

    #[inline(always)]
    fn new() -> Self {
        Self { mask: 1, offset: 1 }
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
            // Contiguous orders, fuse them under the new element.
            self.mask = (self.mask >> 2) | 1;
            self.offset += 2;
        } else if self.offset == 1 {
            self.mask = (self.mask << 1) | 1;
            self.offset = 0;
        } else {
            self.mask = (self.mask << (self.offset - 1)) | 1;
            self.offset = 1;
        }
    }

    #[inline]
    fn will_fuse(&self, i: usize, len: usize) -> bool {
        let (i, len) = (i as u64, len as u64);

        // Either the previous stretch has the next order and there is one more element to become
        // the new root, or there is room for a stretch of the preceding order plus that root.
        (self.mask & 2 != 0 && i + 1 < len)
            || (self.offset > 0 && i + 1 + (LEONARDO[self.offset - 1] as u64) < len)
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
        debug_assert!(self.offset >= 2);

        self.mask &= !1;

        self.mask = (self.mask << 1) | 1;
        self.offset -= 1;
        let left = *self;

        self.mask = (self.mask << 1) | 1;
        self.offset -= 1;

        Some(left)
    }
}
