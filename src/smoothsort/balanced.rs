//! Perfectly balanced stretches of `2^k - 1` elements.
//!
//! ```text
//!     O    __O         ___O
//!         / /      ___/  /
//!        O O    __O   __O
//!              / /   / /
//!             O O   O O
//! ```
//!
//! Both children of a stretch have the same order. Stretches of consecutive orders may sit next
//! to each other anywhere, and two stretches of the same order may only exist at the right end of
//! the forest, which the descriptor tracks with a separate flag.

use super::{Children, Forest, Sequence};

const ORDERS: usize = 32;

/// `B(k) = 2^(k + 1) - 1`, every value below `2^32`.
pub const BALANCED: [usize; ORDERS] = balanced_lens();

const fn balanced_lens() -> [usize; ORDERS] {
    let mut lens = [0; ORDERS];

    let mut i = 0;
    while i < ORDERS {
        lens[i] = ((2u64 << i) - 1) as usize;
        i += 1;
    }

    lens
}

pub struct Balanced;

impl Sequence for Balanced {
    const LENS: &'static [usize] = &BALANCED;

    #[inline(always)]
    fn children(order: usize) -> Option<Children> {
        (order >= 1).then(|| Children {
            left: Some(order - 1),
            right: order - 1,
        })
    }
}

/// Bit `n` of `mask` is order `offset + n`. `twin` means a second stretch of order `offset` sits
/// right of the one in the mask.
#[derive(Copy, Clone, Debug)]
pub struct BalancedForest {
    mask: u32,
    offset: usize,
    twin: bool,
}

impl Forest for BalancedForest {
    type Seq = Balanced;

    // The last two elements are twin stretches of order 0.
    const TAIL_LEN: usize = 2;

    #[inline(always)]
    fn new() -> Self {
        Self {
            mask: 1,
            offset: 0,
            twin: false,
        }
    }

    #[inline(always)]
    fn order(&self) -> usize {
        self.offset
    }

    #[inline(always)]
    fn is_single(&self) -> bool {
        !self.twin && self.mask == 1
    }

    #[inline]
    fn push(&mut self) {
        if self.twin {
            // Fuse the twins, the result may have a twin of its own.
            self.twin = (self.mask >> 1) & 1 != 0;
            self.mask = (self.mask >> 1) | 1;
            self.offset += 1;
        } else if self.offset == 0 {
            self.twin = true;
        } else {
            self.mask = (self.mask << self.offset) | 1;
            self.offset = 0;
        }
    }

    #[inline]
    fn will_fuse(&self, i: usize, len: usize) -> bool {
        let (i, len) = (i as u64, len as u64);

        // Either a twin already exists and one more element will join them, or there is room for
        // a twin of the same order plus that element.
        if self.twin {
            i + 1 < len
        } else {
            i + (2u64 << self.offset) < len
        }
    }

    #[inline]
    fn pop(&mut self) {
        debug_assert!(!self.is_single());

        if self.twin {
            self.twin = false;
            return;
        }

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

        // With a twin the mask bit stays, it now stands for the twin left of this stretch.
        if !self.twin {
            self.mask &= !1;
        }

        self.mask = (self.mask << 1) | 1;
        self.offset -= 1;

        // The left child is sifted while the right one is not part of the forest yet.
        self.twin = false;
        let left = *self;

        self.twin = true;

        Some(left)
    }
}
