//! Table-free strategies that locate the highest set bit by halving.
//!
//! Both return `0` for `v == 0`, unlike the table strategies.

use crate::{private::Sealed, Strategy, StrategyKind};

const MASKS: [u32; 5] = [0x2, 0xC, 0xF0, 0xFF00, 0xFFFF_0000];
const SHIFTS: [u32; 5] = [1, 2, 4, 8, 16];

/// Binary search over the bit positions using precomputed masks.
#[derive(Copy, Clone, Debug)]
pub struct BitmaskHalving;

impl BitmaskHalving {
    /// Estimates `floor(log2(v))`.
    #[inline]
    pub const fn estimate(mut v: u32) -> i32 {
        let mut r = 0;

        // Coarsest mask first. The loop has a constant trip count and is
        // unrolled by the optimizer.
        let mut i = MASKS.len();
        while i > 0 {
            i -= 1;
            if v & MASKS[i] != 0 {
                v >>= SHIFTS[i];
                r |= SHIFTS[i];
            }
        }

        r as i32
    }
}

impl Sealed for BitmaskHalving {}
impl Strategy for BitmaskHalving {
    const KIND: StrategyKind = StrategyKind::BitmaskHalving;

    #[inline]
    fn estimate(v: u32) -> i32 {
        BitmaskHalving::estimate(v)
    }
}

/// Comparison cascade that turns each test into a shift width instead of a
/// branch.
///
/// Suited to cores with expensive branch mispredictions.
#[derive(Copy, Clone, Debug)]
pub struct BranchMinimized;

impl BranchMinimized {
    /// Estimates `floor(log2(v))`.
    #[inline]
    pub const fn estimate(mut v: u32) -> i32 {
        let mut r = ((v > 0xFFFF) as u32) << 4;
        v >>= r;

        let mut shift = ((v > 0xFF) as u32) << 3;
        v >>= shift;
        r |= shift;

        shift = ((v > 0xF) as u32) << 2;
        v >>= shift;
        r |= shift;

        shift = ((v > 0x3) as u32) << 1;
        v >>= shift;
        r |= shift;

        // `v` is now in 0..=3; its upper bit is the last bit of the result.
        r |= v >> 1;

        r as i32
    }
}

impl Sealed for BranchMinimized {}
impl Strategy for BranchMinimized {
    const KIND: StrategyKind = StrategyKind::BranchMinimized;

    #[inline]
    fn estimate(v: u32) -> i32 {
        BranchMinimized::estimate(v)
    }
}
