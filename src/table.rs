//! Lookup-table strategies.
//!
//! Both strategies in this module reduce `v` to a single byte, look that byte
//! up in [`LOG_TABLE_256`], and add back the number of bits shifted away. They
//! differ only in how the byte is selected.
//!
//! The table's entry for zero is the sentinel `-1`, which propagates to the
//! result when `v == 0`.

use crate::{private::Sealed, Strategy, StrategyKind};

/// `floor(log2(i))` for every byte value `i`, with `-1` at index zero.
///
/// Entries increase monotonically in blocks of length `2^n`: one `0`, two `1`s,
/// four `2`s, and so on up to one hundred twenty-eight `7`s.
pub const LOG_TABLE_256: [i8; 256] = build_table();

const fn build_table() -> [i8; 256] {
    let mut table = [0i8; 256];
    table[0] = -1;

    let mut i = 2;
    while i < 256 {
        // Each index inherits its half's entry, plus one.
        table[i] = table[i / 2] + 1;
        i += 1;
    }

    table
}

#[inline]
const fn lookup(byte: u32) -> i32 {
    LOG_TABLE_256[byte as usize] as i32
}

/// Lookup table with a two-level decision tree over the upper half-word.
///
/// At most two comparisons are made before a single table access. Returns `-1`
/// for `v == 0`.
#[derive(Copy, Clone, Debug)]
pub struct TableByteBranch;

impl TableByteBranch {
    /// Estimates `floor(log2(v))`.
    #[inline]
    pub const fn estimate(v: u32) -> i32 {
        let tt = v >> 16;
        if tt != 0 {
            let t = tt >> 8;
            if t != 0 {
                24 + lookup(t)
            } else {
                16 + lookup(tt)
            }
        } else {
            let t = v >> 8;
            if t != 0 {
                8 + lookup(t)
            } else {
                lookup(v)
            }
        }
    }
}

impl Sealed for TableByteBranch {}
impl Strategy for TableByteBranch {
    const KIND: StrategyKind = StrategyKind::TableByteBranch;

    #[inline]
    fn estimate(v: u32) -> i32 {
        TableByteBranch::estimate(v)
    }
}

/// Lookup table with a uniform chain of byte tests, most significant first.
///
/// Every path performs the same shift-test-lookup step, at the cost of up to
/// three comparisons. Returns `-1` for `v == 0`.
#[derive(Copy, Clone, Debug)]
pub struct TableUniformBranch;

impl TableUniformBranch {
    /// Estimates `floor(log2(v))`.
    #[inline]
    pub const fn estimate(v: u32) -> i32 {
        if v >> 24 != 0 {
            24 + lookup(v >> 24)
        } else if v >> 16 != 0 {
            16 + lookup(v >> 16)
        } else if v >> 8 != 0 {
            8 + lookup(v >> 8)
        } else {
            lookup(v)
        }
    }
}

impl Sealed for TableUniformBranch {}
impl Strategy for TableUniformBranch {
    const KIND: StrategyKind = StrategyKind::TableUniformBranch;

    #[inline]
    fn estimate(v: u32) -> i32 {
        TableUniformBranch::estimate(v)
    }
}
