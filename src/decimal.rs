use crate::{private::Sealed, Strategy, StrategyKind};

/// Ladder of literal decimal thresholds.
///
/// **This strategy computes `floor(log10(v))`, not `floor(log2(v))`.** Selecting
/// it changes the meaning of the result, not just its cost. Returns `0` for
/// `v == 0`.
#[derive(Copy, Clone, Debug)]
pub struct DecimalLadder;

impl DecimalLadder {
    /// Estimates `floor(log10(v))`.
    #[inline]
    pub const fn estimate(v: u32) -> i32 {
        if v >= 1_000_000_000 {
            9
        } else if v >= 100_000_000 {
            8
        } else if v >= 10_000_000 {
            7
        } else if v >= 1_000_000 {
            6
        } else if v >= 100_000 {
            5
        } else if v >= 10_000 {
            4
        } else if v >= 1_000 {
            3
        } else if v >= 100 {
            2
        } else if v >= 10 {
            1
        } else {
            0
        }
    }
}

impl Sealed for DecimalLadder {}
impl Strategy for DecimalLadder {
    const KIND: StrategyKind = StrategyKind::DecimalLadder;

    #[inline]
    fn estimate(v: u32) -> i32 {
        DecimalLadder::estimate(v)
    }
}
