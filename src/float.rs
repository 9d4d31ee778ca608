#![cfg(feature = "std")]

use crate::{private::Sealed, Strategy, StrategyKind};

/// Floating-point baseline.
///
/// Converts `v` to `f64`, takes its base-2 logarithm, and truncates the result
/// toward negative infinity. Every `u32` is exactly representable as an `f64`,
/// and the gap between `log2(2^k - 1)` and `k` is far wider than an `f64` ulp,
/// so the truncation is exact for all nonzero inputs.
///
/// The logarithm of zero is `-inf`, which saturates to `i32::MIN`.
///
/// Requires the `std` feature.
#[derive(Copy, Clone, Debug)]
pub struct ReferenceFloat;

impl ReferenceFloat {
    /// Estimates `floor(log2(v))`.
    #[inline]
    pub fn estimate(v: u32) -> i32 {
        f64::from(v).log2().floor() as i32
    }
}

impl Sealed for ReferenceFloat {}
impl Strategy for ReferenceFloat {
    const KIND: StrategyKind = StrategyKind::ReferenceFloat;

    #[inline]
    fn estimate(v: u32) -> i32 {
        ReferenceFloat::estimate(v)
    }
}
