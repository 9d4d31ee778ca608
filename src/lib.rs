//! Bare metal-friendly integer logarithm estimators.
//!
//! This crate provides [`estimate_log2`], which computes `floor(log2(v))` for a
//! `u32` using one of several strategies. The strategy is chosen at build time
//! with a crate feature and cannot change at runtime:
//!
//! | Feature                | Strategy                | Result for `v == 0` |
//! |------------------------|-------------------------|---------------------|
//! | `reference-float`      | [`ReferenceFloat`]      | `i32::MIN`          |
//! | `table-byte-branch`    | [`TableByteBranch`]     | `-1`                |
//! | `table-uniform-branch` | [`TableUniformBranch`]  | `-1`                |
//! | `bitmask-halving`      | [`BitmaskHalving`]      | `0`                 |
//! | `branch-minimized`     | [`BranchMinimized`]     | `0`                 |
//! | `decimal-ladder`       | [`DecimalLadder`]       | `0`                 |
//!
//! `table-byte-branch` is enabled by default. If several strategy features are
//! enabled, the first match in this order is used: `reference-float`,
//! `table-uniform-branch`, `bitmask-halving`, `branch-minimized`,
//! `decimal-ladder`, `table-byte-branch`. Enabling any strategy feature thus
//! overrides the default.
//!
//! All strategies agree for nonzero inputs, except `decimal-ladder`, which
//! computes `floor(log10(v))` instead. Callers that may pass zero should use
//! [`checked_estimate_log2`] or consult [`SELECTED`] for the active convention.
//!
//! Every strategy is also available directly through the [`Strategy`] trait
//! for code that wants to name one explicitly.

#![doc(html_root_url = "https://docs.rs/log2_estimator/0.1.0")]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docs_rs, feature(doc_cfg))]

mod bits;
mod decimal;
mod float;
mod kind;
mod table;


use core::num::NonZeroU32;

pub use crate::{
    bits::{BitmaskHalving, BranchMinimized},
    decimal::DecimalLadder,
    kind::{ParseStrategyError, StrategyKind},
    table::{TableByteBranch, TableUniformBranch, LOG_TABLE_256},
};

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
pub use crate::float::ReferenceFloat;

#[cfg(not(any(
    feature = "reference-float",
    feature = "table-byte-branch",
    feature = "table-uniform-branch",
    feature = "bitmask-halving",
    feature = "branch-minimized",
    feature = "decimal-ladder",
)))]
compile_error!(
    "At least one of these crate features must be enabled: [\"reference-float\", \
     \"table-byte-branch\", \"table-uniform-branch\", \"bitmask-halving\", \
     \"branch-minimized\", \"decimal-ladder\"]."
);

/// An algorithm for estimating an integer logarithm.
///
/// This trait is sealed and implemented only by the strategies in this crate.
pub trait Strategy: Sealed {
    /// Identifies this strategy.
    const KIND: StrategyKind;

    /// Estimates the logarithm of `v`.
    ///
    /// For `v >= 1` this is `floor(log2(v))`, or `floor(log10(v))` if
    /// `Self::KIND.base() == 10`. For `v == 0` the result is
    /// `Self::KIND.zero_result()`.
    fn estimate(v: u32) -> i32;

    /// Estimates the logarithm of `v`, or returns `None` if `v` is zero.
    #[inline]
    fn estimate_checked(v: u32) -> Option<i32> {
        match v {
            0 => None,
            v => Some(Self::estimate(v)),
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "reference-float")] {
        /// The strategy selected for this build: [`ReferenceFloat`].
        pub type Selected = ReferenceFloat;
    } else if #[cfg(feature = "table-uniform-branch")] {
        /// The strategy selected for this build: [`TableUniformBranch`].
        pub type Selected = TableUniformBranch;
    } else if #[cfg(feature = "bitmask-halving")] {
        /// The strategy selected for this build: [`BitmaskHalving`].
        pub type Selected = BitmaskHalving;
    } else if #[cfg(feature = "branch-minimized")] {
        /// The strategy selected for this build: [`BranchMinimized`].
        pub type Selected = BranchMinimized;
    } else if #[cfg(feature = "decimal-ladder")] {
        /// The strategy selected for this build: [`DecimalLadder`].
        pub type Selected = DecimalLadder;
    } else {
        /// The strategy selected for this build: [`TableByteBranch`].
        pub type Selected = TableByteBranch;
    }
}

/// The strategy selected for this build.
pub const SELECTED: StrategyKind = <Selected as Strategy>::KIND;

/// Estimates `floor(log2(v))` using the strategy selected for this build.
///
/// The result for `v == 0` depends on the strategy; see [`SELECTED`] and
/// [`StrategyKind::zero_result`]. With the `decimal-ladder` feature this
/// computes `floor(log10(v))` instead.
///
/// # Example
///
/// ```
/// # use log2_estimator::{estimate_log2, SELECTED};
/// if SELECTED.base() == 2 {
///     assert_eq!(estimate_log2(1), 0);
///     assert_eq!(estimate_log2(1023), 9);
///     assert_eq!(estimate_log2(1024), 10);
/// }
/// ```
#[inline]
pub fn estimate_log2(v: u32) -> i32 {
    <Selected as Strategy>::estimate(v)
}

/// Estimates `floor(log2(v))` using the strategy selected for this build, or
/// returns `None` if `v` is zero.
#[inline]
pub fn checked_estimate_log2(v: u32) -> Option<i32> {
    <Selected as Strategy>::estimate_checked(v)
}

/// Estimates `floor(log2(v))` for a nonzero `v` using the strategy selected for
/// this build.
///
/// Every strategy produces a nonnegative result for a nonzero input.
#[inline]
pub fn estimate_log2_nonzero(v: NonZeroU32) -> u32 {
    // Nonzero inputs never reach a strategy's zero convention, so the estimate
    // is in 0..=31.
    <Selected as Strategy>::estimate(v.get()) as u32
}

#[doc(hidden)]
mod private {
    pub trait Sealed {}
}
use private::Sealed;
