use core::{fmt, str::FromStr};

/// Identifies one of the built-in strategies.
///
/// Each variant's [`name`](StrategyKind::name) is also the name of the crate
/// feature that selects it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Floating-point logarithm. See [`ReferenceFloat`](crate::ReferenceFloat).
    ReferenceFloat,
    /// See [`TableByteBranch`](crate::TableByteBranch).
    TableByteBranch,
    /// See [`TableUniformBranch`](crate::TableUniformBranch).
    TableUniformBranch,
    /// See [`BitmaskHalving`](crate::BitmaskHalving).
    BitmaskHalving,
    /// See [`BranchMinimized`](crate::BranchMinimized).
    BranchMinimized,
    /// Base-10 threshold ladder. See [`DecimalLadder`](crate::DecimalLadder).
    DecimalLadder,
}

impl StrategyKind {
    /// Every strategy, in declaration order.
    pub const ALL: [StrategyKind; 6] = [
        StrategyKind::ReferenceFloat,
        StrategyKind::TableByteBranch,
        StrategyKind::TableUniformBranch,
        StrategyKind::BitmaskHalving,
        StrategyKind::BranchMinimized,
        StrategyKind::DecimalLadder,
    ];

    /// Returns the name of the crate feature that selects this strategy.
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::ReferenceFloat => "reference-float",
            StrategyKind::TableByteBranch => "table-byte-branch",
            StrategyKind::TableUniformBranch => "table-uniform-branch",
            StrategyKind::BitmaskHalving => "bitmask-halving",
            StrategyKind::BranchMinimized => "branch-minimized",
            StrategyKind::DecimalLadder => "decimal-ladder",
        }
    }

    /// Returns the base of the logarithm this strategy computes.
    pub const fn base(self) -> u32 {
        match self {
            StrategyKind::DecimalLadder => 10,
            _ => 2,
        }
    }

    /// Returns the result this strategy produces for an input of zero.
    pub const fn zero_result(self) -> i32 {
        match self {
            StrategyKind::ReferenceFloat => i32::MIN,
            StrategyKind::TableByteBranch | StrategyKind::TableUniformBranch => -1,
            StrategyKind::BitmaskHalving
            | StrategyKind::BranchMinimized
            | StrategyKind::DecimalLadder => 0,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error type returned when parsing an unrecognized strategy name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseStrategyError;

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognized strategy name")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseStrategyError {}

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or(ParseStrategyError)
    }
}
