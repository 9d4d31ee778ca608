use std::marker::PhantomData;

use log2_estimator::{Strategy, StrategyKind};
use log_hater::Subject;

pub use log2_estimator::{
    BitmaskHalving, BranchMinimized, DecimalLadder, ReferenceFloat, Selected, TableByteBranch,
    TableUniformBranch,
};

/// Adapts a built-in strategy to [`Subject`].
pub struct StrategySubject<S: Strategy>(PhantomData<S>);

impl<S: Strategy> StrategySubject<S> {
    pub fn new() -> Self {
        StrategySubject(PhantomData)
    }

    pub fn kind(&self) -> StrategyKind {
        S::KIND
    }
}

impl<S: Strategy> Default for StrategySubject<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Strategy> Subject for StrategySubject<S> {
    fn base(&self) -> u32 {
        S::KIND.base()
    }

    fn zero_result(&self) -> i32 {
        S::KIND.zero_result()
    }

    fn estimate(&self, v: u32) -> i32 {
        S::estimate(v)
    }
}

/// The strategy compiled into `estimate_log2` for this build.
pub type SelectedSubject = StrategySubject<Selected>;

/// Computes the exact logarithm with the integer methods from `core`.
///
/// Uses the table strategies' `-1` convention for zero.
pub struct Reference {
    base: u32,
}

impl Reference {
    pub fn new(base: u32) -> Reference {
        assert!(base >= 2, "logarithm base must be at least 2");
        Reference { base }
    }

    pub fn for_kind(kind: StrategyKind) -> Reference {
        Reference::new(kind.base())
    }
}

impl Subject for Reference {
    fn base(&self) -> u32 {
        self.base
    }

    fn zero_result(&self) -> i32 {
        -1
    }

    fn estimate(&self, v: u32) -> i32 {
        v.checked_ilog(self.base).map_or(-1, |r| r as i32)
    }
}

/// Runs `f` with a subject for every built-in strategy.
pub fn for_each_strategy(mut f: impl FnMut(StrategyKind, &dyn Subject)) {
    f(
        ReferenceFloat::KIND,
        &StrategySubject::<ReferenceFloat>::new(),
    );
    f(
        TableByteBranch::KIND,
        &StrategySubject::<TableByteBranch>::new(),
    );
    f(
        TableUniformBranch::KIND,
        &StrategySubject::<TableUniformBranch>::new(),
    );
    f(BitmaskHalving::KIND, &StrategySubject::<BitmaskHalving>::new());
    f(
        BranchMinimized::KIND,
        &StrategySubject::<BranchMinimized>::new(),
    );
    f(DecimalLadder::KIND, &StrategySubject::<DecimalLadder>::new());
}

/// Returns the first nonzero value in `values` on which a strategy disagrees
/// with the exact logarithm in its base.
pub fn first_disagreement(values: &[u32]) -> Option<(StrategyKind, u32)> {
    let mut found = None;

    for_each_strategy(|kind, subject| {
        if found.is_some() {
            return;
        }

        let reference = Reference::for_kind(kind);
        found = values
            .iter()
            .copied()
            .filter(|&v| v != 0)
            .find(|&v| subject.estimate(v) != reference.estimate(v))
            .map(|v| (kind, v));
    });

    found
}
