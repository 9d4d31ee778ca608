//! A small library for ~~hating on~~ evaluating the correctness of integer
//! logarithm estimators.
#![deny(unsafe_op_in_unsafe_fn)]

use std::fmt;

/// A wrapper around a nonzero `u32` which implements `Arbitrary`.
///
/// Values are drawn near a random power of two, since uniformly random `u32`s
/// almost never land on a boundary.
#[derive(Copy, Clone, Debug)]
pub struct ArbInput(pub u32);

impl arbitrary::Arbitrary<'_> for ArbInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        // Select a random bit index and shift to obtain a power of two.
        let shift = u8::arbitrary(u)? % u32::BITS as u8;
        let base: u32 = 1 << shift;

        let v = match Nudge::arbitrary(u)? {
            Nudge::Exact => base,
            Nudge::Below => base.wrapping_sub(1).max(1),
            Nudge::Within => base | (u32::arbitrary(u)? & (base - 1)),
        };

        Ok(ArbInput(v))
    }
}

#[derive(arbitrary::Arbitrary)]
enum Nudge {
    Exact,
    Below,
    Within,
}

#[derive(arbitrary::Arbitrary)]
enum ProbeTag {
    Value,
    Pair,
    Boundary,
    Zero,
}

/// A single check to run against a [`Subject`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Probe {
    /// Check that the estimate for `v` brackets `v` between consecutive powers
    /// of the subject's base.
    Value(u32),
    /// Check that the estimate is monotonic across the two values.
    Pair(u32, u32),
    /// Check both sides of the boundary at `base^exp`.
    ///
    /// The exponent is reduced modulo the number of powers of the subject's
    /// base that fit in a `u32`.
    Boundary(u8),
    /// Check the subject's documented result for zero.
    Zero,
}

impl arbitrary::Arbitrary<'_> for Probe {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let tag = ProbeTag::arbitrary(u)?;

        let probe = match tag {
            ProbeTag::Value => Probe::Value(ArbInput::arbitrary(u)?.0),
            ProbeTag::Pair => Probe::Pair(ArbInput::arbitrary(u)?.0, ArbInput::arbitrary(u)?.0),
            ProbeTag::Boundary => Probe::Boundary(u8::arbitrary(u)?),
            ProbeTag::Zero => Probe::Zero,
        };

        Ok(probe)
    }
}

/// An integer logarithm estimator under evaluation.
pub trait Subject {
    /// Returns the base of the logarithm the subject computes.
    fn base(&self) -> u32;

    /// Returns the subject's documented result for an input of zero.
    fn zero_result(&self) -> i32;

    /// Estimates `floor(log_base(v))`.
    fn estimate(&self, v: u32) -> i32;
}

/// Returns the largest exponent `e` such that `base^e` fits in a `u32`.
pub fn max_exponent(base: u32) -> u32 {
    u32::MAX.ilog(base)
}

/// Whether `r` is `floor(log_base(v))` for a nonzero `v`.
pub fn brackets(base: u32, v: u32, r: i32) -> bool {
    let Ok(r) = u32::try_from(r) else {
        return false;
    };

    let lo = match base.checked_pow(r) {
        Some(lo) => u64::from(lo),
        None => return false,
    };
    let hi = lo * u64::from(base);

    lo <= u64::from(v) && u64::from(v) < hi
}

/// The reason a probe failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// The estimate for `v` was not `floor(log_base(v))`.
    Bracket { v: u32, estimate: i32 },
    /// `lo <= hi`, but the estimate for `lo` exceeded the estimate for `hi`.
    NotMonotonic { lo: u32, hi: u32 },
    /// The result for zero differed from the documented one.
    Zero { expected: i32, actual: i32 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Bracket { v, estimate } => {
                write!(f, "estimate {estimate} does not bracket {v}")
            }
            Violation::NotMonotonic { lo, hi } => {
                write!(f, "estimate for {lo} exceeds estimate for {hi}")
            }
            Violation::Zero { expected, actual } => {
                write!(f, "expected {expected} for zero, got {actual}")
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Failed {
    pub completed: Vec<Probe>,
    pub failed_probe: Probe,
    pub violation: Violation,
}

impl fmt::Display for Failed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "probe {:?} failed after {} probes: {}",
            self.failed_probe,
            self.completed.len(),
            self.violation
        )
    }
}

impl std::error::Error for Failed {}

pub struct Evaluator<S: Subject> {
    subject: S,
}

impl<S: Subject> Evaluator<S> {
    pub fn new(subject: S) -> Evaluator<S> {
        Evaluator { subject }
    }

    pub fn evaluate<I>(&mut self, probes: I) -> Result<(), Failed>
    where
        I: IntoIterator<Item = Probe>,
    {
        let mut completed = Vec::new();

        for probe in probes {
            if let Err(violation) = self.run_probe(&probe) {
                log::warn!("{probe:?} failed: {violation}");

                return Err(Failed {
                    completed,
                    failed_probe: probe,
                    violation,
                });
            }

            completed.push(probe);
        }

        log::debug!("{} probes passed", completed.len());

        Ok(())
    }

    fn run_probe(&self, probe: &Probe) -> Result<(), Violation> {
        match *probe {
            Probe::Value(v) => self.check_bracket(v),

            Probe::Pair(a, b) => {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                self.check_bracket(lo)?;
                self.check_bracket(hi)?;

                if self.subject.estimate(lo) > self.subject.estimate(hi) {
                    return Err(Violation::NotMonotonic { lo, hi });
                }

                Ok(())
            }

            Probe::Boundary(raw_exp) => {
                let base = self.subject.base();
                let exp = u32::from(raw_exp) % (max_exponent(base) + 1);
                let p = base.pow(exp);

                self.check_bracket(p)?;
                if p > 1 {
                    self.check_bracket(p - 1)?;
                }

                Ok(())
            }

            Probe::Zero => {
                let expected = self.subject.zero_result();
                let actual = self.subject.estimate(0);

                if expected != actual {
                    return Err(Violation::Zero { expected, actual });
                }

                Ok(())
            }
        }
    }

    fn check_bracket(&self, v: u32) -> Result<(), Violation> {
        if v == 0 {
            return Ok(());
        }

        let estimate = self.subject.estimate(v);
        match brackets(self.subject.base(), v, estimate) {
            true => Ok(()),
            false => Err(Violation::Bracket { v, estimate }),
        }
    }

    pub fn into_subject(self) -> S {
        self.subject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use arbitrary::{Arbitrary, Unstructured};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    struct Exact;

    impl Subject for Exact {
        fn base(&self) -> u32 {
            2
        }

        fn zero_result(&self) -> i32 {
            -1
        }

        fn estimate(&self, v: u32) -> i32 {
            v.checked_ilog2().map_or(-1, |r| r as i32)
        }
    }

    /// Truncates the final bit, like a comparison cascade that stops at two
    /// bits of resolution.
    struct Coarse;

    impl Subject for Coarse {
        fn base(&self) -> u32 {
            2
        }

        fn zero_result(&self) -> i32 {
            0
        }

        fn estimate(&self, v: u32) -> i32 {
            v.checked_ilog2().map_or(0, |r| (r & !1) as i32)
        }
    }

    #[test]
    fn brackets_powers() {
        assert!(brackets(2, 1, 0));
        assert!(brackets(2, 1023, 9));
        assert!(!brackets(2, 1024, 9));
        assert!(brackets(2, u32::MAX, 31));
        assert!(brackets(10, 999, 2));
        assert!(brackets(10, u32::MAX, 9));
        assert!(!brackets(2, 5, -1));
    }

    #[test]
    fn max_exponents() {
        assert_eq!(max_exponent(2), 31);
        assert_eq!(max_exponent(10), 9);
    }

    #[test]
    fn exact_subject_passes() {
        init_logger();

        let probes = (0..=u8::MAX)
            .map(Probe::Boundary)
            .chain([Probe::Zero, Probe::Value(3), Probe::Pair(1000, 7)]);

        Evaluator::new(Exact).evaluate(probes).unwrap();
    }

    #[test]
    fn coarse_subject_fails() {
        init_logger();

        let probes = [Probe::Zero, Probe::Value(1), Probe::Value(2)];
        let failed = Evaluator::new(Coarse).evaluate(probes).unwrap_err();

        assert_eq!(failed.completed, [Probe::Zero, Probe::Value(1)]);
        assert_eq!(failed.failed_probe, Probe::Value(2));
        assert_eq!(failed.violation, Violation::Bracket { v: 2, estimate: 0 });
    }

    #[test]
    fn wrong_zero_reported() {
        init_logger();

        struct Liar;

        impl Subject for Liar {
            fn base(&self) -> u32 {
                2
            }

            fn zero_result(&self) -> i32 {
                0
            }

            fn estimate(&self, v: u32) -> i32 {
                v.checked_ilog2().map_or(-1, |r| r as i32)
            }
        }

        let failed = Evaluator::new(Liar).evaluate([Probe::Zero]).unwrap_err();
        assert_eq!(
            failed.violation,
            Violation::Zero {
                expected: 0,
                actual: -1
            }
        );
    }

    #[test]
    fn arbitrary_inputs_are_nonzero() {
        let bytes: Vec<u8> = (0..4096u32).map(|i| (i * 37 % 251) as u8).collect();
        let mut u = Unstructured::new(&bytes);

        while let Ok(ArbInput(v)) = ArbInput::arbitrary(&mut u) {
            assert_ne!(v, 0);
            if u.is_empty() {
                break;
            }
        }
    }
}
