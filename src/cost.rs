use num_traits::Zero;
use std::ops::Add;

/// Numeric cost type returned by a [`CostFn`]. Any type satisfying these
/// bounds works, including integers and floats — nothing in the engines
/// assumes a unit-cost or integer-valued model.
pub trait Cost: Copy + PartialOrd + Add<Output = Self> + Zero {}

impl<C> Cost for C where C: Copy + PartialOrd + Add<Output = C> + Zero {}

/// The cost contract: how much an insertion, deletion, or substitution of
/// elements costs. Implementations may be asymmetric (the cost of turning
/// `a` into `b` need not equal the cost of turning `b` into `a`) and may
/// ignore one of their arguments entirely (e.g. a per-element insertion
/// cost that does not look at the deleted element).
pub trait CostFn<T> {
    type Cost: Cost;

    fn insertion(&self, y: &T) -> Self::Cost;
    fn deletion(&self, x: &T) -> Self::Cost;
    fn substitution(&self, x: &T, y: &T) -> Self::Cost;

    /// Capability check feeding the dispatcher's decision tuple (spec.md
    /// §4.5). A model must return `true` here only if `insertion`,
    /// `deletion`, and `substitution` always return the same fixed value
    /// representing one edit, regardless of which elements are passed —
    /// the precondition the Myers engines rely on to treat "how many
    /// non-diagonal edges" as the whole answer. `false` by default; only
    /// [`UnitCost`] overrides it.
    fn is_unit_cost(&self) -> bool {
        false
    }
}

/// The textbook Levenshtein cost model: every edge costs one.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnitCost;

impl<T> CostFn<T> for UnitCost {
    type Cost = usize;

    fn insertion(&self, _y: &T) -> usize {
        1
    }
    fn deletion(&self, _x: &T) -> usize {
        1
    }
    fn substitution(&self, _x: &T, _y: &T) -> usize {
        1
    }
    fn is_unit_cost(&self) -> bool {
        true
    }
}

/// Orders two costs, panicking on an incomparable pair (e.g. a `NaN`).
/// A cost callback returning an incomparable value is a caller contract
/// violation, not a condition engines can recover from.
pub(crate) fn cmp<C: Cost>(a: C, b: C) -> std::cmp::Ordering {
    a.partial_cmp(&b)
        .expect("cost callback returned an incomparable value (e.g. NaN)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_cost_returns_one_and_reports_unit() {
        let uc = UnitCost;
        assert_eq!(CostFn::<u8>::insertion(&uc, &b'x'), 1);
        assert_eq!(CostFn::<u8>::deletion(&uc, &b'x'), 1);
        assert_eq!(CostFn::<u8>::substitution(&uc, &b'x', &b'y'), 1);
        assert!(CostFn::<u8>::is_unit_cost(&uc));
    }

    #[test]
    #[should_panic]
    fn cmp_panics_on_nan() {
        cmp(f64::NAN, 1.0);
    }
}
