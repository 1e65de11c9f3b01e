use crate::cost::{CostFn, UnitCost};
use crate::maxcost::MaxCost;
use crate::substitution::Substitution;
use std::marker::PhantomData;

/// The named-parameter surface for an alignment call, realized as a
/// parameter-bag struct the way the teacher configures its aligners
/// (`AstarNwParams`/`AstarPaParams` in `pa-base-algos/src/nw.rs` and
/// `astarpa/src/align.rs`): plain fields, small `with_*` builder methods,
/// no named-argument macro.
pub struct EditDistanceOptions<T, CF, EQ>
where
    CF: CostFn<T>,
    EQ: Fn(&T, &T) -> bool,
{
    pub cost: CF,
    pub equal: EQ,
    pub substitution: Substitution,
    pub max_cost: Option<MaxCost<CF::Cost>>,
    _marker: PhantomData<fn(&T)>,
}

impl<T, CF, EQ> Clone for EditDistanceOptions<T, CF, EQ>
where
    CF: CostFn<T> + Clone,
    EQ: Fn(&T, &T) -> bool + Clone,
{
    fn clone(&self) -> Self {
        Self {
            cost: self.cost.clone(),
            equal: self.equal.clone(),
            substitution: self.substitution,
            max_cost: self.max_cost,
            _marker: PhantomData,
        }
    }
}

impl<T: PartialEq> EditDistanceOptions<T, UnitCost, fn(&T, &T) -> bool> {
    /// The default Levenshtein setup: unit cost, `PartialEq` equality,
    /// substitution disabled, no cap.
    pub fn unit_cost() -> Self {
        Self {
            cost: UnitCost,
            equal: T::eq,
            substitution: Substitution::Disabled,
            max_cost: None,
            _marker: PhantomData,
        }
    }
}

impl<T, CF, EQ> EditDistanceOptions<T, CF, EQ>
where
    CF: CostFn<T>,
    EQ: Fn(&T, &T) -> bool,
{
    pub fn new(cost: CF, equal: EQ) -> Self {
        Self {
            cost,
            equal,
            substitution: Substitution::Disabled,
            max_cost: None,
            _marker: PhantomData,
        }
    }

    /// Switches the cost callback. Any previously configured `max_cost`
    /// is dropped since it is keyed on the old callback's `Cost` type.
    pub fn with_cost<CF2: CostFn<T>>(self, cost: CF2) -> EditDistanceOptions<T, CF2, EQ> {
        EditDistanceOptions {
            cost,
            equal: self.equal,
            substitution: self.substitution,
            max_cost: None,
            _marker: PhantomData,
        }
    }

    pub fn with_equal<EQ2: Fn(&T, &T) -> bool>(self, equal: EQ2) -> EditDistanceOptions<T, CF, EQ2> {
        EditDistanceOptions {
            cost: self.cost,
            equal,
            substitution: self.substitution,
            max_cost: self.max_cost,
            _marker: PhantomData,
        }
    }

    pub fn with_substitution(mut self, substitution: Substitution) -> Self {
        self.substitution = substitution;
        self
    }

    pub fn with_max_cost(mut self, max_cost: MaxCost<CF::Cost>) -> Self {
        self.max_cost = Some(max_cost);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_cost_defaults_to_disabled_substitution_and_no_cap() {
        let opts = EditDistanceOptions::<u8, _, _>::unit_cost();
        assert_eq!(opts.substitution, Substitution::Disabled);
        assert!(opts.max_cost.is_none());
    }

    #[test]
    fn with_cost_drops_a_previously_set_max_cost() {
        let opts = EditDistanceOptions::<u8, _, _>::unit_cost()
            .with_max_cost(MaxCost::new(3, false))
            .with_cost(UnitCost);
        assert!(opts.max_cost.is_none());
    }

    #[test]
    fn with_substitution_round_trips() {
        let opts =
            EditDistanceOptions::<u8, _, _>::unit_cost().with_substitution(Substitution::Enabled);
        assert_eq!(opts.substitution, Substitution::Enabled);
    }
}
