//! Linear-space divide-and-conquer script recovery (spec.md §4.4): the
//! same bidirectional midpoint search as the distance engine, but
//! recursing on the prefix/suffix rectangles either side of the middle
//! snake and replaying every op into a [`ScriptEmitter`]. Grounded
//! directly in `original_source`'s `path`/`max_cost_fallback` pair
//! (`edit_distance_script.hpp`), including reusing the very same
//! recursive `path` routine to resolve the already-known forward/reverse
//! regions when the max-cost cap trips mid-search.

use super::{common_prefix_len, common_suffix_len, find_midpoint, Midpoint};
use crate::cost::{Cost, CostFn};
use crate::error::EditDistanceError;
use crate::fallback::linear_complete;
use crate::maxcost::MaxCost;
use crate::script::ScriptEmitter;

pub(crate) fn script<T: Copy, CF>(
    a: &[T],
    b: &[T],
    cost_fn: &CF,
    equal: &impl Fn(&T, &T) -> bool,
    max_cost: Option<&MaxCost<CF::Cost>>,
    emit: &mut dyn ScriptEmitter<T, CF::Cost>,
) -> Result<CF::Cost, EditDistanceError>
where
    CF: CostFn<T>,
{
    // Every insertion/deletion/substitution call returns the same value
    // on a unit-cost model, so one sample anywhere in either sequence is
    // the "one edit" constant used throughout the recursion.
    let unit = if !a.is_empty() {
        cost_fn.deletion(&a[0])
    } else if !b.is_empty() {
        cost_fn.insertion(&b[0])
    } else {
        num_traits::Zero::zero()
    };
    path(a, b, cost_fn, equal, unit, max_cost, emit)
}

fn path<T: Copy, CF>(
    s1: &[T],
    s2: &[T],
    cost_fn: &CF,
    equal: &impl Fn(&T, &T) -> bool,
    unit: CF::Cost,
    max_cost: Option<&MaxCost<CF::Cost>>,
    emit: &mut dyn ScriptEmitter<T, CF::Cost>,
) -> Result<CF::Cost, EditDistanceError>
where
    CF: CostFn<T>,
{
    let len1 = s1.len();
    let len2 = s2.len();
    let eqb = common_prefix_len(s1, s2, equal);
    let eqe = common_suffix_len(s1, s2, equal, eqb);

    for j in 0..eqb {
        emit.equality(s1[j], s2[j]);
    }

    let l1 = len1 - eqb - eqe;
    let l2 = len2 - eqb - eqe;
    let inner1 = &s1[eqb..eqb + l1];
    let inner2 = &s2[eqb..eqb + l2];

    let cost = if l1 == 0 {
        for &y in inner2 {
            emit.insertion(y, unit);
        }
        Ok(repeat(unit, l2))
    } else if l2 == 0 {
        for &x in inner1 {
            emit.deletion(x, unit);
        }
        Ok(repeat(unit, l1))
    } else if let Some(mc) = max_cost {
        let zero: CF::Cost = num_traits::Zero::zero();
        let mut threshold_d = 0usize;
        let mut threshold_cost = zero;
        let mut cap_check = |target: usize| -> bool {
            while threshold_d < target {
                threshold_cost = threshold_cost + unit;
                threshold_d += 1;
            }
            mc.exceeds(threshold_cost)
        };
        match find_midpoint(inner1, inner2, equal, Some(&mut cap_check)) {
            Midpoint::Found {
                r1b, r2b, r1e, r2e, ..
            } => resolve_snake(
                inner1, inner2, cost_fn, equal, unit, max_cost, emit, r1b, r2b, r1e, r2e,
            ),
            Midpoint::Capped {
                r1b,
                r2b,
                r1e,
                r2e,
                ..
            } => {
                if mc.raise_on_exceed {
                    return Err(EditDistanceError::MaxEditCostExceeded);
                }
                let mut total = path(
                    &inner1[..r1b],
                    &inner2[..r2b],
                    cost_fn,
                    equal,
                    unit,
                    max_cost,
                    &mut *emit,
                )?;
                total = total
                    + linear_complete(
                        inner1,
                        inner2,
                        cost_fn,
                        equal,
                        false,
                        r1b,
                        r2b,
                        r1e,
                        r2e,
                        Some(&mut *emit),
                    );
                total = total
                    + path(
                        &inner1[r1e..],
                        &inner2[r2e..],
                        cost_fn,
                        equal,
                        unit,
                        max_cost,
                        &mut *emit,
                    )?;
                Ok(total)
            }
        }
    } else {
        match find_midpoint(inner1, inner2, equal, None) {
            Midpoint::Found {
                r1b, r2b, r1e, r2e, ..
            } => resolve_snake(
                inner1, inner2, cost_fn, equal, unit, None, emit, r1b, r2b, r1e, r2e,
            ),
            Midpoint::Capped { .. } => unreachable!("no cap was supplied"),
        }
    }?;

    for j in 0..eqe {
        emit.equality(s1[len1 - eqe + j], s2[len2 - eqe + j]);
    }
    Ok(cost)
}

/// Recurses on the prefix rectangle before the middle snake, emits the
/// snake itself as `Equality` ops, then recurses on the suffix rectangle
/// (spec.md §4.4 step 4).
#[allow(clippy::too_many_arguments)]
fn resolve_snake<T: Copy, CF>(
    s1: &[T],
    s2: &[T],
    cost_fn: &CF,
    equal: &impl Fn(&T, &T) -> bool,
    unit: CF::Cost,
    max_cost: Option<&MaxCost<CF::Cost>>,
    emit: &mut dyn ScriptEmitter<T, CF::Cost>,
    r1b: usize,
    r2b: usize,
    r1e: usize,
    r2e: usize,
) -> Result<CF::Cost, EditDistanceError>
where
    CF: CostFn<T>,
{
    let mut total = path(&s1[..r1b], &s2[..r2b], cost_fn, equal, unit, max_cost, &mut *emit)?;
    for j in 0..(r1e - r1b) {
        emit.equality(s1[r1b + j], s2[r2b + j]);
    }
    total = total + path(&s1[r1e..], &s2[r2e..], cost_fn, equal, unit, max_cost, &mut *emit)?;
    Ok(total)
}

fn repeat<C: Cost>(unit: C, n: usize) -> C {
    let mut total: C = num_traits::Zero::zero();
    for _ in 0..n {
        total = total + unit;
    }
    total
}
