//! Distance-only specialization (spec.md §4.3): unit cost, substitution
//! disabled, random-access sequences. No script is recovered, so there is
//! no traceback — only the bidirectional midpoint search in
//! [`super::find_midpoint`], run to completion (or to the max-cost cap).

use super::{common_prefix_len, common_suffix_len, find_midpoint, Midpoint};
use crate::cost::{Cost, CostFn};
use crate::error::EditDistanceError;
use crate::fallback::linear_complete;
use crate::maxcost::{MaxCost, RemainderKind};

pub(crate) fn distance<T: Copy, CF>(
    a: &[T],
    b: &[T],
    cost_fn: &CF,
    equal: &impl Fn(&T, &T) -> bool,
    max_cost: Option<&MaxCost<CF::Cost>>,
) -> Result<CF::Cost, EditDistanceError>
where
    CF: CostFn<T>,
{
    let zero: CF::Cost = num_traits::Zero::zero();
    let len1 = a.len();
    let len2 = b.len();
    let eqb = common_prefix_len(a, b, equal);
    let eqe = common_suffix_len(a, b, equal, eqb);
    let l1 = len1 - eqb - eqe;
    let l2 = len2 - eqb - eqe;

    if l1 == 0 && l2 == 0 {
        return Ok(zero);
    }

    // Every insertion/deletion/substitution call on a unit-cost model
    // returns the same value; sample it from whichever sequence still has
    // an element left, per spec.md §4.3's edge-case handling.
    let unit = if l1 > 0 {
        cost_fn.deletion(&a[eqb])
    } else {
        cost_fn.insertion(&b[eqb])
    };

    if l1 == 0 {
        return Ok(repeat(unit, l2));
    }
    if l2 == 0 {
        return Ok(repeat(unit, l1));
    }

    let s1 = &a[eqb..eqb + l1];
    let s2 = &b[eqb..eqb + l2];

    let Some(mc) = max_cost else {
        return match find_midpoint(s1, s2, equal, None) {
            Midpoint::Found { d, .. } => Ok(repeat(unit, d)),
            Midpoint::Capped { .. } => unreachable!("no cap was supplied"),
        };
    };

    let mut threshold_d = 0usize;
    let mut threshold_cost = zero;
    let mut cap_check = |target: usize| -> bool {
        while threshold_d < target {
            threshold_cost = threshold_cost + unit;
            threshold_d += 1;
        }
        mc.exceeds(threshold_cost)
    };

    match find_midpoint(s1, s2, equal, Some(&mut cap_check)) {
        Midpoint::Found { d, .. } => Ok(repeat(unit, d)),
        Midpoint::Capped {
            d,
            kind,
            r1b,
            r2b,
            r1e,
            r2e,
        } => {
            if mc.raise_on_exceed {
                return Err(EditDistanceError::MaxEditCostExceeded);
            }
            let known_rounds = match kind {
                RemainderKind::Bidirectional => 2 * d,
                RemainderKind::Forward | RemainderKind::Reverse => d,
                RemainderKind::None => 0,
            };
            let known = repeat(unit, known_rounds);
            let gap = linear_complete(s1, s2, cost_fn, equal, false, r1b, r2b, r1e, r2e, None);
            Ok(known + gap)
        }
    }
}

fn repeat<C: Cost>(unit: C, n: usize) -> C {
    let mut total: C = num_traits::Zero::zero();
    for _ in 0..n {
        total = total + unit;
    }
    total
}
