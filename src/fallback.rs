use crate::cost::{cmp, Cost, CostFn};
use crate::script::ScriptEmitter;
use std::cmp::Ordering;

/// Finishes an alignment linearly across the rectangle `[p1, end1) x [p2,
/// end2)`, choosing at each step the cheapest of "equal move" (free),
/// substitution, or deletion+insertion — the same per-step decision
/// `original_source`'s `max_cost_fallback` routines make when completing
/// a search abandoned early because it hit its cost cap. Shared by the
/// general engine and both Myers engines: each hands it a different
/// unresolved rectangle (the whole graph for the general engine, or the
/// gap left between forward/reverse progress for a Myers search) and, in
/// script mode, an emitter to replay the chosen moves into.
pub(crate) fn linear_complete<T: Copy, CF: CostFn<T>>(
    a: &[T],
    b: &[T],
    cost_fn: &CF,
    equal: &impl Fn(&T, &T) -> bool,
    substitution_enabled: bool,
    mut p1: usize,
    mut p2: usize,
    end1: usize,
    end2: usize,
    mut emit: Option<&mut dyn ScriptEmitter<T, CF::Cost>>,
) -> CF::Cost {
    let mut total = num_traits::Zero::zero();
    while p1 < end1 && p2 < end2 {
        if equal(&a[p1], &b[p2]) {
            if let Some(e) = emit.as_deref_mut() {
                e.equality(a[p1], b[p2]);
            }
            p1 += 1;
            p2 += 1;
            continue;
        }
        let sub = cost_fn.substitution(&a[p1], &b[p2]);
        let del = cost_fn.deletion(&a[p1]);
        let ins = cost_fn.insertion(&b[p2]);
        let del_ins = del + ins;
        // Ties favor substitution.
        if substitution_enabled && cmp(sub, del_ins) != Ordering::Greater {
            total = total + sub;
            if let Some(e) = emit.as_deref_mut() {
                e.substitution(a[p1], b[p2], sub);
            }
            p1 += 1;
            p2 += 1;
        } else {
            total = total + del_ins;
            if let Some(e) = emit.as_deref_mut() {
                e.deletion(a[p1], del);
                e.insertion(b[p2], ins);
            }
            p1 += 1;
            p2 += 1;
        }
    }
    while p1 < end1 {
        let del = cost_fn.deletion(&a[p1]);
        total = total + del;
        if let Some(e) = emit.as_deref_mut() {
            e.deletion(a[p1], del);
        }
        p1 += 1;
    }
    while p2 < end2 {
        let ins = cost_fn.insertion(&b[p2]);
        total = total + ins;
        if let Some(e) = emit.as_deref_mut() {
            e.insertion(b[p2], ins);
        }
        p2 += 1;
    }
    total
}
