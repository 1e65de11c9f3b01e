//! The entry points and the engine selector (spec.md §4.5). Per
//! `spec.md`'s DESIGN NOTES §9 ("tagged-variant dispatch... statically
//! typed targets can keep this as generic specialization"), the decision
//! collapses to a single runtime check: both inputs are always
//! random-access here (§3 — sequences are slices), so the only live axes
//! are whether substitution is enabled and whether the cost model
//! reports itself unit-cost via [`CostFn::is_unit_cost`].

use crate::cost::CostFn;
use crate::error::EditDistanceError;
use crate::general;
use crate::myers;
use crate::options::EditDistanceOptions;
use crate::script::ScriptEmitter;

/// Computes the minimum edit cost from `a` to `b` under `options`.
///
/// Dispatches to the Myers distance engine (spec.md §4.3) when the cost
/// model is unit-cost and substitution is disabled; otherwise to the
/// general Dijkstra engine (spec.md §4.2).
pub fn edit_distance<T, CF, EQ>(
    a: &[T],
    b: &[T],
    options: &EditDistanceOptions<T, CF, EQ>,
) -> Result<CF::Cost, EditDistanceError>
where
    T: Copy,
    CF: CostFn<T>,
    EQ: Fn(&T, &T) -> bool,
{
    if !options.substitution.is_enabled() && options.cost.is_unit_cost() {
        myers::distance::distance(a, b, &options.cost, &options.equal, options.max_cost.as_ref())
    } else {
        general::run(
            a,
            b,
            &options.cost,
            &options.equal,
            options.substitution.is_enabled(),
            options.max_cost.as_ref(),
            None,
        )
    }
}

/// Computes the minimum edit cost from `a` to `b` under `options`,
/// additionally replaying a minimum-cost edit script into `emitter`.
///
/// Dispatches to the Myers linear-space script engine (spec.md §4.4) when
/// the cost model is unit-cost and substitution is disabled; otherwise to
/// the general engine's script-recovery variant (spec.md §4.2).
pub fn edit_script<T, CF, EQ>(
    a: &[T],
    b: &[T],
    options: &EditDistanceOptions<T, CF, EQ>,
    emitter: &mut impl ScriptEmitter<T, CF::Cost>,
) -> Result<CF::Cost, EditDistanceError>
where
    T: Copy,
    CF: CostFn<T>,
    EQ: Fn(&T, &T) -> bool,
{
    if !options.substitution.is_enabled() && options.cost.is_unit_cost() {
        myers::script::script(a, b, &options.cost, &options.equal, options.max_cost.as_ref(), emitter)
    } else {
        general::run(
            a,
            b,
            &options.cost,
            &options.equal,
            options.substitution.is_enabled(),
            options.max_cost.as_ref(),
            Some(emitter),
        )
    }
}

/// Convenience entry point for callers who only have a forward iterator:
/// collects both inputs into `Vec`s (the Rust-idiomatic way to make an
/// arbitrary iterable randomly accessible — see DESIGN.md) and delegates
/// to [`edit_distance`].
pub fn edit_distance_iter<T, CF, EQ>(
    a: impl IntoIterator<Item = T>,
    b: impl IntoIterator<Item = T>,
    options: &EditDistanceOptions<T, CF, EQ>,
) -> Result<CF::Cost, EditDistanceError>
where
    T: Copy,
    CF: CostFn<T>,
    EQ: Fn(&T, &T) -> bool,
{
    let a: Vec<T> = a.into_iter().collect();
    let b: Vec<T> = b.into_iter().collect();
    edit_distance(&a, &b, options)
}

/// Iterator-accepting counterpart to [`edit_script`]; see
/// [`edit_distance_iter`].
pub fn edit_script_iter<T, CF, EQ>(
    a: impl IntoIterator<Item = T>,
    b: impl IntoIterator<Item = T>,
    options: &EditDistanceOptions<T, CF, EQ>,
    emitter: &mut impl ScriptEmitter<T, CF::Cost>,
) -> Result<CF::Cost, EditDistanceError>
where
    T: Copy,
    CF: CostFn<T>,
    EQ: Fn(&T, &T) -> bool,
{
    let a: Vec<T> = a.into_iter().collect();
    let b: Vec<T> = b.into_iter().collect();
    edit_script(&a, &b, options, emitter)
}
