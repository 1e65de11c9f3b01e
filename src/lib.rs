//! A dual-mode edit-distance and edit-script library: a general
//! Dijkstra-style engine over an implicit edit graph for arbitrary cost
//! functions (`CostFn`), plus a specialized Myers O(ND) diagonal-sweep
//! engine with linear-space divide-and-conquer script recovery for the
//! unit-cost, no-substitution, random-access case. [`edit_distance`] and
//! [`edit_script`] pick the right engine automatically; see `DESIGN.md`
//! for the grounding of each module.

mod cost;
mod dispatch;
mod error;
mod fallback;
mod general;
mod heap;
mod maxcost;
mod myers;
mod options;
mod script;
mod substitution;

pub use cost::{Cost, CostFn, UnitCost};
pub use dispatch::{edit_distance, edit_distance_iter, edit_script, edit_script_iter};
pub use error::EditDistanceError;
pub use maxcost::MaxCost;
pub use options::EditDistanceOptions;
pub use script::{into_compact, CompactKind, CompactOp, ScriptEmitter, ScriptOp, VecEmitter};
pub use substitution::Substitution;
