/// Errors an alignment call can return.
///
/// The teacher's own aligners treat a broken invariant as a bug
/// (`assert!`/`panic!` in `astarpa/src/astar.rs`, `pa-base-algos/src/dt.rs`)
/// because their domain has no *expected* recoverable failure. A max-cost
/// cap raising on exceedance is different: the caller asked for it, it is
/// part of the documented contract, and it is exactly the kind of
/// condition this corpus reaches for `thiserror` to model.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditDistanceError {
    #[error("edit cost exceeds the configured max_cost cap")]
    MaxEditCostExceeded,
}
