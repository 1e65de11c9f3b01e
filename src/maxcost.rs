use crate::cost::Cost;

/// The max-cost policy: an optional cap on the total edit cost, and what
/// to do when the true distance exceeds it.
#[derive(Clone, Copy, Debug)]
pub struct MaxCost<C: Cost> {
    pub cap: C,
    /// If `true`, exceeding `cap` returns
    /// [`EditDistanceError::MaxEditCostExceeded`](crate::error::EditDistanceError).
    /// If `false`, engines instead return a deterministic upper bound
    /// (never smaller than the true distance) computed by finishing the
    /// alignment along the best partial progress found so far.
    pub raise_on_exceed: bool,
}

impl<C: Cost> MaxCost<C> {
    pub fn new(cap: C, raise_on_exceed: bool) -> Self {
        Self { cap, raise_on_exceed }
    }

    pub(crate) fn exceeds(&self, cost: C) -> bool {
        crate::cost::cmp(cost, self.cap) == std::cmp::Ordering::Greater
    }
}

/// Which side(s) of the search a partial-progress remainder came from, for
/// the Myers engines' bidirectional meet-in-the-middle search. A pure
/// forward or reverse remainder means only one sweep made it far enough
/// before the cost cap was hit; `Bidirectional` means both sweeps
/// contributed disjoint resolved regions and only a middle rectangle is
/// left unresolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RemainderKind {
    None,
    Forward,
    Reverse,
    Bidirectional,
}

/// Tracks the best ("pareto-best") node seen so far when a search is
/// abandoned early because its cost exceeded the cap. "Best" means the
/// most total progress through the edit graph (`pos1 + pos2` from the
/// start), tie-broken by how close to the diagonal the progress is
/// (`min(pos1, pos2)`), favoring balanced consumption of both sequences.
pub(crate) struct ParetoBest<C: Cost, Id: Copy> {
    best: Option<(usize, usize, C, Id)>,
    best_ttec: usize,
    best_tmin: usize,
}

impl<C: Cost, Id: Copy> Default for ParetoBest<C, Id> {
    fn default() -> Self {
        Self { best: None, best_ttec: 0, best_tmin: 0 }
    }
}

impl<C: Cost, Id: Copy> ParetoBest<C, Id> {
    pub(crate) fn update(&mut self, pos1: usize, pos2: usize, cost: C, id: Id) {
        let ttec = pos1 + pos2;
        let tmin = pos1.min(pos2);
        let better = match self.best {
            None => true,
            Some(_) => ttec > self.best_ttec || (ttec == self.best_ttec && tmin > self.best_tmin),
        };
        if better {
            self.best = Some((pos1, pos2, cost, id));
            self.best_ttec = ttec;
            self.best_tmin = tmin;
        }
    }

    pub(crate) fn best(&self) -> Option<(usize, usize, C, Id)> {
        self.best
    }
}
