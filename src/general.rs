//! The general Dijkstra-style engine: works for any cost model, any
//! equality predicate, and substitution enabled or disabled. Everything
//! the Myers engines can't handle (non-unit costs, non-`PartialEq`
//! equality, or just a caller who didn't ask for the unit-cost fast path)
//! goes through here.
//!
//! Grounded in the shape of `astarpa/src/astar.rs`'s main loop (pop from a
//! priority queue, skip stale entries, expand outgoing edges, traceback by
//! walking recorded parents) and `original_source`'s
//! `edit_distance.hpp`/`edit_distance_script.hpp`, generalized from an
//! affine-cost/A* search to a plain Dijkstra search with the equal-run
//! compression optimization those sources use to keep the visited set
//! small.

use crate::cost::CostFn;
use crate::error::EditDistanceError;
use crate::fallback::linear_complete;
use crate::heap::MinHeap;
use crate::maxcost::{MaxCost, ParetoBest};
use crate::script::ScriptEmitter;
use rustc_hash::FxHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdgeKind {
    /// A maximal run of free `equal` moves, collapsed into one edge so the
    /// visited set never holds an entry per intermediate diagonal step.
    EqualRun,
    Insertion,
    Deletion,
    Substitution,
}

struct Node<C> {
    pos1: usize,
    pos2: usize,
    cost: C,
    parent: Option<u32>,
    edge: Option<(EdgeKind, C)>,
}

/// Runs the search; returns the goal's cumulative cost and, in script
/// mode, replays the recovered path into `emit`.
pub(crate) fn run<T: Copy, CF, EQ>(
    a: &[T],
    b: &[T],
    cost_fn: &CF,
    equal: &EQ,
    substitution_enabled: bool,
    max_cost: Option<&MaxCost<CF::Cost>>,
    mut emit: Option<&mut dyn ScriptEmitter<T, CF::Cost>>,
) -> Result<CF::Cost, EditDistanceError>
where
    CF: CostFn<T>,
    EQ: Fn(&T, &T) -> bool,
{
    let len1 = a.len();
    let len2 = b.len();
    let zero = num_traits::Zero::zero();

    let mut arena: Vec<Node<CF::Cost>> = vec![Node {
        pos1: 0,
        pos2: 0,
        cost: zero,
        parent: None,
        edge: None,
    }];
    let mut visited: FxHashMap<(usize, usize), u32> = FxHashMap::default();
    visited.insert((0, 0), 0);
    let mut heap = MinHeap::new();
    heap.push(zero, 0u32);
    let mut pareto = ParetoBest::default();

    loop {
        let Some((cost, id)) = heap.pop() else {
            panic!("edit graph exhausted before reaching the goal");
        };
        // Stale entry: a cheaper path to this position was already found.
        let node_pos = (arena[id as usize].pos1, arena[id as usize].pos2);
        if visited.get(&node_pos) != Some(&id) {
            continue;
        }

        let (p1, p2) = node_pos;
        pareto.update(p1, p2, cost, id);

        if let Some(mc) = max_cost {
            if mc.exceeds(cost) {
                if mc.raise_on_exceed {
                    return Err(EditDistanceError::MaxEditCostExceeded);
                }
                let (bp1, bp2, bcost, bid) = pareto.best().unwrap();
                if let Some(e) = emit.as_deref_mut() {
                    traceback(a, b, &arena, bid, e);
                }
                let total = bcost
                    + linear_complete(a, b, cost_fn, equal, substitution_enabled, bp1, bp2, len1, len2, emit);
                return Ok(total);
            }
        }

        if p1 == len1 && p2 == len2 {
            if let Some(e) = emit {
                traceback(a, b, &arena, id, e);
            }
            return Ok(cost);
        }

        // Walk the maximal run of free equal moves from here.
        let mut p1w = p1;
        let mut p2w = p2;
        while p1w < len1 && p2w < len2 && equal(&a[p1w], &b[p2w]) {
            p1w += 1;
            p2w += 1;
        }

        if p1w > p1 {
            // Defer edge generation to the run's endpoint: collapse the
            // whole run into one zero-cost edge.
            try_relax(
                &mut visited,
                &mut arena,
                &mut heap,
                p1w,
                p2w,
                cost,
                id,
                EdgeKind::EqualRun,
                cost,
            );
            continue;
        }

        if p1w < len1 && p2w < len2 && substitution_enabled {
            let sub = cost_fn.substitution(&a[p1w], &b[p2w]);
            let next_cost = cost + sub;
            try_relax(
                &mut visited,
                &mut arena,
                &mut heap,
                p1w + 1,
                p2w + 1,
                next_cost,
                id,
                EdgeKind::Substitution,
                sub,
            );
        }
        if p2w < len2 {
            let ins = cost_fn.insertion(&b[p2w]);
            let next_cost = cost + ins;
            try_relax(
                &mut visited,
                &mut arena,
                &mut heap,
                p1w,
                p2w + 1,
                next_cost,
                id,
                EdgeKind::Insertion,
                ins,
            );
        }
        if p1w < len1 {
            let del = cost_fn.deletion(&a[p1w]);
            let next_cost = cost + del;
            try_relax(
                &mut visited,
                &mut arena,
                &mut heap,
                p1w + 1,
                p2w,
                next_cost,
                id,
                EdgeKind::Deletion,
                del,
            );
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn try_relax<C: crate::cost::Cost>(
    visited: &mut FxHashMap<(usize, usize), u32>,
    arena: &mut Vec<Node<C>>,
    heap: &mut MinHeap<C, u32>,
    pos1: usize,
    pos2: usize,
    cost: C,
    parent: u32,
    edge: EdgeKind,
    edge_cost: C,
) {
    if let Some(&existing) = visited.get(&(pos1, pos2)) {
        if crate::cost::cmp(arena[existing as usize].cost, cost) != std::cmp::Ordering::Greater {
            return;
        }
    }
    let id = arena.len() as u32;
    arena.push(Node {
        pos1,
        pos2,
        cost,
        parent: Some(parent),
        edge: Some((edge, edge_cost)),
    });
    visited.insert((pos1, pos2), id);
    heap.push(cost, id);
}

/// Walks the parent chain from `goal_id` back to the root, then replays it
/// forward into `emit`, unpacking each collapsed equal-run edge into
/// individual `Equality` ops and each ins/del/sub edge into its single op.
fn traceback<T: Copy, C: crate::cost::Cost>(
    a: &[T],
    b: &[T],
    arena: &[Node<C>],
    goal_id: u32,
    emit: &mut dyn ScriptEmitter<T, C>,
) {
    let mut chain = vec![goal_id];
    let mut cur = goal_id;
    while let Some(parent) = arena[cur as usize].parent {
        chain.push(parent);
        cur = parent;
    }
    chain.reverse(); // root, ..., goal

    for w in chain.windows(2) {
        let parent = &arena[w[0] as usize];
        let child = &arena[w[1] as usize];
        let (kind, edge_cost) = child.edge.expect("non-root node must carry its edge");

        let (p1w, p2w) = match kind {
            EdgeKind::EqualRun => (child.pos1, child.pos2),
            EdgeKind::Insertion => (child.pos1, child.pos2 - 1),
            EdgeKind::Deletion => (child.pos1 - 1, child.pos2),
            EdgeKind::Substitution => (child.pos1 - 1, child.pos2 - 1),
        };

        let run_len = p1w - parent.pos1;
        debug_assert_eq!(run_len, p2w - parent.pos2);
        for j in 0..run_len {
            emit.equality(a[parent.pos1 + j], b[parent.pos2 + j]);
        }

        match kind {
            EdgeKind::EqualRun => {}
            EdgeKind::Insertion => emit.insertion(b[p2w], edge_cost),
            EdgeKind::Deletion => emit.deletion(a[p1w], edge_cost),
            EdgeKind::Substitution => emit.substitution(a[p1w], b[p2w], edge_cost),
        }
    }
}
