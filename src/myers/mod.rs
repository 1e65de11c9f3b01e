//! The specialized diagonal-sweep engine: Myers' O(ND) algorithm, used
//! whenever a call's cost model is unit-cost and substitution-disabled
//! (spec.md §4.3, §4.4). Both the distance-only engine ([`distance`])
//! and the linear-space script-recovery engine ([`script`]) share the
//! bidirectional midpoint search in this module — the "single `path`
//! routine shared across script recovery and its own max-cost fallback"
//! shape `original_source`'s `edit_distance_script.hpp` uses.
//!
//! Grounded in `original_source/include/boost/algorithm/sequence/detail/
//! edit_distance_script.hpp`'s `path`/`max_cost_fallback` pair (exact
//! diagonal recurrence and bidirectional-meeting test) and, for the
//! `V`-array indexing idiom, the automerge-vendored `myers.rs` under
//! `other_examples/` (itself derived from the `similar` crate).

pub(crate) mod distance;
pub(crate) mod script;

use crate::maxcost::RemainderKind;

/// A growable diagonal-indexed array, addressed by signed diagonal `k`
/// through an `offset`. Reallocated and re-centered (×1.5) when `k`
/// would fall outside the current bounds, per spec.md §3's "Diagonal
/// vectors" data model.
pub(crate) struct DiagVec {
    offset: isize,
    v: Vec<isize>,
}

impl DiagVec {
    fn with_capacity(cap: isize) -> Self {
        let cap = cap.max(1);
        Self {
            offset: cap,
            v: vec![0; (2 * cap + 1) as usize],
        }
    }

    /// Ensures diagonals in `[-needed, needed]` are addressable.
    fn ensure(&mut self, needed: isize) {
        if needed <= self.offset {
            return;
        }
        let mut new_cap = self.offset.max(1);
        while new_cap < needed {
            new_cap = new_cap + new_cap / 2 + 1;
        }
        let mut new_v = vec![0isize; (2 * new_cap + 1) as usize];
        let shift = (new_cap - self.offset) as usize;
        new_v[shift..shift + self.v.len()].copy_from_slice(&self.v);
        self.v = new_v;
        self.offset = new_cap;
    }

    #[inline]
    fn get(&self, k: isize) -> isize {
        self.v[(k + self.offset) as usize]
    }

    #[inline]
    fn set(&mut self, k: isize, val: isize) {
        let idx = (k + self.offset) as usize;
        self.v[idx] = val;
    }
}

/// Length of the common prefix of `a` and `b` under `equal`, bounded by
/// `min(a.len(), b.len())`.
pub(crate) fn common_prefix_len<T>(a: &[T], b: &[T], equal: &impl Fn(&T, &T) -> bool) -> usize {
    let n = a.len().min(b.len());
    let mut i = 0;
    while i < n && equal(&a[i], &b[i]) {
        i += 1;
    }
    i
}

/// Length of the common suffix of `a[prefix..]` and `b[prefix..]` under
/// `equal`, not overlapping the already-stripped prefix.
pub(crate) fn common_suffix_len<T>(
    a: &[T],
    b: &[T],
    equal: &impl Fn(&T, &T) -> bool,
    prefix: usize,
) -> usize {
    let mut i = a.len();
    let mut j = b.len();
    let mut n = 0;
    while i > prefix && j > prefix && equal(&a[i - 1], &b[j - 1]) {
        i -= 1;
        j -= 1;
        n += 1;
    }
    n
}

/// Outcome of a bidirectional midpoint search on `s1`/`s2` (already
/// stripped of common prefix/suffix).
pub(crate) enum Midpoint {
    /// Forward and reverse sweeps met: the optimal path costs `d` edits,
    /// and `[r1b, r1e) x [r2b, r2e)` is the middle snake (may be empty).
    Found {
        d: usize,
        r1b: usize,
        r2b: usize,
        r1e: usize,
        r2e: usize,
    },
    /// The cap tripped before the sweeps met, at round `d`. `kind`
    /// identifies which of the forward/reverse/both frontiers yielded
    /// the best (most-progress) partial resolution, and
    /// `[r1b,r2b)`/`[r1e,r2e)` bound the region still unresolved
    /// (defaulting to a whole-sequence endpoint on the side with no
    /// usable frontier).
    Capped {
        d: usize,
        kind: RemainderKind,
        r1b: usize,
        r2b: usize,
        r1e: usize,
        r2e: usize,
    },
}

/// Runs Myers' bidirectional diagonal sweep on `s1`/`s2` (assumed already
/// stripped of common prefix/suffix, so `s1[0] != s2[0]` and
/// `s1[last] != s2[last]` whenever both are non-empty). `cap_check`, if
/// given, is called once per round with the edit count the *next* round
/// would represent if no meeting point is found; it returns whether that
/// count's cost exceeds the caller's max-cost cap.
///
/// Precondition: `s1` and `s2` are both non-empty (callers handle the
/// `L1 <= 0`/`L2 <= 0` base cases themselves, per spec.md §4.4 step 2).
pub(crate) fn find_midpoint<T>(
    s1: &[T],
    s2: &[T],
    equal: &impl Fn(&T, &T) -> bool,
    mut cap_check: Option<&mut dyn FnMut(usize) -> bool>,
) -> Midpoint {
    let l1 = s1.len() as isize;
    let l2 = s2.len() as isize;
    let delta = l1 - l2;
    let delta_even = delta % 2 == 0;
    let abs_delta = delta.unsigned_abs() as isize;

    let mut vf = DiagVec::with_capacity(2);
    let mut vr = DiagVec::with_capacity(2 + abs_delta);
    vf.set(1, 0);
    vr.set(delta - 1, l1);

    let mut d: isize = 0;
    loop {
        vf.ensure(d + 1);
        vr.ensure(d + 1 + abs_delta);

        let (mut r1b, mut r2b, mut r1e, mut r2e) = (0isize, 0isize, 0isize, 0isize);
        let mut found = false;

        // Forward sweep.
        let mut k = -d;
        while k <= d {
            let mut j1 = if k == -d || (k != d && vf.get(k - 1) < vf.get(k + 1)) {
                vf.get(k + 1)
            } else {
                vf.get(k - 1) + 1
            };
            let mut j2 = j1 - k;
            let (sb1, sb2) = (j1, j2);
            while j1 < l1 && j2 < l2 && equal(&s1[j1 as usize], &s2[j2 as usize]) {
                j1 += 1;
                j2 += 1;
            }
            vf.set(k, j1);

            if !delta_even && (k - delta) >= -(d - 1) && (k - delta) <= (d - 1) {
                let r1 = vr.get(k);
                let r2 = r1 - k;
                if sb1 - sb2 == r1 - r2 && sb1 >= r1 {
                    r1b = sb1;
                    r2b = sb2;
                    r1e = j1;
                    r2e = j2;
                    found = true;
                    break;
                }
            }
            k += 2;
        }

        if found {
            return Midpoint::Found {
                d: (2 * d - 1) as usize,
                r1b: r1b as usize,
                r2b: r2b as usize,
                r1e: r1e as usize,
                r2e: r2e as usize,
            };
        }

        // Reverse sweep.
        let mut k = -d + delta;
        while k <= d + delta {
            let mut j1 = if k == d + delta || (k != -d + delta && vr.get(k - 1) < vr.get(k + 1)) {
                vr.get(k - 1)
            } else {
                vr.get(k + 1) - 1
            };
            let mut j2 = j1 - k;
            let (se1, se2) = (j1, j2);
            while j1 > 0 && j2 > 0 && equal(&s1[(j1 - 1) as usize], &s2[(j2 - 1) as usize]) {
                j1 -= 1;
                j2 -= 1;
            }
            vr.set(k, j1);

            if delta_even && k >= -d && k <= d {
                let f1 = vf.get(k);
                let f2 = f1 - k;
                if se1 - se2 == f1 - f2 && f1 >= se1 {
                    r1b = j1;
                    r2b = j2;
                    r1e = se1;
                    r2e = se2;
                    found = true;
                    break;
                }
            }
            k += 2;
        }

        if found {
            return Midpoint::Found {
                d: (2 * d) as usize,
                r1b: r1b as usize,
                r2b: r2b as usize,
                r1e: r1e as usize,
                r2e: r2e as usize,
            };
        }

        if let Some(check) = cap_check.as_deref_mut() {
            let target = if delta_even { 2 * d + 2 } else { 2 * d + 1 } as usize;
            if check(target) {
                let (kind, r1b, r2b, r1e, r2e) = best_remainder(&vf, &vr, d, delta, l1, l2);
                return Midpoint::Capped {
                    d: d as usize,
                    kind,
                    r1b: r1b as usize,
                    r2b: r2b as usize,
                    r1e: r1e as usize,
                    r2e: r2e as usize,
                };
            }
        }

        d += 1;
    }
}

/// Picks the best partial-progress diagonal across the just-completed
/// round `d`, mirroring `original_source`'s `max_cost_checker_myers::
/// update`/`get`: prefer a bidirectional resolution (both a forward
/// prefix and a reverse suffix are known) over a one-sided one, scored
/// by total positional progress `cf`/`cr` and tie-broken toward the more
/// balanced (closer-to-diagonal) candidate.
fn best_remainder(
    vf: &DiagVec,
    vr: &DiagVec,
    d: isize,
    delta: isize,
    l1: isize,
    l2: isize,
) -> (RemainderKind, isize, isize, isize, isize) {
    let mut kind = RemainderKind::None;
    let mut best_k = 0isize;
    let mut best_ttec = -1isize;
    let mut best_tmin = -1isize;

    let mut k = -d;
    while k <= d {
        let j1f = vf.get(k);
        let j2f = j1f - k;
        let cf = j1f + j2f;

        if (k - delta) >= -d && (k - delta) <= d {
            let j1r = vr.get(k);
            let j2r = j1r - k;
            let cr = (l1 - j1r) + (l2 - j2r);
            let ttec = cf + cr;
            if ttec >= best_ttec {
                let tmin = j1f.min(j2f);
                if ttec > best_ttec || tmin > best_tmin {
                    best_ttec = ttec;
                    best_tmin = tmin;
                    best_k = k;
                    kind = RemainderKind::Bidirectional;
                }
            }
            k += 2;
            continue;
        }

        if cf >= best_ttec {
            let tmin = j1f.min(j2f);
            if cf > best_ttec || tmin > best_tmin {
                best_ttec = cf;
                best_tmin = tmin;
                best_k = k;
                kind = RemainderKind::Forward;
            }
        }

        let rk = k + delta;
        let j1r = vr.get(rk);
        let j2r = j1r - rk;
        let cr = (l1 - j1r) + (l2 - j2r);
        if cr >= best_ttec {
            let tmin = (l1 - j1r).min(l2 - j2r);
            if cr > best_ttec || tmin > best_tmin {
                best_ttec = cr;
                best_tmin = tmin;
                best_k = rk;
                kind = RemainderKind::Reverse;
            }
        }
        k += 2;
    }

    match kind {
        RemainderKind::Forward => {
            let r1b = vf.get(best_k);
            let r2b = r1b - best_k;
            (kind, r1b, r2b, l1, l2)
        }
        RemainderKind::Reverse => {
            let r1e = vr.get(best_k);
            let r2e = r1e - best_k;
            (kind, 0, 0, r1e, r2e)
        }
        RemainderKind::Bidirectional => {
            let r1b = vf.get(best_k);
            let r2b = r1b - best_k;
            let r1e = vr.get(best_k);
            let r2e = r1e - best_k;
            (kind, r1b, r2b, r1e, r2e)
        }
        RemainderKind::None => (kind, 0, 0, l1, l2),
    }
}
