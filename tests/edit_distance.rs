//! Integration tests for the public `edit_distance`/`edit_script` surface:
//! the universal invariants, the engine cross-check, and the concrete
//! scenarios from spec.md §8.

use pa_edit_distance::{
    edit_distance, edit_script, CostFn, EditDistanceOptions, MaxCost, ScriptOp, Substitution,
    UnitCost, VecEmitter,
};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn lcs_len(a: &[u8], b: &[u8]) -> usize {
    let (n, m) = (a.len(), b.len());
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 0..n {
        for j in 0..m {
            dp[i + 1][j + 1] = if a[i] == b[j] {
                dp[i][j] + 1
            } else {
                dp[i][j + 1].max(dp[i + 1][j])
            };
        }
    }
    dp[n][m]
}

fn random_seq(rng: &mut ChaCha8Rng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(b'a'..=b'd')).collect()
}

/// Mutates `base` with a bounded number of random insert/delete/substitute
/// ops, so the resulting pair has a known-small edit distance bound while
/// still being varied.
fn mutate(rng: &mut ChaCha8Rng, base: &[u8], ops: usize) -> Vec<u8> {
    let mut v = base.to_vec();
    for _ in 0..ops {
        let choice = rng.gen_range(0..3);
        match choice {
            0 if !v.is_empty() => {
                let i = rng.gen_range(0..v.len());
                v.remove(i);
            }
            1 => {
                let i = rng.gen_range(0..=v.len());
                v.insert(i, rng.gen_range(b'a'..=b'd'));
            }
            _ if !v.is_empty() => {
                let i = rng.gen_range(0..v.len());
                v[i] = rng.gen_range(b'a'..=b'd');
            }
            _ => {}
        }
    }
    v
}

fn replay_and_check(a: &[u8], b: &[u8], ops: &[ScriptOp<u8, usize>]) {
    let mut out1 = Vec::new();
    let mut out2 = Vec::new();
    let mut sum = 0usize;
    for op in ops {
        match *op {
            ScriptOp::Equality(x, y) => {
                out1.push(x);
                out2.push(y);
            }
            ScriptOp::Insertion(y, c) => {
                out2.push(y);
                sum += c;
            }
            ScriptOp::Deletion(x, c) => {
                out1.push(x);
                sum += c;
            }
            ScriptOp::Substitution(x, y, c) => {
                out1.push(x);
                out2.push(y);
                sum += c;
            }
        }
    }
    assert_eq!(out1, a, "replayed sequence 1 does not match input");
    assert_eq!(out2, b, "replayed sequence 2 does not match input");
}

// --- Universal invariants (spec.md §8) ---

#[test]
fn invariant_1_distance_to_self_is_zero() {
    let opts = EditDistanceOptions::<u8, _, _>::unit_cost();
    for s in ["", "a", "abc", "aaaa", "banana"] {
        let d = edit_distance(s.as_bytes(), s.as_bytes(), &opts).unwrap();
        assert_eq!(d, 0, "distance(A, A) should be 0 for {s:?}");
    }
}

#[test]
fn invariant_2_unit_cost_upper_bound() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let opts = EditDistanceOptions::<u8, _, _>::unit_cost();
    for _ in 0..30 {
        let a = random_seq(&mut rng, rng.gen_range(0..12));
        let b = random_seq(&mut rng, rng.gen_range(0..12));
        let d = edit_distance(&a, &b, &opts).unwrap();
        assert!(d <= a.len() + b.len());
    }
}

#[test]
fn invariant_3_no_sub_distance_matches_lcs_formula() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let opts = EditDistanceOptions::<u8, _, _>::unit_cost();
    for _ in 0..30 {
        let a = random_seq(&mut rng, rng.gen_range(0..10));
        let b = random_seq(&mut rng, rng.gen_range(0..10));
        let d = edit_distance(&a, &b, &opts).unwrap();
        let expected = a.len() + b.len() - 2 * lcs_len(&a, &b);
        assert_eq!(d, expected, "a={a:?} b={b:?}");
    }
}

#[test]
fn invariant_4_substitution_never_increases_distance() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let no_sub = EditDistanceOptions::<u8, _, _>::unit_cost();
    let with_sub = EditDistanceOptions::<u8, _, _>::unit_cost().with_substitution(Substitution::Enabled);
    for _ in 0..30 {
        let a = random_seq(&mut rng, rng.gen_range(0..10));
        let b = random_seq(&mut rng, rng.gen_range(0..10));
        let d_sub = edit_distance(&a, &b, &with_sub).unwrap();
        let d_no_sub = edit_distance(&a, &b, &no_sub).unwrap();
        assert!(d_sub <= d_no_sub);
    }
}

#[test]
fn invariant_5_script_replay_and_cost_sum() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for sub in [false, true] {
        let opts = EditDistanceOptions::<u8, _, _>::unit_cost().with_substitution(sub.into());
        for _ in 0..20 {
            let base = random_seq(&mut rng, rng.gen_range(1..10));
            let a = mutate(&mut rng, &base, 3);
            let b = mutate(&mut rng, &base, 3);
            let mut emitter = VecEmitter::new();
            let d = edit_script(&a, &b, &opts, &mut emitter).unwrap();
            replay_and_check(&a, &b, &emitter.ops);
            let cost_sum: usize = emitter
                .ops
                .iter()
                .map(|op| match *op {
                    ScriptOp::Equality(..) => 0,
                    ScriptOp::Insertion(_, c)
                    | ScriptOp::Deletion(_, c)
                    | ScriptOp::Substitution(_, _, c) => c,
                })
                .sum();
            assert_eq!(cost_sum, d);
        }
    }
}

#[test]
fn invariant_6_no_substitution_emitted_when_disabled() {
    let opts = EditDistanceOptions::<u8, _, _>::unit_cost();
    let mut emitter = VecEmitter::new();
    edit_script(b"abc", b"axc", &opts, &mut emitter).unwrap();
    assert!(!emitter
        .ops
        .iter()
        .any(|op| matches!(op, ScriptOp::Substitution(..))));
}

#[test]
fn invariant_7_max_cost_monotonicity() {
    let a = b"Oh, hello world.";
    let b = b"Hello world!!";
    let opts = EditDistanceOptions::<u8, _, _>::unit_cost().with_substitution(Substitution::Enabled);
    let true_d = edit_distance(a, b, &opts).unwrap();
    let d_small = edit_distance(
        a,
        b,
        &opts.clone().with_max_cost(MaxCost::new(true_d.saturating_sub(3), false)),
    )
    .unwrap();
    let d_large = edit_distance(
        a,
        b,
        &opts.clone().with_max_cost(MaxCost::new(true_d + 3, false)),
    )
    .unwrap();
    assert!(d_small >= d_large);
    assert!(d_large >= true_d);
    assert!(d_small >= true_d);
}

#[test]
fn invariant_8_max_cost_above_true_distance_is_exact() {
    let a = b"kitten";
    let b = b"sitting";
    let opts = EditDistanceOptions::<u8, _, _>::unit_cost().with_substitution(Substitution::Enabled);
    let true_d = edit_distance(a, b, &opts).unwrap();
    let capped = edit_distance(
        a,
        b,
        &opts.with_max_cost(MaxCost::new(true_d, false)),
    )
    .unwrap();
    assert_eq!(capped, true_d);
}

struct AsymmetricCost;
impl CostFn<u8> for AsymmetricCost {
    type Cost = usize;
    fn insertion(&self, _y: &u8) -> usize {
        2
    }
    fn deletion(&self, _x: &u8) -> usize {
        1
    }
    fn substitution(&self, _x: &u8, _y: &u8) -> usize {
        1
    }
}

#[test]
fn invariant_9_asymmetric_cost_need_not_be_symmetric() {
    let opts = EditDistanceOptions::new(AsymmetricCost, u8::eq).with_substitution(Substitution::Enabled);
    let forward = edit_distance(b"aaaa", b"aa", &opts).unwrap();
    let backward = edit_distance(b"aa", b"aaaa", &opts).unwrap();
    assert_ne!(forward, backward);
}

// --- Engine cross-check ---

#[test]
fn engine_cross_check_matches_general_on_unit_cost_no_sub() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let fast = EditDistanceOptions::<u8, _, _>::unit_cost();
    // Force the general engine by enabling substitution with a cost model
    // that is still unit-cost, then comparing against Substitution::Disabled
    // on the dispatcher's fast path is not an apples-to-apples cross-check;
    // instead directly compare against a custom cost model whose values
    // equal UnitCost's (so it is NOT flagged `is_unit_cost`, forcing the
    // general engine) while keeping substitution disabled on both.
    struct ShadowUnitCost;
    impl CostFn<u8> for ShadowUnitCost {
        type Cost = usize;
        fn insertion(&self, _y: &u8) -> usize {
            1
        }
        fn deletion(&self, _x: &u8) -> usize {
            1
        }
        fn substitution(&self, _x: &u8, _y: &u8) -> usize {
            1
        }
        // is_unit_cost defaults to false: forces the general engine.
    }
    let general = EditDistanceOptions::new(ShadowUnitCost, u8::eq);

    for _ in 0..30 {
        let a = random_seq(&mut rng, rng.gen_range(0..10));
        let b = random_seq(&mut rng, rng.gen_range(0..10));
        let d_fast = edit_distance(&a, &b, &fast).unwrap();
        let d_general = edit_distance(&a, &b, &general).unwrap();
        assert_eq!(d_fast, d_general, "a={a:?} b={b:?}");
    }
}

// --- Concrete scenarios (spec.md §8) ---

#[test]
fn scenario_1_empty_sequences() {
    let opts = EditDistanceOptions::<u8, _, _>::unit_cost();
    let d = edit_distance::<u8, _, _>(&[], &[], &opts).unwrap();
    assert_eq!(d, 0);
    let mut emitter = VecEmitter::new();
    edit_script::<u8, _, _>(&[], &[], &opts, &mut emitter).unwrap();
    assert!(emitter.ops.is_empty());
}

#[test]
fn scenario_2_identical_sequences() {
    let opts = EditDistanceOptions::<u8, _, _>::unit_cost();
    let d = edit_distance(b"abc", b"abc", &opts).unwrap();
    assert_eq!(d, 0);
    let mut emitter = VecEmitter::new();
    edit_script(b"abc", b"abc", &opts, &mut emitter).unwrap();
    assert_eq!(emitter.ops.len(), 3);
    assert!(emitter
        .ops
        .iter()
        .all(|op| matches!(op, ScriptOp::Equality(..))));
}

#[test]
fn scenario_3_unit_cost_with_substitution() {
    let opts = EditDistanceOptions::<u8, _, _>::unit_cost().with_substitution(Substitution::Enabled);
    let d = edit_distance(b"abc", b"axc", &opts).unwrap();
    assert_eq!(d, 1);
    let mut emitter = VecEmitter::new();
    let d2 = edit_script(b"abc", b"axc", &opts, &mut emitter).unwrap();
    assert_eq!(d2, 1);
    assert_eq!(
        emitter.ops,
        vec![
            ScriptOp::Equality(b'a', b'a'),
            ScriptOp::Substitution(b'b', b'x', 1),
            ScriptOp::Equality(b'c', b'c'),
        ]
    );
}

#[test]
fn scenario_4_unit_cost_without_substitution() {
    let opts = EditDistanceOptions::<u8, _, _>::unit_cost();
    let d = edit_distance(b"abc", b"axc", &opts).unwrap();
    assert_eq!(d, 2);
    let mut emitter = VecEmitter::new();
    let d2 = edit_script(b"abc", b"axc", &opts, &mut emitter).unwrap();
    assert_eq!(d2, 2);
    assert_eq!(
        emitter.ops,
        vec![
            ScriptOp::Equality(b'a', b'a'),
            ScriptOp::Deletion(b'b', 1),
            ScriptOp::Insertion(b'x', 1),
            ScriptOp::Equality(b'c', b'c'),
        ]
    );
}

#[test]
fn scenario_5_longer_strings_with_substitution() {
    let opts = EditDistanceOptions::<u8, _, _>::unit_cost().with_substitution(Substitution::Enabled);
    let d = edit_distance(b"Oh, hello world.", b"Hello world!!", &opts).unwrap();
    assert_eq!(d, 7);
}

struct AsymmetricUnit;
impl CostFn<u8> for AsymmetricUnit {
    type Cost = usize;
    fn insertion(&self, _y: &u8) -> usize {
        2
    }
    fn deletion(&self, _x: &u8) -> usize {
        1
    }
    fn substitution(&self, _x: &u8, _y: &u8) -> usize {
        1
    }
}

#[test]
fn scenario_6_asymmetric_cost_model() {
    let opts = EditDistanceOptions::new(AsymmetricUnit, u8::eq).with_substitution(Substitution::Enabled);
    assert_eq!(edit_distance(b"aaaa", b"aa", &opts).unwrap(), 2);
    assert_eq!(edit_distance(b"aa", b"aaaa", &opts).unwrap(), 4);
}

struct CaseInsensitiveCost;
impl CostFn<u8> for CaseInsensitiveCost {
    type Cost = f64;
    fn insertion(&self, _y: &u8) -> f64 {
        1.0
    }
    fn deletion(&self, _x: &u8) -> f64 {
        1.0
    }
    fn substitution(&self, x: &u8, y: &u8) -> f64 {
        if x.to_ascii_uppercase() == y.to_ascii_uppercase() {
            0.5
        } else {
            1.0
        }
    }
}

#[test]
fn scenario_7_float_cost_case_insensitive_substitution() {
    let opts =
        EditDistanceOptions::new(CaseInsensitiveCost, u8::eq).with_substitution(Substitution::Enabled);
    let d = edit_distance(b"Try to find XXX capitalized", b"xxx", &opts).unwrap();
    assert!((d - 25.5).abs() < 1e-9, "expected 25.5, got {d}");
}

#[test]
fn scenario_8_max_cost_exception_true_and_false() {
    let a = b"kitten";
    let b = b"sitting";
    let opts = EditDistanceOptions::<u8, _, _>::unit_cost().with_substitution(Substitution::Enabled);
    let true_d = edit_distance(a, b, &opts).unwrap();

    let raising = opts
        .clone()
        .with_max_cost(MaxCost::new(true_d - 1, true));
    let err = edit_distance(a, b, &raising).unwrap_err();
    assert_eq!(
        err,
        pa_edit_distance::EditDistanceError::MaxEditCostExceeded
    );

    let silent = opts.with_max_cost(MaxCost::new(true_d - 1, false));
    let upper_bound = edit_distance(a, b, &silent).unwrap();
    assert!(upper_bound > true_d - 1);
    assert!(upper_bound >= true_d);
}
