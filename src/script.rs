/// Sink for the four edit operations an engine can emit while recovering a
/// script. Elements are consumed by value, so `T` is expected to be a small
/// `Copy` type (a byte, a `char`, an index) the way the teacher's own
/// `Seq<'a> = &'a [u8]` convention favors — the same assumption
/// `pa-base-algos/src/cigar.rs`'s `CigarOpExt` makes for its alignment ops.
pub trait ScriptEmitter<T: Copy, C: Copy> {
    fn equality(&mut self, x: T, y: T);
    fn insertion(&mut self, y: T, cost: C);
    fn deletion(&mut self, x: T, cost: C);
    fn substitution(&mut self, x: T, y: T, cost: C);
}

/// A single emitted operation, as recorded by [`VecEmitter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptOp<T, C> {
    Equality(T, T),
    Insertion(T, C),
    Deletion(T, C),
    Substitution(T, T, C),
}

/// The simplest concrete [`ScriptEmitter`]: collects every op into a
/// `Vec`, in order.
#[derive(Clone, Debug, Default)]
pub struct VecEmitter<T, C> {
    pub ops: Vec<ScriptOp<T, C>>,
}

impl<T, C> VecEmitter<T, C> {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }
}

impl<T: Copy, C: Copy> ScriptEmitter<T, C> for VecEmitter<T, C> {
    fn equality(&mut self, x: T, y: T) {
        self.ops.push(ScriptOp::Equality(x, y));
    }
    fn insertion(&mut self, y: T, cost: C) {
        self.ops.push(ScriptOp::Insertion(y, cost));
    }
    fn deletion(&mut self, x: T, cost: C) {
        self.ops.push(ScriptOp::Deletion(x, cost));
    }
    fn substitution(&mut self, x: T, y: T, cost: C) {
        self.ops.push(ScriptOp::Substitution(x, y, cost));
    }
}

/// Which kind of op a [`CompactOp`] run collapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompactKind {
    Equality,
    Insertion,
    Deletion,
    Substitution,
}

/// A run of `len` consecutive same-kind ops, with their costs summed.
/// Mirrors the run-length merging `pa-base-algos/src/cigar.rs`'s
/// `CigarExt::push`/`match_push` does for alignment ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompactOp<C> {
    pub kind: CompactKind,
    pub len: usize,
    pub cost: C,
}

/// Collapses a raw op sequence into run-length-encoded [`CompactOp`]s. A
/// pure postprocessing transform over an already-emitted script — it never
/// introduces hunks, context lines, or textual rendering, so it stays
/// inside the "no diff-style framing" scope while still being useful to
/// callers that want a cigar-like summary.
pub fn into_compact<T: Copy, C: crate::cost::Cost>(ops: &[ScriptOp<T, C>]) -> Vec<CompactOp<C>> {
    let mut out: Vec<CompactOp<C>> = Vec::new();
    for op in ops {
        let (kind, cost) = match *op {
            ScriptOp::Equality(_, _) => (CompactKind::Equality, None),
            ScriptOp::Insertion(_, c) => (CompactKind::Insertion, Some(c)),
            ScriptOp::Deletion(_, c) => (CompactKind::Deletion, Some(c)),
            ScriptOp::Substitution(_, _, c) => (CompactKind::Substitution, Some(c)),
        };
        match out.last_mut() {
            Some(last) if last.kind == kind => {
                last.len += 1;
                if let Some(c) = cost {
                    last.cost = last.cost + c;
                }
            }
            _ => out.push(CompactOp {
                kind,
                len: 1,
                cost: cost.unwrap_or_else(num_traits::Zero::zero),
            }),
        }
    }
    out
}
