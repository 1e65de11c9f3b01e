/// Whether the engine may turn one element directly into another via a
/// substitution edge. Mirrors the way the teacher's own `AffineCost` models
/// an optional edge (`cm.sub: Option<Cost>`, checked once per interior
/// node) rather than a compile-time marker type: there is no runtime cost
/// difference in Rust between "statically enabled" and "a bool that is
/// always true", so both collapse to this one field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Substitution {
    /// No substitution edge is ever considered. The cost callback's
    /// `substitution` method is never called, and engines never emit a
    /// `Substitution` script op.
    #[default]
    Disabled,
    /// A substitution edge competes with insertion+deletion at every
    /// interior node.
    Enabled,
}

impl Substitution {
    pub fn is_enabled(self) -> bool {
        matches!(self, Substitution::Enabled)
    }
}

impl From<bool> for Substitution {
    fn from(allow: bool) -> Self {
        if allow {
            Substitution::Enabled
        } else {
            Substitution::Disabled
        }
    }
}
