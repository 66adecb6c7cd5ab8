use alloc::vec::Vec;

use crate::Version;

#[derive(Debug, Clone, PartialEq)]
/// A single primitive or compact bound within a conjunction.
///
/// Variants mirror the npm-style range grammar directly, rather than the desugared
/// bounds used for evaluation, so that rendering can reproduce the shape the caller
/// originally wrote (modulo the documented normalizations).
pub enum Atom {
    /// `<v`
    Lt(Version),
    /// `<=v`
    Le(Version),
    /// `v` or `=v`
    Eq(Version),
    /// `>=v`
    Ge(Version),
    /// `>v`
    Gt(Version),
    /// `~v`
    Tilde(Version),
    /// `^v`
    Caret(Version),
    /// `v1 - v2`
    Hyphen(Version, Version),
    /// `X.Y.*`, `X.*.*`, or `*.*.*`
    Wildcard(WildcardSpec),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which slots of a wildcard atom were written as a literal number, and which were
/// the wildcard character.
///
/// Wildcards are always right-aligned: once a slot is a wildcard, every
/// less-significant slot must be too.
pub enum WildcardSpec {
    /// `*.*.*`
    Any,
    /// `X.*.*`
    Major(usize),
    /// `X.Y.*`
    MajorMinor(usize, usize),
}

/// A run of atoms which must *all* hold (`AND`).
pub type Conjunction = Vec<Atom>;

#[derive(Debug, Clone, PartialEq)]
/// A disjunction of conjunctions (`||`) - the root of a parsed constraint.
pub struct Constraint(pub Vec<Conjunction>);

impl Constraint {
    /// Whether this constraint is the always-true `*.*.*` / empty-conjunction form.
    ///
    /// Useful for callers doing resolution who want to fast-path "no constraint"
    /// rather than running every version through [`crate::satisfies`].
    pub fn is_any(&self) -> bool {
        self.0
            .iter()
            .any(|conjunction| matches!(conjunction.as_slice(), [Atom::Wildcard(WildcardSpec::Any)]))
    }
}
