use alloc::vec;
use alloc::vec::Vec;

use crate::constraint::ast::{Atom, WildcardSpec};
use crate::Version;

/// A single primitive inequality, the atomic unit every [`Atom`] is desugared into.
///
/// A conjunction's atoms each expand into one or more bounds; the conjunction is
/// satisfied when every expanded bound holds.
pub(crate) enum Bound {
    AtLeast(Version),
    MoreThan(Version),
    AtMost(Version),
    LessThan(Version),
}

impl Bound {
    pub(crate) fn holds_for(&self, version: &Version) -> bool {
        match self {
            Bound::AtLeast(bound) => version >= bound,
            Bound::MoreThan(bound) => version > bound,
            Bound::AtMost(bound) => version <= bound,
            Bound::LessThan(bound) => version < bound,
        }
    }
}

/// Expand a compact range-forming atom (tilde, caret, hyphen, wildcard) or a
/// primitive operator atom into the bounds it implies.
///
/// Tilde and caret reuse [`Version::bump_major`]/[`Version::bump_minor`]/
/// [`Version::bump_patch`] to compute their exclusive upper bound, rather than
/// re-deriving the arithmetic here.
pub(crate) fn desugar_atom(atom: &Atom) -> Vec<Bound> {
    match atom {
        Atom::Lt(v) => vec![Bound::LessThan(v.clone())],
        Atom::Le(v) => vec![Bound::AtMost(v.clone())],
        Atom::Eq(v) => vec![Bound::AtLeast(v.clone()), Bound::AtMost(v.clone())],
        Atom::Ge(v) => vec![Bound::AtLeast(v.clone())],
        Atom::Gt(v) => vec![Bound::MoreThan(v.clone())],

        Atom::Tilde(v) => {
            vec![Bound::AtLeast(v.clone()), Bound::LessThan(v.bump_minor())]
        }

        Atom::Caret(v) => {
            let upper = if v.major > 0 {
                v.bump_major()
            } else if v.minor > 0 {
                v.bump_minor()
            } else {
                v.bump_patch()
            };

            vec![Bound::AtLeast(v.clone()), Bound::LessThan(upper)]
        }

        Atom::Hyphen(lower, upper) => {
            vec![Bound::AtLeast(lower.clone()), Bound::AtMost(upper.clone())]
        }

        Atom::Wildcard(WildcardSpec::Any) => vec![],

        Atom::Wildcard(WildcardSpec::Major(major)) => {
            let lower = Version::make(
                *major,
                0,
                0,
                crate::Prerelease::Empty,
                crate::BuildMetadata::Empty,
            );

            vec![Bound::AtLeast(lower.clone()), Bound::LessThan(lower.bump_major())]
        }

        Atom::Wildcard(WildcardSpec::MajorMinor(major, minor)) => {
            let lower = Version::make(
                *major,
                *minor,
                0,
                crate::Prerelease::Empty,
                crate::BuildMetadata::Empty,
            );

            vec![Bound::AtLeast(lower.clone()), Bound::LessThan(lower.bump_minor())]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dialect, Version};

    fn v(s: &str) -> Version {
        Version::parse(s, Dialect::Standard).unwrap()
    }

    #[test]
    fn tilde_bounds_to_next_minor() {
        let bounds = desugar_atom(&Atom::Tilde(v("1.2.3")));

        assert!(bounds[0].holds_for(&v("1.2.3")));
        assert!(bounds[1].holds_for(&v("1.2.99")));
        assert!(!bounds[1].holds_for(&v("1.3.0")));
    }

    #[test]
    fn caret_bounds_major_nonzero() {
        let bounds = desugar_atom(&Atom::Caret(v("1.2.3")));

        assert!(bounds[0].holds_for(&v("1.9.9")));
        assert!(!bounds[1].holds_for(&v("2.0.0")));
    }

    #[test]
    fn caret_bounds_major_zero_minor_nonzero() {
        let bounds = desugar_atom(&Atom::Caret(v("0.2.3")));

        assert!(bounds[0].holds_for(&v("0.2.9")));
        assert!(!bounds[1].holds_for(&v("0.3.0")));
    }

    #[test]
    fn caret_bounds_major_and_minor_zero() {
        let bounds = desugar_atom(&Atom::Caret(v("0.0.3")));

        assert!(bounds[0].holds_for(&v("0.0.3")));
        assert!(!bounds[1].holds_for(&v("0.0.4")));
    }

    #[test]
    fn wildcard_any_has_no_bounds() {
        assert!(desugar_atom(&Atom::Wildcard(WildcardSpec::Any)).is_empty());
    }

    #[test]
    fn wildcard_major_minor_bounds_to_next_minor() {
        let bounds = desugar_atom(&Atom::Wildcard(WildcardSpec::MajorMinor(1, 2)));

        assert!(bounds[0].holds_for(&v("1.2.0")));
        assert!(!bounds[1].holds_for(&v("1.3.0")));
    }
}
