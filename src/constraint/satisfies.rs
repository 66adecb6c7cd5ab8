use crate::constraint::ast::{Atom, Constraint};
use crate::constraint::desugar::desugar_atom;
use crate::Version;

/// Whether `version` satisfies `constraint`.
///
/// A constraint is a disjunction of conjunctions: it's satisfied when at least one
/// conjunction is satisfied, and a conjunction is satisfied when every one of its
/// atoms is.
pub(crate) fn satisfies(version: &Version, constraint: &Constraint) -> bool {
    constraint
        .0
        .iter()
        .any(|conjunction| conjunction.iter().all(|atom| atom_satisfied_by(atom, version)))
}

/// Decide whether a single atom holds for `version`, applying the pre-release
/// inclusion rule along the way.
///
/// Pre-release versions are, by default, excluded from ranges: a pre-release only
/// satisfies a range-forming atom (tilde, caret, hyphen, wildcard) when that atom
/// carries an endpoint which is itself a pre-release of the *same* `major.minor.patch`
/// triple. Primitive comparison atoms (`<`, `<=`, `=`, `>=`, `>`) are never gated -
/// they compare directly using total version ordering, so `"1.2.3-pre" < "1.2.3"`
/// holds without any special-casing.
fn atom_satisfied_by(atom: &Atom, version: &Version) -> bool {
    if version.is_prerelease() && is_range_forming(atom) && !gate_matches(atom, version) {
        return false;
    }

    desugar_atom(atom).iter().all(|bound| bound.holds_for(version))
}

fn is_range_forming(atom: &Atom) -> bool {
    matches!(
        atom,
        Atom::Tilde(_) | Atom::Caret(_) | Atom::Hyphen(_, _) | Atom::Wildcard(_)
    )
}

/// Whether `atom` carries an endpoint whose pre-release matches `version`'s exact
/// `major.minor.patch` triple, permitting a range-forming atom to admit it.
fn gate_matches(atom: &Atom, version: &Version) -> bool {
    endpoints(atom)
        .iter()
        .any(|endpoint| endpoint.is_prerelease() && same_triple(endpoint, version))
}

fn same_triple(a: &Version, b: &Version) -> bool {
    a.major == b.major && a.minor == b.minor && a.patch == b.patch
}

fn endpoints(atom: &Atom) -> alloc::vec::Vec<&Version> {
    match atom {
        Atom::Tilde(v) | Atom::Caret(v) => alloc::vec![v],
        Atom::Hyphen(lower, upper) => alloc::vec![lower, upper],
        Atom::Wildcard(_) => alloc::vec![],
        Atom::Lt(v) | Atom::Le(v) | Atom::Eq(v) | Atom::Ge(v) | Atom::Gt(v) => alloc::vec![v],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::parser::parse;
    use crate::{Dialect, Version};

    fn v(s: &str) -> Version {
        Version::parse(s, Dialect::Standard).unwrap()
    }

    #[test]
    fn prerelease_satisfies_plain_lt_bound() {
        let constraint = parse("<1.2.3").unwrap();

        assert!(satisfies(&v("1.2.3-pre"), &constraint));
    }

    #[test]
    fn prerelease_excluded_from_caret_by_default() {
        let constraint = parse("^1.2.3").unwrap();

        assert!(!satisfies(&v("1.2.4-pre"), &constraint));
    }

    #[test]
    fn prerelease_included_when_endpoint_matches_triple() {
        let constraint = parse("^1.2.3-alpha").unwrap();

        assert!(satisfies(&v("1.2.3-beta"), &constraint));
    }

    #[test]
    fn prerelease_still_excluded_when_triple_differs() {
        let constraint = parse("^1.2.3-alpha").unwrap();

        assert!(!satisfies(&v("1.2.4-beta"), &constraint));
    }

    #[test]
    fn prerelease_excluded_from_wildcard() {
        let constraint = parse("1.2.x").unwrap();

        assert!(!satisfies(&v("1.2.0-pre"), &constraint));
    }

    #[test]
    fn basic_conjunction_and_disjunction() {
        let constraint = parse(">=1.0.0 <2.0.0 || >=3.0.0").unwrap();

        assert!(satisfies(&v("1.5.0"), &constraint));
        assert!(satisfies(&v("3.2.0"), &constraint));
        assert!(!satisfies(&v("2.5.0"), &constraint));
    }

    #[test]
    fn hyphen_range_is_inclusive() {
        let constraint = parse("1.2.3 - 2.3.4").unwrap();

        assert!(satisfies(&v("1.2.3"), &constraint));
        assert!(satisfies(&v("2.3.4"), &constraint));
        assert!(!satisfies(&v("2.3.5"), &constraint));
    }
}
