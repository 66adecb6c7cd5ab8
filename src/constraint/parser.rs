use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::constraint::ast::{Atom, Conjunction, Constraint, WildcardSpec};
use crate::error::ConstraintError;
use crate::{Dialect, Version};

/// Parse a full constraint string (`||`-separated disjunction of space-separated
/// conjunctions) into a [`Constraint`].
///
/// Splitting happens in three passes, mirroring the grammar's own nesting:
/// 1. Split on `||` into conjunctions.
/// 2. Split each conjunction on runs of whitespace into raw tokens, re-joining a
///    hyphen range's three tokens (`a`, `-`, `b`) back into one atom.
/// 3. Parse each raw token into an [`Atom`], reusing [`Version::parse`] for every
///    version literal embedded in it.
pub(crate) fn parse(input: &str) -> Result<Constraint, ConstraintError> {
    if input.bytes().any(|byte| byte != b' ' && byte.is_ascii_whitespace()) {
        return Err(ConstraintError::InvalidWhitespace);
    }

    let conjunctions = input
        .split("||")
        .map(|conjunction| parse_conjunction(conjunction.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Constraint(conjunctions))
}

/// Bare operator symbols that are allowed a single optional space before their
/// operand (`> 1.2.3` is equivalent to `>1.2.3`).
const BARE_OPERATORS: [&str; 7] = ["<=", ">=", "<", ">", "=", "~", "^"];

fn parse_conjunction(input: &str) -> Result<Conjunction, ConstraintError> {
    let words: Vec<&str> = input.split_whitespace().collect();

    if words.is_empty() {
        return Err(ConstraintError::InvalidConstraint);
    }

    // An operator written with a trailing space lands as its own word (`>`, `1.2.3`)
    // rather than one token (`>1.2.3`) - merge it back with its operand before
    // grouping hyphen ranges.
    let mut tokens: Vec<String> = Vec::new();
    let mut i = 0;
    while i < words.len() {
        if BARE_OPERATORS.contains(&words[i]) && i + 1 < words.len() && words[i + 1] != "-" {
            tokens.push(alloc::format!("{}{}", words[i], words[i + 1]));
            i += 2;
        } else {
            tokens.push(words[i].to_string());
            i += 1;
        }
    }

    let mut atoms = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if tokens[i] == "-" {
            return Err(ConstraintError::InvalidConstraint);
        }

        // A hyphen range is written as three whitespace-separated tokens: `a - b`.
        if i + 2 < tokens.len() && tokens[i + 1] == "-" {
            let lower = parse_version_literal(&tokens[i])?;
            let upper = parse_version_literal(&tokens[i + 2])?;

            atoms.push(Atom::Hyphen(lower, upper));
            i += 3;
            continue;
        }

        atoms.push(parse_atom(&tokens[i])?);
        i += 1;
    }

    Ok(atoms)
}

fn parse_atom(token: &str) -> Result<Atom, ConstraintError> {
    if let Some(rest) = token.strip_prefix("<=") {
        return Ok(Atom::Le(parse_version_literal(rest)?));
    }

    if let Some(rest) = token.strip_prefix(">=") {
        return Ok(Atom::Ge(parse_version_literal(rest)?));
    }

    if let Some(rest) = token.strip_prefix('<') {
        return Ok(Atom::Lt(parse_version_literal(rest)?));
    }

    if let Some(rest) = token.strip_prefix('>') {
        return Ok(Atom::Gt(parse_version_literal(rest)?));
    }

    if let Some(rest) = token.strip_prefix('=') {
        return Ok(Atom::Eq(parse_version_literal(rest)?));
    }

    if let Some(rest) = token.strip_prefix('~') {
        return Ok(Atom::Tilde(parse_version_literal(rest)?));
    }

    if let Some(rest) = token.strip_prefix('^') {
        return Ok(Atom::Caret(parse_version_literal(rest)?));
    }

    if looks_like_wildcard(token) {
        return Ok(Atom::Wildcard(parse_wildcard(token)?));
    }

    Ok(Atom::Eq(parse_version_literal(token)?))
}

fn is_wildcard_slot(slot: &str) -> bool {
    slot == "x" || slot == "X" || slot == "*"
}

/// Whether `token` is a wildcard atom rather than a bare version literal.
///
/// A wildcard never carries a pre-release or build suffix, so a bare version whose
/// pre-release/build happens to contain `x`/`X`/`*` (`1.2.3-linux`, `1.2.3+x86`) must
/// not be misdetected - only a dotted slot that is *exactly* one of those characters
/// counts.
fn looks_like_wildcard(token: &str) -> bool {
    if token.contains('-') || token.contains('+') {
        return false;
    }

    token.split('.').any(is_wildcard_slot)
}

/// Parse a right-aligned wildcard atom (`1.2.x`, `1.x`, `1.x.x`, `*`, ...).
///
/// Unlike a full version literal, a wildcard has no operator prefix and no
/// pre-release/build suffix - the whole token is a dotted run of either numeric or
/// wildcard slots.
fn parse_wildcard(token: &str) -> Result<WildcardSpec, ConstraintError> {
    let slots: Vec<&str> = token.split('.').collect();

    if slots.is_empty() || slots.len() > 3 {
        return Err(ConstraintError::MisalignedWildcard);
    }

    if slots.iter().all(|slot| is_wildcard_slot(slot)) {
        return Ok(WildcardSpec::Any);
    }

    let wildcard_from = slots
        .iter()
        .position(|slot| is_wildcard_slot(slot))
        .ok_or(ConstraintError::MisalignedWildcard)?;

    // Everything from the first wildcard slot onward must also be a wildcard -
    // wildcards are always right-aligned.
    if !slots[wildcard_from..].iter().all(|slot| is_wildcard_slot(slot)) {
        return Err(ConstraintError::MisalignedWildcard);
    }

    let numeric: Result<Vec<usize>, ConstraintError> = slots[..wildcard_from]
        .iter()
        .map(|slot| {
            slot.parse::<usize>()
                .map_err(|_| ConstraintError::MisalignedWildcard)
        })
        .collect();
    let numeric = numeric?;

    match numeric.len() {
        0 => Ok(WildcardSpec::Any),
        1 => Ok(WildcardSpec::Major(numeric[0])),
        2 => Ok(WildcardSpec::MajorMinor(numeric[0], numeric[1])),
        _ => Err(ConstraintError::MisalignedWildcard),
    }
}

fn parse_version_literal(input: &str) -> Result<Version, ConstraintError> {
    if input.is_empty() {
        return Err(ConstraintError::InvalidConstraint);
    }

    Version::parse(input, Dialect::Standard).map_err(ConstraintError::InvalidVersion)
}

/// Render the canonical `X.Y.x` / `X.x` / `x` form back out for a wildcard spec.
///
/// Regardless of which of `x`/`X`/`*` the caller originally wrote, wildcards always
/// render with the lowercase `x` character.
pub(crate) fn render_wildcard(spec: &WildcardSpec) -> String {
    match spec {
        WildcardSpec::Any => "x".to_string(),
        WildcardSpec::Major(major) => alloc::format!("{major}.x"),
        WildcardSpec::MajorMinor(major, minor) => alloc::format!("{major}.{minor}.x"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_operator_atom() {
        let constraint = parse(">=1.2.3").unwrap();

        assert_eq!(constraint.0.len(), 1);
        assert_eq!(constraint.0[0].len(), 1);
        assert!(matches!(constraint.0[0][0], Atom::Ge(_)));
    }

    #[test]
    fn parses_bare_version_as_eq() {
        let constraint = parse("1.2.3").unwrap();

        assert!(matches!(constraint.0[0][0], Atom::Eq(_)));
    }

    #[test]
    fn parses_conjunction_of_atoms() {
        let constraint = parse(">=1.2.3 <2.0.0").unwrap();

        assert_eq!(constraint.0[0].len(), 2);
    }

    #[test]
    fn parses_disjunction() {
        let constraint = parse("1.2.3 || 2.0.0").unwrap();

        assert_eq!(constraint.0.len(), 2);
    }

    #[test]
    fn parses_hyphen_range() {
        let constraint = parse("1.2.3 - 2.3.4").unwrap();

        assert_eq!(constraint.0[0].len(), 1);
        assert!(matches!(constraint.0[0][0], Atom::Hyphen(_, _)));
    }

    #[test]
    fn parses_tilde_and_caret() {
        let constraint = parse("~1.2.3").unwrap();
        assert!(matches!(constraint.0[0][0], Atom::Tilde(_)));

        let constraint = parse("^1.2.3").unwrap();
        assert!(matches!(constraint.0[0][0], Atom::Caret(_)));
    }

    #[test]
    fn parses_wildcards() {
        assert!(matches!(
            parse("1.2.x").unwrap().0[0][0],
            Atom::Wildcard(WildcardSpec::MajorMinor(1, 2))
        ));
        assert!(matches!(
            parse("1.x").unwrap().0[0][0],
            Atom::Wildcard(WildcardSpec::Major(1))
        ));
        assert!(matches!(
            parse("*").unwrap().0[0][0],
            Atom::Wildcard(WildcardSpec::Any)
        ));
    }

    #[test]
    fn rejects_misaligned_wildcard() {
        assert_eq!(parse("1.x.3"), Err(ConstraintError::MisalignedWildcard));
    }

    #[test]
    fn rejects_tab_whitespace() {
        assert_eq!(
            parse(">=1.2.3\t<2.0.0"),
            Err(ConstraintError::InvalidWhitespace)
        );
    }

    #[test]
    fn rejects_dangling_hyphen() {
        assert_eq!(parse("1.2.3 -"), Err(ConstraintError::InvalidConstraint));
    }

    #[test]
    fn rejects_empty_conjunction() {
        assert_eq!(parse(""), Err(ConstraintError::InvalidConstraint));
    }

    #[test]
    fn propagates_invalid_version_literal() {
        assert!(matches!(
            parse(">=1.2.03"),
            Err(ConstraintError::InvalidVersion(_))
        ));
    }

    #[test]
    fn allows_single_space_between_operator_and_operand() {
        let spaced = parse("> 1.2.3").unwrap();
        let flush = parse(">1.2.3").unwrap();

        assert_eq!(spaced, flush);
    }

    #[test]
    fn rejects_wildcard_with_operator_prefix() {
        assert!(parse("<1.2.x").is_err());
    }

    #[test]
    fn does_not_misdetect_wildcard_in_prerelease_or_build() {
        for version in ["1.2.3-linux", "1.2.3+x86", "1.2.3-rcx"] {
            assert!(
                matches!(parse(version).unwrap().0[0][0], Atom::Eq(_)),
                "{version} should parse as a bare version atom"
            );
        }
    }

    #[test]
    fn parses_long_mixed_conjunction() {
        let constraint =
            parse("<1.2.0 <=1.2.1 =1.2.2 >=1.2.3 >1.2.4 1.2.5 1.2.6 - 1.2.7 ~1.2.8 ^1.2.9 1.2.x")
                .unwrap();

        assert_eq!(constraint.0.len(), 1);
        assert_eq!(constraint.0[0].len(), 10);
    }
}
