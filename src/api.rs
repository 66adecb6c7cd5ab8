use alloc::string::{String, ToString};

use crate::error::ConstraintError;
use crate::version::{parse_build_standalone, parse_prerelease_standalone};
use crate::{BuildMetadata, Constraint, Dialect, Error, Prerelease, Version};

/// Parse a full version string under the standard dialect.
///
/// A thin, function-style wrapper over [`Version::parse`] for callers who'd rather
/// not name the dialect at every call site.
pub fn parse_version(input: &str) -> Result<Version, Error> {
    Version::parse(input, Dialect::Standard)
}

/// Parse a full version string, panicking if it's invalid.
///
/// Intended for literals known ahead of time to be valid (tests, constants), not for
/// untrusted input.
///
/// ## Panics
///
/// Panics if `input` doesn't parse under the standard dialect.
pub fn parse_version_unchecked(input: &str) -> Version {
    parse_version(input).expect("version should be valid")
}

/// Parse a standalone pre-release identifier sequence (the part after the `-`,
/// without the rest of a version string).
pub fn parse_prerelease(input: &str) -> Result<Prerelease, Error> {
    parse_prerelease_standalone(input)
}

/// Parse a standalone pre-release identifier sequence, panicking if it's invalid.
///
/// ## Panics
///
/// Panics if `input` isn't a valid `pre-rels` production.
pub fn parse_prerelease_unchecked(input: &str) -> Prerelease {
    parse_prerelease(input).expect("prerelease should be valid")
}

/// Parse standalone build metadata (the part after the `+`, without the rest of a
/// version string).
pub fn parse_build(input: &str) -> Result<BuildMetadata, Error> {
    parse_build_standalone(input)
}

/// Parse standalone build metadata, panicking if it's invalid.
///
/// ## Panics
///
/// Panics if `input` isn't a valid `builds` production.
pub fn parse_build_unchecked(input: &str) -> BuildMetadata {
    parse_build(input).expect("build metadata should be valid")
}

/// Parse an npm-style range constraint.
pub fn parse_constraint(input: &str) -> Result<Constraint, ConstraintError> {
    Constraint::parse(input)
}

/// Parse an npm-style range constraint, panicking if it's invalid.
///
/// ## Panics
///
/// Panics if `input` isn't a valid constraint.
pub fn parse_constraint_unchecked(input: &str) -> Constraint {
    parse_constraint(input).expect("constraint should be valid")
}

/// Render a version back into its canonical string form.
pub fn render_version(version: &Version) -> String {
    version.to_string()
}

/// Render a pre-release identifier sequence back into its canonical string form.
pub fn render_prerelease(prerelease: &Prerelease) -> String {
    prerelease.to_string()
}

/// Render build metadata back into its canonical string form.
pub fn render_build(build_metadata: &BuildMetadata) -> String {
    build_metadata.to_string()
}

/// Render a constraint back into its canonical string form.
pub fn render_constraint(constraint: &Constraint) -> String {
    constraint.to_string()
}

/// Construct a version directly from already-validated components.
///
/// See [`Version::make`].
pub fn make_version(
    major: usize,
    minor: usize,
    patch: usize,
    prerelease: Prerelease,
    build_metadata: BuildMetadata,
) -> Version {
    Version::make(major, minor, patch, prerelease, build_metadata)
}

/// `0.0.0`, with no pre-release or build metadata. See [`Version::initial`].
pub fn initial_version() -> Version {
    Version::initial()
}

/// See [`Version::is_stable`].
pub fn is_stable(version: &Version) -> bool {
    version.is_stable()
}

/// See [`Version::is_unstable`].
pub fn is_unstable(version: &Version) -> bool {
    version.is_unstable()
}

/// See [`Version::bump_major`].
pub fn bump_major(version: &Version) -> Version {
    version.bump_major()
}

/// See [`Version::bump_minor`].
pub fn bump_minor(version: &Version) -> Version {
    version.bump_minor()
}

/// See [`Version::bump_patch`].
pub fn bump_patch(version: &Version) -> Version {
    version.bump_patch()
}

/// Whether `version` satisfies `constraint`. See [`Constraint::satisfies`].
pub fn satisfies(version: &Version, constraint: &Constraint) -> bool {
    constraint.satisfies(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_render_round_trip() {
        let version = parse_version("1.2.3-alpha+build").unwrap();

        assert_eq!(render_version(&version), "1.2.3-alpha+build");
    }

    #[test]
    fn constraint_round_trip_through_satisfies() {
        let constraint = parse_constraint("^1.2.3").unwrap();
        let version = parse_version_unchecked("1.5.0");

        assert!(satisfies(&version, &constraint));
    }

    #[test]
    fn bump_helpers_match_methods() {
        let version = parse_version_unchecked("1.2.3");

        assert_eq!(bump_major(&version), version.bump_major());
        assert_eq!(bump_minor(&version), version.bump_minor());
        assert_eq!(bump_patch(&version), version.bump_patch());
    }
}
