use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{Debug, Display};

use crate::component::{
    classify_prerelease_segment, parse_prerelease_identifiers, validate_build_metadata,
    BuildMetadata, PartType, Prerelease, PrereleaseComponent,
};
use crate::dialect;
use crate::dialect::Dialect::Standard;
use crate::dialect::{CapturedBytes, Dialect, DialectParser, NextPartType, RemainingUnparsedBytes};
use crate::error::Error;

#[derive(Debug, Clone)]
/// A parsed version string, conforming to a specific dialect.
///
/// Instances of `Version` can be compared against one another, and formatted as a string.
///
/// ## Example
///
/// ```rust
/// use smvr::{Dialect, Version};
/// let version = Version::parse("0.1.4-beta", Dialect::Standard);
///
/// # assert_eq!(version.unwrap().to_string(), "0.1.4-beta".to_string())
/// ```
pub struct Version {
    dialect: Dialect,

    /// The major version number.
    pub major: usize,

    /// The minor version number.
    pub minor: usize,

    /// The patch version number.
    pub patch: usize,

    /// The prerelease identifier, if provided.
    pub prerelease: Prerelease,

    /// The build metadata, if provided.
    pub build_metadata: BuildMetadata,
}

impl Version {
    /// Parse a string into a Version instance, following a specific Semver dialect.
    ///
    /// ```
    /// use smvr::{Dialect, Version};
    /// let version = Version::parse("0.1.4-beta", Dialect::Standard);
    /// # assert_eq!(version.unwrap().to_string(), "0.1.4-beta".to_string())
    /// ```
    ///
    /// ## Errors
    ///
    /// If the version string is not valid for the chosen dialect, the _first_ error encountered will be returned.
    ///
    /// ## Panics
    ///
    /// If the version string is not valid utf-8, a panic will occur.
    pub fn parse(version: &str, dialect: Dialect) -> Result<Self, Error> {
        let version_bytes = version.as_bytes();

        let (mut major, mut minor, mut patch, mut prerelease, mut build_metadata) =
            (vec![], vec![], vec![], Vec::<CapturedBytes>::new(), vec![]);

        let mut saw_build_separator = false;

        let mut current_part_type = PartType::Major;
        let mut remaining = version_bytes;
        loop {
            let part = Self::parse_part(remaining, dialect, current_part_type)?;

            let (part, r, next_part_type) = part;

            match current_part_type {
                PartType::Major => major = part,
                PartType::Minor => minor = part,
                PartType::Patch => patch = part,
                PartType::Prerelease => prerelease.push(part),
                PartType::BuildMetadata => build_metadata = part,
            }

            if next_part_type == Some(PartType::BuildMetadata) {
                saw_build_separator = true;
            }

            if next_part_type.is_none() {
                break;
            }

            remaining = r;
            current_part_type = next_part_type.unwrap();
        }

        // `major`/`minor`/`patch` only end up non-empty once a dot has actually
        // carried the parser past them - a bare "1" or "1.2" never reaches the
        // later components, and "1.2." reaches Patch but captures nothing. Either
        // way, the grammar requires all three to be present.
        if major.is_empty() {
            return Err(Error::UnexpectedDot(PartType::Major));
        }

        if minor.is_empty() {
            return Err(Error::UnexpectedDot(PartType::Minor));
        }

        if patch.is_empty() {
            return Err(Error::UnexpectedDot(PartType::Patch));
        }

        let prerelease_components = if prerelease.is_empty() {
            None
        } else {
            let components: Result<Vec<_>, Error> = prerelease
                .iter()
                .map(|part| {
                    classify_prerelease_segment(
                        alloc::str::from_utf8(part)
                            .map_err(|_| Error::InvalidCharacter(PartType::Prerelease))?,
                    )
                })
                .collect();

            Some(components?)
        };

        let build_metadata_string = if saw_build_separator {
            let build = alloc::str::from_utf8(&build_metadata[..])
                .map_err(|_| Error::InvalidCharacter(PartType::BuildMetadata))?;

            validate_build_metadata(build)?;

            Some(build.to_string())
        } else {
            None
        };

        Ok(Self::new(
            alloc::str::from_utf8(&major[..])
                .unwrap()
                .parse::<usize>()
                .unwrap_or_default(),
            alloc::str::from_utf8(&minor[..])
                .unwrap()
                .parse::<usize>()
                .unwrap_or_default(),
            alloc::str::from_utf8(&patch[..])
                .unwrap()
                .parse::<usize>()
                .unwrap_or_default(),
            prerelease_components,
            build_metadata_string,
            dialect,
        ))
    }

    /// Progressively parse and return one particular part of a version string.
    ///
    /// The end point of a part is determined by the chosen dialect.
    ///
    /// With each byte parsed the dialect decides whether:
    /// 1. The byte is valid inside the part (i.e. it's a digit when inside the minor part of a
    ///    version string).
    /// 2. Whether to consume the byte, or include
    fn parse_part(
        version_bytes: &[u8],
        dialect: Dialect,
        current_part: PartType,
    ) -> Result<(CapturedBytes, &RemainingUnparsedBytes, NextPartType), Error> {
        let mut part = vec![];

        for (i, byte) in version_bytes.iter().enumerate() {
            let next_part = match dialect {
                Standard => dialect::Standard::parse_byte(
                    *byte,
                    (current_part, &part),
                    &version_bytes[i + 1..],
                ),
            }?;

            if next_part.is_some() {
                return Ok((part, &version_bytes[i + 1..], next_part));
            }

            part.push(byte.to_owned());
        }

        Ok((part, &[], None))
    }

    /// Create a new Version instance, using pre-parsed Semantic Version content.
    fn new(
        major: usize,
        minor: usize,
        patch: usize,
        prerelease: Option<Vec<PrereleaseComponent>>,
        build_metadata: Option<String>,
        dialect: Dialect,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: prerelease.map_or(Prerelease::Empty, |prerelease| {
                Prerelease::Identifier(prerelease)
            }),
            build_metadata: build_metadata.map_or(BuildMetadata::Empty, |metadata| {
                BuildMetadata::Identifier(metadata)
            }),
            dialect,
        }
    }

    /// Construct a `Version` directly from its already-validated components, without
    /// going through the text parser.
    ///
    /// This is total over any inputs - there's no invalid `(major, minor, patch)`
    /// triple, and the prerelease/build sequences are taken as-is.
    pub fn make(
        major: usize,
        minor: usize,
        patch: usize,
        prerelease: Prerelease,
        build_metadata: BuildMetadata,
    ) -> Self {
        Self {
            dialect: Standard,
            major,
            minor,
            patch,
            prerelease,
            build_metadata,
        }
    }

    /// `0.0.0`, with no prerelease or build metadata.
    pub fn initial() -> Self {
        Self::make(0, 0, 0, Prerelease::Empty, BuildMetadata::Empty)
    }

    /// Increment the major version, resetting minor and patch to zero and clearing
    /// any prerelease or build metadata.
    pub fn bump_major(&self) -> Self {
        Self::make(self.major + 1, 0, 0, Prerelease::Empty, BuildMetadata::Empty)
    }

    /// Increment the minor version, resetting patch to zero and clearing any
    /// prerelease or build metadata.
    pub fn bump_minor(&self) -> Self {
        Self::make(
            self.major,
            self.minor + 1,
            0,
            Prerelease::Empty,
            BuildMetadata::Empty,
        )
    }

    /// Increment the patch version, clearing any prerelease or build metadata.
    pub fn bump_patch(&self) -> Self {
        Self::make(
            self.major,
            self.minor,
            self.patch + 1,
            Prerelease::Empty,
            BuildMetadata::Empty,
        )
    }

    /// A version is unstable (pre-1.0) when its major component is zero.
    pub fn is_unstable(&self) -> bool {
        self.major == 0
    }

    /// The negation of [`Version::is_unstable`].
    pub fn is_stable(&self) -> bool {
        !self.is_unstable()
    }

    /// Whether this version carries any prerelease identifiers.
    ///
    /// Distinct from [`Version::is_unstable`]: that's about the major component being
    /// zero, this is about the presence of a `-pre` tag on any major version.
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Produce a new version with the major component replaced.
    pub fn with_major(&self, major: usize) -> Self {
        Self::make(
            major,
            self.minor,
            self.patch,
            self.prerelease.clone(),
            self.build_metadata.clone(),
        )
    }

    /// Produce a new version with the minor component replaced.
    pub fn with_minor(&self, minor: usize) -> Self {
        Self::make(
            self.major,
            minor,
            self.patch,
            self.prerelease.clone(),
            self.build_metadata.clone(),
        )
    }

    /// Produce a new version with the patch component replaced.
    pub fn with_patch(&self, patch: usize) -> Self {
        Self::make(
            self.major,
            self.minor,
            patch,
            self.prerelease.clone(),
            self.build_metadata.clone(),
        )
    }

    /// Produce a new version with the prerelease identifiers replaced.
    pub fn with_prerelease(&self, prerelease: Prerelease) -> Self {
        Self::make(
            self.major,
            self.minor,
            self.patch,
            prerelease,
            self.build_metadata.clone(),
        )
    }

    /// Produce a new version with the build metadata replaced.
    pub fn with_build_metadata(&self, build_metadata: BuildMetadata) -> Self {
        Self::make(
            self.major,
            self.minor,
            self.patch,
            self.prerelease.clone(),
            build_metadata,
        )
    }
}

/// Parse the `pre-rels` production (`pre-id ("." pre-id)*`) standalone, outside the
/// context of a full version string.
pub(crate) fn parse_prerelease_standalone(input: &str) -> Result<Prerelease, Error> {
    Ok(Prerelease::Identifier(parse_prerelease_identifiers(input)?))
}

/// Parse the `builds` production (`build-id ("." build-id)*`) standalone, outside the
/// context of a full version string.
pub(crate) fn parse_build_standalone(input: &str) -> Result<BuildMetadata, Error> {
    validate_build_metadata(input)?;
    Ok(BuildMetadata::Identifier(input.to_string()))
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        if self.dialect != other.dialect {
            // Only versions originating from the same dialect can be compared. This
            // prevents issues with inconsistent comparisons based on comparator order
            return false;
        }

        match self.dialect {
            Standard => dialect::Standard::eq(self, other),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dialect != other.dialect {
            // Only versions originating from the same dialect can be compared. This
            // prevents issues with inconsistent comparisons based on comparator order
            return None;
        }

        Some(match self.dialect {
            Standard => dialect::Standard::cmp(self, other),
        })
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}",
            match self.dialect {
                Standard => dialect::Standard::format(self),
            }
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use proptest::prelude::*;

    use crate::dialect::Dialect;
    use crate::error::Error;
    use crate::version::{BuildMetadata, PartType, Prerelease, PrereleaseComponent, Version};

    #[test]
    fn rejects_partial_versions() {
        assert_eq!(
            Version::parse("1", Dialect::Standard),
            Err(Error::UnexpectedDot(PartType::Minor))
        );
        assert_eq!(
            Version::parse("1.2", Dialect::Standard),
            Err(Error::UnexpectedDot(PartType::Patch))
        );
        assert_eq!(
            Version::parse("1.2.", Dialect::Standard),
            Err(Error::UnexpectedDot(PartType::Patch))
        );
    }

    #[test]
    fn parsing_only_version_with_standard_dialect() {
        let version = Version::parse("1.2.2", Dialect::Standard).unwrap();

        assert_eq!(version.major, 1);
        assert_eq!(version.minor, 2);
        assert_eq!(version.patch, 2);
    }

    #[test]
    fn parsing_version_with_standard_dialect() {
        let version = Version::parse("12.19.1-alpha.12+build1234", Dialect::Standard).unwrap();

        assert_eq!(version.major, 12);
        assert_eq!(version.minor, 19);
        assert_eq!(version.patch, 1);
        assert_eq!(
            version.prerelease,
            Prerelease::Identifier(vec![
                PrereleaseComponent::String("alpha".to_string()),
                PrereleaseComponent::Number(12)
            ])
        );
        assert_eq!(
            version.build_metadata,
            BuildMetadata::Identifier("build1234".to_string())
        );

        assert_eq!("12.19.1-alpha.12+build1234", version.to_string());
    }

    #[test]
    fn parsing_version_with_proceeding_major_zero_standard_dialect() {
        let version = Version::parse("0.1.0", Dialect::Standard).unwrap();

        assert_eq!(version.major, 0);
        assert_eq!(version.minor, 1);
        assert_eq!(version.patch, 0);
    }

    #[test]
    fn parsing_version_with_only_build_metadata_standard_dialect() {
        let version = Version::parse("0.1.12+build.1234", Dialect::Standard).unwrap();

        assert_eq!(version.major, 0);
        assert_eq!(version.minor, 1);
        assert_eq!(version.patch, 12);
        assert_eq!(version.prerelease, Prerelease::Empty);
        assert_eq!(
            version.build_metadata,
            BuildMetadata::Identifier("build.1234".to_string())
        );
    }

    #[test]
    fn parsing_version_with_proceeding_zero_standard_dialect() {
        let version = Version::parse("12.019.1", Dialect::Standard);

        let Err(error) = version else {
            panic!("Parsing should have returned an error")
        };

        assert_eq!(error, Error::InvalidPrecedingZero(PartType::Minor));
    }

    #[test]
    fn rejects_leading_zero_in_prerelease_numeric_identifier() {
        let version = Version::parse("1.2.3-01", Dialect::Standard);

        assert_eq!(
            version,
            Err(Error::InvalidPrecedingZero(PartType::Prerelease))
        );
    }

    #[test]
    fn rejects_empty_prerelease_segment() {
        let version = Version::parse("1.2.3-", Dialect::Standard);

        assert_eq!(version, Err(Error::EmptyIdentifier(PartType::Prerelease)));
    }

    #[test]
    fn rejects_empty_build_metadata() {
        let version = Version::parse("1.2.3+", Dialect::Standard);

        assert_eq!(version, Err(Error::EmptyIdentifier(PartType::BuildMetadata)));
    }

    #[test]
    fn rejects_extra_dotted_component() {
        let version = Version::parse("0.0.0.0", Dialect::Standard);

        assert_eq!(version, Err(Error::UnexpectedDot(PartType::Patch)));
    }

    #[test]
    fn rejects_leading_whitespace() {
        assert!(Version::parse(" 0.0.0", Dialect::Standard).is_err());
    }

    #[test]
    fn bumpers_zero_lower_fields_and_clear_tags() {
        let version = Version::parse("1.2.3-pre+build", Dialect::Standard).unwrap();

        let major = version.bump_major();
        assert_eq!((major.major, major.minor, major.patch), (2, 0, 0));
        assert_eq!(major.prerelease, Prerelease::Empty);
        assert_eq!(major.build_metadata, BuildMetadata::Empty);

        let minor = version.bump_minor();
        assert_eq!((minor.major, minor.minor, minor.patch), (1, 3, 0));

        let patch = version.bump_patch();
        assert_eq!((patch.major, patch.minor, patch.patch), (1, 2, 4));
    }

    #[test]
    fn stability_predicates() {
        let unstable = Version::parse("0.9.0", Dialect::Standard).unwrap();
        let stable = Version::parse("1.0.0", Dialect::Standard).unwrap();

        assert!(unstable.is_unstable());
        assert!(!unstable.is_stable());
        assert!(stable.is_stable());
        assert!(!stable.is_unstable());
    }

    #[test]
    fn lens_setters_are_functional() {
        let version = Version::parse("1.2.3", Dialect::Standard).unwrap();
        let bumped = version.with_major(5);

        assert_eq!(version.major, 1);
        assert_eq!(bumped.major, 5);
    }

    proptest! {
        #[test]
        fn parses_various_valid_version_strings(
            version in "(0|[1-9][0-9]*)[.](0|[1-9][0-9]*)[.](0|[1-9][0-9]*)([-](0|[1-9A-Za-z-][0-9A-Za-z-]*)([.][0-9A-Za-z-]+)*)?([+][0-9A-Za-z-]+([.][0-9A-Za-z-]+)*)?"
        ) {
            let version = Version::parse(&version, Dialect::Standard);

            assert!(version.is_ok());
        }

        #[test]
        fn bump_major_is_always_greater(major in 0usize..1000, minor in 0usize..1000, patch in 0usize..1000) {
            let version = Version::make(major, minor, patch, Prerelease::Empty, BuildMetadata::Empty);
            let bumped = version.bump_major();

            assert!(bumped > version);
            assert_eq!(bumped.major, version.major + 1);
        }
    }
}
