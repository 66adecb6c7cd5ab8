use alloc::string::String;
use core::fmt::{Display, Formatter};

use crate::component::PartType;
use crate::error::Error;

#[derive(Debug, PartialEq, Clone)]
/// The build metadata for a particular version.
pub enum BuildMetadata {
    Empty,
    Identifier(String),
}

impl BuildMetadata {
    /// Whether build metadata is present.
    pub fn is_empty(&self) -> bool {
        matches!(self, BuildMetadata::Empty)
    }
}

impl Display for BuildMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            BuildMetadata::Empty => Ok(()),
            BuildMetadata::Identifier(identifier) => write!(f, "{identifier}"),
        }
    }
}

/// Validate a full `builds` production (`build-id ("." build-id)*`), standalone.
///
/// Builds carry no internal structure beyond "non-empty, alphanumeric-or-hyphen
/// segments separated by dots" - they're never split into components the way
/// prerelease identifiers are, since build metadata has no ordering significance.
pub(crate) fn validate_build_metadata(input: &str) -> Result<(), Error> {
    if input.is_empty() {
        return Err(Error::EmptyIdentifier(PartType::BuildMetadata));
    }

    for segment in input.split('.') {
        if segment.is_empty() {
            return Err(Error::EmptyIdentifier(PartType::BuildMetadata));
        }

        if !segment
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-')
        {
            return Err(Error::InvalidCharacter(PartType::BuildMetadata));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_segment() {
        assert_eq!(
            validate_build_metadata("build..1234"),
            Err(Error::EmptyIdentifier(PartType::BuildMetadata))
        );
    }

    #[test]
    fn accepts_dotted_segments() {
        assert!(validate_build_metadata("build.1234").is_ok());
    }
}
