use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{Display, Formatter};

use crate::component::PartType;
use crate::error::Error;

#[derive(Debug, PartialEq, Eq, PartialOrd, Clone)]
/// The prerelease metadata for a particular version.
pub enum Prerelease {
    /// No prerelease metadata was provided.
    Empty,

    /// The individual components of the prerelease metadata.
    ///
    /// For example, in the version string `0.1.0-alpha.1`, `alpha.1` denotes the prerelease identifier,
    /// which is broken down into two components: `alpha` and `1`.
    Identifier(Vec<PrereleaseComponent>),
}

impl Prerelease {
    /// Whether any prerelease identifiers are present.
    pub fn is_empty(&self) -> bool {
        matches!(self, Prerelease::Empty)
    }
}

impl Display for Prerelease {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Prerelease::Empty => Ok(()),
            Prerelease::Identifier(identifiers) => {
                let rendered = identifiers
                    .iter()
                    .fold(String::new(), |mut str, part| {
                        str.push_str(&alloc::format!(".{part}"));

                        str
                    });

                write!(f, "{}", rendered.trim_start_matches('.'))
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Clone)]
/// An individual piece of a prerelease identifier, as they were interpreted.
pub enum PrereleaseComponent {
    /// A numeric component of the prerelease identifier.
    ///
    /// For example, in the version string `0.1.0-alpha.1`, `alpha.1` denotes the prerelease identifier,
    /// and `1` is a numeric component.
    Number(usize),

    /// A string component of the prerelease identifier.
    ///
    /// For example, in the version string `0.1.0-alpha.1`, `alpha.1` denotes the prerelease identifier,
    /// and `alpha` is a string component.
    String(String),
}

impl Display for PrereleaseComponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Number(num) => write!(f, "{num}"),
            Self::String(str) => write!(f, "{str}"),
        }
    }
}

/// Classify a single dot-separated prerelease segment, enforcing that purely numeric
/// segments carry no leading zero (e.g. `01` is rejected, but `0` and `0a` are fine).
///
/// Shared by `Version::parse`'s per-segment aggregation and the standalone
/// `parse_prerelease` entry point, so the rule is only written once.
pub(crate) fn classify_prerelease_segment(segment: &str) -> Result<PrereleaseComponent, Error> {
    if segment.is_empty() {
        return Err(Error::EmptyIdentifier(PartType::Prerelease));
    }

    if !segment
        .bytes()
        .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-')
    {
        return Err(Error::InvalidCharacter(PartType::Prerelease));
    }

    if segment.bytes().all(|byte| byte.is_ascii_digit()) {
        if segment.len() > 1 && segment.starts_with('0') {
            return Err(Error::InvalidPrecedingZero(PartType::Prerelease));
        }

        return Ok(PrereleaseComponent::Number(
            segment
                .parse::<usize>()
                .map_err(|_| Error::InvalidCharacter(PartType::Prerelease))?,
        ));
    }

    Ok(PrereleaseComponent::String(segment.to_string()))
}

/// Parse a full `pre-rels` production (`pre-id ("." pre-id)*`) standalone, outside the
/// context of a full version string.
pub(crate) fn parse_prerelease_identifiers(input: &str) -> Result<Vec<PrereleaseComponent>, Error> {
    if input.is_empty() {
        return Err(Error::EmptyIdentifier(PartType::Prerelease));
    }

    input.split('.').map(classify_prerelease_segment).collect()
}
