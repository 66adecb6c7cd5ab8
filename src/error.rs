use crate::component::PartType;

/// Error parsing a version string.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// A part of the provided version string contains an invalid character.
    InvalidCharacter(PartType),

    /// A part of the provided version string includes a preceding zero, which is not
    /// allowed.
    InvalidPrecedingZero(PartType),

    /// A prerelease or build metadata identifier was empty (e.g. a trailing dot, or a
    /// `-`/`+` with nothing following it).
    EmptyIdentifier(PartType),

    /// A version string had more dotted numeric components than `major.minor.patch`
    /// allows (or fewer).
    UnexpectedDot(PartType),
}

/// Error parsing a constraint string.
#[derive(Debug, PartialEq)]
pub enum ConstraintError {
    /// A whitespace character other than ASCII space appeared in the constraint (e.g.
    /// a tab), or the constraint was otherwise malformed at the token level.
    InvalidWhitespace,

    /// The constraint grammar was violated: an empty conjunction or disjunct, an
    /// unrecognised operator, a dangling `-`, parentheses, or similar.
    InvalidConstraint,

    /// A wildcard was used that isn't right-aligned (e.g. `1.x.3`), or that carries an
    /// operator prefix or a pre-release/build suffix.
    MisalignedWildcard,

    /// A version embedded in the constraint failed to parse.
    InvalidVersion(Error),
}

impl From<Error> for ConstraintError {
    fn from(error: Error) -> Self {
        ConstraintError::InvalidVersion(error)
    }
}
