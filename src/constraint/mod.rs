mod ast;
mod desugar;
mod parser;
mod render;
mod satisfies;

pub use ast::{Atom, Constraint, WildcardSpec};

use crate::error::ConstraintError;
use crate::Version;

impl Constraint {
    /// Parse an npm-style range constraint (e.g. `^1.2.3`, `>=1.0.0 <2.0.0`,
    /// `1.2.x || 2.0.0 - 3.0.0`) into a [`Constraint`].
    ///
    /// ## Errors
    ///
    /// Returns a [`ConstraintError`] if the constraint is malformed, or if a version
    /// literal embedded in it fails to parse.
    pub fn parse(input: &str) -> Result<Self, ConstraintError> {
        parser::parse(input)
    }

    /// Whether `version` satisfies this constraint.
    ///
    /// See the crate-level "Constraints" documentation for the exact pre-release
    /// inclusion rule applied here.
    pub fn satisfies(&self, version: &Version) -> bool {
        satisfies::satisfies(version, self)
    }
}

impl core::fmt::Display for Constraint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", render::render(self))
    }
}
