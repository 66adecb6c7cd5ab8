mod build_metadata;
mod part;
mod prerelease;

pub use build_metadata::BuildMetadata;
pub(crate) use build_metadata::validate_build_metadata;
pub use part::*;
pub use prerelease::Prerelease;
pub use prerelease::PrereleaseComponent;
pub(crate) use prerelease::{classify_prerelease_segment, parse_prerelease_identifiers};
