//! Semantic versions and the range expressions used to constrain them.

mod semantic_version;
pub use semantic_version::Version;

mod version_range;
pub use version_range::VersionRange;
pub use version_range::Constraint;
pub use version_range::Operator;
