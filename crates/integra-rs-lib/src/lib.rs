//! Version model and compatibility checking for integration modules.
//! 
//! Integrations are plugins identified by a `group:artifact` [`Coordinate`] and a semantic [`Version`].
//! Each integration declares dependencies on other integrations using [`VersionRange`] expressions,
//! the [`CompatibilityChecker`] validates a chosen set of integrations against each other.

pub mod error;
pub use error::Result;
pub use error::Error;

pub mod config;
pub use config::CheckerOptions;

pub mod version;
pub use version::Version;
pub use version::VersionRange;

pub mod integration;
pub use integration::Coordinate;
pub use integration::IntegrationInfo;
pub use integration::DependencyInfo;
pub use integration::Catalog;

pub mod compatibility;
pub use compatibility::CompatibilityChecker;
pub use compatibility::CheckResult;

pub mod manifest;
