//! Various helper functions for testing
//! 
//! functions in this module should use results and not use any panics to avoid confusion in callers

use std::io::Write;

use integra_rs::{Catalog, Coordinate, IntegrationInfo, Version};

/// Creates an integration from string parts.
/// # Parameters
/// - `coordinate` - `group:artifact` of the integration.
/// - `version` - When `None` the integration's version is unknown.
/// - `depends` - Pairs of dependency coordinate and optional range expression.
pub fn integration(coordinate: &str, version: Option<&str>, depends: &[(&str, Option<&str>)]) -> integra_rs::Result<IntegrationInfo> {
	let mut integration = IntegrationInfo::new(Coordinate::parse(coordinate)?, version.map(Version::parse).transpose()?);
	for (dependency, range) in depends {
		integration = integration.add_dependency(Coordinate::parse(dependency)?, range.map(str::to_string));
	}
	Ok(integration)
}

/// Creates a catalog from `(coordinate, version)` pairs.
pub fn catalog(releases: &[(&str, &str)]) -> integra_rs::Result<Catalog> {
	let releases = releases.iter()
		.map(|&(coordinate, version)| integration(coordinate, Some(version), &[]))
		.collect::<integra_rs::Result<Vec<_>>>()?;
	Ok(Catalog::from_integrations(releases))
}

/// Writes `contents` to a file inside a new temporary directory.
/// 
/// The directory is removed when the returned [`tempfile::TempDir`] is dropped.
pub fn write_temp_file(name: &str, contents: &str) -> std::io::Result<(tempfile::TempDir, std::path::PathBuf)> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join(name);
	let mut f = std::fs::File::create(&path)?;
	f.write_all(contents.as_bytes())?;
	Ok((dir, path))
}
