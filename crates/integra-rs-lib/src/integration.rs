//! Descriptors of integrations and the catalog of known releases.
//! 
//! These types are supplied by whatever loads integrations, the checker only reads them.

use std::collections::HashMap;
use serde::*;

use crate::Version;

mod coordinate;
pub use coordinate::Coordinate;

/// A dependency declared by an integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyInfo {
	pub coordinate: Coordinate,
	/// Raw range expression, `None` when no constraint was declared.
	/// 
	/// Kept unparsed so a malformed expression can be reported instead of rejected on load.
	pub version_range: Option<String>,
}

impl DependencyInfo {
	pub fn new(coordinate: Coordinate, version_range: Option<String>) -> Self {
		Self { coordinate, version_range }
	}
}

/// An integration module with its resolved version and declared dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationInfo {
	pub coordinate: Coordinate,
	/// `None` when the version is unknown.
	pub version: Option<Version>,
	pub dependencies: Vec<DependencyInfo>,
}

impl IntegrationInfo {
	pub fn new(coordinate: Coordinate, version: Option<Version>) -> Self {
		Self { coordinate, version, dependencies: Default::default() }
	}

	pub fn add_dependency(mut self, coordinate: Coordinate, version_range: Option<String>) -> Self {
		self.dependencies.push(DependencyInfo::new(coordinate, version_range));
		self
	}

	pub fn artifact_id(&self) -> &str {
		self.coordinate.artifact()
	}
}

/// Every known release of each coordinate.
/// 
/// Used to tell when a newer release of an integration is available.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
	entries: HashMap<Coordinate, Vec<IntegrationInfo>>,
}

impl Catalog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_integrations(integrations: impl IntoIterator<Item = IntegrationInfo>) -> Self {
		let mut catalog = Self::new();
		for integration in integrations {
			catalog.insert(integration);
		}
		catalog
	}

	pub fn insert(&mut self, integration: IntegrationInfo) {
		self.entries.entry(integration.coordinate.clone()).or_default().push(integration);
	}

	pub fn get(&self, coordinate: &Coordinate) -> &[IntegrationInfo] {
		self.entries.get(coordinate).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Known versions of `coordinate`, entries without a version are skipped.
	pub fn versions<'a>(&'a self, coordinate: &Coordinate) -> impl Iterator<Item = &'a Version> + 'a {
		self.entries.get(coordinate)
			.into_iter()
			.flatten()
			.filter_map(|i| i.version.as_ref())
	}

	/// The highest known version of `coordinate`.
	pub fn latest(&self, coordinate: &Coordinate) -> Option<&Version> {
		self.versions(coordinate).max()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl From<HashMap<Coordinate, Vec<IntegrationInfo>>> for Catalog {
	fn from(entries: HashMap<Coordinate, Vec<IntegrationInfo>>) -> Self {
		Self { entries }
	}
}
