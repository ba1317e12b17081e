use std::collections::HashMap;

use super::*;
use crate::integration::*;
use crate::{CheckerOptions, VersionRange};

/// Validates a set of integrations against each other and a [`Catalog`].
/// 
/// The checker holds only its options, every call builds its own index and graph
/// so a checker can be shared between threads freely.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityChecker {
	options: CheckerOptions,
}

impl CompatibilityChecker {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_options(options: CheckerOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &CheckerOptions {
		&self.options
	}

	/// Checks the declared dependencies of every integration and, when a catalog is given, whether newer releases exist.
	/// 
	/// Malformed dependency ranges are reported as [`IssueType::InvalidVersionRange`] rather than aborting the check.
	pub fn check_compatibility(&self, integrations: &[IntegrationInfo], catalog: Option<&Catalog>) -> CheckResult {
		let mut issues = Vec::<CompatibilityIssue>::new();

		/* Last one wins on duplicate coordinates */
		let mut index = HashMap::<&Coordinate, &IntegrationInfo>::with_capacity(integrations.len());
		for integration in integrations {
			if index.insert(&integration.coordinate, integration).is_some() {
				log::warn!("Integration {} was supplied more than once, using the last one", integration.coordinate);
				if self.options.flag_duplicates() {
					issues.push(CompatibilityIssue::new(
						IssueType::DuplicateIntegration,
						integration.artifact_id(),
						format!("{} appears more than once, dependencies on it resolve to the last occurrence", integration.coordinate),
						Some("Remove the duplicate entries".into()),
					));
				}
			}
		}
		log::debug!("Checking {} integrations", index.len());

		for integration in integrations {
			for dependency in &integration.dependencies {
				self.check_dependency(integration, dependency, &index, catalog, &mut issues);
			}
		}

		if let Some(catalog) = catalog.filter(|_| self.options.check_outdated()) {
			for integration in integrations {
				if let Some(issue) = Self::check_outdated(integration, catalog) {
					issues.push(issue);
				}
			}
		}

		log::debug!("Compatibility check found {} issue(s)", issues.len());
		CheckResult::new(issues)
	}

	fn check_dependency(
		&self,
		integration: &IntegrationInfo,
		dependency: &DependencyInfo,
		index: &HashMap<&Coordinate, &IntegrationInfo>,
		catalog: Option<&Catalog>,
		issues: &mut Vec<CompatibilityIssue>,
	) {
		log::trace!("Checking dependency of {} on {}", integration.coordinate, dependency.coordinate);
		let subject = integration.artifact_id();
		let resolved = index.get(&dependency.coordinate);

		if dependency.version_range.is_none() {
			let suggestion = resolved
				.and_then(|r| r.version.as_ref())
				.map(|v| format!("Declare a range such as ^{}", v));
			issues.push(CompatibilityIssue::new(
				IssueType::NoVersionConstraint,
				subject,
				format!("Dependency on {} has no version constraint", dependency.coordinate),
				suggestion,
			));
		}

		let resolved = match resolved {
			Some(r) => r,
			None => {
				issues.push(CompatibilityIssue::new(
					IssueType::MissingDependency,
					subject,
					format!("Required dependency {} is not present", dependency.coordinate),
					Some(format!("Add {} to the set of integrations", dependency.coordinate)),
				));
				return
			},
		};

		let range = match dependency.version_range.as_deref().map(VersionRange::parse) {
			Some(Ok(range)) => Some(range),
			Some(Err(e)) => {
				issues.push(CompatibilityIssue::new(
					IssueType::InvalidVersionRange,
					subject,
					format!("Dependency on {} declares an invalid version range: {}", dependency.coordinate, e),
					Some("Use a range such as ^1.0.0, ~1.2.0 or >=1.0.0,<2.0.0".into()),
				));
				return
			},
			None => None,
		};

		let version = match &resolved.version {
			Some(v) => v,
			None => {
				issues.push(CompatibilityIssue::new(
					IssueType::UnknownDependencyVersion,
					subject,
					format!("The version of dependency {} is unknown", dependency.coordinate),
					None,
				));
				return
			},
		};

		if let Some(range) = range {
			if !range.satisfies(version) {
				let suggestion = catalog
					.and_then(|c| range.max_satisfying(c.versions(&dependency.coordinate)))
					.map(|v| format!("Use {} {} which satisfies {}", dependency.coordinate, v, range))
					.unwrap_or_else(|| format!("Update {} to a version matching {}", dependency.coordinate, range));
				issues.push(CompatibilityIssue::new(
					IssueType::VersionConstraintViolation,
					subject,
					format!("Dependency {} version {} does not satisfy constraint {}", dependency.coordinate, version, range),
					Some(suggestion),
				));
			}
		}
	}

	/// Compares an integration's version with the newest release in `catalog`.
	fn check_outdated(integration: &IntegrationInfo, catalog: &Catalog) -> Option<CompatibilityIssue> {
		let current = integration.version.as_ref()?;
		let latest = catalog.latest(&integration.coordinate)?;
		if latest <= current {
			return None
		}

		let (issue_type, message) = if latest.major() != current.major() {
			(IssueType::OutdatedMajorVersion, format!(
				"Version {} is {} major version(s) behind the latest {}",
				current, latest.major().abs_diff(current.major()), latest,
			))
		} else if latest.minor() != current.minor() {
			(IssueType::OutdatedMinorVersion, format!("Version {} has a newer minor release {}", current, latest))
		} else if latest.patch() != current.patch() {
			(IssueType::OutdatedPatchVersion, format!("Version {} has a newer patch release {}", current, latest))
		} else {
			/* Only the pre-release differs */
			return None
		};

		Some(CompatibilityIssue::new(
			issue_type,
			integration.artifact_id(),
			message,
			Some(format!("Upgrade {} to {}", integration.coordinate, latest)),
		))
	}

	/// Looks for a cycle in the graph formed by the declared dependencies.
	/// 
	/// Reports at most one [`IssueType::CircularDependency`], naming every node on the search stack when the cycle was found.
	pub fn check_circular_dependencies(&self, integrations: &[IntegrationInfo]) -> Vec<CompatibilityIssue> {
		let dep_graph = DependencyGraph::from_integrations(integrations);
		let cycle = match dep_graph.find_cycle() {
			Some(cycle) => cycle,
			None => return vec![],
		};

		let join = |coordinates: &[Coordinate]| coordinates.iter().map(Coordinate::to_string).collect::<Vec<_>>();
		let mut path = join(cycle.members());
		path.push(cycle.entry.to_string());

		vec![CompatibilityIssue::new(
			IssueType::CircularDependency,
			cycle.entry.artifact(),
			format!("Circular dependency detected between [{}]: {}", join(&cycle.stack).join(", "), path.join(" -> ")),
			Some("Remove one of the dependencies forming the cycle".into()),
		)]
	}

	/// Runs [`check_compatibility()`](Self::check_compatibility) and, unless disabled in the options,
	/// [`check_circular_dependencies()`](Self::check_circular_dependencies).
	pub fn check_all(&self, integrations: &[IntegrationInfo], catalog: Option<&Catalog>) -> CheckResult {
		let result = self.check_compatibility(integrations, catalog);
		if self.options.check_cycles() {
			result.merge(self.check_circular_dependencies(integrations).into())
		} else {
			result
		}
	}
}
