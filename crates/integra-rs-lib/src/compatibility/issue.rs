use serde::*;

/// How much an issue matters, only errors block installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
	Info,
	Warning,
	Error,
}

impl std::fmt::Display for Severity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Severity::Info => "INFO",
			Severity::Warning => "WARNING",
			Severity::Error => "ERROR",
		})
	}
}

/// The kinds of problem the checker reports.
/// 
/// Each kind has a fixed [`Severity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
	/// The dependency isn't in the checked set.
	MissingDependency,
	/// The dependency declares no version range.
	NoVersionConstraint,
	/// The declared range can't be parsed.
	InvalidVersionRange,
	/// The dependency is present but its version is unknown.
	UnknownDependencyVersion,
	/// The dependency's version is outside the declared range.
	VersionConstraintViolation,
	/// A newer major version is in the catalog.
	OutdatedMajorVersion,
	/// A newer minor version is in the catalog.
	OutdatedMinorVersion,
	/// A newer patch version is in the catalog.
	OutdatedPatchVersion,
	CircularDependency,
	/// The same coordinate was supplied more than once, the last one is used.
	DuplicateIntegration,
}

impl IssueType {
	pub fn severity(&self) -> Severity {
		match self {
			IssueType::MissingDependency
			| IssueType::InvalidVersionRange
			| IssueType::VersionConstraintViolation
			| IssueType::CircularDependency => Severity::Error,

			IssueType::NoVersionConstraint
			| IssueType::UnknownDependencyVersion
			| IssueType::OutdatedMajorVersion
			| IssueType::DuplicateIntegration => Severity::Warning,

			IssueType::OutdatedMinorVersion
			| IssueType::OutdatedPatchVersion => Severity::Info,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			IssueType::MissingDependency => "MISSING_DEPENDENCY",
			IssueType::NoVersionConstraint => "NO_VERSION_CONSTRAINT",
			IssueType::InvalidVersionRange => "INVALID_VERSION_RANGE",
			IssueType::UnknownDependencyVersion => "UNKNOWN_DEPENDENCY_VERSION",
			IssueType::VersionConstraintViolation => "VERSION_CONSTRAINT_VIOLATION",
			IssueType::OutdatedMajorVersion => "OUTDATED_MAJOR_VERSION",
			IssueType::OutdatedMinorVersion => "OUTDATED_MINOR_VERSION",
			IssueType::OutdatedPatchVersion => "OUTDATED_PATCH_VERSION",
			IssueType::CircularDependency => "CIRCULAR_DEPENDENCY",
			IssueType::DuplicateIntegration => "DUPLICATE_INTEGRATION",
		}
	}
}

impl std::fmt::Display for IssueType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single problem found by the checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityIssue {
	severity: Severity,
	artifact_id: String,
	issue_type: IssueType,
	message: String,
	suggestion: Option<String>,
}

impl CompatibilityIssue {
	/// Severity is taken from `issue_type`.
	pub fn new(issue_type: IssueType, artifact_id: impl Into<String>, message: impl Into<String>, suggestion: Option<String>) -> Self {
		Self {
			severity: issue_type.severity(),
			artifact_id: artifact_id.into(),
			issue_type,
			message: message.into(),
			suggestion,
		}
	}

	pub fn severity(&self) -> Severity { self.severity }
	pub fn artifact_id(&self) -> &str { &self.artifact_id }
	pub fn issue_type(&self) -> IssueType { self.issue_type }
	pub fn message(&self) -> &str { &self.message }
	pub fn suggestion(&self) -> Option<&str> { self.suggestion.as_deref() }
}

impl std::fmt::Display for CompatibilityIssue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}] {}: {}", self.severity, self.artifact_id, self.message)?;
		if let Some(suggestion) = &self.suggestion {
			write!(f, " ({})", suggestion)?;
		}
		Ok(())
	}
}

/// The issues found by a check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
	issues: Vec<CompatibilityIssue>,
}

impl CheckResult {
	pub fn new(issues: Vec<CompatibilityIssue>) -> Self {
		Self { issues }
	}

	pub fn issues(&self) -> &[CompatibilityIssue] {
		&self.issues
	}

	fn with_severity(&self, severity: Severity) -> Vec<&CompatibilityIssue> {
		self.issues.iter().filter(|i| i.severity == severity).collect()
	}

	pub fn errors(&self) -> Vec<&CompatibilityIssue> { self.with_severity(Severity::Error) }
	pub fn warnings(&self) -> Vec<&CompatibilityIssue> { self.with_severity(Severity::Warning) }
	pub fn infos(&self) -> Vec<&CompatibilityIssue> { self.with_severity(Severity::Info) }

	pub fn has_errors(&self) -> bool {
		self.issues.iter().any(|i| i.severity == Severity::Error)
	}

	pub fn has_warnings(&self) -> bool {
		self.issues.iter().any(|i| i.severity == Severity::Warning)
	}

	/// `true` when there are no errors.
	pub fn is_ok(&self) -> bool {
		!self.has_errors()
	}

	/// Appends the issues of `other` after these.
	pub fn merge(mut self, other: CheckResult) -> Self {
		self.issues.extend(other.issues);
		self
	}

	pub fn into_issues(self) -> Vec<CompatibilityIssue> {
		self.issues
	}

	/// Machine readable form of the report.
	pub fn to_json(&self) -> crate::Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

impl From<Vec<CompatibilityIssue>> for CheckResult {
	fn from(issues: Vec<CompatibilityIssue>) -> Self {
		Self::new(issues)
	}
}

impl std::fmt::Display for CheckResult {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "{} error(s), {} warning(s), {} info", self.errors().len(), self.warnings().len(), self.infos().len())?;
		for issue in &self.issues {
			writeln!(f, "\t{}", issue)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn issue(issue_type: IssueType) -> CompatibilityIssue {
		CompatibilityIssue::new(issue_type, "lamp", "message", None)
	}

	#[test]
	fn issue_severity_follows_type() {
		assert_eq!(issue(IssueType::MissingDependency).severity(), Severity::Error);
		assert_eq!(issue(IssueType::OutdatedMajorVersion).severity(), Severity::Warning);
		assert_eq!(issue(IssueType::OutdatedPatchVersion).severity(), Severity::Info);
	}

	#[test]
	fn result_without_errors_is_ok() {
		let result = CheckResult::new(vec![issue(IssueType::NoVersionConstraint), issue(IssueType::OutdatedMinorVersion)]);
		assert!(result.is_ok());
		assert!(result.has_warnings());
		assert_eq!(result.warnings().len(), 1);
		assert_eq!(result.infos().len(), 1);
	}

	#[test]
	fn result_with_error_is_not_ok() {
		let result = CheckResult::new(vec![issue(IssueType::CircularDependency)]);
		assert!(!result.is_ok() && result.has_errors() && !result.has_warnings());
		assert_eq!(result.errors().len(), 1);
	}

	#[test]
	fn result_merge_keeps_order() {
		let merged = CheckResult::new(vec![issue(IssueType::MissingDependency)]).merge(CheckResult::new(vec![issue(IssueType::CircularDependency)]));
		let types = merged.issues().iter().map(|i| i.issue_type()).collect::<Vec<_>>();
		assert_eq!(types, vec![IssueType::MissingDependency, IssueType::CircularDependency]);
	}

	#[test]
	fn issue_display_includes_suggestion() {
		let issue = CompatibilityIssue::new(IssueType::MissingDependency, "lamp", "requires io.example:hub", Some("add io.example:hub".into()));
		assert_eq!(issue.to_string(), "[ERROR] lamp: requires io.example:hub (add io.example:hub)");
	}

	#[test]
	fn result_json_lists_issues() {
		let json = CheckResult::new(vec![issue(IssueType::MissingDependency)]).to_json().unwrap();
		let v: serde_json::Value = serde_json::from_str(&json).unwrap();
		assert_eq!(v["issues"][0]["issue_type"], "MISSING_DEPENDENCY");
		assert_eq!(v["issues"][0]["severity"], "ERROR");
	}

	#[test]
	fn issue_type_serializes_screaming_snake() {
		assert_eq!(serde_json::to_string(&IssueType::VersionConstraintViolation).unwrap(), "\"VERSION_CONSTRAINT_VIOLATION\"");
		assert_eq!(IssueType::VersionConstraintViolation.to_string(), "VERSION_CONSTRAINT_VIOLATION");
	}
}
