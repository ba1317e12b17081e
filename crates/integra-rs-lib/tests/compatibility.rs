use integra_rs::compatibility::*;
use integra_rs_test_utils::{catalog, integration};

fn issue_types(result: &CheckResult) -> Vec<IssueType> {
	result.issues().iter().map(|i| i.issue_type()).collect()
}

#[test]
fn satisfied_dependency_has_no_issues() {
	let integrations = vec![
		integration("io.example:a", Some("1.0.0"), &[("io.example:b", Some("^1.0.0"))]).unwrap(),
		integration("io.example:b", Some("1.5.0"), &[]).unwrap(),
	];

	let result = CompatibilityChecker::new().check_compatibility(&integrations, None);
	assert!(result.is_ok());
	assert!(result.issues().is_empty());
	assert!(!result.has_warnings());
}

#[test]
fn unsatisfied_range_is_a_violation() {
	let integrations = vec![
		integration("io.example:a", Some("1.0.0"), &[("io.example:b", Some("^2.0.0"))]).unwrap(),
		integration("io.example:b", Some("1.5.0"), &[]).unwrap(),
	];

	let result = CompatibilityChecker::new().check_compatibility(&integrations, None);
	assert!(!result.is_ok());
	assert_eq!(issue_types(&result), vec![IssueType::VersionConstraintViolation]);
	let error = result.errors()[0];
	assert_eq!(error.artifact_id(), "a");
	assert_eq!(error.severity(), Severity::Error);
}

#[test]
fn absent_dependency_is_missing() {
	let integrations = vec![
		integration("io.example:a", Some("1.0.0"), &[("io.example:c", Some("^1.0.0"))]).unwrap(),
	];

	let result = CompatibilityChecker::new().check_compatibility(&integrations, None);
	assert_eq!(issue_types(&result), vec![IssueType::MissingDependency]);
	assert_eq!(result.errors().len(), 1);
	assert!(result.issues()[0].message().contains("io.example:c"));
}

#[test]
fn mutual_dependency_is_a_cycle() {
	let integrations = vec![
		integration("io.example:a", Some("1.0.0"), &[("io.example:b", Some("^1.0.0"))]).unwrap(),
		integration("io.example:b", Some("1.0.0"), &[("io.example:a", Some("^1.0.0"))]).unwrap(),
	];

	let issues = CompatibilityChecker::new().check_circular_dependencies(&integrations);
	assert_eq!(issues.len(), 1);
	assert_eq!(issues[0].issue_type(), IssueType::CircularDependency);
	assert_eq!(issues[0].severity(), Severity::Error);
	assert!(issues[0].message().contains("io.example:a"));
	assert!(issues[0].message().contains("io.example:b"));
}

#[test]
fn only_first_cycle_is_reported() {
	let integrations = vec![
		integration("io.example:a", None, &[("io.example:b", None)]).unwrap(),
		integration("io.example:b", None, &[("io.example:a", None)]).unwrap(),
		integration("io.example:c", None, &[("io.example:d", None)]).unwrap(),
		integration("io.example:d", None, &[("io.example:c", None)]).unwrap(),
	];

	let issues = CompatibilityChecker::new().check_circular_dependencies(&integrations);
	assert_eq!(issues.len(), 1);
	assert!(!issues[0].message().contains("io.example:c"));
}

#[test]
fn acyclic_graph_has_no_cycle_issue() {
	let integrations = vec![
		integration("io.example:a", None, &[("io.example:b", None), ("io.example:missing", None)]).unwrap(),
		integration("io.example:b", None, &[]).unwrap(),
	];
	assert!(CompatibilityChecker::new().check_circular_dependencies(&integrations).is_empty());
}

#[test]
fn newer_major_in_catalog_is_a_warning() {
	let integrations = vec![integration("io.example:a", Some("1.0.0"), &[]).unwrap()];
	let catalog = catalog(&[("io.example:a", "2.0.0"), ("io.example:a", "1.0.0")]).unwrap();

	let result = CompatibilityChecker::new().check_compatibility(&integrations, Some(&catalog));
	assert_eq!(issue_types(&result), vec![IssueType::OutdatedMajorVersion]);
	assert_eq!(result.warnings().len(), 1);
	assert!(result.is_ok());
}

#[test]
fn newer_minor_in_catalog_is_info() {
	let integrations = vec![integration("io.example:a", Some("1.0.0"), &[]).unwrap()];
	let catalog = catalog(&[("io.example:a", "1.1.0")]).unwrap();

	let result = CompatibilityChecker::new().check_compatibility(&integrations, Some(&catalog));
	assert_eq!(issue_types(&result), vec![IssueType::OutdatedMinorVersion]);
	assert_eq!(result.infos().len(), 1);
	assert!(!result.has_warnings());
}

#[test]
fn missing_range_is_a_warning_with_suggestion() {
	let integrations = vec![
		integration("io.example:a", Some("1.0.0"), &[("io.example:b", None)]).unwrap(),
		integration("io.example:b", Some("1.5.0"), &[]).unwrap(),
	];

	let result = CompatibilityChecker::new().check_compatibility(&integrations, None);
	assert_eq!(issue_types(&result), vec![IssueType::NoVersionConstraint]);
	assert_eq!(result.issues()[0].suggestion(), Some("Declare a range such as ^1.5.0"));
	assert!(result.is_ok() && result.has_warnings());
}

#[test]
fn malformed_range_does_not_abort_the_check() {
	let integrations = vec![
		integration("io.example:a", Some("1.0.0"), &[("io.example:b", Some(">=1.0")), ("io.example:c", Some("^2.0.0"))]).unwrap(),
		integration("io.example:b", Some("1.0.0"), &[]).unwrap(),
		integration("io.example:c", Some("1.0.0"), &[]).unwrap(),
	];

	let result = CompatibilityChecker::new().check_compatibility(&integrations, None);
	assert_eq!(issue_types(&result), vec![IssueType::InvalidVersionRange, IssueType::VersionConstraintViolation]);
}

#[test]
fn union_range_accepts_any_alternative() {
	let integrations = vec![
		integration("io.example:a", Some("1.0.0"), &[("io.example:b", Some("^1.0.0 || ^3.0.0"))]).unwrap(),
		integration("io.example:b", Some("3.2.0"), &[]).unwrap(),
	];
	assert!(CompatibilityChecker::new().check_compatibility(&integrations, None).issues().is_empty());
}

#[test]
fn check_all_merges_results() {
	let _ = env_logger::builder().is_test(true).try_init();

	let integrations = vec![
		integration("io.example:a", Some("1.0.0"), &[("io.example:b", Some("^1.0.0"))]).unwrap(),
		integration("io.example:b", Some("1.0.0"), &[("io.example:a", None)]).unwrap(),
	];
	let catalog = catalog(&[("io.example:b", "1.0.1")]).unwrap();

	let result = CompatibilityChecker::new().check_all(&integrations, Some(&catalog));
	assert_eq!(issue_types(&result), vec![IssueType::NoVersionConstraint, IssueType::OutdatedPatchVersion, IssueType::CircularDependency]);
	assert!(result.has_errors() && result.has_warnings());
}
