#[test]
fn manifest_and_catalog_from_files() {
	use integra_rs::compatibility::*;

	let (_manifest_dir, manifest_path) = integra_rs_test_utils::write_temp_file("manifest.json", r#"[
		{ "coordinate": "io.example:lamp", "version": "1.2.0", "dependencies": [ { "coordinate": "io.example:hub", "version": "~2.1.0" } ] },
		{ "coordinate": "io.example:hub", "version": "2.1.4" }
	]"#).expect("failed to write manifest.");
	let (_catalog_dir, catalog_path) = integra_rs_test_utils::write_temp_file("catalog.json", r#"[
		{ "coordinate": "io.example:hub", "version": "2.1.4" },
		{ "coordinate": "io.example:hub", "version": "2.2.0" }
	]"#).expect("failed to write catalog.");

	let integrations = integra_rs::manifest::read_integrations_from_file(&manifest_path).expect("failed to read manifest.");
	let catalog = integra_rs::manifest::read_catalog_from_file(&catalog_path).expect("failed to read catalog.");

	let result = CompatibilityChecker::new().check_all(&integrations, Some(&catalog));
	let types = result.issues().iter().map(|i| i.issue_type()).collect::<Vec<_>>();
	assert_eq!(types, vec![IssueType::OutdatedMinorVersion]);
	assert!(result.is_ok());
}

#[test]
fn options_from_file() {
	let (_dir, path) = integra_rs_test_utils::write_temp_file("options.json", r#"{ "flag_duplicates": false }"#).expect("failed to write options.");
	let options = integra_rs::CheckerOptions::load_from_file(path).expect("failed to read options.");
	assert!(!options.flag_duplicates());
	assert!(options.check_outdated());
}

#[test]
fn missing_manifest_is_io_error() {
	let result = integra_rs::manifest::read_integrations_from_file("/nonexistent/manifest.json");
	assert!(matches!(result, Err(integra_rs::Error::IO(_))));
}
