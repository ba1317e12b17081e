//! Functions for reading integrations and catalogs from JSON manifests.
//! 
//! A manifest is an array of integrations:
//! ```json
//! [
//! 	{ "coordinate": "io.example:lamp", "version": "1.2.0", "dependencies": [ { "coordinate": "io.example:hub", "version": "^2.0.0" } ] },
//! 	{ "coordinate": "io.example:hub", "version": "2.1.0" }
//! ]
//! ```
//! `version` may be omitted or `null` on both integrations and dependencies.
//! 
//! An integration's own version must be valid, a dependency's range is kept as written
//! so the checker can report it.

use crate::integration::*;
use crate::Version;

fn validate(v: &serde_json::Value) -> crate::Result<()> {
	use crate::Error::Validation;

	let schema_value: serde_json::Value = serde_json::from_str(include_str!("manifest/integration-manifest.schema.json"))?;
	let schema = jsonschema::JSONSchema::compile(&schema_value).map_err(|e| Validation(format!("manifest schema is invalid: {}", e)))?;

	if let Err(errors) = schema.validate(v) {
		let messages = errors.map(|e| format!("{} at {}", e, e.instance_path)).collect::<Vec<_>>();
		return Err(Validation(messages.join("; ")));
	}
	Ok(())
}

fn optional_string(obj: &serde_json::Map<String, serde_json::Value>, key: &str) -> crate::Result<Option<String>> {
	match obj.get(key) {
		None | Some(serde_json::Value::Null) => Ok(None),
		Some(v) => v.as_str()
			.map(|s| Some(s.to_string()))
			.ok_or_else(|| crate::Error::Parse(format!("{} must be a string", key))),
	}
}

fn required_coordinate(obj: &serde_json::Map<String, serde_json::Value>) -> crate::Result<Coordinate> {
	let s = obj.get("coordinate")
		.and_then(|c| c.as_str())
		.ok_or_else(|| crate::Error::Parse("coordinate must be a string".to_string()))?;
	Coordinate::parse(s)
}

impl DependencyInfo {
	pub fn from_json(v: &serde_json::Value) -> crate::Result<Self> {
		let obj = v.as_object().ok_or_else(|| crate::Error::Parse("dependency must be an object".to_string()))?;
		Ok(DependencyInfo::new(required_coordinate(obj)?, optional_string(obj, "version")?))
	}
}

impl IntegrationInfo {
	/// # Errors
	/// - [`Parse`](crate::Error::Parse) when fields have the wrong shape.
	/// - [`MalformedVersion`](crate::Error::MalformedVersion) when the integration's own version is invalid.
	pub fn from_json(v: &serde_json::Value) -> crate::Result<Self> {
		let obj = v.as_object().ok_or_else(|| crate::Error::Parse("integration must be an object".to_string()))?;
		let coordinate = required_coordinate(obj)?;
		let version = optional_string(obj, "version")?.map(Version::parse).transpose()?;

		let dependencies = match obj.get("dependencies") {
			None | Some(serde_json::Value::Null) => vec![],
			Some(serde_json::Value::Array(arr)) => arr.iter().map(DependencyInfo::from_json).collect::<crate::Result<Vec<_>>>()?,
			Some(_) => return Err(crate::Error::Parse(format!("dependencies of {} must be an array", coordinate))),
		};

		Ok(IntegrationInfo { coordinate, version, dependencies })
	}
}

/// Reads the integrations of a manifest, validating it first.
pub fn read_integrations(json: &str) -> crate::Result<Vec<IntegrationInfo>> {
	let v: serde_json::Value = serde_json::from_str(json)?;
	validate(&v)?;

	let arr = v.as_array().ok_or_else(|| crate::Error::Parse("manifest must be an array".to_string()))?;
	let integrations = arr.iter().map(IntegrationInfo::from_json).collect::<crate::Result<Vec<_>>>()?;
	log::debug!("Read {} integrations from manifest", integrations.len());
	Ok(integrations)
}

pub fn read_integrations_from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Vec<IntegrationInfo>> {
	let path = path.as_ref();
	log::debug!("Reading manifest {}", path.display());
	read_integrations(&std::fs::read_to_string(path)?)
}

/// Reads a manifest and groups its integrations into a [`Catalog`].
pub fn read_catalog(json: &str) -> crate::Result<Catalog> {
	Ok(Catalog::from_integrations(read_integrations(json)?))
}

pub fn read_catalog_from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Catalog> {
	Ok(Catalog::from_integrations(read_integrations_from_file(path)?))
}
