use serde::*;

/// Options controlling which checks [`CompatibilityChecker`](crate::CompatibilityChecker) performs.
/// 
/// Can be loaded from a JSON file, missing fields take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerOptions {
	flag_duplicates: bool,
	check_outdated: bool,
	check_cycles: bool,
}

impl Default for CheckerOptions {
	fn default() -> Self {
		Self {
			flag_duplicates: true,
			check_outdated: true,
			check_cycles: true,
		}
	}
}

impl CheckerOptions {
	pub fn load_from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
		let path = path.as_ref();
		log::debug!("Loading checker options from {}", path.display());
		let file = std::fs::File::open(path)?;
		Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
	}

	/// Report integrations appearing more than once in the checked set.
	pub fn flag_duplicates(&self) -> bool {
		self.flag_duplicates
	}
	pub fn set_flag_duplicates(&mut self, flag_duplicates: bool) {
		self.flag_duplicates = flag_duplicates;
	}

	/// Compare integrations against the catalog for newer releases.
	pub fn check_outdated(&self) -> bool {
		self.check_outdated
	}
	pub fn set_check_outdated(&mut self, check_outdated: bool) {
		self.check_outdated = check_outdated;
	}

	/// Only consulted by [`check_all()`](crate::CompatibilityChecker::check_all).
	pub fn check_cycles(&self) -> bool {
		self.check_cycles
	}
	pub fn set_check_cycles(&mut self, check_cycles: bool) {
		self.check_cycles = check_cycles;
	}
}
