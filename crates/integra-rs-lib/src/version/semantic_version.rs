use std::cmp::Ordering;
use serde::*;

/// A semantic version of an integration.
/// 
/// # Format
/// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`
/// 
/// For example: `1.4.2`, `2.0.0-rc.1`, `1.0.0+20240101`
/// 
/// # Eq & Ord
/// 
/// Build metadata is kept for display but is never considered by `Eq`, `Ord` or `Hash`.
/// A pre-release sorts below the stable release with the same `MAJOR.MINOR.PATCH`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
	major: u64,
	minor: u64,
	patch: u64,
	pre_release: Option<String>,
	build_metadata: Option<String>,
}

impl Version {
	pub fn new(major: u64, minor: u64, patch: u64) -> Self {
		Version { major, minor, patch, pre_release: None, build_metadata: None }
	}

	/// Create a new [`Version`] from a version string.
	/// 
	/// Build metadata is split off at the first `+`, then the pre-release at the first `-` of what remains.
	/// 
	/// # Errors
	/// This function will return a [`MalformedVersion`](crate::Error::MalformedVersion) error in the following cases.
	/// - Input is empty.
	/// - Input doesn't have exactly three numeric components.
	/// - A component can't be parsed as a non-negative integer.
	/// - The pre-release or build metadata is present but empty, or a pre-release identifier is not alphanumeric.
	pub fn parse(s: impl AsRef<str>) -> crate::Result<Self> {
		use crate::Error::MalformedVersion;
		let original = s.as_ref();
		let s = original.trim();
		if s.is_empty() { return Err(MalformedVersion("version string is empty".into())) }

		let (s, build_metadata) = match s.split_once('+') {
			Some((rest, build)) => {
				if build.is_empty() { return Err(MalformedVersion(format!("\"{}\" has empty build metadata", original))) }
				(rest, Some(build.to_string()))
			},
			None => (s, None),
		};

		let (s, pre_release) = match s.split_once('-') {
			Some((rest, pre)) => {
				Self::validate_pre_release(pre).map_err(|e| MalformedVersion(format!("\"{}\" {}", original, e)))?;
				(rest, Some(pre.to_string()))
			},
			None => (s, None),
		};

		let components = s.split('.').collect::<Vec<_>>();
		if components.len() != 3 {
			return Err(MalformedVersion(format!("\"{}\" must have exactly 3 numeric components", original)))
		}

		let parse_component = |name: &str, c: &str| {
			if c.is_empty() || !c.chars().all(|c| c.is_ascii_digit()) {
				return Err(MalformedVersion(format!("{} version \"{}\" can't be parsed", name, c)))
			}
			c.parse::<u64>().map_err(|_| MalformedVersion(format!("{} version \"{}\" is out of range", name, c)))
		};

		let major = parse_component("major", components[0])?;
		let minor = parse_component("minor", components[1])?;
		let patch = parse_component("patch", components[2])?;

		Ok(Version { major, minor, patch, pre_release, build_metadata })
	}

	fn validate_pre_release(pre: &str) -> std::result::Result<(), String> {
		if pre.is_empty() { return Err("has an empty pre-release".into()) }
		for identifier in pre.split('.') {
			if identifier.is_empty() {
				return Err("has an empty pre-release identifier".into())
			}
			if !identifier.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
				return Err(format!("has an invalid pre-release identifier \"{}\"", identifier))
			}
		}
		Ok(())
	}

	pub fn with_pre_release(mut self, pre_release: impl AsRef<str>) -> crate::Result<Self> {
		let pre = pre_release.as_ref();
		Self::validate_pre_release(pre).map_err(|e| crate::Error::MalformedVersion(format!("\"{}\" {}", pre, e)))?;
		self.pre_release = Some(pre.to_string());
		Ok(self)
	}

	pub fn with_build_metadata(mut self, build_metadata: impl Into<String>) -> Self {
		self.build_metadata = Some(build_metadata.into());
		self
	}

	pub fn major(&self) -> u64 { self.major }
	pub fn minor(&self) -> u64 { self.minor }
	pub fn patch(&self) -> u64 { self.patch }
	pub fn pre_release(&self) -> Option<&str> { self.pre_release.as_deref() }
	pub fn build_metadata(&self) -> Option<&str> { self.build_metadata.as_deref() }

	pub fn is_pre_release(&self) -> bool { self.pre_release.is_some() }

	/// `None` when the bumped component would overflow.
	pub fn next_major(&self) -> Option<Self> { Some(Version::new(self.major.checked_add(1)?, 0, 0)) }
	pub fn next_minor(&self) -> Option<Self> { Some(Version::new(self.major, self.minor.checked_add(1)?, 0)) }
	pub fn next_patch(&self) -> Option<Self> { Some(Version::new(self.major, self.minor, self.patch.checked_add(1)?)) }

	/// Quick compatibility probe, only the major components have to match.
	/// 
	/// This is coarser than range satisfaction and should not be used to validate dependencies.
	pub fn is_compatible_with(&self, other: &Self) -> bool {
		self.major == other.major
	}

	/// `true` when `min <= self < max`
	pub fn is_in_range(&self, min: &Self, max: &Self) -> bool {
		self >= min && self < max
	}
}

/// Compares two pre-release strings identifier by identifier.
fn compare_pre_release(lhs: &str, rhs: &str) -> Ordering {
	fn is_numeric(s: &str) -> bool { s.chars().all(|c| c.is_ascii_digit()) }

	/* Compared by digit count first so arbitrarily long identifiers can't overflow */
	fn compare_numeric(lhs: &str, rhs: &str) -> Ordering {
		let lhs = lhs.trim_start_matches('0');
		let rhs = rhs.trim_start_matches('0');
		lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
	}

	let mut lhs_ids = lhs.split('.');
	let mut rhs_ids = rhs.split('.');
	loop {
		match (lhs_ids.next(), rhs_ids.next()) {
			(None, None) => return Ordering::Equal,
			(None, Some(_)) => return Ordering::Less,
			(Some(_), None) => return Ordering::Greater,
			(Some(l), Some(r)) => {
				let ord = match (is_numeric(l), is_numeric(r)) {
					(true, true) => compare_numeric(l, r),
					(true, false) => Ordering::Less,
					(false, true) => Ordering::Greater,
					(false, false) => l.cmp(r),
				};
				if ord != Ordering::Equal { return ord }
			},
		}
	}
}

impl Ord for Version {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch)) {
			Ordering::Equal => {},
			ord => return ord,
		}

		match (&self.pre_release, &other.pre_release) {
			(None, None) => Ordering::Equal,
			(None, Some(_)) => Ordering::Greater,
			(Some(_), None) => Ordering::Less,
			(Some(lhs), Some(rhs)) => compare_pre_release(lhs, rhs),
		}
	}
}

impl PartialOrd for Version {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl PartialEq for Version {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Version {}

impl std::hash::Hash for Version {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.major.hash(state);
		self.minor.hash(state);
		self.patch.hash(state);
		/* Numeric identifiers are hashed without leading zeros to agree with `Eq` */
		if let Some(pre) = &self.pre_release {
			for identifier in pre.split('.') {
				if identifier.chars().all(|c| c.is_ascii_digit()) {
					identifier.trim_start_matches('0').hash(state);
				} else {
					identifier.hash(state);
				}
			}
		}
	}
}

impl std::fmt::Display for Version {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
		if let Some(pre) = &self.pre_release {
			write!(f, "-{}", pre)?;
		}
		if let Some(build) = &self.build_metadata {
			write!(f, "+{}", build)?;
		}
		Ok(())
	}
}

impl std::str::FromStr for Version {
	type Err = crate::Error;
	fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl TryFrom<&str> for Version {
	type Error = crate::Error;
	fn try_from(value: &str) -> Result<Self, Self::Error> { Self::parse(value) }
}

impl TryFrom<String> for Version {
	type Error = crate::Error;
	fn try_from(value: String) -> Result<Self, Self::Error> { Self::parse(value) }
}

impl From<Version> for String {
	fn from(value: Version) -> Self { value.to_string() }
}
