use serde::*;

/// A `group:artifact` identifier naming an integration independent of its version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinate {
	group: String,
	artifact: String,
}

impl Coordinate {
	pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
		Self { group: group.into(), artifact: artifact.into() }
	}

	/// Parses a `group:artifact` string.
	/// 
	/// # Errors
	/// [`Parse`](crate::Error::Parse) when there isn't exactly one `:` or either half is empty.
	pub fn parse(s: impl AsRef<str>) -> crate::Result<Self> {
		let s = s.as_ref().trim();
		match s.split_once(':') {
			Some((group, artifact)) if !group.is_empty() && !artifact.is_empty() && !artifact.contains(':') => {
				Ok(Self::new(group, artifact))
			},
			_ => Err(crate::Error::Parse(format!("\"{}\" is not a group:artifact coordinate", s))),
		}
	}

	pub fn group(&self) -> &str { &self.group }
	pub fn artifact(&self) -> &str { &self.artifact }
}

impl std::fmt::Display for Coordinate {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.group, self.artifact)
	}
}

impl std::str::FromStr for Coordinate {
	type Err = crate::Error;
	fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl TryFrom<String> for Coordinate {
	type Error = crate::Error;
	fn try_from(value: String) -> Result<Self, Self::Error> { Self::parse(value) }
}

impl From<Coordinate> for String {
	fn from(value: Coordinate) -> Self { value.to_string() }
}
