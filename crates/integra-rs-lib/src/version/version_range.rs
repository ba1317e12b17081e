//! Range expressions constraining which versions a dependency accepts.
//! 
//! # Grammar
//! - `*` matches any version.
//! - `1.2.3` matches exactly that version.
//! - `^1.2.3` matches up to, but excluding, the next major version.
//! - `~1.2.3` matches up to the next minor version, or the next major version when minor and patch are both zero.
//! - `>=1.0.0, <2.0.0` a conjunctive list of comparisons using `>=`, `<=`, `>`, `<`.
//! - `^1.0.0 || ^2.0.0` alternatives, satisfied when any alternative is.
//! 
//! Caret and tilde accept partial versions such as `^1` or `~1.2`, missing components are zero filled.

use std::cmp::Ordering;
use try_map::FallibleMapExt;

use super::Version;

/// A comparison operator used by a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	Eq,
	Gt,
	Ge,
	Lt,
	Le,
}

impl Operator {
	/// Checks the operator against the ordering of a version relative to the bound.
	pub fn holds(&self, ord: Ordering) -> bool {
		match self {
			Operator::Eq => ord == Ordering::Equal,
			Operator::Gt => ord == Ordering::Greater,
			Operator::Ge => ord != Ordering::Less,
			Operator::Lt => ord == Ordering::Less,
			Operator::Le => ord != Ordering::Greater,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Operator::Eq => "=",
			Operator::Gt => ">",
			Operator::Ge => ">=",
			Operator::Lt => "<",
			Operator::Le => "<=",
		}
	}

	/// Splits a leading comparison operator off `s`.
	/// 
	/// Two character operators are checked first so `>=` isn't read as `>`.
	fn strip_prefix(s: &str) -> Option<(Self, &str)> {
		const PREFIXES: [(&str, Operator); 4] = [
			(">=", Operator::Ge),
			("<=", Operator::Le),
			(">", Operator::Gt),
			("<", Operator::Lt),
		];
		PREFIXES.iter().find_map(|(prefix, op)| s.strip_prefix(prefix).map(|rest| (*op, rest)))
	}
}

impl std::fmt::Display for Operator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single comparison against a bound version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
	pub operator: Operator,
	pub bound: Version,
}

impl Constraint {
	pub fn new(operator: Operator, bound: Version) -> Self {
		Self { operator, bound }
	}

	pub fn is_satisfied_by(&self, version: &Version) -> bool {
		self.operator.holds(version.cmp(&self.bound))
	}
}

impl std::fmt::Display for Constraint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}{}", self.operator, self.bound)
	}
}

/// A parsed version range expression.
/// 
/// Each alternative is a conjunction of [`Constraint`]s, an alternative with no constraints matches everything.
/// A version satisfies the range when it satisfies any alternative.
/// 
/// Equality compares the original text, not the constraints it parsed to.
#[derive(Debug, Clone)]
pub struct VersionRange {
	alternatives: Vec<Vec<Constraint>>,
	text: String,
}

impl VersionRange {
	/// Parses a range expression, see the [module documentation](self) for the grammar.
	/// 
	/// # Errors
	/// [`MalformedRange`](crate::Error::MalformedRange) when the expression or any bound version in it is malformed.
	pub fn parse(s: impl AsRef<str>) -> crate::Result<Self> {
		let text = s.as_ref();
		let trimmed = text.trim();
		if trimmed.is_empty() {
			return Err(crate::Error::MalformedRange("range expression is empty".into()))
		}

		let alternatives = if trimmed.contains("||") {
			trimmed.split("||").map(Self::parse_alternative).collect::<crate::Result<Vec<_>>>()?
		} else {
			vec![Self::parse_alternative(trimmed)?]
		};

		Ok(VersionRange { alternatives, text: text.to_string() })
	}

	/// A range matching every version.
	pub fn any() -> Self {
		VersionRange { alternatives: vec![vec![]], text: "*".to_string() }
	}

	fn parse_alternative(s: &str) -> crate::Result<Vec<Constraint>> {
		use crate::Error::MalformedRange;
		let s = s.trim();
		if s.is_empty() {
			return Err(MalformedRange("range alternative is empty".into()))
		}

		if s == "*" {
			Ok(vec![])
		} else if let Some(partial) = s.strip_prefix('^') {
			let lower = Self::normalize_partial(partial)?;
			let upper = Self::upper_bound(&lower, lower.next_major())?;
			Ok(vec![Constraint::new(Operator::Ge, lower), Constraint::new(Operator::Lt, upper)])
		} else if let Some(partial) = s.strip_prefix('~') {
			let lower = Self::normalize_partial(partial)?;
			let upper = if lower.minor() != 0 || lower.patch() != 0 {
				Self::upper_bound(&lower, lower.next_minor())?
			} else {
				Self::upper_bound(&lower, lower.next_major())?
			};
			Ok(vec![Constraint::new(Operator::Ge, lower), Constraint::new(Operator::Lt, upper)])
		} else if s.contains(',') {
			s.split(',').map(|segment| {
				let segment = segment.trim();
				Operator::strip_prefix(segment)
					.ok_or_else(|| MalformedRange(format!("\"{}\" must start with one of >=, <=, >, <", segment)))
					.and_then(|(op, bound)| Self::parse_bound(bound).map(|bound| Constraint::new(op, bound)))
			}).collect()
		} else if let Some((op, bound)) = Operator::strip_prefix(s) {
			Ok(vec![Constraint::new(op, Self::parse_bound(bound)?)])
		} else {
			Ok(vec![Constraint::new(Operator::Eq, Self::parse_bound(s)?)])
		}
	}

	fn parse_bound(s: &str) -> crate::Result<Version> {
		Version::parse(s.trim()).map_err(|e| crate::Error::MalformedRange(e.to_string()))
	}

	fn upper_bound(lower: &Version, bumped: Option<Version>) -> crate::Result<Version> {
		bumped.ok_or_else(|| crate::Error::MalformedRange(format!("no upper bound exists above {}", lower)))
	}

	/// Zero fills `X`, `X.Y` or `X.Y.Z` into a full version.
	fn normalize_partial(s: &str) -> crate::Result<Version> {
		use crate::Error::MalformedRange;
		let s = s.trim();
		let components = s.split('.').collect::<Vec<_>>();
		if components.len() > 3 { return Err(MalformedRange(format!("\"{}\" has too many version components", s))) }

		let parse_component = |c: &str| {
			if c.is_empty() || !c.chars().all(|c| c.is_ascii_digit()) {
				return Err(MalformedRange(format!("\"{}\" is not a partial version", s)))
			}
			c.parse::<u64>().map_err(|_| MalformedRange(format!("\"{}\" component is out of range", c)))
		};

		let major = parse_component(components[0])?;
		let minor = components.get(1).try_map(|c| parse_component(*c))?.unwrap_or(0);
		let patch = components.get(2).try_map(|c| parse_component(*c))?.unwrap_or(0);

		Ok(Version::new(major, minor, patch))
	}

	pub fn satisfies(&self, version: &Version) -> bool {
		self.alternatives.iter().any(|constraints| constraints.iter().all(|c| c.is_satisfied_by(version)))
	}

	/// The highest version in `candidates` satisfying this range.
	pub fn max_satisfying<'a>(&self, candidates: impl IntoIterator<Item = &'a Version>) -> Option<&'a Version> {
		let mut best: Option<&'a Version> = None;
		for candidate in candidates {
			if self.satisfies(candidate) && best.map_or(true, |b| candidate > b) {
				best = Some(candidate);
			}
		}
		best
	}

	/// Constraints of the first alternative.
	pub fn constraints(&self) -> &[Constraint] {
		self.alternatives.first().map(Vec::as_slice).unwrap_or(&[])
	}

	pub fn alternatives(&self) -> &[Vec<Constraint>] {
		&self.alternatives
	}

	pub fn is_any(&self) -> bool {
		self.alternatives.iter().any(Vec::is_empty)
	}

	pub fn as_str(&self) -> &str {
		&self.text
	}
}

impl PartialEq for VersionRange {
	fn eq(&self, other: &Self) -> bool {
		self.text == other.text
	}
}

impl Eq for VersionRange {}

impl std::hash::Hash for VersionRange {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.text.hash(state);
	}
}

impl std::fmt::Display for VersionRange {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.text)
	}
}

impl std::str::FromStr for VersionRange {
	type Err = crate::Error;
	fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl TryFrom<&str> for VersionRange {
	type Error = crate::Error;
	fn try_from(value: &str) -> Result<Self, Self::Error> { Self::parse(value) }
}
