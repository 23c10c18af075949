use std::fmt::{self, Display};
use std::str::FromStr;

use super::Error;

/// The numeric identifier of an author.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AuthorId(pub u64);

impl AuthorId {
	/// The identifier which follows this one
	pub fn next(self) -> Self {
		AuthorId(self.0 + 1)
	}
}

impl Display for AuthorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl From<u64> for AuthorId {
	fn from(v: u64) -> Self {
		AuthorId(v)
	}
}

/// The largest integer a client-side number holds exactly (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Identifiers arrive as strings over the wire and are read as numbers, so
/// `" 2 "`, `"+2"`, `"2.0"` and `"2e0"` all parse to the same id.
impl FromStr for AuthorId {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let v = s.trim();
		if let Ok(id) = v.parse::<u64>() {
			return Ok(AuthorId(id));
		}
		// Only whole, non-negative numbers can name an author
		match v.parse::<f64>() {
			Ok(n) if n.is_finite() && n.fract() == 0.0 && (0.0..=MAX_EXACT_INTEGER).contains(&n) => {
				Ok(AuthorId(n as u64))
			}
			_ => Err(Error::InvalidAuthorId(s.to_owned())),
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Author {
	pub id: AuthorId,
	pub first_name: Option<String>,
	pub last_name: String,
}

/// A structured author name, parsed from a single free-text name.
///
/// The last whitespace-separated word is the last name and everything
/// before it is the first name, so `"Nicholas C. Zakas"` splits into
/// `"Nicholas C."` and `"Zakas"`. A single word only sets the last name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorName {
	pub first: Option<String>,
	pub last: String,
}

impl FromStr for AuthorName {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let name = s.trim();
		if name.is_empty() {
			return Err(Error::EmptyAuthorName);
		}
		let (first, last) = match name.rsplit_once(char::is_whitespace) {
			Some((first, last)) => (Some(first.trim_end().to_owned()), last),
			None => (None, name),
		};
		Ok(AuthorName {
			first,
			last: last.to_owned(),
		})
	}
}
