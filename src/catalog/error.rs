use thiserror::Error;

use super::AuthorId;

/// An error raised by the catalog when a write would break one of its invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	#[error("A book with the ISBN '{0}' already exists")]
	DuplicateIsbn(String),

	#[error("An author with the id '{0}' already exists")]
	DuplicateAuthor(AuthorId),

	#[error("The author with the id '{0}' does not exist")]
	UnknownAuthor(AuthorId),

	#[error("The value '{0}' is not a valid author id")]
	InvalidAuthorId(String),

	#[error("An author name must contain at least a last name")]
	EmptyAuthorName,
}

impl Error {
	/// A stable, machine-readable code for this error
	pub fn code(&self) -> &'static str {
		match self {
			Error::DuplicateIsbn(_) => "DUPLICATE_ISBN",
			Error::DuplicateAuthor(_) => "DUPLICATE_AUTHOR",
			Error::UnknownAuthor(_) => "UNKNOWN_AUTHOR",
			Error::InvalidAuthorId(_) => "INVALID_AUTHOR_ID",
			Error::EmptyAuthorName => "EMPTY_AUTHOR_NAME",
		}
	}
}
