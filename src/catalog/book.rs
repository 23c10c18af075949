use super::{Author, AuthorId};

/// A stored book. The author is kept as a reference and is only joined
/// with the author record when the book is read.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Book {
	pub title: String,
	pub subtitle: Option<String>,
	pub author: AuthorId,
	pub isbn: String,
	pub year: Option<i32>,
	pub pages: Option<i32>,
	pub description: Option<String>,
}

/// A book joined with the author it references.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedBook {
	pub book: Book,
	/// Absent when the referenced author does not exist
	pub author: Option<Author>,
}
