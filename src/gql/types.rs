use async_graphql::{ID, InputObject, SimpleObject};

use crate::catalog::{self, AuthorId};

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Author {
	pub id: ID,
	pub first_name: Option<String>,
	pub last_name: String,
}

impl From<catalog::Author> for Author {
	fn from(v: catalog::Author) -> Self {
		Self {
			id: ID(v.id.to_string()),
			first_name: v.first_name,
			last_name: v.last_name,
		}
	}
}

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Book {
	pub title: String,
	pub subtitle: Option<String>,
	/// The author record the book references, if it exists
	pub author: Option<Author>,
	pub year: Option<i32>,
	pub isbn: ID,
	pub pages: Option<i32>,
	pub description: Option<String>,
}

impl From<catalog::ResolvedBook> for Book {
	fn from(v: catalog::ResolvedBook) -> Self {
		let catalog::ResolvedBook {
			book,
			author,
		} = v;
		Self {
			title: book.title,
			subtitle: book.subtitle,
			author: author.map(Author::from),
			year: book.year,
			isbn: ID(book.isbn),
			pages: book.pages,
			description: book.description,
		}
	}
}

#[derive(InputObject, Clone, Debug)]
pub struct CreateBookInput {
	pub title: String,
	pub subtitle: Option<String>,
	pub author_id: ID,
	pub year: Option<i32>,
	pub isbn: ID,
	pub pages: Option<i32>,
	pub description: Option<String>,
}

impl TryFrom<CreateBookInput> for catalog::Book {
	type Error = catalog::Error;

	fn try_from(v: CreateBookInput) -> Result<Self, Self::Error> {
		Ok(Self {
			author: v.author_id.parse::<AuthorId>()?,
			title: v.title,
			subtitle: v.subtitle,
			isbn: v.isbn.0,
			year: v.year,
			pages: v.pages,
			description: v.description,
		})
	}
}
