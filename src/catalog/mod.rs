//! The in-memory catalog of books and authors.
//!
//! Books reference their author by id. The reference is joined with the
//! author record on every read and the stored book is never rewritten, so
//! reading the catalog has no side effects and both collections stay
//! independent of each other.

mod author;
mod book;
mod error;
pub mod fixture;

use parking_lot::RwLock;

pub use self::author::{Author, AuthorId, AuthorName};
pub use self::book::{Book, ResolvedBook};
pub use self::error::Error;

const TARGET: &str = "bookshelf::catalog";

/// The number of records held by a catalog.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Counts {
	pub authors: usize,
	pub books: usize,
}

#[derive(Debug, Default)]
pub struct Catalog {
	tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
	authors: Vec<Author>,
	books: Vec<Book>,
}

impl Tables {
	fn author(&self, id: AuthorId) -> Option<&Author> {
		self.authors.iter().find(|author| author.id == id)
	}

	fn book(&self, isbn: &str) -> Option<&Book> {
		self.books.iter().find(|book| book.isbn == isbn)
	}

	fn resolve(&self, book: &Book) -> ResolvedBook {
		ResolvedBook {
			book: book.clone(),
			author: self.author(book.author).cloned(),
		}
	}

	fn insert_author(&mut self, author: Author) -> Result<(), Error> {
		if self.author(author.id).is_some() {
			return Err(Error::DuplicateAuthor(author.id));
		}
		self.authors.push(author);
		Ok(())
	}

	fn insert_book(&mut self, book: Book) -> Result<ResolvedBook, Error> {
		if self.book(&book.isbn).is_some() {
			return Err(Error::DuplicateIsbn(book.isbn));
		}
		if self.author(book.author).is_none() {
			return Err(Error::UnknownAuthor(book.author));
		}
		let resolved = self.resolve(&book);
		self.books.push(book);
		Ok(resolved)
	}

	fn next_author_id(&self) -> AuthorId {
		self.authors.iter().map(|author| author.id).max().map_or(AuthorId(1), AuthorId::next)
	}
}

impl Catalog {
	/// Builds a catalog from existing records, checking that author ids and
	/// ISBNs are unique and that every book references a known author.
	pub fn new(authors: Vec<Author>, books: Vec<Book>) -> Result<Self, Error> {
		let mut tables = Tables::default();
		for author in authors {
			tables.insert_author(author)?;
		}
		for book in books {
			tables.insert_book(book)?;
		}
		Ok(Self {
			tables: RwLock::new(tables),
		})
	}

	/// Builds a catalog seeded with the built-in fixture.
	pub fn with_fixture() -> Result<Self, Error> {
		Self::new(fixture::authors(), fixture::books())
	}

	pub fn counts(&self) -> Counts {
		let tables = self.tables.read();
		Counts {
			authors: tables.authors.len(),
			books: tables.books.len(),
		}
	}

	/// Lists every book, each joined with its author.
	pub fn books(&self) -> Vec<ResolvedBook> {
		let tables = self.tables.read();
		trace!(target: TARGET, books = tables.books.len(), "Listing books");
		tables.books.iter().map(|book| tables.resolve(book)).collect()
	}

	/// Fetches the book with the given ISBN, joined with its author.
	pub fn book(&self, isbn: &str) -> Option<ResolvedBook> {
		let tables = self.tables.read();
		let book = tables.book(isbn).map(|book| tables.resolve(book));
		if book.is_none() {
			debug!(target: TARGET, isbn = %isbn, "No book found");
		}
		book
	}

	pub fn authors(&self) -> Vec<Author> {
		self.tables.read().authors.clone()
	}

	pub fn author(&self, id: AuthorId) -> Option<Author> {
		self.tables.read().author(id).cloned()
	}

	/// Appends a new author, assigning it the next free id.
	pub fn create_author(&self, name: AuthorName) -> Author {
		let mut tables = self.tables.write();
		let author = Author {
			id: tables.next_author_id(),
			first_name: name.first,
			last_name: name.last,
		};
		tables.authors.push(author.clone());
		info!(target: TARGET, id = %author.id, "Created author");
		author
	}

	/// Appends a new book, rejecting duplicate ISBNs and unknown authors.
	pub fn create_book(&self, book: Book) -> Result<ResolvedBook, Error> {
		let isbn = book.isbn.clone();
		match self.tables.write().insert_book(book) {
			Ok(book) => {
				info!(target: TARGET, isbn = %isbn, "Created book");
				Ok(book)
			}
			Err(e) => {
				warn!(target: TARGET, isbn = %isbn, error = %e, "Rejected book");
				Err(e)
			}
		}
	}
}
