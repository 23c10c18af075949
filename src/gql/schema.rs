use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Result, Schema};

use super::types::{Author, Book, CreateBookInput};
use crate::catalog::{self, AuthorId, AuthorName, Catalog};
use crate::cnf::{GRAPHQL_MAX_COMPLEXITY, GRAPHQL_MAX_DEPTH};

pub type BookshelfSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builds the schema, handing it the catalog every resolver reads from.
pub fn build(catalog: Arc<Catalog>) -> BookshelfSchema {
	Schema::build(Query, Mutation, EmptySubscription)
		.data(catalog)
		.limit_depth(*GRAPHQL_MAX_DEPTH)
		.limit_complexity(*GRAPHQL_MAX_COMPLEXITY)
		.finish()
}

fn catalog<'a>(ctx: &Context<'a>) -> Result<&'a Arc<Catalog>> {
	ctx.data::<Arc<Catalog>>()
}

#[derive(Default)]
pub struct Query;

#[Object]
impl Query {
	/// Every book in the catalog
	async fn get_books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
		Ok(catalog(ctx)?.books().into_iter().map(Book::from).collect())
	}

	/// The book with the given ISBN
	async fn get_book(&self, ctx: &Context<'_>, isbn: ID) -> Result<Option<Book>> {
		Ok(catalog(ctx)?.book(&isbn).map(Book::from))
	}

	/// Every author in the catalog
	async fn get_authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
		Ok(catalog(ctx)?.authors().into_iter().map(Author::from).collect())
	}

	/// The author with the given id
	async fn get_author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
		// An id which is not a number can never match
		let Ok(id) = id.parse::<AuthorId>() else {
			return Ok(None);
		};
		Ok(catalog(ctx)?.author(id).map(Author::from))
	}
}

#[derive(Default)]
pub struct Mutation;

#[Object]
impl Mutation {
	/// Creates an author from a single name, split on its last whitespace
	/// into a first and a last name
	async fn create_author(&self, ctx: &Context<'_>, name: Option<String>) -> Result<Author> {
		let name: AuthorName = name.as_deref().unwrap_or_default().parse()?;
		Ok(catalog(ctx)?.create_author(name).into())
	}

	async fn create_book(&self, ctx: &Context<'_>, input: CreateBookInput) -> Result<Book> {
		let book: catalog::Book = input.try_into()?;
		Ok(catalog(ctx)?.create_book(book)?.into())
	}
}

#[cfg(test)]
mod tests {
	use serde_json::{Value, json};
	use test_log::test;

	use super::*;

	fn schema() -> BookshelfSchema {
		build(Arc::new(Catalog::with_fixture().unwrap()))
	}

	async fn execute(schema: &BookshelfSchema, query: &str) -> Value {
		let res = schema.execute(query).await;
		serde_json::to_value(&res).unwrap()
	}

	#[test(tokio::test)]
	async fn book_author_is_a_full_record() {
		let schema = schema();
		let res = execute(
			&schema,
			r#"{ getBook(isbn: "9781593279509") { isbn author { id firstName lastName } } }"#,
		)
		.await;
		assert_eq!(
			res,
			json!({
				"data": {
					"getBook": {
						"isbn": "9781593279509",
						"author": { "id": "1", "firstName": "Marijn", "lastName": "Haverbeke" }
					}
				}
			})
		);
	}

	#[test(tokio::test)]
	async fn missing_book_is_null() {
		let schema = schema();
		let res = execute(&schema, r#"{ getBook(isbn: "nope") { title } }"#).await;
		assert_eq!(res, json!({ "data": { "getBook": null } }));
	}

	#[test(tokio::test)]
	async fn listing_books_twice_is_identical() {
		let schema = schema();
		let query = "{ getBooks { title isbn year pages author { id lastName } } }";
		let first = execute(&schema, query).await;
		let second = execute(&schema, query).await;
		assert_eq!(first, second);
		let books = first["data"]["getBooks"].as_array().unwrap();
		assert_eq!(books.len(), 3);
		assert!(books.iter().all(|book| book["author"]["id"].is_string()));
	}

	#[test(tokio::test)]
	async fn author_id_accepts_numeric_strings() {
		let schema = schema();
		let res = execute(&schema, r#"{ getAuthor(id: "2") { id firstName lastName } }"#).await;
		assert_eq!(
			res,
			json!({
				"data": {
					"getAuthor": { "id": "2", "firstName": "Nicolás", "lastName": "Bevacqua" }
				}
			})
		);
	}

	#[test(tokio::test)]
	async fn author_id_accepts_integer_literals() {
		let schema = schema();
		let res = execute(&schema, "{ getAuthor(id: 3) { lastName } }").await;
		assert_eq!(res, json!({ "data": { "getAuthor": { "lastName": "Zakas" } } }));
	}

	#[test(tokio::test)]
	async fn unknown_or_malformed_author_is_null() {
		let schema = schema();
		let res = execute(
			&schema,
			r#"{ missing: getAuthor(id: "4") { id } malformed: getAuthor(id: "two") { id } }"#,
		)
		.await;
		assert_eq!(res, json!({ "data": { "missing": null, "malformed": null } }));
	}

	#[test(tokio::test)]
	async fn listing_authors() {
		let schema = schema();
		let res = execute(&schema, "{ getAuthors { id } }").await;
		assert_eq!(
			res,
			json!({ "data": { "getAuthors": [{ "id": "1" }, { "id": "2" }, { "id": "3" }] } })
		);
	}

	#[test(tokio::test)]
	async fn created_author_can_be_fetched() {
		let schema = schema();
		let res = execute(
			&schema,
			r#"mutation { createAuthor(name: "Jim Blandy") { id firstName lastName } }"#,
		)
		.await;
		assert_eq!(
			res,
			json!({
				"data": {
					"createAuthor": { "id": "4", "firstName": "Jim", "lastName": "Blandy" }
				}
			})
		);
		let res = execute(&schema, r#"{ getAuthor(id: "4") { lastName } }"#).await;
		assert_eq!(res, json!({ "data": { "getAuthor": { "lastName": "Blandy" } } }));
	}

	#[test(tokio::test)]
	async fn author_without_name_is_rejected() {
		let catalog = Arc::new(Catalog::with_fixture().unwrap());
		let schema = build(catalog.clone());
		let res = execute(&schema, "mutation { createAuthor { id } }").await;
		assert_eq!(res["data"], Value::Null);
		assert_eq!(res["errors"][0]["extensions"]["code"], "EMPTY_AUTHOR_NAME");
		assert_eq!(catalog.counts().authors, 3);
	}

	#[test(tokio::test)]
	async fn created_book_can_be_fetched() {
		let schema = schema();
		let res = execute(
			&schema,
			r#"mutation {
				createBook(input: {
					title: "Eloquent JavaScript, Fourth Edition",
					authorId: "1",
					isbn: "9781718504103",
					year: 2024,
					pages: 456
				}) { title isbn author { lastName } }
			}"#,
		)
		.await;
		assert_eq!(
			res,
			json!({
				"data": {
					"createBook": {
						"title": "Eloquent JavaScript, Fourth Edition",
						"isbn": "9781718504103",
						"author": { "lastName": "Haverbeke" }
					}
				}
			})
		);
		let res = execute(&schema, r#"{ getBook(isbn: "9781718504103") { year pages subtitle } }"#)
			.await;
		assert_eq!(
			res,
			json!({ "data": { "getBook": { "year": 2024, "pages": 456, "subtitle": null } } })
		);
	}

	#[test(tokio::test)]
	async fn duplicate_isbn_is_rejected() {
		let schema = schema();
		let res = execute(
			&schema,
			r#"mutation {
				createBook(input: { title: "Again", authorId: "1", isbn: "9781593279509" }) { isbn }
			}"#,
		)
		.await;
		assert_eq!(res["errors"][0]["extensions"]["code"], "DUPLICATE_ISBN");
		assert_eq!(res["errors"][0]["path"], json!(["createBook"]));
	}

	#[test(tokio::test)]
	async fn unknown_author_is_rejected() {
		let schema = schema();
		let res = execute(
			&schema,
			r#"mutation {
				createBook(input: { title: "Orphan", authorId: "99", isbn: "1" }) { isbn }
			}"#,
		)
		.await;
		assert_eq!(res["errors"][0]["extensions"]["code"], "UNKNOWN_AUTHOR");
		let res = execute(&schema, r#"{ getBook(isbn: "1") { isbn } }"#).await;
		assert_eq!(res, json!({ "data": { "getBook": null } }));
	}

	#[test(tokio::test)]
	async fn malformed_author_id_is_rejected() {
		let schema = schema();
		let res = execute(
			&schema,
			r#"mutation {
				createBook(input: { title: "Orphan", authorId: "one", isbn: "1" }) { isbn }
			}"#,
		)
		.await;
		assert_eq!(res["errors"][0]["extensions"]["code"], "INVALID_AUTHOR_ID");
	}

	#[test]
	fn sdl_exposes_operations() {
		let sdl = schema().sdl();
		for field in [
			"getBooks: [Book!]!",
			"getBook(isbn: ID!): Book",
			"getAuthors: [Author!]!",
			"getAuthor(id: ID!): Author",
			"createAuthor(name: String): Author!",
			"createBook(input: CreateBookInput!): Book!",
		] {
			assert!(sdl.contains(field), "missing `{field}` in:\n{sdl}");
		}
	}
}
