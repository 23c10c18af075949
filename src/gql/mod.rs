//! The GraphQL schema served over the catalog.

mod error;
mod schema;
mod types;

pub use self::schema::{BookshelfSchema, Mutation, Query, build};
pub use self::types::{Author, Book, CreateBookInput};
