use async_graphql::ErrorExtensions;

use crate::catalog;

const TARGET: &str = "bookshelf::gql";

/// Catalog errors are returned to the client with a stable
/// `extensions.code` next to the human readable message.
impl From<catalog::Error> for async_graphql::Error {
	fn from(e: catalog::Error) -> Self {
		debug!(target: TARGET, code = e.code(), "Resolver error: {e}");
		async_graphql::Error::new(e.to_string()).extend_with(|_, ext| ext.set("code", e.code()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::AuthorId;

	#[test]
	fn carries_error_code() {
		let err = async_graphql::Error::from(catalog::Error::UnknownAuthor(AuthorId(9)));
		assert_eq!(err.message, "The author with the id '9' does not exist");
		let json = serde_json::to_value(err.extensions.unwrap()).unwrap();
		assert_eq!(json["code"], "UNKNOWN_AUTHOR");
	}
}
