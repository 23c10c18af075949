use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Serialize;

use super::AppState;

pub(super) fn router<S>() -> Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	Router::new().route("/health", get(handler))
}

#[derive(Debug, Serialize)]
struct Health {
	status: &'static str,
	authors: usize,
	books: usize,
}

async fn handler(Extension(state): Extension<AppState>) -> Json<Health> {
	let counts = state.catalog.counts();
	trace!("Health endpoint read {} authors and {} books", counts.authors, counts.books);
	Json(Health {
		status: "ok",
		authors: counts.authors,
		books: counts.books,
	})
}
