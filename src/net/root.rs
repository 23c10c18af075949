use axum::response::IntoResponse;

use crate::cnf::GREETING;

/// Answers every request which no other route handles.
pub(super) async fn fallback() -> impl IntoResponse {
	GREETING
}
