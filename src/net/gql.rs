use async_graphql::http::{GraphiQLSource, parse_query_string};
use async_graphql_axum::rejection::GraphQLRejection;
use async_graphql_axum::{GraphQLBatchRequest, GraphQLResponse};
use axum::extract::RawQuery;
use axum::response::{self, IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Router};
use http::StatusCode;

use super::AppState;
use crate::cnf::GRAPHQL_PATH;

const MISSING_QUERY: &str = "A GraphQL query must be sent in the request body or the `query` parameter";

pub(super) fn router<S>() -> Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	Router::new().route(GRAPHQL_PATH, get(get_handler).post(post_handler))
}

/// Serves the console to browsers, or executes a query passed in the URL.
async fn get_handler(Extension(state): Extension<AppState>, RawQuery(raw): RawQuery) -> Response {
	let req = match parse_query_string(raw.as_deref().unwrap_or_default()) {
		Ok(req) => req,
		Err(e) => return GraphQLRejection(e).into_response(),
	};
	if req.query.trim().is_empty() {
		return match state.graphiql {
			true => graphiql().await.into_response(),
			false => (StatusCode::BAD_REQUEST, MISSING_QUERY).into_response(),
		};
	}
	GraphQLResponse::from(state.schema.execute(req).await).into_response()
}

async fn post_handler(
	Extension(state): Extension<AppState>,
	req: GraphQLBatchRequest,
) -> GraphQLResponse {
	state.schema.execute_batch(req.into_inner()).await.into()
}

pub async fn graphiql() -> impl IntoResponse {
	response::Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
