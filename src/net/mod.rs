mod gql;
mod headers;
mod health;
mod root;
mod signals;
mod version;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Extension, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::catalog::Catalog;
use crate::err::Error;
use crate::gql::BookshelfSchema;

const TARGET: &str = "bookshelf::net";

/// Options controlling the HTTP server.
#[derive(Clone, Debug)]
pub struct Options {
	/// The address the server listens on
	pub bind: SocketAddr,
	/// Whether `GET /graphql` serves the GraphiQL console
	pub graphiql: bool,
}

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
	pub catalog: Arc<Catalog>,
	pub schema: BookshelfSchema,
	pub graphiql: bool,
}

/// Builds the application router over the given catalog.
pub fn router(catalog: Arc<Catalog>, graphiql: bool) -> Router {
	let state = AppState {
		schema: crate::gql::build(catalog.clone()),
		catalog,
		graphiql,
	};

	let service = ServiceBuilder::new()
		.layer(CatchPanicLayer::new())
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(
			TraceLayer::new_for_http()
				.make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
				.on_response(DefaultOnResponse::new().level(Level::INFO))
				.on_failure(DefaultOnFailure::new().level(Level::ERROR)),
		)
		.layer(PropagateRequestIdLayer::x_request_id())
		.layer(CorsLayer::permissive())
		.layer(headers::add_server_header())
		.layer(headers::add_version_header());

	Router::new()
		// GraphQL endpoint and console
		.merge(gql::router())
		// Health endpoint
		.merge(health::router())
		// Version endpoint
		.merge(version::router())
		// Every other path
		.fallback(root::fallback)
		.layer(Extension(state))
		.layer(service)
}

/// Serves the catalog until a shutdown signal is received.
pub async fn init(opts: Options, catalog: Arc<Catalog>) -> Result<(), Error> {
	let app = router(catalog, opts.graphiql);
	let listener = TcpListener::bind(opts.bind).await?;
	info!(target: TARGET, "Started web server on {}", listener.local_addr()?);
	if opts.graphiql {
		info!(target: TARGET, "GraphiQL running at http://{}{}", opts.bind, crate::cnf::GRAPHQL_PATH);
	}
	axum::serve(listener, app).with_graceful_shutdown(signals::graceful_shutdown()).await?;
	info!(target: TARGET, "Web server stopped. Bye!");
	Ok(())
}
