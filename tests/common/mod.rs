#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use bookshelf::catalog::Catalog;
use bookshelf::net;
use http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// A response with its body fully read.
pub struct Reply {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Vec<u8>,
}

impl Reply {
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}

	pub fn json(&self) -> Value {
		serde_json::from_slice(&self.body).unwrap()
	}
}

/// Builds the application over a freshly seeded catalog.
pub fn app() -> Router {
	app_with(true)
}

pub fn app_with(graphiql: bool) -> Router {
	net::router(Arc::new(Catalog::with_fixture().unwrap()), graphiql)
}

pub async fn send(app: &Router, req: Request<Body>) -> Reply {
	let res = app.clone().oneshot(req).await.unwrap();
	let status = res.status();
	let headers = res.headers().clone();
	let body = res.into_body().collect().await.unwrap().to_bytes().to_vec();
	Reply {
		status,
		headers,
		body,
	}
}

pub async fn get(app: &Router, uri: &str) -> Reply {
	let req = Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap();
	send(app, req).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> Reply {
	let req = Request::builder()
		.method(Method::POST)
		.uri(uri)
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(body.to_string()))
		.unwrap();
	send(app, req).await
}

/// Posts a GraphQL operation and returns the decoded response envelope.
pub async fn graphql(app: &Router, query: &str, variables: Value) -> Value {
	let body = json!({ "query": query, "variables": variables });
	let res = post_json(app, "/graphql", &body).await;
	assert_eq!(res.status, StatusCode::OK, "body: {}", res.text());
	res.json()
}
