use http::HeaderValue;
use http::header::{HeaderName, SERVER};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::cnf::{PKG_NAME, PKG_VERSION, SERVER_NAME, VERSION_HEADER};

pub fn add_version_header() -> SetResponseHeaderLayer<HeaderValue> {
	let val = format!("{PKG_NAME}-{}", *PKG_VERSION);
	let val = HeaderValue::try_from(val)
		.unwrap_or_else(|_| HeaderValue::from_static(env!("CARGO_PKG_VERSION")));
	SetResponseHeaderLayer::if_not_present(HeaderName::from_static(VERSION_HEADER), val)
}

pub fn add_server_header() -> SetResponseHeaderLayer<HeaderValue> {
	SetResponseHeaderLayer::if_not_present(SERVER, HeaderValue::from_static(SERVER_NAME))
}
