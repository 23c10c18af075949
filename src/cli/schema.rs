use std::sync::Arc;

use anyhow::Result;

use crate::catalog::Catalog;
use crate::gql;

pub fn init() -> Result<()> {
	// The definition does not depend on the records held
	let schema = gql::build(Arc::new(Catalog::default()));
	println!("{}", schema.sdl());
	Ok(())
}
