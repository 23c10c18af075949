use std::env::consts::{ARCH, OS};

use anyhow::Result;

use crate::cnf::{PKG_NAME, PKG_VERSION};

pub fn init() -> Result<()> {
	println!("{} {} for {} on {}", PKG_NAME, *PKG_VERSION, OS, ARCH);
	Ok(())
}
