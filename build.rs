use std::process::Command;
use std::{env, str};

use semver::BuildMetadata;

const BUILD_METADATA: &str = "BOOKSHELF_BUILD_METADATA";

fn main() {
	println!("cargo:rerun-if-env-changed={BUILD_METADATA}");
	println!("cargo:rerun-if-changed=src");
	println!("cargo:rerun-if-changed=build.rs");
	println!("cargo:rerun-if-changed=Cargo.toml");
	if let Some(metadata) = build_metadata() {
		println!("cargo:rustc-env={BUILD_METADATA}={metadata}");
	}
}

/// Explicit metadata wins, otherwise fall back to `<commit date>.<short rev>`
/// when building from a git checkout.
fn build_metadata() -> Option<String> {
	if let Ok(input) = env::var(BUILD_METADATA) {
		let metadata = input.trim();
		if let Err(error) = BuildMetadata::new(metadata) {
			panic!("invalid build metadata `{input}`: {error}");
		}
		return Some(metadata.to_owned());
	}
	let date = git(&["show", "--no-patch", "--format=%ad", "--date=format:%Y%m%d"])?;
	let rev = git(&["rev-parse", "--short", "HEAD"])?;
	let dirty = Command::new("git")
		.args(["diff", "--quiet"])
		.output()
		.map(|output| !output.status.success())
		.unwrap_or_default();
	match dirty {
		true => Some(format!("{date}.{rev}.dirty")),
		false => Some(format!("{date}.{rev}")),
	}
}

fn git(args: &[&str]) -> Option<String> {
	let output = Command::new("git").args(args).output().ok()?;
	if !output.status.success() {
		return None;
	}
	let output = str::from_utf8(&output.stdout).ok()?.trim();
	(!output.is_empty()).then(|| output.to_owned())
}
