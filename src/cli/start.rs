use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Args;

use crate::catalog::Catalog;
use crate::cnf::{DEFAULT_BIND, LOGO};
use crate::net;
use crate::telemetry::{self, DEFAULT_LOG_LEVEL, LogFormat};

const TARGET: &str = "bookshelf::cli";

#[derive(Args, Debug)]
pub struct StartCommandArguments {
	#[arg(help = "The hostname or ip address to listen for connections on")]
	#[arg(env = "BOOKSHELF_BIND", short = 'b', long = "bind")]
	#[arg(default_value = DEFAULT_BIND)]
	pub(super) listen_address: SocketAddr,
	#[arg(help = "The logging level, or a list of filter directives, for the server")]
	#[arg(env = "BOOKSHELF_LOG", short = 'l', long = "log")]
	#[arg(default_value = DEFAULT_LOG_LEVEL)]
	pub(super) log: String,
	#[arg(help = "The format of the log output")]
	#[arg(env = "BOOKSHELF_LOG_FORMAT", long = "log-format", value_enum)]
	#[arg(default_value = "text")]
	pub(super) log_format: LogFormat,
	#[arg(help = "Whether to disable the GraphiQL console on the GraphQL endpoint")]
	#[arg(env = "BOOKSHELF_NO_GRAPHIQL", long = "no-graphiql")]
	#[arg(default_value_t = false)]
	pub(super) no_graphiql: bool,
	#[arg(help = "Whether to hide the startup banner")]
	#[arg(env = "BOOKSHELF_NO_BANNER", long = "no-banner")]
	#[arg(default_value_t = false)]
	pub(super) no_banner: bool,
}

pub async fn init(
	StartCommandArguments {
		listen_address,
		log,
		log_format,
		no_graphiql,
		no_banner,
	}: StartCommandArguments,
) -> Result<()> {
	// Initialize logging
	telemetry::builder().with_log_level(&log)?.with_format(log_format).init()?;
	// Check if a banner should be outputted
	if !no_banner {
		println!("{LOGO}");
	}
	// Load the catalog fixture
	let catalog =
		Arc::new(Catalog::with_fixture().context("Failed to load the catalog fixture")?);
	let counts = catalog.counts();
	info!(target: TARGET, authors = counts.authors, books = counts.books, "Loaded catalog");
	// Start the web server
	let opts = net::Options {
		bind: listen_address,
		graphiql: !no_graphiql,
	};
	net::init(opts, catalog).await?;
	Ok(())
}
