//! A GraphQL server over an in-memory catalog of books and authors.
//!
//! The binary calls [`init`], which parses the command line and starts the
//! server. The [`net::router`] is public so the HTTP surface can be driven
//! without binding a socket.

#[macro_use]
extern crate tracing;

#[macro_use]
mod mac;

pub mod catalog;
mod cli;
pub mod cnf;
pub mod err;
pub mod gql;
pub mod net;
mod telemetry;

use std::process::ExitCode;

/// Runs the command line on a multi-threaded runtime.
pub fn init() -> ExitCode {
	let mut b = tokio::runtime::Builder::new_multi_thread();
	b.enable_all().worker_threads(*cnf::RUNTIME_WORKER_THREADS).thread_name("bookshelf-worker");
	// Nothing has set up logging yet, so errors go straight to stderr
	match b.build() {
		Ok(rt) => rt.block_on(cli::init()),
		Err(e) => {
			eprintln!("Failed to build runtime: {e}");
			ExitCode::FAILURE
		}
	}
}
