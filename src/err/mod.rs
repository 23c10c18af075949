use std::io::Error as IoError;

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

#[derive(Error, Debug)]
pub enum Error {
	#[error("The log filter '{0}' is invalid: {1}")]
	InvalidLogFilter(String, String),

	#[error("Unable to set up logging: {0}")]
	Logging(#[from] TryInitError),

	#[error("There was a problem with the network: {0}")]
	Io(#[from] IoError),
}
