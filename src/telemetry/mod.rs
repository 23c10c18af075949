mod logs;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

use crate::err::Error;

/// The filter used when no log level has been configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// How log lines are written out
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum LogFormat {
	/// Compact, human readable lines
	#[default]
	Text,
	/// One JSON object per line
	Json,
}

#[derive(Debug, Default)]
pub struct Builder {
	filter: Option<EnvFilter>,
	format: LogFormat,
}

pub fn builder() -> Builder {
	Builder::default()
}

/// Parses a log level, or a full set of filter directives, into a filter.
///
/// Besides the usual `EnvFilter` syntax this accepts `none` to disable
/// logging and `full` to enable every level.
pub fn filter_from_value(v: &str) -> Result<EnvFilter, Error> {
	let directives = match v.trim() {
		"none" => "off",
		"full" => "trace",
		v => v,
	};
	EnvFilter::builder()
		.parse(directives)
		.map_err(|e| Error::InvalidLogFilter(v.to_owned(), e.to_string()))
}

impl Builder {
	/// Set the log level on the builder
	pub fn with_log_level(self, log_level: &str) -> Result<Self, Error> {
		Ok(self.with_filter(filter_from_value(log_level)?))
	}

	/// Set the filter on the builder
	pub fn with_filter(mut self, filter: EnvFilter) -> Self {
		self.filter = Some(filter);
		self
	}

	/// Set the output format on the builder
	pub fn with_format(mut self, format: LogFormat) -> Self {
		self.format = format;
		self
	}

	/// Build a tracing dispatcher with the fmt subscriber (logs)
	pub fn build(self) -> Box<dyn Subscriber + Send + Sync + 'static> {
		let filter = self.filter.unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL));
		let registry = tracing_subscriber::registry().with(logs::new(filter, self.format));
		Box::new(registry)
	}

	/// Install the subscriber as the global default
	pub fn init(self) -> Result<(), Error> {
		self.build().try_init()?;
		Ok(())
	}
}
