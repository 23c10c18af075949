use std::sync::LazyLock;

pub const LOGO: &str = "
 _                 _        _          _  __
| |__   ___   ___ | | _____| |__   ___| |/ _|
| '_ \\ / _ \\ / _ \\| |/ / __| '_ \\ / _ \\ | |_
| |_) | (_) | (_) |   <\\__ \\ | | |  __/ |  _|
|_.__/ \\___/ \\___/|_|\\_\\___/_| |_|\\___|_|_|

";

/// The publicly visible name of the server
pub const PKG_NAME: &str = "bookshelf";

/// The value sent in the `server` response header
pub const SERVER_NAME: &str = "Bookshelf";

/// The response header carrying the server version
pub const VERSION_HEADER: &str = "bookshelf-version";

/// The address the server listens on when nothing else is configured
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// The path of the GraphQL endpoint and console
pub const GRAPHQL_PATH: &str = "/graphql";

/// The body returned for every path which is not otherwise routed
pub const GREETING: &str = "Hello, World";

/// The maximum nesting depth of an accepted GraphQL query (defaults to 16)
pub static GRAPHQL_MAX_DEPTH: LazyLock<usize> =
	lazy_env_parse!("BOOKSHELF_GRAPHQL_MAX_DEPTH", usize, 16);

/// The maximum complexity of an accepted GraphQL query (defaults to 256)
pub static GRAPHQL_MAX_COMPLEXITY: LazyLock<usize> =
	lazy_env_parse!("BOOKSHELF_GRAPHQL_MAX_COMPLEXITY", usize, 256);

/// The version identifier of this build
pub static PKG_VERSION: LazyLock<String> =
	LazyLock::new(|| match option_env!("BOOKSHELF_BUILD_METADATA") {
		Some(metadata) if !metadata.trim().is_empty() => {
			let version = env!("CARGO_PKG_VERSION");
			format!("{version}+{metadata}")
		}
		_ => env!("CARGO_PKG_VERSION").to_owned(),
	});

/// The number of worker threads in the async runtime (defaults to the number of CPUs)
pub static RUNTIME_WORKER_THREADS: LazyLock<usize> =
	lazy_env_parse!("BOOKSHELF_RUNTIME_WORKER_THREADS", usize, || {
		std::thread::available_parallelism().map_or(1, |n| n.get())
	});
