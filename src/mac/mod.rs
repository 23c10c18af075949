/// Lazily parses a value from an environment variable, falling back to a
/// default when the variable is unset or fails to parse.
///
/// # Parameters
///
/// - `$key`: the name of the environment variable.
/// - `$t`: the type the value is parsed into.
/// - `$default`: the fallback value, either an expression or a closure.
///
/// The result is a `std::sync::LazyLock` holding the parsed value.
#[macro_export]
macro_rules! lazy_env_parse {
	// With no default specified
	($key:expr_2021, $t:ty) => {
		std::sync::LazyLock::new(|| {
			std::env::var($key).ok().and_then(|s| s.trim().parse::<$t>().ok()).unwrap_or_default()
		})
	};
	// With a closure for the default value
	($key:expr_2021, $t:ty, || $default:expr_2021) => {
		std::sync::LazyLock::new(|| {
			std::env::var($key)
				.ok()
				.and_then(|s| s.trim().parse::<$t>().ok())
				.unwrap_or_else(|| $default)
		})
	};
	// With a static expression for the default value
	($key:expr_2021, $t:ty, $default:expr_2021) => {
		std::sync::LazyLock::new(|| {
			std::env::var($key).ok().and_then(|s| s.trim().parse::<$t>().ok()).unwrap_or($default)
		})
	};
}
