use crate::err::Error;

const TARGET: &str = "bookshelf::net";

/// Resolves once a shutdown signal is received, letting in-flight requests
/// finish. A second signal terminates the process immediately.
pub async fn graceful_shutdown() {
	let signal = match listen().await {
		Ok(signal) => signal,
		Err(e) => {
			error!(target: TARGET, "Failed to listen to shutdown signal: {e}");
			return std::future::pending().await;
		}
	};
	info!(target: TARGET, "{signal} received. Waiting for graceful shutdown... A second signal will force an immediate shutdown");
	tokio::spawn(async {
		if let Ok(signal) = listen().await {
			warn!(target: TARGET, "{signal} received during graceful shutdown. Terminate immediately...");
			std::process::exit(1);
		}
	});
}

#[cfg(unix)]
pub async fn listen() -> Result<String, Error> {
	// Import the OS signals
	use tokio::signal::unix::{SignalKind, signal};
	// Get the operating system signal types
	let mut sighup = signal(SignalKind::hangup())?;
	let mut sigint = signal(SignalKind::interrupt())?;
	let mut sigquit = signal(SignalKind::quit())?;
	let mut sigterm = signal(SignalKind::terminate())?;
	// Listen and wait for the system signals
	tokio::select! {
		_ = sighup.recv() => Ok(String::from("SIGHUP")),
		_ = sigint.recv() => Ok(String::from("SIGINT")),
		_ = sigquit.recv() => Ok(String::from("SIGQUIT")),
		_ = sigterm.recv() => Ok(String::from("SIGTERM")),
	}
}

#[cfg(windows)]
pub async fn listen() -> Result<String, Error> {
	// Import the OS signals
	use tokio::signal::windows;
	// Get the operating system signal types
	let mut exit = windows::ctrl_c()?;
	let mut leave = windows::ctrl_break()?;
	let mut close = windows::ctrl_close()?;
	let mut shutdown = windows::ctrl_shutdown()?;
	// Listen and wait for the system signals
	tokio::select! {
		_ = exit.recv() => Ok(String::from("CTRL-C")),
		_ = leave.recv() => Ok(String::from("CTRL-BREAK")),
		_ = close.recv() => Ok(String::from("CTRL-CLOSE")),
		_ = shutdown.recv() => Ok(String::from("CTRL-SHUTDOWN")),
	}
}
