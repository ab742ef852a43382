//! Tracing setup for the CLI. Never pulled in by the library crates —
//! logging is a presentation-layer concern, not something a library should
//! impose on its callers.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initializes a stderr subscriber. `RUST_LOG` takes priority; `--log-level`
/// falls back to it when unset, and both fall back to `info`.
pub fn init(log_level: Option<Level>) -> Result<()> {
	let filter = match log_level {
		Some(level) => EnvFilter::new(level.as_str()),
		None => EnvFilter::builder().with_default_directive(Level::INFO.into()).from_env_lossy(),
	};
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init().ok();
	Ok(())
}
