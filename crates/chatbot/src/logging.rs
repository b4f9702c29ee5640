use tracing_subscriber::{fmt, EnvFilter};

/// Level used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Install the stderr log subscriber. `RUST_LOG` overrides the level.
///
/// Calling it twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let installed = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
    if installed.is_err() {
        tracing::debug!("log subscriber already installed");
    }
}
