use tracing_subscriber::filter::{LevelFilter, ParseError};
use tracing_subscriber::EnvFilter;

/// Target of the startup and shutdown events in [`crate::listener`].
const LISTENER_DIRECTIVE: &str = "greeter_server::listener=info";

/// Build the log filter from `RUST_LOG`.
///
/// # Errors
///
/// Returns an error if the listener directive fails to parse.
pub fn env_filter() -> Result<EnvFilter, ParseError> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    build_filter(&directives)
}

/// Build the log filter from `directives`, falling back to `info` when empty.
///
/// The listener's `info` events stay enabled whatever `directives` says, so
/// the startup line is always printed.
///
/// # Errors
///
/// Returns an error if the listener directive fails to parse.
pub fn build_filter(directives: &str) -> Result<EnvFilter, ParseError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
        .add_directive(LISTENER_DIRECTIVE.parse()?);
    Ok(filter)
}
