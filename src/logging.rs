use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic filter (`EnvFilter` syntax).
pub const LOG_ENV: &str = "FIX_CANVAS_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Builds the diagnostic filter from [`LOG_ENV`], falling back to `warn`.
fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the stderr tracing subscriber.
///
/// Logs never go to stdout, which carries only the `Updated:` lines. Calling
/// this more than once is harmless; later calls leave the first subscriber in
/// place.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
    }
}
