// Logging setup for the binary: a tracing fmt subscriber on stderr.
// INFO by default, DEBUG with --debug; RUST_LOG directives still apply on top.

use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// Level selected by the --debug flag.
pub fn level(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

// Install the global subscriber. Calling it twice keeps the first one.
pub fn setup_logger(debug_enabled: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(level(debug_enabled).into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        debug!("Logger has already been set up, continuing...");
    }
}
