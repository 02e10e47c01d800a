//! Diagnostic logging for the binary.
//!
//! Events go to stderr so the dashboard and `--json` output on stdout stay
//! clean. Filter priority: `RUST_LOG` > `--debug` > `warn`.

use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor `--debug` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Installs the global `tracing` subscriber.
///
/// `debug_flag` is true when the user passed `--debug`. Calling this more
/// than once leaves the first subscriber in place.
pub fn init(debug_flag: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            app = env!("CARGO_PKG_NAME"),
            version = env!("CARGO_PKG_VERSION"),
            "logging initialised"
        );
    }
}
