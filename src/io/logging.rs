//! Diagnostic logging setup
//!
//! Logging stays off unless `RUST_LOG` is set, so normal runs print only
//! results. Output goes to stderr to keep stdout clean for answers.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "RUST_LOG";

/// Install the global subscriber if `RUST_LOG` is set
///
/// Returns whether a subscriber was installed by this call. A second call,
/// or a call after another subscriber was installed, returns `false`.
pub fn init() -> bool {
    if std::env::var_os(LOG_ENV).is_none() {
        return false;
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(EnvFilter::from_env(LOG_ENV))
        .try_init()
        .is_ok()
}
