//! Tracing setup for the binary. Filtering follows `RUST_LOG` and defaults
//! to warnings; output goes to stderr so stdout carries only reports.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `json` switches to one JSON object per
/// event.
pub fn init(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
