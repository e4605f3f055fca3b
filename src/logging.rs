//! Diagnostic tracing.
//!
//! Console output for the user goes to stdout through the session; tracing
//! events go to stderr and are filtered by `RUST_LOG` (default `warn`).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// # Example
/// ```bash
/// RUST_LOG=course_registry=debug course-registry
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
