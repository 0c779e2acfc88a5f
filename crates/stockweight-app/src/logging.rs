//! Tracing subscriber setup for the binary

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber; logs go to stderr so stdout stays parseable.
///
/// `RUST_LOG` wins when set. Otherwise `verbose` selects debug for the
/// stockweight crates and warn for everything else.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "warn,stockweight_app=debug,stockweight_infra=debug,stockweight_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
