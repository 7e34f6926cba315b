//! Diagnostic logging to stderr.
//!
//! Answers are printed to stdout by the reporter; logs stay on stderr so piping an answer into
//! `submit` keeps working.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. `RUST_LOG` overrides the verbosity flag.
pub fn init_cli_logger(verbose: bool) {
    let default_directives = if verbose {
        "aoc_2025=debug,aoc_support=debug,warn"
    } else {
        "aoc_2025=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
