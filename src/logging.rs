//! Tracing setup for hosts and tests
//!
//! The library itself only emits events: `debug` when a builder commits or
//! discards its arguments, when `bin()` accepts or rejects an executable,
//! and when a [`crate::Toolbox`] swaps in a configured program. Hosts that
//! do not install a subscriber of their own can call [`init_tracing`].

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directives: argvkit crates at `debug` when verbose,
/// otherwise warnings only.
#[must_use]
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "argvkit=debug,argvkit_builder=debug,argvkit_validation=debug,argvkit_command=debug,argvkit_config=debug,argvkit_tools=debug,info"
    } else {
        "warn"
    }
}

/// Install a compact `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `verbose` when set. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_line_number(false)
                .with_file(false)
                .compact(),
        )
        .try_init()?;

    tracing::debug!(verbose, "Tracing initialized");
    Ok(())
}
