//! Tracing setup
//!
//! Logs go to stderr so they never interleave with the menu on stdout.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default directive when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVE: &str = "wallet_cli=warn";

/// Directive added with `--verbose`
pub const VERBOSE_DIRECTIVE: &str = "wallet_cli=debug";

/// Build the filter from an optional `RUST_LOG` value
///
/// `verbose` adds the debug directive on top of whatever the environment
/// asked for; an unparsable environment value falls back to the default.
pub fn build_filter(env: Option<&str>, verbose: bool) -> EnvFilter {
    let filter = env
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE));

    if !verbose {
        return filter;
    }
    match VERBOSE_DIRECTIVE.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Initializes the global tracing subscriber
///
/// Safe to call more than once.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

        fmt()
            .with_env_filter(build_filter(env.as_deref(), verbose))
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
