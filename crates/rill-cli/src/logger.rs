//! Logging infrastructure for the rill CLI.
//!
//! Structured logging on the `tracing` ecosystem, written to stderr so the
//! resolved configuration on stdout stays machine-readable.
//!
//! The logging level is determined in this order:
//!
//! 1. `--verbose` flag: DEBUG for rill crates
//! 2. `--quiet` flag: errors only
//! 3. `RUST_LOG` environment variable: custom filter
//! 4. Default: INFO for rill crates

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at program start, before any logging occurs.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging (overrides `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable colored output
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("rill=debug,rill_config=debug,rill_cli=debug")
    } else if quiet {
        EnvFilter::new("rill=error,rill_config=error,rill_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rill=info,rill_config=info,rill_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // tracing is global and can only be initialized once per process, so
    // these only exercise filter construction.

    #[test]
    fn verbose_filter_parses() {
        let _filter = EnvFilter::new("rill=debug,rill_config=debug,rill_cli=debug");
    }

    #[test]
    fn quiet_filter_parses() {
        let _filter = EnvFilter::new("rill=error,rill_config=error,rill_cli=error");
    }
}
