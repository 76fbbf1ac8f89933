use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber for the CLI.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug output for
/// this crate. Logs go to stderr so JSON output on stdout stays parseable.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "walletwise_client=debug,info"
    } else {
        "walletwise_client=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
