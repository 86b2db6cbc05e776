use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the diagnostic subscriber. `RUST_LOG` wins over `verbose`.
/// Output goes to stderr so it never mixes with tables or exports.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        "rhiredesk=debug"
    } else {
        "rhiredesk=warn"
    };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
