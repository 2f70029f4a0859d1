use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Diagnostics go to stderr so stdout carries only the report.
pub(crate) fn init(verbose: bool) {
    let filter = if verbose {
        // `glint` matches every `glint_*` crate target by prefix.
        EnvFilter::new("glint=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // try_init only fails when a global subscriber is already set; the
    // existing one keeps receiving events, so the error carries nothing to act on.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
