use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "MVN_INVOKE_LOG";

/// Install the stderr subscriber for the CLI.
///
/// `MVN_INVOKE_LOG` takes precedence; otherwise warnings only, or debug with `verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "mvn_invoke=debug" } else { "mvn_invoke=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
