use tracing_subscriber::EnvFilter;

/// Initializes structured logging for the host process.
///
/// Output goes to stderr through `tracing_subscriber::fmt`, filtered by the
/// `RUST_LOG` environment variable; when the variable is unset everything at
/// `info` and above is shown. Typical settings:
///
/// - `RUST_LOG=debug` - per-request detail from the cart actor and clients
/// - `RUST_LOG=shopcart=debug` - the same, but only for this crate
///
/// Call once, early; embedding hosts that install their own subscriber
/// should skip this entirely.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
