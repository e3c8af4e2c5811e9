use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing for binaries and tests embedding this crate.
///
/// Default: info for this crate and the given service, overridable with
/// `RUST_LOG`. Safe to call more than once.
pub fn init(service_name: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("info,botwire=info,{service_name}=info")));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
