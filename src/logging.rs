//! Tracing setup for the command-line tool.

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Install a global `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `log_level` is used as the filter
/// directive (e.g. `"warn"` or `"valtype=debug"`).
pub fn init_tracing(log_level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);
    let subscriber = Registry::default().with(env_filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
