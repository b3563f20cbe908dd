mod client;
mod conf;
mod error;
#[cfg(feature = "goose")]
pub mod scenario;
#[cfg(feature = "loadtest")]
pub mod suite;

pub use client::{Iteration, SalesClient, SalesIteration, Submission};
pub use conf::BenchConfig;
pub use error::BenchError;

/// Installs a fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter`. Does not take over the `log` facade, goose keeps its own
/// logger.
pub fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("tracing subscriber already installed");
    }
}
