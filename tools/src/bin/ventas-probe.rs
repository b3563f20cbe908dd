use clap::Parser;
use envconfig::Envconfig;
use tracing::info;
use ventas_tools::{BenchConfig, SalesClient, SalesIteration};

/// Sends a handful of sales one after another and prints each verdict.
#[derive(Parser)]
struct Opts {
    /// Base URL of the sales API. Overrides VENTAS_HOST.
    #[arg(long)]
    host: Option<String>,
    /// Number of sales to send.
    #[arg(short, long, default_value_t = 1)]
    count: u32,
    /// Seed for reproducible payloads. Overrides VENTAS_SEED.
    #[arg(long)]
    seed: Option<u64>,
    /// Per-request timeout in seconds. Overrides VENTAS_TIMEOUT_SECS.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ventas_tools::init_tracing("info");
    let opts = Opts::parse();
    let mut config = BenchConfig::init_from_env()?;
    if let Some(host) = opts.host {
        config.host = host;
    }
    if opts.seed.is_some() {
        config.seed = opts.seed;
    }
    if let Some(timeout_secs) = opts.timeout_secs {
        config.timeout_secs = timeout_secs;
    }

    let client = SalesClient::new(&config)?;
    info!(url = client.url(), count = opts.count, "probing");
    let mut iteration = SalesIteration::new(client, config.rng_for(0));
    let mut ok = 0;
    for i in 0..opts.count {
        let submission = iteration.run_once().await;
        if submission.verdict.is_success() {
            ok += 1;
        }
        let status = submission
            .status
            .map_or_else(|| "-".to_string(), |code| code.to_string());
        println!(
            "#{i} [{status}] {} ({} ms)",
            submission.verdict,
            submission.elapsed.as_millis()
        );
    }
    println!("{ok}/{} ok", opts.count);
    if ok < opts.count {
        anyhow::bail!("{} of {} sales failed", opts.count - ok, opts.count);
    }
    Ok(())
}
