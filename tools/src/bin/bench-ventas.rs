use clap::Parser;
use envconfig::Envconfig;
use rlt::cli::BenchCli;
use tracing::info;
use ventas_tools::BenchConfig;
use ventas_tools::suite::SalesBench;

#[derive(Parser, Clone)]
pub struct Opts {
    /// Base URL of the sales API. Overrides VENTAS_HOST.
    #[arg(long)]
    pub host: Option<String>,
    /// Seed for reproducible payloads. Overrides VENTAS_SEED.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Embed BenchCli into this Opts.
    #[command(flatten)]
    pub bench_opts: BenchCli,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ventas_tools::init_tracing("off");
    let opts: Opts = Opts::parse();
    let mut config = BenchConfig::init_from_env()?;
    if let Some(host) = opts.host {
        config.host = host;
    }
    if opts.seed.is_some() {
        config.seed = opts.seed;
    }
    info!(url = %config.url(), "starting bench");
    let bench = SalesBench::new(config)?;
    rlt::cli::run(opts.bench_opts, bench).await
}
