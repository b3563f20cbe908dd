use std::error::Error;

use envconfig::Envconfig;
use goose::prelude::*;
use tracing::info;
use ventas_tools::BenchConfig;
use ventas_tools::scenario::ventas_scenario;

/// Goose options (`-u`, `-r`, `-t`, `--host`, `--report-file`, ...) come from
/// the command line. `VENTAS_*` variables set the defaults.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    ventas_tools::init_tracing("off");
    let config = BenchConfig::init_from_env()?;
    config.validate()?;
    info!(?config, "starting goose attack");
    GooseAttack::initialize()?
        .register_scenario(ventas_scenario(&config)?)
        .set_default(GooseDefault::Host, config.host.as_str())?
        .execute()
        .await?;
    Ok(())
}
