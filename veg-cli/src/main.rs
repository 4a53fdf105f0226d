//! veg-cli - Command line tool for the NDVI/NDWI dashboard data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "veg-cli",
    version,
    about = "NDVI and NDWI aggregation and chart export toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: veg_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = veg_cmd::run(cli.command) {
        log::error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}
