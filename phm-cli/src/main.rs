//! Headless companion to the press map.
//!
//! Loads the press, election and geometry documents from a directory or a
//! deployed site and replays slider, toggle and click selections without a
//! browser, printing what the map and the detail panel would show.
//!
//! Set `RUST_LOG=info` to see load progress.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "phm-cli",
    version,
    about = "Press leanings and election results map toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: phm_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    phm_cmd::run(cli.command).await
}
