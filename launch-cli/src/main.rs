//! Launch CLI - command line access to the SpaceX launch records dashboard views.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "launch-cli",
    version,
    about = "SpaceX launch records dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: launch_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    launch_cmd::run(cli.command).await
}
