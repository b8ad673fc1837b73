use clap::Parser;

mod cli;
mod commands;
mod config;
mod logging;
mod names;
mod output;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    commands::run(cli).await
}
