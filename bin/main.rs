use anyhow::Error as Anyhow;
use clap::Parser;

mod applet;
mod bot;
mod cli;
mod command;
mod config;
mod lobby;

#[tokio::main]
async fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute().await
}
