use crate::{bot::Handler, config::Config};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::render::Renderer;
use serenity::all::{Client, GatewayIntents};
use std::{env, fs, io::ErrorKind, path::PathBuf};
use tokio::signal;
use tracing::{info, instrument, warn};

/// Connects to Discord and serves games of chess.
#[derive(Parser)]
pub struct Serve {
    /// Path to the bot configuration in RON.
    #[clap(short, long, default_value = "config.ron")]
    config: PathBuf,

    /// The bot's authentication token, overrides the configuration.
    #[clap(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

impl Default for Serve {
    fn default() -> Self {
        Serve {
            config: PathBuf::from("config.ron"),
            token: env::var("DISCORD_TOKEN").ok(),
        }
    }
}

impl Serve {
    fn load(&self) -> Result<Config, Anyhow> {
        let path = self.config.display();

        match fs::read_to_string(&self.config) {
            Ok(s) => s.parse::<Config>().with_context(|| format!("invalid configuration `{path}`")),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(%path, "configuration not found, using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(e).with_context(|| format!("failed to read `{path}`")),
        }
    }

    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let config = self.load()?;

        let token = self
            .token
            .or(config.token)
            .context("missing bot token, set `token` in the configuration or DISCORD_TOKEN")?;

        let handler = Handler::new(config.guilds, Renderer::new(config.assets));

        let mut client = Client::builder(&token, GatewayIntents::GUILDS)
            .event_handler(handler)
            .await
            .context("failed to build the Discord client")?;

        let shards = client.shard_manager.clone();
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                info!("shutting down");
                shards.shutdown_all().await;
            }
        });

        client.start().await.context("lost connection to Discord")?;

        Ok(())
    }
}
