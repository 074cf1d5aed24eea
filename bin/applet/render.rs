use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::Position;
use lib::render::Renderer;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Renders a chess position to a PNG file.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Render {
    /// The directory holding the board template and piece sprites.
    #[clap(short, long, default_value = "assets")]
    assets: PathBuf,

    /// The position in FEN, the starting position by default.
    #[clap(short, long)]
    fen: Option<Position>,

    /// Where to write the image.
    output: PathBuf,
}

impl Render {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let pos = self.fen.unwrap_or_default();

        Renderer::new(&self.assets)
            .render(&pos, &self.output)
            .with_context(|| format!("failed to render `{pos}`"))?;

        info!(output = %self.output.display(), %pos, "rendered board");

        Ok(())
    }
}
