use crate::command::{latency, Argument, Command};
use crate::lobby::Lobby;
use anyhow::{Context as _, Error as Anyhow};
use async_trait::async_trait;
use lib::chess::Outcome;
use lib::game::{Game, Player, PlayerId};
use lib::render::Renderer;
use serenity::all::{
    Colour, CommandDataOptionValue, CommandInteraction, Context, CreateAttachment, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage, EventHandler, GuildId,
    Interaction, Ready, Timestamp,
};
use std::num::NonZeroU64;
use tokio::task::spawn_blocking;
use tracing::{info, instrument, warn};

/// Answers slash commands on behalf of the bot.
pub struct Handler {
    guilds: Vec<GuildId>,
    lobby: Lobby,
    renderer: Renderer,
}

impl Handler {
    /// Constructs a [`Handler`] that registers commands in the given guilds.
    pub fn new(guilds: impl IntoIterator<Item = u64>, renderer: Renderer) -> Self {
        Handler {
            guilds: guilds
                .into_iter()
                .filter_map(NonZeroU64::new)
                .map(GuildId::from)
                .collect(),
            lobby: Lobby::default(),
            renderer,
        }
    }

    async fn show(
        &self,
        game: Game,
        caption: String,
    ) -> Result<CreateInteractionResponseMessage, Anyhow> {
        let renderer = self.renderer.clone();
        let png = spawn_blocking(move || renderer.encode(game.board()))
            .await?
            .context("failed to render the board")?;

        Ok(CreateInteractionResponseMessage::new()
            .content(caption)
            .add_file(CreateAttachment::bytes(png, "board.png")))
    }

    #[instrument(level = "debug", skip(self, cmd), err,
        fields(command = %cmd.data.name, user = %cmd.user.id, channel = %cmd.channel_id))]
    async fn respond(
        &self,
        cmd: &CommandInteraction,
    ) -> Result<CreateInteractionResponseMessage, Anyhow> {
        let options = cmd.data.options.iter().filter_map(|o| {
            let arg = match &o.value {
                CommandDataOptionValue::User(id) => Argument::User(id.get()),
                CommandDataOptionValue::String(s) => Argument::Text(s.clone()),
                _ => return None,
            };

            Some((o.name.as_str(), arg))
        });

        let table = cmd.channel_id.get();
        let user = PlayerId(cmd.user.id.get());

        match Command::parse(&cmd.data.name, options)? {
            Command::Ping => {
                let ms = latency(cmd.id.created_at(), Timestamp::now()).as_millis();
                let embed = CreateEmbed::new()
                    .title("Pong!")
                    .description(format!("Latency: {ms} ms"))
                    .colour(Colour::BLURPLE);

                Ok(CreateInteractionResponseMessage::new().embed(embed))
            }

            Command::Challenge(opponent) => {
                let game = self
                    .lobby
                    .challenge(table, Player::new(user), Player::new(opponent))?;

                let caption = format!(
                    "<@{}> challenges <@{}>, {}",
                    game.white().id(),
                    game.black().id(),
                    turn(&game)
                );

                self.show(game, caption).await
            }

            Command::Move(m) => {
                let (game, outcome) = self.lobby.play(table, user, m)?;
                let caption = match outcome {
                    None => format!("<@{user}> played `{m}`, {}", turn(&game)),
                    Some(o) => format!("<@{user}> played `{m}`, {}", over(&game, o)),
                };

                self.show(game, caption).await
            }

            Command::Board => {
                let game = self.lobby.board(table)?;
                let caption = turn(&game);
                self.show(game, caption).await
            }

            Command::Resign => {
                let (game, outcome) = self.lobby.resign(table, user)?;
                let caption = over(&game, outcome);
                self.show(game, caption).await
            }
        }
    }
}

fn turn(game: &Game) -> String {
    format!("<@{}> to move with {}", game.to_move().id(), game.turn())
}

fn over(game: &Game, outcome: Outcome) -> String {
    match outcome.winner() {
        Some(c) => format!("game over, {outcome}, <@{}> wins", game.player(c).id()),
        None => format!("game over, {outcome}"),
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "connected");

        for &guild in &self.guilds {
            match guild.set_commands(&ctx.http, Command::definitions()).await {
                Ok(cmds) => info!(%guild, commands = cmds.len(), "registered slash commands"),
                Err(e) => warn!(%guild, error = %e, "failed to register slash commands"),
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(cmd) = interaction else {
            return;
        };

        let message = match self.respond(&cmd).await {
            Ok(m) => m,
            Err(e) => {
                let error = format!("{e:#}");
                warn!(command = %cmd.data.name, user = %cmd.user.id, %error, "command failed");
                CreateInteractionResponseMessage::new()
                    .content(e.to_string())
                    .ephemeral(true)
            }
        };

        let response = CreateInteractionResponse::Message(message);
        if let Err(e) = cmd.create_response(&ctx.http, response).await {
            warn!(command = %cmd.data.name, error = %e, "failed to respond");
        }
    }
}
