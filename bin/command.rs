use derive_more::{Display, Error};
use lib::chess::{Move, ParseMoveError};
use lib::game::PlayerId;
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, Timestamp};
use std::time::Duration;

/// The reason why a slash command could not be understood.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseCommandError {
    #[display(fmt = "unknown command `/{_0}`")]
    Unknown(#[error(not(source))] String),

    #[display(fmt = "missing option `{_0}`")]
    MissingOption(#[error(not(source))] &'static str),

    #[display(fmt = "`{_0}` is not a move in coordinate notation, try something like `e2e4`")]
    InvalidMove(#[error(not(source))] String),
}

/// The value of a slash command option.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Argument {
    User(u64),
    Text(String),
}

/// A slash command issued by a user.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    Ping,
    Challenge(PlayerId),
    Move(Move),
    Board,
    Resign,
}

impl Command {
    /// Parses a command from its name and options.
    pub fn parse<'a, I>(name: &str, options: I) -> Result<Self, ParseCommandError>
    where
        I: IntoIterator<Item = (&'a str, Argument)>,
    {
        let mut options = options.into_iter();
        let mut find = |key: &'static str| {
            options
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v)
                .ok_or(ParseCommandError::MissingOption(key))
        };

        match name {
            "ping" => Ok(Command::Ping),
            "board" => Ok(Command::Board),
            "resign" => Ok(Command::Resign),

            "challenge" => match find("opponent")? {
                Argument::User(id) => Ok(Command::Challenge(id.into())),
                Argument::Text(_) => Err(ParseCommandError::MissingOption("opponent")),
            },

            "move" => match find("uci")? {
                Argument::Text(s) => s
                    .trim()
                    .parse()
                    .map(Command::Move)
                    .map_err(|_: ParseMoveError| ParseCommandError::InvalidMove(s)),
                Argument::User(_) => Err(ParseCommandError::MissingOption("uci")),
            },

            _ => Err(ParseCommandError::Unknown(name.into())),
        }
    }

    /// The slash commands the bot registers.
    pub fn definitions() -> Vec<CreateCommand> {
        vec![
            CreateCommand::new("ping").description("Checks whether the bot is listening"),
            CreateCommand::new("challenge")
                .description("Starts a game of chess in this channel")
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::User,
                        "opponent",
                        "Who to play against, with the black pieces",
                    )
                    .required(true),
                ),
            CreateCommand::new("move")
                .description("Plays a move in the game of this channel")
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "uci",
                        "The move in coordinate notation, e.g. e2e4 or e7e8q",
                    )
                    .required(true),
                ),
            CreateCommand::new("board").description("Shows the board of this channel"),
            CreateCommand::new("resign").description("Resigns the game of this channel"),
        ]
    }
}

/// The time elapsed between `created` and `now`, zero if the clocks disagree.
pub fn latency(created: Timestamp, now: Timestamp) -> Duration {
    let ms = now.timestamp_millis() - created.timestamp_millis();
    Duration::from_millis(ms.try_into().unwrap_or_default())
}
