use derive_more::{Display, Error};
use lib::chess::{Color, IllegalMove, Move, Outcome};
use lib::game::{Game, Player, PlayerId};
use std::collections::{hash_map::Entry, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{info, instrument};

/// Identifies where a [`Game`] is being played, such as a chat channel.
pub type Table = u64;

/// The reason why a [`Lobby`] request was refused.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum LobbyError {
    #[display(fmt = "a game is already in progress here")]
    GameInProgress,

    #[display(fmt = "there is no game in progress here")]
    NoGame,

    #[display(fmt = "you are not playing this game")]
    NotAPlayer,

    #[display(fmt = "it is not your turn")]
    NotYourTurn,

    #[display(fmt = "{_0}")]
    IllegalMove(#[error(not(source))] IllegalMove),
}

impl From<IllegalMove> for LobbyError {
    fn from(e: IllegalMove) -> Self {
        LobbyError::IllegalMove(e)
    }
}

/// The games in progress, at most one per [`Table`].
#[derive(Debug, Default)]
pub struct Lobby {
    games: Mutex<HashMap<Table, Game>>,
}

impl Lobby {
    fn games(&self) -> MutexGuard<'_, HashMap<Table, Game>> {
        self.games.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a new [`Game`] on a [`Table`].
    #[instrument(level = "debug", skip(self), err)]
    pub fn challenge(
        &self,
        table: Table,
        white: Player,
        black: Player,
    ) -> Result<Game, LobbyError> {
        match self.games().entry(table) {
            Entry::Occupied(_) => Err(LobbyError::GameInProgress),
            Entry::Vacant(e) => {
                info!(%white, %black, "game started");
                Ok(e.insert(Game::new(white, black)).clone())
            }
        }
    }

    /// A snapshot of the [`Game`] in progress on a [`Table`].
    pub fn board(&self, table: Table) -> Result<Game, LobbyError> {
        self.games().get(&table).cloned().ok_or(LobbyError::NoGame)
    }

    /// Plays a [`Move`] on behalf of a player.
    ///
    /// Returns a snapshot of the game after the move and its [`Outcome`] if it is over,
    /// in which case the game leaves the lobby.
    #[instrument(level = "debug", skip(self), err)]
    pub fn play(
        &self,
        table: Table,
        user: PlayerId,
        m: Move,
    ) -> Result<(Game, Option<Outcome>), LobbyError> {
        let mut games = self.games();
        let game = games.get_mut(&table).ok_or(LobbyError::NoGame)?;

        if game.white().id() != user && game.black().id() != user {
            return Err(LobbyError::NotAPlayer);
        } else if game.to_move().id() != user {
            return Err(LobbyError::NotYourTurn);
        }

        game.play(m)?;

        let snapshot = game.clone();
        let outcome = snapshot.outcome();

        if let Some(o) = outcome {
            info!(outcome = %o, "game over");
            games.remove(&table);
        }

        Ok((snapshot, outcome))
    }

    /// Resigns the game on behalf of a player, ending it.
    #[instrument(level = "debug", skip(self), err)]
    pub fn resign(&self, table: Table, user: PlayerId) -> Result<(Game, Outcome), LobbyError> {
        let mut games = self.games();
        let game = games.get(&table).ok_or(LobbyError::NoGame)?;

        // Whoever is to move resigns when playing against oneself.
        let side = if game.to_move().id() == user {
            game.turn()
        } else if game.white().id() == user {
            Color::White
        } else if game.black().id() == user {
            Color::Black
        } else {
            return Err(LobbyError::NotAPlayer);
        };

        let outcome = Outcome::Resignation(side);
        info!(%outcome, "game over");

        match games.remove(&table) {
            Some(game) => Ok((game, outcome)),
            None => Err(LobbyError::NoGame),
        }
    }
}
