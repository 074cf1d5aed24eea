use crate::chess::{Board, Color, IllegalMove, Move, Outcome, Position};
use crate::render::{RenderError, Renderer};
use std::path::Path;
use tracing::{field::display, instrument, Span};

mod player;

pub use player::*;

/// Holds the state of a game of chess between two [`Player`]s.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game<B = Position> {
    white: Player,
    black: Player,
    board: B,
}

impl<B: Board + Default> Game<B> {
    /// Starts a game from the standard starting position.
    pub fn new(white: Player, black: Player) -> Self {
        Self::with_board(white, black, B::default())
    }
}

impl<B: Board> Game<B> {
    /// Resumes a game from an arbitrary board.
    pub fn with_board(white: Player, black: Player, board: B) -> Self {
        Game {
            white,
            black,
            board,
        }
    }

    /// The player with the white pieces.
    pub fn white(&self) -> &Player {
        &self.white
    }

    /// The player with the black pieces.
    pub fn black(&self) -> &Player {
        &self.black
    }

    /// The player with the pieces of a given [`Color`].
    pub fn player(&self, c: Color) -> &Player {
        match c {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// The current state of the board.
    pub fn board(&self) -> &B {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.board.turn()
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> &Player {
        self.player(self.turn())
    }

    /// The [`Outcome`] of the game, if it is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    /// Plays a [`Move`], leaving legality to the [`Board`].
    #[instrument(level = "debug", skip(self), err, fields(turn = %self.turn(), outcome))]
    pub fn play(&mut self, m: Move) -> Result<(), IllegalMove> {
        self.board.play(m)?;

        if let Some(o) = self.outcome() {
            Span::current().record("outcome", display(o));
        }

        Ok(())
    }

    /// Renders the board to a PNG file at `path`.
    pub fn render(&self, renderer: &Renderer, path: impl AsRef<Path>) -> Result<(), RenderError> {
        renderer.render(&self.board, path)
    }
}
