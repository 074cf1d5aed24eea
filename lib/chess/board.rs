use crate::chess::{Color, Move, Outcome, Piece, Square};
use derive_more::{Display, Error};

/// Represents an illegal [`Move`] on a given [`Board`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "move `{_0}` is illegal in this position")]
pub struct IllegalMove(#[error(not(source))] pub Move);

/// The capabilities of a chess rules engine.
///
/// Implementors own the board state and are solely responsible for the rules of chess,
/// callers never validate moves themselves.
#[cfg_attr(test, mockall::automock)]
pub trait Board {
    /// The side to move.
    fn turn(&self) -> Color;

    /// The [`Piece`] at a given [`Square`], if any.
    fn piece_at(&self, s: Square) -> Option<Piece>;

    /// Plays a [`Move`] if it is legal, otherwise leaves the board untouched.
    fn play(&mut self, m: Move) -> Result<(), IllegalMove>;

    /// The [`Outcome`] of the game in case the position is final.
    fn outcome(&self) -> Option<Outcome>;
}
