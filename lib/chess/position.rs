use crate::chess::{Board, Color, IllegalMove, Move, Outcome, Piece, Square};
use derive_more::{DebugCustom, Display, Error};
use shakmaty as sm;
use std::str::FromStr;

#[cfg(test)]
use proptest::{prelude::*, sample::Selector};

/// The current position on the chess board.
///
/// This type guarantees that it only holds valid positions.
#[derive(DebugCustom, Display, Default, Clone, Eq, PartialEq)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "Position({self})")]
#[display(fmt = "{}", "sm::fen::Fen::from_position(self.0.clone(), sm::EnPassantMode::Legal)")]
pub struct Position(
    #[cfg_attr(test, strategy((0..64, any::<Selector>())
        .prop_map(|(moves, selector)| {
            let mut chess = sm::Chess::default();
            for _ in 0..moves {
                match selector.try_select(sm::Position::legal_moves(&chess)) {
                    Some(m) => sm::Position::play_unchecked(&mut chess, &m),
                    _ => break,
                }
            }
            chess
        })))]
    sm::Chess,
);

impl Position {
    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Piece, Square)> + ExactSizeIterator {
        let board = sm::Position::board(&self.0);
        let pieces: Vec<(Piece, Square)> = board
            .occupied()
            .into_iter()
            .filter_map(|s| Some((board.piece_at(s)?.into(), s.into())))
            .collect();

        pieces.into_iter()
    }

    /// An iterator over the legal [`Move`]s that can be played in this position.
    pub fn moves(&self) -> impl Iterator<Item = Move> {
        sm::Position::legal_moves(&self.0)
            .into_iter()
            .map(|m| sm::uci::Uci::from_move(&m, sm::CastlingMode::Standard))
            .filter_map(|uci| Move::try_from(uci).ok())
    }
}

impl Board for Position {
    fn turn(&self) -> Color {
        sm::Position::turn(&self.0).into()
    }

    fn piece_at(&self, s: Square) -> Option<Piece> {
        sm::Position::board(&self.0)
            .piece_at(s.into())
            .map(Piece::from)
    }

    fn play(&mut self, m: Move) -> Result<(), IllegalMove> {
        match sm::uci::Uci::from(m).to_move(&self.0) {
            Ok(vm) if sm::Position::is_legal(&self.0, &vm) => {
                sm::Position::play_unchecked(&mut self.0, &vm);
                Ok(())
            }

            _ => Err(IllegalMove(m)),
        }
    }

    fn outcome(&self) -> Option<Outcome> {
        if sm::Position::is_checkmate(&self.0) {
            Some(Outcome::Checkmate(!self.turn()))
        } else if sm::Position::is_stalemate(&self.0) {
            Some(Outcome::Stalemate)
        } else if sm::Position::is_insufficient_material(&self.0) {
            Some(Outcome::DrawByInsufficientMaterial)
        } else {
            None
        }
    }
}

/// The reason why parsing a [`Position`] from [FEN] failed.
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParsePositionError {
    #[display(fmt = "failed to parse FEN")]
    InvalidFen(#[error(not(source))] String),
    #[display(fmt = "the position is illegal")]
    IllegalPosition(#[error(not(source))] String),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fen: sm::fen::Fen = s
            .parse()
            .map_err(|e: sm::fen::ParseFenError| ParsePositionError::InvalidFen(e.to_string()))?;

        let chess = fen
            .into_position(sm::CastlingMode::Standard)
            .map_err(|e| ParsePositionError::IllegalPosition(e.to_string()))?;

        Ok(Position(chess))
    }
}

#[doc(hidden)]
impl From<sm::Chess> for Position {
    fn from(chess: sm::Chess) -> Self {
        Position(chess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Role;
    use test_strategy::proptest;

    #[test]
    fn default_position_is_the_standard_starting_position() {
        let pos = Position::default();
        assert_eq!(pos.iter().len(), 32);
        assert_eq!(pos.turn(), Color::White);

        for c in Color::iter() {
            let count = |r| pos.iter().filter(|&(p, _)| p == Piece(c, r)).count();
            assert_eq!(count(Role::Pawn), 8);
            assert_eq!(count(Role::Knight), 2);
            assert_eq!(count(Role::Bishop), 2);
            assert_eq!(count(Role::Rook), 2);
            assert_eq!(count(Role::Queen), 1);
            assert_eq!(count(Role::King), 1);
        }
    }

    #[proptest]
    fn piece_at_agrees_with_iter(pos: Position) {
        for (p, s) in pos.iter() {
            assert_eq!(pos.piece_at(s), Some(p));
        }

        let occupied = Square::iter().filter(|&s| pos.piece_at(s).is_some()).count();
        assert_eq!(occupied, pos.iter().len());
    }

    #[proptest]
    fn legal_move_updates_position(
        #[filter(#pos.moves().next().is_some())] pos: Position,
        selector: Selector,
    ) {
        let m = selector.select(pos.moves());
        let piece = pos.piece_at(m.whence());

        let mut next = pos.clone();
        assert_eq!(next.play(m), Ok(()));
        assert_eq!(next.piece_at(m.whence()), None);
        assert_eq!(next.piece_at(m.whither()).map(|p| p.color()), piece.map(|p| p.color()));
        assert_eq!(next.turn(), !pos.turn());
    }

    #[proptest]
    fn illegal_move_leaves_position_unchanged(
        pos: Position,
        #[filter(#pos.piece_at(#m.whence()).map(|p| p.role()) != Some(Role::King)
            && !#pos.moves().any(|m| m == #m))]
        m: Move,
    ) {
        let mut next = pos.clone();
        assert_eq!(next.play(m), Err(IllegalMove(m)));
        assert_eq!(next, pos);
    }

    #[proptest]
    fn parsing_printed_position_is_an_identity(pos: Position) {
        assert_eq!(pos.to_string().parse::<Position>()?.to_string(), pos.to_string());
    }

    #[test]
    fn parsing_position_fails_for_invalid_fen() {
        assert!(matches!(
            "not a fen".parse::<Position>(),
            Err(ParsePositionError::InvalidFen(_))
        ));
    }

    #[test]
    fn parsing_position_fails_without_kings() {
        assert!(matches!(
            "8/8/8/8/8/8/8/8 w - - 0 1".parse::<Position>(),
            Err(ParsePositionError::IllegalPosition(_))
        ));
    }

    #[test]
    fn fools_mate_is_checkmate_by_black() {
        let mut pos = Position::default();
        for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            assert_eq!(pos.play(m.parse().unwrap()), Ok(()));
        }

        assert_eq!(pos.outcome(), Some(Outcome::Checkmate(Color::Black)));
    }

    #[test]
    fn bare_kings_are_a_draw() {
        let pos: Position = "8/8/4k3/8/8/4K3/8/8 w - - 0 1".parse().unwrap();
        assert_eq!(pos.outcome(), Some(Outcome::DrawByInsufficientMaterial));
    }

    #[test]
    fn start_position_is_not_final() {
        assert_eq!(Position::default().outcome(), None);
    }
}
