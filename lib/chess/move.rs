use crate::chess::{Role, Square};
use derive_more::{DebugCustom, Display, Error};
use shakmaty as sm;
use std::str::FromStr;

/// A chess move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(test, filter(#self.0 != #self.1))]
#[debug(fmt = "Move({self})")]
#[display(fmt = "{}", "sm::uci::Uci::from(*self)")]
pub struct Move(pub Square, pub Square, pub Option<Role>);

impl Move {
    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.1
    }

    /// The [`Role`] a pawn is promoted to, if any.
    pub fn promotion(&self) -> Option<Role> {
        self.2
    }
}

/// The reason why the string is not a valid move.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse move, expected pure coordinate notation like `e2e4`")]
pub struct ParseMoveError;

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<sm::uci::Uci>()
            .map_err(|_| ParseMoveError)?
            .try_into()
    }
}

#[doc(hidden)]
impl TryFrom<sm::uci::Uci> for Move {
    type Error = ParseMoveError;

    fn try_from(m: sm::uci::Uci) -> Result<Self, Self::Error> {
        match m {
            sm::uci::Uci::Normal {
                from,
                to,
                promotion,
            } => Ok(Move(from.into(), to.into(), promotion.map(Role::from))),
            _ => Err(ParseMoveError),
        }
    }
}

#[doc(hidden)]
impl From<Move> for sm::uci::Uci {
    fn from(m: Move) -> Self {
        sm::uci::Uci::Normal {
            from: m.whence().into(),
            to: m.whither().into(),
            promotion: m.promotion().map(sm::Role::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_move_is_an_identity(m: Move) {
        let promotion = m.promotion().filter(|r| !matches!(r, Role::Pawn | Role::King));
        let m = Move(m.whence(), m.whither(), promotion);
        assert_eq!(m.to_string().parse(), Ok(m));
    }

    #[proptest]
    fn parsing_move_fails_for_invalid_strings(#[strategy("[^a-h]*")] s: String) {
        assert_eq!(s.parse::<Move>(), Err(ParseMoveError));
    }

    #[test]
    fn move_is_printed_in_pure_coordinate_notation() {
        let m: Move = "e7e8q".parse().unwrap();
        assert_eq!(m.whence().to_string(), "e7");
        assert_eq!(m.whither().to_string(), "e8");
        assert_eq!(m.promotion(), Some(Role::Queen));
        assert_eq!(m.to_string(), "e7e8q");
    }

    #[test]
    fn null_moves_are_rejected() {
        assert_eq!("0000".parse::<Move>(), Err(ParseMoveError));
    }
}
