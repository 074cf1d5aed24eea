use crate::chess::{File, ParseFileError, ParseRankError, Rank};
use derive_more::{Display, Error, From};
use shakmaty as sm;
use std::str::FromStr;

/// A square on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", "self.file()", "self.rank()")]
pub struct Square(
    #[cfg_attr(test, strategy(proptest::sample::select(sm::Square::ALL.to_vec())))] sm::Square,
);

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    pub fn new(f: File, r: Rank) -> Self {
        Square(sm::Square::from_coords(f.into(), r.into()))
    }

    /// This square's [`File`].
    pub fn file(&self) -> File {
        self.0.file().into()
    }

    /// This square's [`Rank`].
    pub fn rank(&self) -> Rank {
        self.0.rank().into()
    }

    /// Returns an iterator over all 64 [`Square`]s, from a1 to h8.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        sm::Square::ALL.into_iter().map(Square)
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse square")]
pub enum ParseSquareError {
    InvalidFile(ParseFileError),
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or(s.len(), |(i, _)| i);
        Ok(Square::new(s[..i].parse()?, s[i..].parse()?))
    }
}

#[doc(hidden)]
impl From<sm::Square> for Square {
    fn from(s: sm::Square) -> Self {
        Square(s)
    }
}

#[doc(hidden)]
impl From<Square> for sm::Square {
    fn from(s: Square) -> Self {
        s.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn square_has_a_file(f: File, r: Rank) {
        assert_eq!(Square::new(f, r).file(), f);
    }

    #[proptest]
    fn square_has_a_rank(f: File, r: Rank) {
        assert_eq!(Square::new(f, r).rank(), r);
    }

    #[proptest]
    fn parsing_printed_square_is_an_identity(s: Square) {
        assert_eq!(s.to_string().parse(), Ok(s));
    }

    #[proptest]
    fn parsing_square_fails_if_file_is_invalid(#[strategy("[i-z]")] f: String, r: Rank) {
        let s = [f, r.to_string()].concat();
        assert_eq!(s.parse::<Square>(), Err(ParseFileError.into()));
    }

    #[proptest]
    fn parsing_square_fails_if_rank_is_invalid(f: File, #[strategy("[09]")] r: String) {
        let s = [f.to_string(), r].concat();
        assert_eq!(s.parse::<Square>(), Err(ParseRankError.into()));
    }

    #[test]
    fn iter_visits_every_square_once() {
        assert_eq!(Square::iter().len(), 64);
        assert_eq!(Square::iter().next().map(|s| s.to_string()), Some("a1".into()));
        assert_eq!(Square::iter().last().map(|s| s.to_string()), Some("h8".into()));
    }
}
