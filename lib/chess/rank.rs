use derive_more::{Display, Error};
use shakmaty as sm;
use std::str::FromStr;

/// A row on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", "_0.char()")]
pub struct Rank(
    #[cfg_attr(test, strategy(proptest::sample::select(sm::Rank::ALL.to_vec())))] sm::Rank,
);

impl Rank {
    /// Constructs [`Rank`] from index.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range (0..=7).
    pub fn from_index(i: u8) -> Self {
        Rank(sm::Rank::new(i.into()))
    }

    /// This rank's index in the range (0..=7), the first rank being 0.
    pub fn index(&self) -> u8 {
        self.0.into()
    }

    /// Returns an iterator over [`Rank`]s ordered by [index][`Rank::index`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        sm::Rank::ALL.into_iter().map(Rank)
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse rank, expected digit in the range `('1'..='8')`")]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => sm::Rank::from_char(c).map(Rank).ok_or(ParseRankError),
            _ => Err(ParseRankError),
        }
    }
}

#[doc(hidden)]
impl From<sm::Rank> for Rank {
    fn from(r: sm::Rank) -> Self {
        Rank(r)
    }
}

#[doc(hidden)]
impl From<Rank> for sm::Rank {
    fn from(r: Rank) -> Self {
        r.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn iter_returns_iterator_over_ranks_in_order() {
        assert_eq!(
            Rank::iter().collect::<Vec<_>>(),
            (0..=7).map(Rank::from_index).collect::<Vec<_>>()
        );
    }

    #[proptest]
    fn rank_has_an_index(r: Rank) {
        assert_eq!(Rank::from_index(r.index()), r);
    }

    #[proptest]
    fn parsing_printed_rank_is_an_identity(r: Rank) {
        assert_eq!(r.to_string().parse(), Ok(r));
    }

    #[proptest]
    fn parsing_rank_fails_for_digits_out_of_range(#[strategy("[09]")] s: String) {
        assert_eq!(s.parse::<Rank>(), Err(ParseRankError));
    }

    #[test]
    fn eighth_rank_has_index_seven() {
        assert_eq!("8".parse::<Rank>().map(|r| r.index()), Ok(7));
    }
}
