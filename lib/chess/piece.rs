use crate::chess::{Color, Role};
use derive_more::Display;
use shakmaty as sm;

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{_0} {_1}")]
pub struct Piece(pub Color, pub Role);

impl Piece {
    /// This piece's [`Color`].
    pub fn color(&self) -> Color {
        self.0
    }

    /// This piece's [`Role`].
    pub fn role(&self) -> Role {
        self.1
    }

    /// This piece's index in the range (0..12).
    pub fn index(&self) -> usize {
        self.color() as usize + self.role() as usize * 2
    }

    /// Returns an iterator over all [`Piece`]s ordered by [index][`Piece::index`].
    pub fn iter() -> impl Iterator<Item = Self> {
        Role::iter().flat_map(|r| Color::iter().map(move |c| Piece(c, r)))
    }
}

#[doc(hidden)]
impl From<sm::Piece> for Piece {
    fn from(p: sm::Piece) -> Self {
        Piece(p.color.into(), p.role.into())
    }
}

#[doc(hidden)]
impl From<Piece> for sm::Piece {
    fn from(p: Piece) -> Self {
        sm::Piece {
            color: p.color().into(),
            role: p.role().into(),
        }
    }
}
