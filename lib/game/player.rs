use derive_more::{Display, From};

/// Opaque identity of a chess [`Player`], such as a chat user id.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct PlayerId(pub u64);

/// A participant in a chess [`Game`][`crate::game::Game`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{id} ({rating})")]
pub struct Player {
    id: PlayerId,
    rating: i32,
}

impl Player {
    /// The rating every new [`Player`] starts with.
    pub const DEFAULT_RATING: i32 = 800;

    /// Constructs a [`Player`] with the [default rating][`Player::DEFAULT_RATING`].
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self::with_rating(id, Self::DEFAULT_RATING)
    }

    /// Constructs a [`Player`] with a specific rating.
    pub fn with_rating(id: impl Into<PlayerId>, rating: i32) -> Self {
        Player {
            id: id.into(),
            rating,
        }
    }

    /// This player's identity.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// This player's rating.
    pub fn rating(&self) -> i32 {
        self.rating
    }
}
