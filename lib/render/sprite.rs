use crate::chess::Piece;

/// Where the bitmap of a [`Piece`] lives and how to center it on its square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Sprite {
    file: &'static str,
    offset: (u32, u32),
}

impl Sprite {
    const fn new(file: &'static str, dx: u32, dy: u32) -> Self {
        Sprite {
            file,
            offset: (dx, dy),
        }
    }

    /// The [`Sprite`] of a [`Piece`].
    pub fn of(p: Piece) -> &'static Self {
        &SPRITES[p.index()]
    }

    /// The file name of this sprite within the asset directory.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// The pixel offset from the top left corner of a square.
    pub fn offset(&self) -> (u32, u32) {
        self.offset
    }
}

// Indexed by `Piece::index`.
static SPRITES: [Sprite; 12] = [
    Sprite::new("wP.png", 21, 16),
    Sprite::new("bP.png", 21, 16),
    Sprite::new("wN.png", 14, 10),
    Sprite::new("bN.png", 14, 10),
    Sprite::new("wB.png", 9, 9),
    Sprite::new("bB.png", 9, 9),
    Sprite::new("wR.png", 15, 12),
    Sprite::new("bR.png", 15, 12),
    Sprite::new("wQ.png", 7, 10),
    Sprite::new("bQ.png", 7, 10),
    Sprite::new("wK.png", 6, 6),
    Sprite::new("bK.png", 6, 6),
];
