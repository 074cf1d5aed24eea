use crate::chess::{Piece, Role};
use crate::render::{Sprite, BOARD_SIZE, TEMPLATE};
use image::{Rgba, RgbaImage};
use std::{io, path::Path};
use tempfile::TempDir;

/// The color of every pixel of the board template.
pub const BACKGROUND: Rgba<u8> = Rgba([200, 200, 200, 255]);

/// The dimensions of the sprite of a [`Role`].
pub fn size(r: Role) -> (u32, u32) {
    match r {
        Role::Pawn => (48, 59),
        Role::Knight => (62, 70),
        Role::Bishop => (72, 73),
        Role::Rook => (60, 66),
        Role::Queen => (77, 70),
        Role::King => (77, 78),
    }
}

/// A color that uniquely identifies a [`Piece`].
pub fn color(p: Piece) -> Rgba<u8> {
    let i = p.index() as u8;
    Rgba([20 * i, 255 - 20 * i, 100, 255])
}

/// Writes an image to the asset directory.
pub fn save(img: &RgbaImage, path: impl AsRef<Path>) -> io::Result<()> {
    img.save(path)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// A temporary asset directory with a plain template and solid sprites.
pub fn assets() -> io::Result<TempDir> {
    let dir = tempfile::tempdir()?;

    let template = RgbaImage::from_pixel(BOARD_SIZE, BOARD_SIZE, BACKGROUND);
    save(&template, dir.path().join(TEMPLATE))?;

    for p in Piece::iter() {
        let (w, h) = size(p.role());
        let sprite = RgbaImage::from_pixel(w, h, color(p));
        save(&sprite, dir.path().join(Sprite::of(p).file()))?;
    }

    Ok(dir)
}
