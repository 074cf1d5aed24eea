use crate::chess::{Board, File, Rank, Square};
use crate::render::Sprite;
use derive_more::{Display, Error};
use image::{imageops, ImageError, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{instrument, trace};

/// The side of a square in pixels.
pub const SQUARE_SIZE: u32 = 90;

/// The side of the board in pixels.
pub const BOARD_SIZE: u32 = 8 * SQUARE_SIZE;

/// The file name of the board template within the asset directory.
pub const TEMPLATE: &str = "board.png";

/// The reason why a board could not be rendered.
#[derive(Debug, Display, Error)]
pub enum RenderError {
    #[display(fmt = "failed to load asset `{}`", "path.display()")]
    Asset { path: PathBuf, source: ImageError },

    #[display(fmt = "expected a {BOARD_SIZE}x{BOARD_SIZE} board template, found {width}x{height}")]
    Template { width: u32, height: u32 },

    #[display(fmt = "failed to write the rendered board")]
    Output(ImageError),
}

/// Draws chess boards as PNG images.
///
/// The asset directory holds the [board template][`TEMPLATE`] and one bitmap per
/// [`Sprite`]. Assets are loaded on demand and released right after being drawn.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Renderer {
    assets: PathBuf,
}

impl Renderer {
    /// Constructs a [`Renderer`] that loads assets from a directory.
    pub fn new(assets: impl Into<PathBuf>) -> Self {
        Renderer {
            assets: assets.into(),
        }
    }

    /// The asset directory.
    pub fn assets(&self) -> &Path {
        &self.assets
    }

    fn load(&self, name: &str) -> Result<RgbaImage, RenderError> {
        let path = self.assets.join(name);
        match image::open(&path) {
            Ok(img) => Ok(img.into_rgba8()),
            Err(source) => Err(RenderError::Asset { path, source }),
        }
    }

    /// Composites the sprites of every piece on the board over the template.
    #[instrument(level = "debug", skip(self, board), err)]
    pub fn draw<B: Board + ?Sized>(&self, board: &B) -> Result<RgbaImage, RenderError> {
        let mut canvas = self.load(TEMPLATE)?;

        let (width, height) = canvas.dimensions();
        if (width, height) != (BOARD_SIZE, BOARD_SIZE) {
            return Err(RenderError::Template { width, height });
        }

        // Row 0 is the 8th rank, column 0 is the a-file.
        for (row, rank) in (0..).zip(Rank::iter().rev()) {
            for (col, file) in (0..).zip(File::iter()) {
                let s = Square::new(file, rank);
                if let Some(p) = board.piece_at(s) {
                    let sprite = Sprite::of(p);
                    let (dx, dy) = sprite.offset();
                    let x = SQUARE_SIZE * col + dx;
                    let y = SQUARE_SIZE * row + dy;

                    trace!(square = %s, piece = %p, x, y);
                    let bitmap = self.load(sprite.file())?;
                    imageops::overlay(&mut canvas, &bitmap, x.into(), y.into());
                }
            }
        }

        Ok(canvas)
    }

    /// Draws the board and writes it to `path` as PNG.
    ///
    /// The destination is not validated beforehand, nor cleaned up on failure.
    #[instrument(level = "debug", skip(self, board, path), fields(path = %path.as_ref().display()), err)]
    pub fn render<B, P>(&self, board: &B, path: P) -> Result<(), RenderError>
    where
        B: Board + ?Sized,
        P: AsRef<Path>,
    {
        self.draw(board)?
            .save_with_format(path, ImageFormat::Png)
            .map_err(RenderError::Output)
    }

    /// Draws the board and encodes it as PNG in memory.
    #[instrument(level = "debug", skip(self, board), err)]
    pub fn encode<B: Board + ?Sized>(&self, board: &B) -> Result<Vec<u8>, RenderError> {
        let mut buffer = Cursor::new(Vec::new());

        self.draw(board)?
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(RenderError::Output)?;

        Ok(buffer.into_inner())
    }
}
