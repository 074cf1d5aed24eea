/// Chess domain types.
pub mod chess;
/// Players and games.
pub mod game;
/// Board rendering.
pub mod render;
