mod renderer;
mod sprite;

pub use renderer::*;
pub use sprite::*;

#[cfg(test)]
pub(crate) mod fixture;
