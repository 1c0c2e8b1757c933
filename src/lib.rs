pub mod board;
pub mod content;
pub mod cues;
pub mod digit;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod render;
pub mod sprite;
pub mod state;
pub mod tile;

#[cfg(feature = "sdl2")]
pub mod texture_cache;

#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod cli;

pub use board::{Board, BoardConfig, BoardError};
pub use content::ContentProvider;
pub use cues::{Cue, CuePlayer};
pub use digit::Digit;
pub use error::TileError;
pub use geometry::{Point, Rect};
pub use input::{ButtonState, PointerState};
pub use render::{DrawSurface, Tint};
pub use tile::NumberTile;
