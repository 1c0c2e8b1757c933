#[cfg(feature = "sdl2")]
pub mod sdl_renderer;

use crate::geometry::Rect;

#[cfg(feature = "sdl2")]
pub use sdl_renderer::SdlRenderer;

/// Color multiplied into a drawn texture. `Tint::NONE` leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    pub const NONE: Tint = Tint {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
}

impl Default for Tint {
    fn default() -> Self {
        Tint::NONE
    }
}

/// Something textures can be drawn onto.
pub trait DrawSurface<T> {
    type Error;

    /// Draws the `source` region of `texture` scaled into `destination`.
    fn draw(&mut self, texture: &T, destination: Rect, source: Rect, tint: Tint) -> Result<(), Self::Error>;
}
