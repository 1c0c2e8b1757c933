use crate::digit::Digit;
use crate::geometry::Rect;
use enum_map::Enum;
use std::rc::Rc;

/// Pixel dimensions of a loaded texture.
pub trait TextureSize {
    fn size(&self) -> (u32, u32);
}

impl<T: TextureSize + ?Sized> TextureSize for Rc<T> {
    fn size(&self) -> (u32, u32) {
        self.as_ref().size()
    }
}

impl<T: TextureSize + ?Sized> TextureSize for &T {
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }
}

/// Which of the two textures of a tile is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Face {
    Normal,
    Blinking,
}

impl Face {
    pub fn asset_name(self, digit: Digit) -> String {
        match self {
            Face::Normal => digit.word().to_string(),
            Face::Blinking => format!("blinking{}", digit.word()),
        }
    }
}

/// Both textures are sheets of two frames laid out side by side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    #[default]
    First,
    Second,
}

impl Frame {
    pub fn toggle(self) -> Self {
        match self {
            Frame::First => Frame::Second,
            Frame::Second => Frame::First,
        }
    }

    pub fn index(self) -> u32 {
        match self {
            Frame::First => 0,
            Frame::Second => 1,
        }
    }
}

/// Source region of `frame` within a two frame sheet of the given size.
pub fn frame_source((width, height): (u32, u32), frame: Frame) -> Rect {
    let frame_width = width / 2;

    Rect::new((frame.index() * frame_width) as i32, 0, frame_width, height)
}
