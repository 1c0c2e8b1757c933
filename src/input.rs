#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

impl From<bool> for ButtonState {
    fn from(pressed: bool) -> Self {
        if pressed {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }
}

/// Pointer position and left button, sampled once per frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerState {
    pub x: i32,
    pub y: i32,
    pub left: ButtonState,
}

impl PointerState {
    pub fn new(x: i32, y: i32, left: ButtonState) -> Self {
        Self { x, y, left }
    }

    pub fn released(x: i32, y: i32) -> Self {
        Self::new(x, y, ButtonState::Released)
    }

    pub fn pressed(x: i32, y: i32) -> Self {
        Self::new(x, y, ButtonState::Pressed)
    }
}
