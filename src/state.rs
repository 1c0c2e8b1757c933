use crate::cues::Cue;
use crate::input::ButtonState;
use crate::sprite::{Face, Frame};
use log::trace;
use num_traits::ToPrimitive;

pub const TOTAL_BLINK_MILLISECONDS: u32 = 4000;
pub const FRAME_BLINK_MILLISECONDS: u32 = 1000;
pub const TOTAL_SHRINK_MILLISECONDS: u32 = 4000;

/// Pointer tracking while the tile still accepts clicks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    pub hovered: bool,
    /// A released button has been seen over the tile, so the next press counts.
    pub released: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Blink {
    pub elapsed: u32,
    pub frame_elapsed: u32,
    pub frame: Frame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shrink {
    pub elapsed: u32,
    pub side: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    Interactive(Gesture),
    Blinking(Blink),
    Shrinking(Shrink),
    Hidden,
}

impl Default for TileState {
    fn default() -> Self {
        TileState::Interactive(Gesture::default())
    }
}

/// Everything a tile needs to know about the current frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    pub elapsed: u32,
    pub inside: bool,
    pub button: ButtonState,
    pub is_target: bool,
    pub original_side: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub state: TileState,
    pub cue: Option<Cue>,
    /// Only set on the frame a correct guess finishes blinking.
    pub resolved: bool,
}

impl Step {
    fn quiet(state: TileState) -> Self {
        Self {
            state,
            cue: None,
            resolved: false,
        }
    }
}

impl TileState {
    pub fn step(self, input: &FrameInput) -> Step {
        match self {
            TileState::Blinking(blink) => blink.advance(input.elapsed),
            TileState::Shrinking(shrink) => shrink.advance(input.elapsed, input.original_side),
            TileState::Interactive(gesture) => gesture.advance(input),
            TileState::Hidden => Step::quiet(TileState::Hidden),
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, TileState::Hidden)
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, TileState::Interactive(_))
    }

    pub fn is_hovered(&self) -> bool {
        matches!(self, TileState::Interactive(Gesture { hovered: true, .. }))
    }

    pub fn face(&self) -> Face {
        match self {
            TileState::Blinking(_) => Face::Blinking,
            _ => Face::Normal,
        }
    }

    /// A shrinking tile keeps the hover frame it had when it was clicked.
    pub fn frame(&self) -> Frame {
        match self {
            TileState::Interactive(Gesture { hovered: true, .. }) => Frame::Second,
            TileState::Interactive(_) => Frame::First,
            TileState::Blinking(blink) => blink.frame,
            TileState::Shrinking(_) => Frame::Second,
            TileState::Hidden => Frame::First,
        }
    }
}

impl Gesture {
    fn advance(self, input: &FrameInput) -> Step {
        if !input.inside {
            return Step::quiet(TileState::Interactive(Gesture::default()));
        }

        match input.button {
            ButtonState::Pressed if self.released => {
                if input.is_target {
                    Step {
                        state: TileState::Blinking(Blink::default()),
                        cue: Some(Cue::Correct),
                        resolved: false,
                    }
                } else {
                    Step {
                        state: TileState::Shrinking(Shrink::start(input.original_side)),
                        cue: Some(Cue::Incorrect),
                        resolved: false,
                    }
                }
            }
            ButtonState::Pressed => Step::quiet(TileState::Interactive(Gesture {
                hovered: true,
                released: false,
            })),
            ButtonState::Released => Step::quiet(TileState::Interactive(Gesture {
                hovered: true,
                released: true,
            })),
        }
    }
}

impl Blink {
    fn advance(self, elapsed: u32) -> Step {
        let total = self.elapsed.saturating_add(elapsed);

        if total >= TOTAL_BLINK_MILLISECONDS {
            return Step {
                state: TileState::Hidden,
                cue: None,
                resolved: true,
            };
        }

        // The remainder carries over so frame changes do not depend on how
        // the elapsed time was split across calls.
        let frame_elapsed = self.frame_elapsed.saturating_add(elapsed);
        let toggles = frame_elapsed / FRAME_BLINK_MILLISECONDS;
        let frame = if toggles % 2 == 1 {
            self.frame.toggle()
        } else {
            self.frame
        };

        if toggles > 0 {
            trace!("blink frame {:?} after {}ms", frame, total);
        }

        Step::quiet(TileState::Blinking(Blink {
            elapsed: total,
            frame_elapsed: frame_elapsed % FRAME_BLINK_MILLISECONDS,
            frame,
        }))
    }
}

impl Shrink {
    pub fn start(side: u32) -> Self {
        Self { elapsed: 0, side }
    }

    fn advance(self, elapsed: u32, original_side: u32) -> Step {
        let total = self.elapsed.saturating_add(elapsed);
        let side = shrunk_side(original_side, total);

        if side == 0 {
            Step::quiet(TileState::Hidden)
        } else {
            Step::quiet(TileState::Shrinking(Shrink {
                elapsed: total,
                side,
            }))
        }
    }
}

/// `floor(original * max(0, (total - elapsed) / total))`
pub fn shrunk_side(original_side: u32, elapsed: u32) -> u32 {
    let remaining = TOTAL_SHRINK_MILLISECONDS.saturating_sub(elapsed);
    let ratio = remaining as f64 / TOTAL_SHRINK_MILLISECONDS as f64;

    (original_side as f64 * ratio).floor().to_u32().unwrap_or(0)
}
