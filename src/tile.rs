use crate::content::ContentProvider;
use crate::cues::CuePlayer;
use crate::digit::Digit;
use crate::error::TileError;
use crate::geometry::{Point, Rect};
use crate::input::PointerState;
use crate::render::{DrawSurface, Tint};
use crate::sprite::{frame_source, Face, TextureSize};
use crate::state::{FrameInput, TileState};
use enum_map::EnumMap;
use log::debug;
use std::fmt;
use std::rc::Rc;

/// A clickable tile showing a digit.
///
/// Clicking the target tile makes it blink for a few seconds before it
/// disappears, any other tile shrinks away. Either way the tile ends up
/// hidden and ignores further input.
pub struct NumberTile<T> {
    digit: Digit,
    is_target: bool,
    center: Point,
    original_side: u32,
    side: u32,
    textures: EnumMap<Face, T>,
    state: TileState,
    cues: Rc<dyn CuePlayer>,
}

impl<T> NumberTile<T>
where
    T: TextureSize,
{
    pub fn new<C>(
        content: &mut C,
        center: Point,
        side_length: u32,
        number: i32,
        correct_number: i32,
        cues: Rc<dyn CuePlayer>,
    ) -> Result<Self, TileError>
    where
        C: ContentProvider<Texture = T>,
    {
        let digit = Digit::try_from(number)?;
        let normal = load_face(content, Face::Normal, digit)?;
        let blinking = load_face(content, Face::Blinking, digit)?;

        Ok(Self {
            digit,
            is_target: number == correct_number,
            center,
            original_side: side_length,
            side: side_length,
            textures: EnumMap::from_array([normal, blinking]),
            state: TileState::default(),
            cues,
        })
    }

    /// Advances the tile by one frame.
    ///
    /// Returns true only on the frame a correct guess finishes blinking.
    pub fn update(&mut self, elapsed_ms: u32, pointer: &PointerState) -> bool {
        let input = FrameInput {
            elapsed: elapsed_ms,
            inside: self.draw_rect().contains(pointer.x, pointer.y),
            button: pointer.left,
            is_target: self.is_target,
            original_side: self.original_side,
        };

        let previous = self.state;
        let step = previous.step(&input);

        if let Some(cue) = step.cue {
            debug!("Tile {} clicked, playing {}", self.digit, cue.name());
            self.cues.play_cue(cue.name());
        }

        match (&previous, &step.state) {
            (TileState::Shrinking(_), TileState::Hidden) => {
                debug!("Tile {} shrunk away", self.digit);
                self.side = 0;
            }
            (TileState::Blinking(_), TileState::Hidden) => {
                debug!("Tile {} finished blinking", self.digit);
            }
            (_, TileState::Shrinking(shrink)) => self.side = shrink.side,
            _ => {}
        }

        self.state = step.state;

        step.resolved
    }

    pub fn draw<S>(&self, surface: &mut S) -> Result<(), S::Error>
    where
        S: DrawSurface<T>,
    {
        if !self.is_visible() {
            return Ok(());
        }

        let texture = &self.textures[self.state.face()];
        let source = frame_source(texture.size(), self.state.frame());

        surface.draw(texture, self.draw_rect(), source, Tint::NONE)
    }

    /// Source region of the current texture for the current frame.
    pub fn source_rect(&self) -> Rect {
        frame_source(self.textures[self.state.face()].size(), self.state.frame())
    }
}

impl<T> NumberTile<T> {
    pub fn digit(&self) -> Digit {
        self.digit
    }

    pub fn is_target(&self) -> bool {
        self.is_target
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn state(&self) -> &TileState {
        &self.state
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn side_length(&self) -> u32 {
        self.side
    }

    pub fn original_side_length(&self) -> u32 {
        self.original_side
    }

    pub fn draw_rect(&self) -> Rect {
        Rect::from_center(self.center, self.side)
    }
}

impl<T> fmt::Debug for NumberTile<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberTile")
            .field("digit", &self.digit)
            .field("is_target", &self.is_target)
            .field("center", &self.center)
            .field("side", &self.side)
            .field("state", &self.state)
            .finish()
    }
}

fn load_face<C>(content: &mut C, face: Face, digit: Digit) -> Result<C::Texture, TileError>
where
    C: ContentProvider,
{
    let name = face.asset_name(digit);

    content.load(&name).map_err(|e| TileError::Content {
        message: e.to_string(),
        name,
    })
}
