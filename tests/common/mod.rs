#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use number_tile::content::ContentProvider;
use number_tile::cues::CuePlayer;
use number_tile::geometry::{Point, Rect};
use number_tile::render::{DrawSurface, Tint};
use number_tile::sprite::TextureSize;
use number_tile::tile::NumberTile;
use number_tile::TileError;

pub const CENTER: Point = Point { x: 100, y: 100 };
pub const SIDE: u32 = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeTexture {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl TextureSize for FakeTexture {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Hands out two frame sheets of `frame x frame` pixels and remembers what was asked for.
#[derive(Debug, Default)]
pub struct FakeContent {
    pub loaded: Vec<String>,
    pub missing: HashSet<String>,
    pub frame: u32,
}

impl FakeContent {
    pub fn new() -> Self {
        Self {
            frame: SIDE,
            ..Default::default()
        }
    }

    pub fn without(name: &str) -> Self {
        let mut content = Self::new();
        content.missing.insert(name.to_string());
        content
    }
}

impl ContentProvider for FakeContent {
    type Texture = FakeTexture;
    type Error = String;

    fn load(&mut self, name: &str) -> Result<Self::Texture, Self::Error> {
        if self.missing.contains(name) {
            return Err(format!("no such asset: {}", name));
        }

        self.loaded.push(name.to_string());

        Ok(FakeTexture {
            name: name.to_string(),
            width: self.frame * 2,
            height: self.frame,
        })
    }
}

#[derive(Debug, Default)]
pub struct RecordingCues {
    pub played: RefCell<Vec<String>>,
}

impl RecordingCues {
    pub fn played(&self) -> Vec<String> {
        self.played.borrow().clone()
    }
}

impl CuePlayer for RecordingCues {
    fn play_cue(&self, name: &str) {
        self.played.borrow_mut().push(name.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub texture: String,
    pub destination: Rect,
    pub source: Rect,
    pub tint: Tint,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl DrawSurface<FakeTexture> for RecordingSurface {
    type Error = String;

    fn draw(&mut self, texture: &FakeTexture, destination: Rect, source: Rect, tint: Tint) -> Result<(), Self::Error> {
        self.calls.push(DrawCall {
            texture: texture.name.clone(),
            destination,
            source,
            tint,
        });

        Ok(())
    }
}

pub fn create_test_tile(number: i32, correct: i32) -> (NumberTile<FakeTexture>, Rc<RecordingCues>) {
    try_create_test_tile(number, correct).expect("valid tile")
}

pub fn try_create_test_tile(number: i32, correct: i32) -> Result<(NumberTile<FakeTexture>, Rc<RecordingCues>), TileError> {
    let cues = Rc::new(RecordingCues::default());
    let mut content = FakeContent::new();
    let tile = NumberTile::new(&mut content, CENTER, SIDE, number, correct, cues.clone())?;

    Ok((tile, cues))
}
