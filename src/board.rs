use crate::content::ContentProvider;
use crate::cues::CuePlayer;
use crate::digit::Digit;
use crate::error::TileError;
use crate::geometry::Point;
use crate::grid::{Grid, Position};
use crate::input::PointerState;
use crate::render::DrawSurface;
use crate::sprite::TextureSize;
use crate::tile::NumberTile;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Deserialize), serde(default))]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
    pub tile_side: u32,
    pub gap: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            rows: 3,
            tile_side: 150,
            gap: 20,
        }
    }
}

impl BoardConfig {
    pub fn cells(&self) -> usize {
        self.columns * self.rows
    }

    /// Pixel size of the whole board, gaps around the border included.
    pub fn extent(&self) -> (u32, u32) {
        let span = |count: usize| count as u32 * self.tile_side + (count as u32 + 1) * self.gap;

        (span(self.columns), span(self.rows))
    }

    pub fn center(&self, (x, y): Position) -> Point {
        let offset = |i: usize| (self.gap + i as u32 * (self.tile_side + self.gap) + self.tile_side / 2) as i32;

        Point::new(offset(x), offset(y))
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        let max = (Digit::MAX - Digit::MIN + 1) as usize;

        if self.cells() == 0 || self.cells() > max {
            return Err(BoardError::Layout(format!(
                "a {}x{} board needs between 1 and {} tiles",
                self.columns, self.rows, max
            )));
        }

        if self.tile_side == 0 {
            return Err(BoardError::Layout("tile side must be positive".to_string()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Layout(String),
    Tile(TileError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Layout(msg) => write!(f, "Invalid board layout: {}", msg),
            BoardError::Tile(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::Tile(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TileError> for BoardError {
    fn from(err: TileError) -> Self {
        BoardError::Tile(err)
    }
}

/// A round of tiles laid out on a grid, one of which holds the correct digit.
pub struct Board<T> {
    pub grid: Grid<NumberTile<T>>,
    config: BoardConfig,
    correct: Digit,
    cues: Rc<dyn CuePlayer>,
}

impl<T> Board<T>
where
    T: TextureSize,
{
    /// Deals a random set of distinct digits and picks one of them as correct.
    pub fn new<C, R>(content: &mut C, config: BoardConfig, cues: Rc<dyn CuePlayer>, rng: &mut R) -> Result<Self, BoardError>
    where
        C: ContentProvider<Texture = T>,
        R: Rng,
    {
        config.validate()?;

        let (digits, correct) = deal(config.cells(), rng)?;

        Self::with_digits(content, config, cues, &digits, correct)
    }

    /// Lays out `digits` row by row.
    pub fn with_digits<C>(
        content: &mut C,
        config: BoardConfig,
        cues: Rc<dyn CuePlayer>,
        digits: &[Digit],
        correct: Digit,
    ) -> Result<Self, BoardError>
    where
        C: ContentProvider<Texture = T>,
    {
        config.validate()?;

        if digits.len() != config.cells() {
            return Err(BoardError::Layout(format!(
                "{} digits given for {} tiles",
                digits.len(),
                config.cells()
            )));
        }

        let grid = Grid::try_new(config.columns, config.rows, &mut |x, y| {
            NumberTile::new(
                content,
                config.center((x, y)),
                config.tile_side,
                digits[x + y * config.columns].into(),
                correct.into(),
                cues.clone(),
            )
        })?;

        debug!("Board dealt {:?}, correct digit {}", digits, correct);

        Ok(Self {
            grid,
            config,
            correct,
            cues,
        })
    }

    /// Replaces every tile with a freshly dealt round.
    pub fn new_round<C, R>(&mut self, content: &mut C, rng: &mut R) -> Result<(), BoardError>
    where
        C: ContentProvider<Texture = T>,
        R: Rng,
    {
        *self = Self::new(content, self.config, self.cues.clone(), rng)?;

        info!("New round started");

        Ok(())
    }

    /// Updates every tile; true when the correct tile finished this frame.
    pub fn update(&mut self, elapsed_ms: u32, pointer: &PointerState) -> bool {
        let mut resolved = false;

        for tile in self.grid.cells_mut() {
            resolved |= tile.update(elapsed_ms, pointer);
        }

        resolved
    }

    pub fn draw<S>(&self, surface: &mut S) -> Result<(), S::Error>
    where
        S: DrawSurface<T>,
    {
        for (_, _, tile) in &self.grid {
            tile.draw(surface)?;
        }

        Ok(())
    }
}

impl<T> Board<T> {
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn correct_digit(&self) -> Digit {
        self.correct
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<&NumberTile<T>> {
        self.grid.get(x, y)
    }

    /// Number of tiles still on screen.
    pub fn remaining(&self) -> usize {
        self.grid.iter().filter(|(_, _, tile)| tile.is_visible()).count()
    }
}

fn deal<R: Rng>(count: usize, rng: &mut R) -> Result<(Vec<Digit>, Digit), BoardError> {
    let mut digits: Vec<Digit> = Digit::all().collect();

    digits.shuffle(rng);
    digits.truncate(count);

    let correct = *digits
        .choose(rng)
        .ok_or_else(|| BoardError::Layout("no digits to choose from".to_string()))?;

    Ok((digits, correct))
}
