use crate::error::TileError;
use std::fmt;

const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// A digit shown on a tile, always within 1 to 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    pub fn value(self) -> u8 {
        self.0
    }

    /// Word form used as the asset name, e.g. `"five"`.
    pub fn word(self) -> &'static str {
        WORDS[(self.0 - Self::MIN) as usize]
    }

    pub fn all() -> impl Iterator<Item = Digit> {
        (Self::MIN..=Self::MAX).map(Digit)
    }
}

impl TryFrom<i32> for Digit {
    type Error = TileError;

    fn try_from(number: i32) -> Result<Self, Self::Error> {
        if (Self::MIN as i32..=Self::MAX as i32).contains(&number) {
            Ok(Digit(number as u8))
        } else {
            Err(TileError::UnsupportedNumber(number))
        }
    }
}

impl From<Digit> for i32 {
    fn from(digit: Digit) -> Self {
        digit.0 as i32
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
