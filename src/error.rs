use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    /// The tile number is not one of the digits 1 to 9.
    UnsupportedNumber(i32),
    /// The content provider could not produce a texture.
    Content { name: String, message: String },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileError::UnsupportedNumber(number) => {
                write!(f, "Unsupported number for number tile: {}", number)
            }
            TileError::Content { name, message } => {
                write!(f, "Failed to load content '{}': {}", name, message)
            }
        }
    }
}

impl std::error::Error for TileError {}
