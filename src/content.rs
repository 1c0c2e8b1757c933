use std::fmt::Display;

/// Loads textures by logical asset name, e.g. `"five"` or `"blinkingfive"`.
pub trait ContentProvider {
    type Texture;
    type Error: Display;

    fn load(&mut self, name: &str) -> Result<Self::Texture, Self::Error>;
}
