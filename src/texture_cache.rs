use crate::content::ContentProvider;
use crate::sprite::TextureSize;
use image::{DynamicImage, GenericImageView};
use log::debug;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{BlendMode, Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

impl TextureSize for Texture {
    fn size(&self) -> (u32, u32) {
        let query = self.query();

        (query.width, query.height)
    }
}

/// Loads `<root>/<name>.png` into SDL textures, once per name.
pub struct TextureCache {
    texture_creator: TextureCreator<WindowContext>,
    root: PathBuf,
    cache: HashMap<String, Rc<Texture>>,
}

impl TextureCache {
    pub fn new(texture_creator: TextureCreator<WindowContext>, root: PathBuf) -> Self {
        Self {
            texture_creator,
            root,
            cache: HashMap::new(),
        }
    }

    pub fn get_or_insert(&mut self, name: &str) -> Result<Rc<Texture>, String> {
        if let Some(texture) = self.cache.get(name) {
            return Ok(texture.clone());
        }

        let path = self.root.join(format!("{}.png", name));
        debug!("Loading texture {}", path.display());

        let image = image::open(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
        let texture = Rc::new(self.image_to_texture(&image)?);

        self.cache.insert(name.to_string(), texture.clone());

        Ok(texture)
    }

    fn image_to_texture(&self, image: &DynamicImage) -> Result<Texture, String> {
        let (width, height) = image.dimensions();
        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::RGBA32, width, height)
            .map_err(|e| e.to_string())?;

        let row = width as usize * 4;
        let image_rgba = image.to_rgba8();
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for (y, line) in image_rgba.chunks_exact(row).enumerate() {
                buffer[y * pitch..y * pitch + row].copy_from_slice(line);
            }
        })?;

        texture.set_blend_mode(BlendMode::Blend);

        Ok(texture)
    }
}

impl ContentProvider for TextureCache {
    type Texture = Rc<Texture>;
    type Error = String;

    fn load(&mut self, name: &str) -> Result<Self::Texture, Self::Error> {
        self.get_or_insert(name)
    }
}
