use super::{DrawSurface, Tint};
use crate::geometry::Rect;
use crate::input::{ButtonState, PointerState};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{FullscreenType, Window, WindowContext};
use sdl2::EventPump;
use std::rc::Rc;

#[derive(Debug, Clone, Copy)]
pub struct SdlConfig {
    pub window_size: (u32, u32),
    pub vsync: bool,
    pub fullscreen: bool,
}

/// SDL2 window the board is drawn into.
pub struct SdlRenderer {
    canvas: Canvas<Window>,
    events: EventPump,
    should_quit: bool,
}

impl SdlRenderer {
    pub fn new(config: &SdlConfig) -> Result<Self, String> {
        let context = sdl2::init()?;
        let video = context.video()?;

        let mut window = video
            .window("Number Tiles", config.window_size.0, config.window_size.1)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        if config.fullscreen {
            window.set_fullscreen(FullscreenType::True)?;
        }

        let mut builder = window.into_canvas().target_texture();

        if config.vsync {
            builder = builder.present_vsync();
        }

        let mut canvas = builder.build().map_err(|e| e.to_string())?;
        canvas.set_blend_mode(BlendMode::Blend);

        let events = context.event_pump()?;

        Ok(Self {
            canvas,
            events,
            should_quit: false,
        })
    }

    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }

    pub fn clear(&mut self) {
        self.canvas.set_draw_color(Color::BLACK);
        self.canvas.clear();
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    pub fn handle_events(&mut self) {
        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    self.should_quit = true;
                }
                _ => {}
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Samples the cursor; call after `handle_events` so the state is current.
    pub fn pointer(&self) -> PointerState {
        let mouse = self.events.mouse_state();

        PointerState::new(mouse.x(), mouse.y(), ButtonState::from(mouse.left()))
    }
}

fn to_sdl(rect: Rect) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(rect.x, rect.y, rect.width, rect.height)
}

impl DrawSurface<Rc<Texture>> for SdlRenderer {
    type Error = String;

    fn draw(&mut self, texture: &Rc<Texture>, destination: Rect, source: Rect, tint: Tint) -> Result<(), Self::Error> {
        // Textures are shared between tiles, so color modulation is not applied here.
        if tint != Tint::NONE {
            return Err(format!("tinted drawing is not supported: {:?}", tint));
        }

        if destination.is_empty() || source.is_empty() {
            return Ok(());
        }

        self.canvas.copy(texture, to_sdl(source), to_sdl(destination))
    }
}
