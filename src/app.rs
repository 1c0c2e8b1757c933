use crate::board::Board;
use crate::cli::AppConfig;
use crate::cues::{CuePlayer, LogCuePlayer};
use crate::render::sdl_renderer::{SdlConfig, SdlRenderer};
use crate::texture_cache::TextureCache;

use log::info;
use rand::rngs::OsRng;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub struct GameApp {
    config: AppConfig,
}

impl GameApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let (board_width, board_height) = self.config.board.extent();
        let window_size = match self.config.renderer.window_size {
            Some(size) => (size.width as u32, size.height as u32),
            None => (board_width, board_height),
        };

        let mut renderer = SdlRenderer::new(&SdlConfig {
            window_size,
            vsync: self.config.renderer.vsync,
            fullscreen: self.config.renderer.fullscreen,
        })?;
        let mut content = TextureCache::new(renderer.texture_creator(), self.config.assets.clone());
        let cues: Rc<dyn CuePlayer> = Rc::new(LogCuePlayer);

        let seed = self.config.seed.unwrap_or_else(|| OsRng.gen());
        info!("Using seed: {}", seed);

        let mut rng = XorShiftRng::seed_from_u64(seed);
        let mut board = Board::new(&mut content, self.config.board, cues, &mut rng)?;
        let mut rounds = 1;
        let mut last_frame = Instant::now();

        loop {
            renderer.handle_events();

            if renderer.should_quit() {
                break;
            }

            let now = Instant::now();
            let elapsed = now.duration_since(last_frame).as_millis().min(u32::MAX as u128) as u32;
            // Keep the sub-millisecond part for the next frame.
            last_frame += Duration::from_millis(elapsed as u64);

            let pointer = renderer.pointer();

            if board.update(elapsed, &pointer) {
                info!("Round {} solved, the digit was {}", rounds, board.correct_digit());

                board.new_round(&mut content, &mut rng)?;
                rounds += 1;
            }

            renderer.clear();
            board.draw(&mut renderer)?;
            renderer.present();
        }

        info!("Played {} rounds", rounds);
        Ok(())
    }
}
