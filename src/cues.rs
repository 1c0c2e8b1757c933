use enum_map::Enum;
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Cue {
    Correct,
    Incorrect,
}

impl Cue {
    pub fn name(self) -> &'static str {
        match self {
            Cue::Correct => "correctGuess",
            Cue::Incorrect => "incorrectGuess",
        }
    }
}

/// Plays named audio cues. Shared between tiles, so it takes `&self`.
pub trait CuePlayer {
    fn play_cue(&self, name: &str);
}

/// Cue player for frontends without an audio device; cues go to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCuePlayer;

impl CuePlayer for LogCuePlayer {
    fn play_cue(&self, name: &str) {
        info!("Cue: {}", name);
    }
}
