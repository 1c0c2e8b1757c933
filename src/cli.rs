use crate::board::BoardConfig;
use crate::grid::Size;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use structopt::clap::Shell;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

fn load_config(s: &str) -> Result<BoardConfig, String> {
    let path = PathBuf::from(s);
    let file = File::open(path).map_err(|e| format!("Failed to open config file: {}", e))?;
    let reader = BufReader::new(file);
    let config: BoardConfig = serde_json::from_reader(reader)
        .map_err(|e| format!("Failed to parse config file: {}", e))?;

    config.validate().map_err(|e| e.to_string())?;

    Ok(config)
}

#[derive(Debug)]
pub struct RendererConfig {
    pub window_size: Option<Size>,
    pub vsync: bool,
    pub fullscreen: bool,
}

#[derive(Debug)]
pub struct AppConfig {
    pub assets: PathBuf,
    pub board: BoardConfig,
    pub seed: Option<u64>,
    pub renderer: RendererConfig,
}

#[derive(Debug, StructOpt)]
#[structopt(name = "Number Tiles", about = "Guess the hidden digit by clicking its tile")]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(
        parse(from_os_str),
        short,
        long,
        default_value = "assets",
        help = "Directory holding the tile textures"
    )]
    assets: PathBuf,

    #[structopt(parse(try_from_str = load_config), short, long, help = "Board layout (json)")]
    config: Option<BoardConfig>,

    #[structopt(parse(try_from_str), short, long, help = "Random seed")]
    seed: Option<u64>,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        help = "Window size, defaults to the board size"
    )]
    window_size: Option<Size>,

    #[structopt(long, help = "Turns on vsync")]
    vsync: bool,

    #[structopt(short, long, help = "Runs the application in full screen")]
    fullscreen: bool,

    #[structopt(long, possible_values = &Shell::variants(), case_insensitive = true, help = "Generate shell completions and exit")]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn to_app_config(self) -> AppConfig {
        AppConfig {
            assets: self.assets,
            board: self.config.unwrap_or_default(),
            seed: self.seed,
            renderer: RendererConfig {
                window_size: self.window_size,
                vsync: self.vsync,
                fullscreen: self.fullscreen,
            },
        }
    }
}
