use log::debug;
use number_tile::app::GameApp;
use number_tile::cli::Opt;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io;
use structopt::StructOpt;
use structopt_flags::LogLevel;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt: Opt = Opt::from_args();

    if let Some(shell) = opt.completions {
        Opt::clap().gen_completions_to("number-tile", shell, &mut io::stdout());
        return Ok(());
    }

    TermLogger::init(
        opt.verbose.get_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let config = opt.to_app_config();
    debug!("{:?}", config);

    GameApp::new(config).run()
}
