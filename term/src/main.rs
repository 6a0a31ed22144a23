use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use minesweep_core::{CellCount, Coord};
use rand::Rng;

use crate::app::App;
use crate::config::ConfigLayer;

mod app;
mod config;
mod input;
mod logging;
mod render;

// -h is the height, so help is long-only
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_flag = true)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Minefield width
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..))]
    width: Option<Coord>,

    /// Minefield height
    #[arg(short = 'h', long, value_parser = clap::value_parser!(u8).range(1..))]
    height: Option<Coord>,

    /// Number of mines
    #[arg(short = 'n', long)]
    mines: Option<CellCount>,

    /// Use ascii characters
    #[arg(short, long)]
    ascii: bool,

    /// Draw the ascii view without colours
    #[arg(long)]
    no_color: bool,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Read defaults from a TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    fn config_layer(&self) -> ConfigLayer {
        ConfigLayer {
            width: self.width,
            height: self.height,
            mines: self.mines,
            ascii: self.ascii.then_some(true),
            color: self.no_color.then_some(false),
            seed: self.seed,
            log_file: self.log_file.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let file_layer = match &args.config {
        Some(path) => ConfigLayer::load(path)?,
        None => ConfigLayer::default(),
    };
    let settings = args.config_layer().layered_over(file_layer).resolve();

    logging::init_logging(args.verbose.log_level_filter(), settings.log_file.as_deref())?;

    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("seed: {}", seed);
    log::debug!("settings: {:?}", settings);

    let mut app = App::new(&settings, seed);
    app::run_in_terminal(&mut app).context("terminal session failed")?;

    let session = app.session();
    log::info!(
        "Quit after {}s, game over: {}, won: {}",
        session.elapsed_seconds(),
        session.is_game_over(),
        session.did_win()
    );
    Ok(())
}
