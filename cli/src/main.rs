use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mazerun_core::{CellCount, Coord, EngineState, GameEngine, MazeGenerator, RandomMazeGenerator};

use input::LineInput;
use settings::{RenderMode, Settings};

mod game;
mod input;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML file with default settings, overridden by any flag below
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid height, border included
    #[arg(long)]
    height: Option<Coord>,

    /// Grid width, border included
    #[arg(long)]
    width: Option<Coord>,

    /// Number of checkpoint traps
    #[arg(short = 'k', long)]
    checkpoints: Option<CellCount>,

    /// Number of interior wall draws
    #[arg(short, long)]
    walls: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// How to draw frames
    #[arg(short, long, value_enum)]
    render: Option<RenderMode>,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            height: self.height,
            width: self.width,
            checkpoints: self.checkpoints,
            walls: self.walls,
            seed: self.seed,
            render: self.render,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let file_settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = file_settings.merge(args.settings());
    log::debug!("settings: {:?}", settings);

    let config = settings.game_config()?;
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);

    let grid = RandomMazeGenerator::new(seed)
        .generate(config)
        .with_context(|| format!("could not generate a maze with seed {seed}"))?;
    let mut engine = GameEngine::new(grid);

    let mut input = LineInput::new(io::stdin().lock());
    let mut renderer = render::renderer_for(settings.render_mode());
    let mut out = io::stdout().lock();

    match game::run(&mut engine, &mut input, renderer.as_mut(), &mut out)? {
        Some(EngineState::Won) => log::info!("Won in {} turns", engine.turn()),
        Some(EngineState::Lost) => log::info!("Lost in {} turns", engine.turn()),
        Some(EngineState::Playing) | None => log::info!("Game abandoned"),
    }

    Ok(())
}
