use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::Context as _;
use gridsnake_engine::{CollisionRule, GameSeed, GameState};
use ratatui_runtime::Runtime;
use tracing_subscriber::EnvFilter;

use self::app::PlayApp;

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Target frames per second of the render loop
    #[clap(long, default_value_t = 60.0)]
    fps: f64,
    /// Seed for apple and snake placement (32 hex digits, random if omitted)
    #[clap(long)]
    seed: Option<GameSeed>,
    /// How moving into the cell the tail is leaving is judged
    #[clap(long, value_enum, default_value_t = CollisionRuleArg::Strict)]
    collision_rule: CollisionRuleArg,
    /// File that receives the log output
    #[clap(long, default_value = "gridsnake.log")]
    log_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CollisionRuleArg {
    /// Any snake cell is fatal, including the tail
    Strict,
    /// The tail cell may be entered in the step it is vacated
    VacatingTail,
}

impl From<CollisionRuleArg> for CollisionRule {
    fn from(arg: CollisionRuleArg) -> Self {
        match arg {
            CollisionRuleArg::Strict => Self::Strict,
            CollisionRuleArg::VacatingTail => Self::VacatingTail,
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub(crate) enum StartupError {
    #[display("cannot create log file {}", path.display())]
    LogFile { path: PathBuf, source: io::Error },
    #[display(
        "terminal is {width}x{height} cells, but at least {min_width}x{min_height} are needed"
    )]
    SurfaceTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
    #[display("terminal I/O failed")]
    Terminal { source: io::Error },
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    init_logging(&arg.log_file)?;

    let result = play(arg);
    if let Err(err) = &result {
        tracing::error!("{err:#}");
    }
    result
}

fn play(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        fps,
        seed,
        collision_rule,
        log_file: _,
    } = arg;

    check_terminal_size().context("terminal cannot show the board")?;

    let game = match seed {
        Some(seed) => GameState::with_seed(*seed),
        None => GameState::new(),
    }
    .with_collision_rule((*collision_rule).into());
    tracing::info!(
        seed = %game.seed(),
        collision_rule = ?game.collision_rule(),
        fps,
        "starting game"
    );

    let mut app = PlayApp::new(game, *fps);
    Runtime::new()
        .run(&mut app)
        .map_err(|source| StartupError::Terminal { source })
        .context("terminal session ended with an error")?;

    tracing::info!("exiting");
    Ok(())
}

fn init_logging(path: &Path) -> Result<(), StartupError> {
    let file = File::create(path).map_err(|source| StartupError::LogFile {
        path: path.to_owned(),
        source,
    })?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn check_terminal_size() -> Result<(), StartupError> {
    let (width, height) =
        crossterm::terminal::size().map_err(|source| StartupError::Terminal { source })?;
    let (min_width, min_height) = PlayApp::min_size();
    if width < min_width || height < min_height {
        return Err(StartupError::SurfaceTooSmall {
            width,
            height,
            min_width,
            min_height,
        });
    }
    Ok(())
}
