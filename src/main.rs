//! Terminal Flappy Bird runner (default binary).
//!
//! Wires the simulation to crossterm input, the framebuffer renderer, the
//! speaker and the persistence worker. The simulation decides when the next
//! tick is due; this loop only waits for input until then.

use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{ArgAction, Parser};
use crossterm::event::{self, Event};
use crossterm::terminal;
use tracing::{debug, info};

use flappy_tui::audio::Speaker;
use flappy_tui::core::{Effects, GameState, Moment};
use flappy_tui::input::{map_event, playfield_size};
use flappy_tui::store::ScoreStore;
use flappy_tui::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use flappy_tui::types::{Difficulty, GameAction, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use flappy_tui::{logging, Config, PersistWorker, TickTimer};

/// Poll timeout while no tick is pending (title and game-over screens).
const IDLE_POLL: Duration = Duration::from_millis(250);

/// How long to wait for queued score saves on exit.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

#[derive(Parser, Debug)]
#[command(name = "flappy-tui", version, disable_version_flag = true)]
#[command(about = "Flappy Bird in your terminal")]
struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Directory holding highscore.json and rankings.json [env: FLAPPY_DATA_DIR]
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Disable sound [env: FLAPPY_MUTE]
    #[arg(long)]
    mute: bool,

    /// Append logs to this file [env: FLAPPY_LOG_PATH]
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Difficulty preselected on the title screen (easy, normal, hard)
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,
}

impl Cli {
    fn apply(self, mut config: Config) -> Config {
        if let Some(dir) = self.data_dir {
            config.data_dir = dir;
        }
        if self.mute {
            config.mute = true;
        }
        if let Some(path) = self.log_file {
            config.log_path = Some(path);
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        config
    }
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s).ok_or_else(|| format!("unknown difficulty '{s}' (easy, normal, hard)"))
}

fn main() -> Result<()> {
    let config = Cli::parse().apply(Config::from_env());
    logging::init(config.log_path.as_deref())?;
    info!(
        data_dir = %config.data_dir.display(),
        mute = config.mute,
        difficulty = config.difficulty.name(),
        "starting"
    );

    let store = ScoreStore::new(&config.data_dir);
    let leaderboard = store.load_leaderboard();
    let mut persist = PersistWorker::start(store, leaderboard.clone())?;

    let speaker = if config.mute {
        Speaker::muted()
    } else {
        Speaker::open()
    };

    let mut game = GameState::new(rand::random())
        .with_difficulty(config.difficulty)
        .with_leaderboard(leaderboard);

    let mut term = TerminalRenderer::new();
    let result = term
        .enter()
        .and_then(|()| run(&mut term, &mut game, &speaker, &mut persist));

    // Always try to restore terminal state.
    let _ = term.exit();
    persist.shutdown(SHUTDOWN_GRACE);
    info!("bye");
    result
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    speaker: &Speaker,
    persist: &mut PersistWorker,
) -> Result<()> {
    let view = GameView::default();
    let mut timer = TickTimer::new();
    let mut fb = FrameBuffer::new(0, 0);

    let (cols, rows) = terminal::size().unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT + 1));
    let mut viewport = Viewport::new(cols, rows);
    let (width, height) = playfield_size(cols, rows);
    game.handle(GameAction::Resize { width, height }, Moment::now());

    loop {
        if let Some(board) = persist.try_recv() {
            debug!(best = board.best_score(), "leaderboard refreshed");
            game.set_leaderboard(board);
        }

        view.render_into(game, Instant::now(), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = timer.timeout(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            let event = event::read()?;
            if let Event::Resize(cols, rows) = event {
                viewport = Viewport::new(cols, rows);
                term.invalidate();
            }
            if let Some(action) = map_event(&event) {
                let now = Moment::now();
                let fx = game.handle(action, now);
                if apply(fx, now, &mut timer, speaker, persist).is_break() {
                    return Ok(());
                }
            }
        }

        let now = Moment::now();
        if timer.fire(now.instant) {
            let fx = game.tick(now);
            if apply(fx, now, &mut timer, speaker, persist).is_break() {
                return Ok(());
            }
        }
    }
}

/// Carry out the effects of one simulation step.
fn apply(
    fx: Effects,
    now: Moment,
    timer: &mut TickTimer,
    speaker: &Speaker,
    persist: &PersistWorker,
) -> ControlFlow<()> {
    if let Some(after) = fx.schedule_tick {
        timer.schedule(after, now.instant);
    }
    for sound in fx.sounds {
        speaker.notify(sound);
    }
    if let Some(record) = fx.persist {
        persist.submit(record);
    }
    if fx.quit {
        ControlFlow::Break(())
    } else {
        ControlFlow::Continue(())
    }
}
