//! Terminal word grid runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for keyboard and mouse input and a custom framebuffer-based
//! renderer (no widget library).

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_wordgrid::config::GameConfig;
use tui_wordgrid::core::{GameSnapshot, GameState, Lexicon};
use tui_wordgrid::input::{handle_key_event, should_quit};
use tui_wordgrid::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_wordgrid::types::{GameAction, TICK_MS};
use tui_wordgrid::words;

#[derive(Parser, Debug)]
#[command(name = "tui-wordgrid", version, about)]
struct Cli {
    /// Newline-separated word list (default: assets/words.txt).
    #[arg(long)]
    words: Option<PathBuf>,

    /// JSON settings file. Command-line flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the letter roll (default: derived from the clock).
    #[arg(long)]
    seed: Option<u32>,

    /// Grid rows (1-8).
    #[arg(long)]
    rows: Option<u8>,

    /// Grid columns (1-8).
    #[arg(long)]
    cols: Option<u8>,

    /// Round length in seconds.
    #[arg(long)]
    round_secs: Option<u32>,

    /// Write logs to this file (filtered by RUST_LOG, default "info").
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> GameConfig {
        GameConfig {
            rows: self.rows,
            cols: self.cols,
            round_secs: self.round_secs,
            warn_secs: None,
            seed: self.seed,
            words: self.words.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let file_config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let config = file_config.merge(cli.overrides());

    let lexicon = words::load_or_seed(&config.words_path());
    let game_state = GameState::new(config.round_config(clock_seed()));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game_state, &lexicon);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, mut game_state: GameState, lexicon: &Lexicon) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game_state.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = game_state.score(), words = game_state.words(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game_state.apply_action(action, lexicon);
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(pos) = view.hit_test(&snap, viewport, mouse.column, mouse.row) {
                        game_state.apply_action(GameAction::ActivateAt(pos), lexicon);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game_state.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
