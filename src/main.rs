//! Terminal Cloud Jump runner (default binary).
//!
//! Renders with the framebuffer-based `TerminalRenderer`, reads keys through
//! crossterm and drives a `Session` backed by the on-disk best-score file.

use std::fs::OpenOptions;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use cloud_jump::core::{GameSnapshot, Session};
use cloud_jump::input::{handle_key_event, InputHandler};
use cloud_jump::store::FileStore;
use cloud_jump::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use cloud_jump::types::GameAction;
use cloud_jump::GameConfig;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// The terminal is owned by the game, so logs only go to a file.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let store = match &config.best_path {
        Some(path) => FileStore::new(path),
        None => FileStore::open_default(),
    };
    info!(
        "starting cloud-jump seed={} best_path={} tick_ms={}",
        config.seed,
        store.path().display(),
        config.tick_ms
    );
    let mut session = Session::new(config.seed, store);

    let view = GameView::default();
    // Real release events make the timeout unnecessary.
    let release_timeout = if term.key_releases() {
        None
    } else {
        config.key_release_timeout
    };
    let mut input = InputHandler::new().with_key_release_timeout(release_timeout);

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = config.tick_duration();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next tick is due.
        loop {
            let timeout = tick.saturating_sub(last_tick.elapsed());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    input.handle_key_event(key);
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match handle_key_event(key) {
                        Some(GameAction::Quit) => {
                            info!("quit at score {} (best {})", session.score(), session.best());
                            return Ok(());
                        }
                        Some(action) => {
                            if session.apply(action) {
                                input.reset();
                            }
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let now = Instant::now();
        let elapsed_ms = now
            .duration_since(last_tick)
            .as_millis()
            .min(u32::MAX as u128) as u32;
        last_tick = now;
        session.tick(elapsed_ms, input.intent_at(now));
    }
}
