//! Terminal runner (default binary).
//!
//! The game runs on a session task; this loop only forwards key presses and
//! redraws whenever a new snapshot is published. Set `SPINTRIS_LOG` to a file
//! path to capture tracing output, since stdout belongs to the terminal.

use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use spintris::core::{Game, GameConfig};
use spintris::engine::{SessionConfig, SessionHandle};
use spintris::term::{map_key, should_quit, FrameBuffer, GameView, TerminalRenderer, Viewport};
use spintris::types::TICK_MS;

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    let game = Game::with_config(config.clone()).context("invalid game configuration")?;
    info!(
        width = config.width,
        height = config.height,
        seed = config.seed,
        "starting spintris"
    );
    let session = SessionHandle::start(game, SessionConfig::from_env())?;

    let mut term = TerminalRenderer::stdout();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("SPINTRIS_LOG") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.to_string_lossy()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut session: SessionHandle) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = Viewport::new(0, 0);
    let mut snap = session.snapshot();
    let mut dirty = true;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if (w, h) != (viewport.width, viewport.height) {
            viewport = Viewport::new(w, h);
            term.invalidate();
            dirty = true;
        }
        if session.has_changed() {
            snap = session.snapshot();
            dirty = true;
        }
        if dirty {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Events are only logged; the snapshot carries everything drawn.
        while let Some(event) = session.try_recv_event() {
            tracing::debug!(?event, "game event");
        }

        if event::poll(Duration::from_millis(u64::from(TICK_MS)))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(command) = map_key(key) {
                        session.send(command);
                    }
                }
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }
    }

    let game = session.shutdown()?;
    info!(score = game.score(), lines = game.lines_cleared(), "exiting");
    Ok(())
}
