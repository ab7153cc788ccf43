//! Terminal grid chase runner.
//!
//! Keyboard input and enemy ticks both go through the controller's command
//! queue; the loop drains it once per frame and redraws when something changed.

use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tokio::runtime::{Handle, Runtime};
use tracing_subscriber::EnvFilter;

use grid_chase::engine::{Command, Controller, EngineConfig, StepResult, Ticker};
use grid_chase::input::{handle_key_event, should_quit};
use grid_chase::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Input poll timeout; bounds how long a queued tick waits to be drawn.
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    init_tracing(config.log_path.as_deref())?;
    tracing::info!(
        seed = config.seed,
        tick_ms = config.tick_ms,
        queue = config.queue_capacity,
        "starting grid chase"
    );

    let runtime = Runtime::new().context("failed to start tokio runtime")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, runtime.handle().clone());

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "grid chase exited with error");
    }
    result
}

/// Log to a file when a path is configured; stdout belongs to the board.
fn init_tracing(log_path: Option<&str>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = File::create(path).with_context(|| format!("cannot open log file {path}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &EngineConfig, runtime: Handle) -> Result<()> {
    let mut controller = Controller::new(config);
    let mut ticker = Ticker::new(runtime, config.tick_interval());

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(controller.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        tracing::info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if let Err(err) = controller.submit(Command::Action(action)) {
                            tracing::warn!(error = %err, ?action, "input dropped");
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        let round = controller.state().round_id();
        let applied = controller.process_pending(|step| {
            if let StepResult::Outcome(outcome) = step {
                tracing::info!(won = outcome.won, score = outcome.score, "{}", outcome.message);
            }
        });
        if applied == 0 {
            continue;
        }
        dirty = true;

        // The ticker runs only while the round is live and is re-phased when
        // a new round begins.
        let state = controller.state();
        if state.is_playable() {
            if !ticker.is_running() || state.round_id() != round {
                ticker.start(controller.sender(), state.round_id());
            }
        } else if ticker.is_running() {
            ticker.stop();
        }
    }
}
