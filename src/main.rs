//! Terminal runner (default binary).
//!
//! Drives the engine the way the classic desktop version did: arrow keys move
//! and rotate, a fixed timer calls `advance`, and the whole view is redrawn
//! after every call.

use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Engine, EngineSnapshot};
use blockfall::driver::{parse_args, DriverConfig, USAGE};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::GameAction;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let mut engine =
        Engine::new(config.engine_config()).context("invalid engine configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    println!("score: {}  lines: {}", engine.score(), engine.lines_cleared());
    Ok(())
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine, config: &DriverConfig) -> Result<()> {
    let view = GameView::default();
    let mut snap = EngineSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = config.tick();
    let mut next_tick = Instant::now() + tick;

    loop {
        // Render.
        engine.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&fb)?;

        // Input with timeout until the next gravity step.
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        // Restart only once the game has ended.
                        Some(GameAction::Restart) if engine.game_over() => {
                            engine.restart();
                            next_tick = Instant::now() + tick;
                        }
                        Some(GameAction::Restart) | None => {}
                        Some(action) => {
                            engine.apply_action(action);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        if Instant::now() >= next_tick {
            next_tick = Instant::now() + tick;
            if !engine.game_over() {
                engine.advance();
            }
        }
    }
}
