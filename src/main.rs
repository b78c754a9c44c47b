//! Terminal runner (default binary).
//!
//! Reads input with crossterm, advances the session with wall-clock time and
//! draws through the framebuffer renderer.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{info, LevelFilter};

use tetris_arena::cli::{parse_run_args, RunConfig, USAGE};
use tetris_arena::core::GameSession;
use tetris_arena::input::{command_for_event, should_quit};
use tetris_arena::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_arena::types::FRAME_MS;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_run_args(&args, RunConfig::from_env())? else {
        print!("{}", USAGE);
        return Ok(());
    };
    config
        .session
        .validate()
        .context("invalid session configuration")?;

    if let Some(path) = &config.log_path {
        init_logging(path, config.log_level)?;
    }

    let mut session = match config.seed {
        Some(seed) => GameSession::new(config.session, seed),
        None => GameSession::from_entropy(config.session),
    };
    info!(
        "starting {}x{} session, seed {:?}",
        config.session.width, config.session.height, config.seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut session);
    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    let stats = session.stats();
    info!(
        "exit: score {}, level {}, lines {}",
        stats.score, stats.level, stats.lines
    );
    if config.print_stats {
        println!("{}", serde_json::to_string(&stats)?);
    }
    Ok(())
}

/// Install a file logger; the terminal itself belongs to the game view.
fn init_logging(path: &Path, level: LevelFilter) -> Result<()> {
    let started = Instant::now();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{:>9.3}s {:<5} {}] {}",
                started.elapsed().as_secs_f64(),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(
            fern::log_file(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?,
        )
        .apply()
        .context("logger already installed")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    session.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = command_for_event(key) {
                        session.apply(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
