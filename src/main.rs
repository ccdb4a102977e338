//! Terminal runner (default binary).
//!
//! Polls crossterm for keys, feeds the engine, advances gravity once per
//! frame and redraws through the framebuffer renderer.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use tetromino::core::{GameSnapshot, GameState, RandomSource};
use tetromino::input::{handle_key_event, should_quit};
use tetromino::term::{FrameBuffer, GameView, TerminalRenderer};
use tetromino::types::FRAME_MS;

#[derive(Debug, Parser)]
#[command(version, about = "Falling-block puzzle game for the terminal")]
struct Cli {
    /// Seed for the piece sequence (random when omitted)
    #[arg(long, env = "TETROMINO_SEED")]
    seed: Option<u64>,

    /// Frame length in milliseconds
    #[arg(
        long,
        env = "TETROMINO_FRAME_MS",
        default_value_t = FRAME_MS,
        value_parser = clap::value_parser!(u32).range(1..=1000)
    )]
    frame_ms: u32,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long, env = "TETROMINO_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (default INFO, -v = DEBUG, -vv = TRACE)")]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli);

    // Always try to restore terminal state before reporting.
    let restored = term.exit();
    result.and(restored)
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = cli.log_file.as_deref() else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::from_level(level))
        .init();

    info!("Logging initialized at level: {}", level);
    Ok(())
}

fn run(term: &mut TerminalRenderer, cli: &Cli) -> Result<()> {
    let source = match cli.seed {
        Some(seed) => RandomSource::new(seed),
        None => RandomSource::from_entropy(),
    };
    info!(seed = source.seed(), frame_ms = cli.frame_ms, "starting game");

    let mut game = GameState::with_source(source);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(cli.frame_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        game.snapshot_into(&mut snap);
        view.render_into(&snap, term.viewport()?, &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout).context("failed to poll terminal events")? {
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(
                            score = game.score(),
                            level = game.level(),
                            lines = game.lines(),
                            "quit"
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let applied = game.apply_action(action);
                        debug!(action = action.as_str(), applied, "input");
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        if now.saturating_duration_since(last_tick) >= frame {
            game.tick(advance_clock(&mut last_tick, now));
        }
    }
}

/// Whole milliseconds between `last_tick` and `now`.
///
/// `last_tick` moves forward by exactly that amount, so the sub-millisecond
/// remainder counts toward the next frame.
fn advance_clock(last_tick: &mut Instant, now: Instant) -> u32 {
    let elapsed = now.saturating_duration_since(*last_tick);
    let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
    *last_tick += Duration::from_millis(elapsed_ms as u64);
    elapsed_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_clock_carries_sub_millisecond_remainder() {
        let start = Instant::now();
        let mut last_tick = start;

        // Three 16.7ms frames: 16 + 17 + 17 = 50ms accounted, nothing lost.
        let mut total = 0;
        for frame in 1..=3u64 {
            let now = start + Duration::from_micros(16_700 * frame);
            total += advance_clock(&mut last_tick, now);
        }
        assert_eq!(total, 50);
        assert_eq!(last_tick, start + Duration::from_millis(50));
    }

    #[test]
    fn advance_clock_ignores_time_going_backwards() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut last_tick = start;
        assert_eq!(advance_clock(&mut last_tick, start - Duration::from_millis(5)), 0);
        assert_eq!(last_tick, start);
    }
}
