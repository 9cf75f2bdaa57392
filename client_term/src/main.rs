//! Terminal client for Pong
//!
//! Two players share one keyboard: W/S steer the left paddle, the arrow keys
//! the right one. P launches the ball, R restarts the match, Q or Esc quits.

mod input;
mod surface;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use game_core::render::{draw_frame, Surface};
use game_core::{Config, Flow, FrameClock, Game, InputEvent};
use input::{HoldTracker, FIRST_HOLD_TICKS, HOLD_TICKS};
use log::warn;
use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use surface::TermSurface;

/// Puts the terminal into game mode and restores it on drop
struct TerminalGuard {
    reports_releases: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide, SetTitle("PONG"))
            .context("Failed to set up the terminal")?;

        let reports_releases = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if reports_releases {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )
            .context("Failed to enable key release reporting")?;
        } else {
            warn!(
                "Terminal does not report key releases; keys count as held for {} ticks, {} once repeating",
                FIRST_HOLD_TICKS, HOLD_TICKS
            );
        }

        Ok(Self { reports_releases })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.reports_releases {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(12345)
}

fn run(guard: &TerminalGuard) -> Result<()> {
    let config = Config::default();
    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let mut surface = TermSurface::new(io::stdout(), cols, rows, config.board);
    let mut clock = FrameClock::new(config.tick_rate);
    let mut holds = HoldTracker::new(FIRST_HOLD_TICKS, HOLD_TICKS);
    let mut game = Game::new(config, seed());

    loop {
        // Drain all pending terminal events before physics runs
        while event::poll(Duration::ZERO).context("Failed to poll input")? {
            match event::read().context("Failed to read input")? {
                Event::Key(key) => {
                    if let Some(input) = input::translate(&key) {
                        holds.observe(input);
                        game.push_input(input);
                    }
                }
                Event::Resize(cols, rows) => surface.resize(cols, rows),
                _ => {}
            }
        }
        if !guard.reports_releases {
            for key in holds.expire() {
                game.push_input(InputEvent::KeyUp(key));
            }
        }

        if game.update() == Flow::Quit {
            return Ok(());
        }

        draw_frame(&game, &mut surface);
        surface.present();
        if let Some(err) = surface.take_error() {
            return Err(err).context("Failed to draw frame");
        }

        clock.tick();
    }
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", "warn"));

    let guard = TerminalGuard::enter()?;
    let result = run(&guard);
    drop(guard);
    result
}
