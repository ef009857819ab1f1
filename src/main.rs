//! Terminal gridfall runner.
//!
//! Uses crossterm for input and a framebuffer-based renderer. The event loop
//! sleeps in `event::poll` until either a key arrives or the session's next
//! fall deadline is due.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::GameSession;
use gridfall::input::{map_key, should_quit};
use gridfall::term::{CellGrid, GameView, TerminalRenderer, Viewport};
use gridfall::types::GameConfig;

/// Idle poll interval while no fall tick is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = GameConfig::default();
    let mut session = GameSession::new(config, clock_seed(), CellGrid::new(config));
    let view = GameView::default();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(session.sink(), session.status(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next fall deadline.
        let timeout = session
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(cmd) = map_key(key) {
                        session.handle(cmd, Instant::now());
                    }
                }
            }
        }

        session.poll(Instant::now());
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
