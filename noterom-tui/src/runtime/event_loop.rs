use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_key;

/// Upper bound on how long a single input poll blocks.
const MAX_POLL: Duration = Duration::from_millis(250);

/// Periodic work driven by the event loop.
#[derive(Debug, Clone, Copy)]
pub struct Timers {
    /// Live clock refresh.
    pub clock_tick: Duration,
    /// Active/focused class recompute.
    pub active_refresh: Duration,
}

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    timers: Timers,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    let mut last_clock_tick = Instant::now();
    let mut last_active_refresh = Instant::now();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        let until_tick = timers
            .clock_tick
            .saturating_sub(last_clock_tick.elapsed())
            .min(MAX_POLL);
        if event::poll(until_tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, app, &action_tx);
                }
            }
        }

        if last_clock_tick.elapsed() >= timers.clock_tick {
            app.tick_clock();
            last_clock_tick = Instant::now();
        }

        if last_active_refresh.elapsed() >= timers.active_refresh {
            let _ = action_tx.send(Action::RefreshActive);
            last_active_refresh = Instant::now();
        }

        while let Ok(action) = action_rx.try_recv() {
            tracing::debug!("Running action {:?}", action);
            run_action(action, app);
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
