//! Standalone mode: one session in the current terminal.

use super::{Frontend, draw_board, drive};
use crate::config::GameConfig;
use crate::input::{Key, key_from_event};
use crate::session::Session;
use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend, text::Text};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument, warn};

/// The local terminal in raw mode on the alternate screen.
pub struct LocalTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventStream,
}

impl LocalTerminal {
    /// Enters raw mode and the alternate screen.
    #[instrument]
    pub fn open() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let opened = undo_on_error(Self::enter_screen(), || {
            disable_raw_mode()?;
            let mut stdout = io::stdout();
            execute!(stdout, LeaveAlternateScreen)
        });
        debug!(ok = opened.is_ok(), "Terminal opened");
        opened
    }

    fn enter_screen() -> Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            events: EventStream::new(),
        })
    }

    /// Leaves the alternate screen and raw mode.
    #[instrument(skip(self))]
    pub fn restore(mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        debug!("Terminal restored");
        Ok(())
    }
}

#[async_trait::async_trait]
impl Frontend for LocalTerminal {
    async fn next_key(&mut self) -> Result<Option<Key>> {
        while let Some(event) = self.events.next().await {
            match event.context("Failed to read terminal event")? {
                // Skip key release events (crossterm fires both press and release).
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(key) = key_from_event(key) {
                        return Ok(Some(key));
                    }
                }
                _ => {}
            }
        }
        Ok(None)
    }

    async fn present(&mut self, frame: Text<'static>) -> Result<()> {
        self.terminal.draw(|f| draw_board(f, frame))?;
        Ok(())
    }
}

/// Plays one session in the current terminal until the player leaves.
///
/// The terminal is restored even when the session fails.
#[instrument(skip(config))]
pub async fn run_standalone(config: &GameConfig) -> Result<()> {
    info!("Starting standalone session");

    let mut terminal = LocalTerminal::open()?;
    let mut session = Session::new(config.session_rng(0));
    let res = drive(
        &mut terminal,
        &mut session,
        config.blink_interval(),
        std::future::pending(),
    )
    .await;
    let res = prefer_session_error(res, terminal.restore());

    if let Err(e) = &res {
        error!(error = ?e, "Standalone session failed");
    }
    println!("Bye!");
    res
}

/// Runs `undo` when a setup step failed; its own failure is only logged.
fn undo_on_error<T>(res: Result<T>, undo: impl FnOnce() -> io::Result<()>) -> Result<T> {
    if res.is_err() {
        if let Err(e) = undo() {
            warn!(error = %e, "Failed to undo terminal setup");
        }
    }
    res
}

/// A failed restore is logged; the session's own result is what counts.
fn prefer_session_error(res: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(e) = restored {
        warn!(error = ?e, "Failed to restore terminal");
    }
    res
}
