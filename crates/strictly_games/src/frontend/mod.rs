//! Front ends and the event loop they share.
//!
//! A [`Frontend`] supplies keys and displays rendered frames; [`drive`]
//! runs one [`Session`] on top of it together with the blink timer.

mod local;
mod telnet;

pub use local::{LocalTerminal, run_standalone};
pub use telnet::TelnetClient;

use crate::input::Key;
use crate::render::render;
use crate::session::{Session, SessionFlow};
use anyhow::Result;
use rand::Rng;
use ratatui::{
    Frame,
    layout::Rect,
    text::Text,
    widgets::{Block, Borders, Paragraph},
};
use std::future::Future;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, instrument};

/// Title shown on the frame border.
const TITLE: &str = " Tic-Tac-Toe ";

/// Draws a rendered session in a bordered block anchored at the top left,
/// shrunk to fit the text.
pub(crate) fn draw_board(f: &mut Frame, frame: Text<'static>) {
    let area = f.area();
    let width = (frame.width() as u16 + 4).min(area.width);
    let height = (frame.height() as u16 + 2).min(area.height);
    let board_area = Rect::new(area.x, area.y, width, height);

    let paragraph = Paragraph::new(frame).block(Block::default().borders(Borders::ALL).title(TITLE));
    f.render_widget(paragraph, board_area);
}

/// Source of keys and sink for frames for a single session.
#[async_trait::async_trait]
pub trait Frontend: Send {
    /// Waits for the next key. `None` means the input side closed.
    ///
    /// Must be cancel safe: [`drive`] drops the future whenever the blink
    /// timer fires first.
    async fn next_key(&mut self) -> Result<Option<Key>>;

    /// Replaces whatever is on screen with `frame`.
    async fn present(&mut self, frame: Text<'static>) -> Result<()>;
}

/// Runs `session` until the player quits, declines a rematch, the input
/// closes or `stop` resolves.
///
/// Events are handled one at a time; the blink timer lives inside this call
/// and is gone once it returns.
#[instrument(skip_all, fields(blink_ms = blink.as_millis() as u64))]
pub async fn drive<F, R, S>(
    frontend: &mut F,
    session: &mut Session<R>,
    blink: Duration,
    stop: S,
) -> Result<()>
where
    F: Frontend + ?Sized,
    R: Rng + Send,
    S: Future<Output = ()> + Send,
{
    let mut blink = interval(blink);
    blink.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    blink.tick().await;
    tokio::pin!(stop);

    loop {
        frontend.present(render(session)).await?;

        tokio::select! {
            key = frontend.next_key() => match key? {
                Some(key) => {
                    if session.handle_key(key) == SessionFlow::Exit {
                        info!("Session finished");
                        return Ok(());
                    }
                }
                None => {
                    info!("Input closed");
                    return Ok(());
                }
            },
            _ = blink.tick() => session.tick(),
            _ = &mut stop => {
                debug!("Stop requested");
                return Ok(());
            }
        }
    }
}
