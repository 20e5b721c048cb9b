//! Tests for the shared event loop and its blink timer.

use anyhow::Result;
use rand::rngs::mock::StepRng;
use ratatui::style::Modifier;
use ratatui::text::Text;
use std::collections::VecDeque;
use std::time::Duration;
use strictly_games::{Frontend, Key, Session, drive};
use tokio::time::sleep;

/// Replays a fixed list of keys and records whether each frame shows the
/// cursor highlight.
#[derive(Default)]
struct ScriptedFrontend {
    keys: VecDeque<Key>,
    close_when_done: bool,
    highlights: Vec<bool>,
}

impl ScriptedFrontend {
    fn with_keys(keys: &[Key]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            ..Default::default()
        }
    }
}

#[async_trait::async_trait]
impl Frontend for ScriptedFrontend {
    async fn next_key(&mut self) -> Result<Option<Key>> {
        if let Some(key) = self.keys.pop_front() {
            return Ok(Some(key));
        }
        if self.close_when_done {
            return Ok(None);
        }
        std::future::pending().await
    }

    async fn present(&mut self, frame: Text<'static>) -> Result<()> {
        let highlighted = frame.lines[..7]
            .iter()
            .flat_map(|line| line.spans.iter())
            .any(|span| span.style.add_modifier.contains(Modifier::REVERSED));
        self.highlights.push(highlighted);
        Ok(())
    }
}

fn cross_starts() -> Session<StepRng> {
    Session::new(StepRng::new(0, 0))
}

#[tokio::test(start_paused = true)]
async fn test_blink_toggles_highlight_until_stopped() {
    let mut frontend = ScriptedFrontend::default();
    let mut session = cross_starts();

    drive(
        &mut frontend,
        &mut session,
        Duration::from_millis(50),
        sleep(Duration::from_millis(175)),
    )
    .await
    .expect("drive");

    assert_eq!(frontend.highlights, vec![true, false, true, false]);
    assert!(!session.selection_visible());
}

#[tokio::test(start_paused = true)]
async fn test_loop_ends_when_player_quits() {
    let mut frontend = ScriptedFrontend::with_keys(&[Key::Right, Key::Char('q')]);
    let mut session = cross_starts();

    drive(
        &mut frontend,
        &mut session,
        Duration::from_millis(50),
        std::future::pending(),
    )
    .await
    .expect("drive");

    assert_eq!(frontend.highlights, vec![true, true]);
    assert!(session.selection_visible());
}

#[tokio::test(start_paused = true)]
async fn test_loop_ends_when_input_closes() {
    let mut frontend = ScriptedFrontend {
        close_when_done: true,
        ..ScriptedFrontend::with_keys(&[Key::Enter])
    };
    let mut session = cross_starts();

    drive(
        &mut frontend,
        &mut session,
        Duration::from_millis(50),
        std::future::pending(),
    )
    .await
    .expect("drive");

    assert_eq!(frontend.highlights.len(), 2);
    assert!(session.game().board().get(strictly_tictactoe::Position::TopLeft).mark().is_some());
}
