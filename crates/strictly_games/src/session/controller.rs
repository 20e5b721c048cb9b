//! Session controller: turns keys into cursor moves, engine calls and phase
//! changes for one hot-seat game at a time.

use super::cursor::{Cursor, Direction};
use crate::input::Key;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use strictly_tictactoe::{GameState, MoveOutcome, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Coarse phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// A game is running and accepts moves.
    Playing,
    /// The game ended; waiting for the play-again answer.
    AwaitingReplay,
}

/// What the front end should do after handing the session a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlow {
    /// Keep reading input.
    Continue,
    /// The session is over; tear it down.
    Exit,
}

/// Highlighted answer of the play-again prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayChoice {
    /// Start a new game.
    #[default]
    Yes,
    /// End the session.
    No,
}

impl ReplayChoice {
    /// The other answer.
    pub fn toggle(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }
}

/// One interactive session: the current game plus everything the player
/// sees around it.
///
/// Each key or timer tick is handled to completion before the next one;
/// the front end owns the event loop and renders after every call.
#[derive(Debug)]
pub struct Session<R = ChaCha8Rng> {
    rng: R,
    game: GameState,
    cursor: Cursor,
    phase: SessionPhase,
    status: String,
    selection_visible: bool,
    replay_choice: ReplayChoice,
    /// Row digit typed as the first half of an `2b`-style coordinate.
    pending_row: Option<char>,
}

fn turn_status(player: Player) -> String {
    format!("It is {}'s turn", player)
}

impl<R> Session<R> {
    /// The current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The cursor over the board.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Status line shown under the board.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether the blinking cursor highlight is currently shown.
    pub fn selection_visible(&self) -> bool {
        self.selection_visible
    }

    /// Highlighted play-again answer.
    pub fn replay_choice(&self) -> ReplayChoice {
        self.replay_choice
    }

    /// Row digit of a half-typed coordinate, if any.
    pub fn pending_row(&self) -> Option<char> {
        self.pending_row
    }

    /// Blink timer tick: toggles the cursor highlight and nothing else.
    pub fn tick(&mut self) {
        self.selection_visible = !self.selection_visible;
    }
}

impl<R: Rng> Session<R> {
    /// Starts a session with a fresh game whose starter is drawn from `rng`.
    #[instrument(skip(rng))]
    pub fn new(mut rng: R) -> Self {
        let game = GameState::new(&mut rng);
        info!(starter = %game.current_player(), "Session started");
        Self {
            status: turn_status(game.current_player()),
            rng,
            game,
            cursor: Cursor::new(),
            phase: SessionPhase::Playing,
            selection_visible: true,
            replay_choice: ReplayChoice::default(),
            pending_row: None,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn handle_key(&mut self, key: Key) -> SessionFlow {
        if matches!(key, Key::Interrupt | Key::Char('q' | 'Q')) {
            info!("Quit requested");
            return SessionFlow::Exit;
        }

        match self.phase {
            SessionPhase::Playing => {
                self.handle_playing(key);
                SessionFlow::Continue
            }
            SessionPhase::AwaitingReplay => self.handle_replay(key),
        }
    }

    fn handle_playing(&mut self, key: Key) {
        if let Some(row) = self.pending_row.take() {
            if let Key::Char(column) = key {
                self.finish_entry(row, column);
                return;
            }
            debug!(row = %row, "Coordinate entry abandoned");
        }

        match key {
            Key::Up | Key::Char('w') => self.step(Direction::Up),
            Key::Down | Key::Char('s') => self.step(Direction::Down),
            Key::Left | Key::Char('a') => self.step(Direction::Left),
            Key::Right | Key::Char('d') => self.step(Direction::Right),
            Key::Enter | Key::Char(' ') => self.confirm(),
            Key::Char(digit @ '1'..='3') => {
                self.pending_row = Some(digit);
                self.selection_visible = true;
            }
            _ => {}
        }
    }

    fn step(&mut self, direction: Direction) {
        self.cursor.step(direction);
        self.selection_visible = true;
        self.status = turn_status(self.game.current_player());
    }

    /// Completes a typed coordinate such as `2b` by jumping the cursor to it.
    fn finish_entry(&mut self, row: char, column: char) {
        let entry = format!("{row}{column}");
        match entry.parse::<Position>() {
            Ok(position) => {
                debug!(%position, "Cursor jumped to typed coordinate");
                self.cursor.jump(position);
                self.selection_visible = true;
                self.status = turn_status(self.game.current_player());
            }
            Err(e) => {
                warn!(error = %e, "Typed coordinate rejected");
                self.status = "Invalid move".to_string();
            }
        }
    }

    /// Submits the cursor position to the engine.
    #[instrument(skip(self), fields(position = %self.cursor.position()))]
    pub fn confirm(&mut self) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        self.selection_visible = true;

        let mover = self.game.current_player();
        let outcome = self.game.attempt_move(self.cursor.position());
        debug!(?outcome, %mover, "Move attempted");

        match outcome {
            MoveOutcome::Continue => {
                self.status = turn_status(self.game.current_player());
            }
            MoveOutcome::Win => {
                info!(winner = %self.game.current_player(), "Game won");
                self.status = format!("{} won!", self.game.current_player());
                self.enter_replay();
            }
            MoveOutcome::Tie => {
                info!("Game tied");
                self.status = "It's a tie".to_string();
                self.enter_replay();
            }
            MoveOutcome::IllegalMove => {
                self.status = "That square is already taken".to_string();
            }
        }
    }

    fn enter_replay(&mut self) {
        self.phase = SessionPhase::AwaitingReplay;
        self.replay_choice = ReplayChoice::default();
        self.pending_row = None;
    }

    fn handle_replay(&mut self, key: Key) -> SessionFlow {
        match key {
            Key::Char('y' | 'Y') => self.answer_replay(ReplayChoice::Yes),
            Key::Char('n' | 'N') => self.answer_replay(ReplayChoice::No),
            Key::Left | Key::Right | Key::Char('a' | 'd') => {
                self.replay_choice = self.replay_choice.toggle();
                SessionFlow::Continue
            }
            Key::Enter | Key::Char(' ') => self.answer_replay(self.replay_choice),
            _ => SessionFlow::Continue,
        }
    }

    /// Answers the play-again prompt. `Yes` replaces the game and cursor
    /// wholesale; `No` ends the session and leaves the finished game as is.
    #[instrument(skip(self))]
    pub fn answer_replay(&mut self, choice: ReplayChoice) -> SessionFlow {
        if self.phase != SessionPhase::AwaitingReplay {
            return SessionFlow::Continue;
        }

        match choice {
            ReplayChoice::Yes => {
                self.game = GameState::new(&mut self.rng);
                self.cursor = Cursor::new();
                self.phase = SessionPhase::Playing;
                self.selection_visible = true;
                self.status = turn_status(self.game.current_player());
                info!(starter = %self.game.current_player(), "New game started");
                SessionFlow::Continue
            }
            ReplayChoice::No => {
                info!("Player declined another game");
                SessionFlow::Exit
            }
        }
    }
}
