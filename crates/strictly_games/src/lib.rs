//! Strictly Games - hot-seat tic-tac-toe in the terminal
//!
//! Two people share one keyboard and take turns placing marks on a 3×3
//! board. The game runs either in the current terminal or as a server where
//! every telnet connection gets its own independent session.
//!
//! # Architecture
//!
//! - **Session**: per-connection state machine (cursor, status, replay prompt)
//! - **Render**: pure function from a session to styled [`ratatui::text::Text`]
//! - **Frontend**: key source and frame sink; local terminal or telnet, both
//!   drawn through ratatui's crossterm backend
//! - **Server**: accept loop with graceful shutdown
//!
//! The rules themselves live in [`strictly_tictactoe`].
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use strictly_games::{Key, Session, SessionPhase};
//!
//! let mut session = Session::new(ChaCha8Rng::seed_from_u64(7));
//! session.handle_key(Key::Right);
//! session.handle_key(Key::Enter);
//! assert_eq!(session.phase(), SessionPhase::Playing);
//! assert!(session.status().ends_with("'s turn"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod frontend;
mod input;
mod render;
mod server;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, ConfigOverrides, GameConfig};

// Crate-level exports - Input
pub use input::{Key, KeyDecoder, key_from_event};

// Crate-level exports - Session state
pub use session::{Cursor, Direction, ReplayChoice, Session, SessionFlow, SessionPhase};

// Crate-level exports - Rendering
pub use render::{LABEL_STYLE, SELECTED_STYLE, render};

// Crate-level exports - Front ends
pub use frontend::{Frontend, LocalTerminal, TelnetClient, drive, run_standalone};

// Crate-level exports - Server
pub use server::{SHUTDOWN_GRACE, serve};
