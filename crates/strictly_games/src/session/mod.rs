//! Interactive session state.

mod controller;
mod cursor;

pub use controller::{ReplayChoice, Session, SessionFlow, SessionPhase};
pub use cursor::{Cursor, Direction};
