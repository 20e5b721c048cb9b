//! Transport-neutral keys, decoded from crossterm events or raw telnet bytes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

/// A key press as the session controller sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Enter / carriage return.
    Enter,
    /// Ctrl-C.
    Interrupt,
    /// Any other printable character, including space.
    Char(char),
}

/// Maps a crossterm key event; keys the game never uses map to `None`.
pub fn key_from_event(event: KeyEvent) -> Option<Key> {
    let key = match event.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        KeyCode::Char(c) => Key::Char(c),
        _ => return None,
    };
    Some(key)
}

const IAC: u8 = 255;
const SB: u8 = 250;
/// Interrupt Process, what many clients send for Ctrl-C.
const IP: u8 = 244;
const SE: u8 = 240;
const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DecodeState {
    #[default]
    Ground,
    /// After a bare CR; swallows the LF or NUL a telnet client appends.
    CarriageReturn,
    Iac,
    IacOption,
    Subnegotiation,
    SubnegotiationIac,
    Escape,
    /// Inside `ESC [`.
    Csi,
    /// Inside `ESC O`.
    Ss3,
}

/// Stateful decoder for a telnet byte stream.
///
/// Telnet commands are dropped, `ESC [ A`-style arrow sequences become arrow
/// keys, and `CR LF` / `CR NUL` / bare `LF` become a single [`Key::Enter`].
/// Sequences split across reads are resumed on the next [`KeyDecoder::feed`].
#[derive(Debug, Default)]
pub struct KeyDecoder {
    state: DecodeState,
}

impl KeyDecoder {
    /// Creates a decoder in its initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a chunk of bytes into keys.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<Key> {
        let mut keys = Vec::new();
        for &byte in bytes {
            if let Some(key) = self.step(byte) {
                keys.push(key);
            }
        }
        trace!(bytes = bytes.len(), keys = ?keys, "Decoded input");
        keys
    }

    fn step(&mut self, byte: u8) -> Option<Key> {
        use DecodeState::*;

        match self.state {
            CarriageReturn if byte == b'\n' || byte == 0 => {
                self.state = Ground;
                None
            }
            Ground | CarriageReturn => self.ground(byte),
            Iac => {
                self.state = match byte {
                    SB => Subnegotiation,
                    251..=254 => IacOption,
                    _ => Ground,
                };
                (byte == IP).then_some(Key::Interrupt)
            }
            IacOption => {
                self.state = Ground;
                None
            }
            Subnegotiation => {
                if byte == IAC {
                    self.state = SubnegotiationIac;
                }
                None
            }
            SubnegotiationIac => {
                self.state = if byte == SE { Ground } else { Subnegotiation };
                None
            }
            Escape => match byte {
                b'[' => {
                    self.state = Csi;
                    None
                }
                b'O' => {
                    self.state = Ss3;
                    None
                }
                _ => self.ground(byte),
            },
            Csi | Ss3 => {
                // Parameter bytes keep the sequence open.
                if self.state == Csi && (0x30..=0x3f).contains(&byte) {
                    return None;
                }
                self.state = Ground;
                arrow(byte)
            }
        }
    }

    fn ground(&mut self, byte: u8) -> Option<Key> {
        self.state = DecodeState::Ground;
        match byte {
            IAC => {
                self.state = DecodeState::Iac;
                None
            }
            ESC => {
                self.state = DecodeState::Escape;
                None
            }
            b'\r' => {
                self.state = DecodeState::CarriageReturn;
                Some(Key::Enter)
            }
            b'\n' => Some(Key::Enter),
            CTRL_C => Some(Key::Interrupt),
            0x20..=0x7e => Some(Key::Char(char::from(byte))),
            _ => None,
        }
    }
}

fn arrow(final_byte: u8) -> Option<Key> {
    match final_byte {
        b'A' => Some(Key::Up),
        b'B' => Some(Key::Down),
        b'C' => Some(Key::Right),
        b'D' => Some(Key::Left),
        _ => None,
    }
}
