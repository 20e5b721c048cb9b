//! A remote player on a telnet connection in character mode.

use super::{Frontend, draw_board};
use crate::input::{Key, KeyDecoder};
use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    queue,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    Terminal, TerminalOptions, Viewport, backend::CrosstermBackend, layout::Rect, text::Text,
};
use std::collections::VecDeque;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument, trace};

/// `IAC WILL ECHO`, `IAC WILL SUPPRESS-GO-AHEAD`, `IAC DONT LINEMODE`:
/// the server echoes (nothing) and the client sends every key immediately.
const CHARACTER_MODE: [u8; 9] = [255, 251, 1, 255, 251, 3, 255, 254, 34];

/// Screen area drawn on the remote terminal.
const SCREEN: Rect = Rect::new(0, 0, 80, 24);

/// Remote terminal speaking telnet over any byte stream.
///
/// Frames are drawn by ratatui into an in-memory crossterm backend and the
/// resulting bytes are copied to the socket.
pub struct TelnetClient<Rd, Wr> {
    reader: Rd,
    writer: Wr,
    terminal: Terminal<CrosstermBackend<Vec<u8>>>,
    decoder: KeyDecoder,
    pending: VecDeque<Key>,
    buf: [u8; 256],
}

impl<Rd, Wr> TelnetClient<Rd, Wr>
where
    Rd: AsyncRead + Unpin + Send,
    Wr: AsyncWrite + Unpin + Send,
{
    /// Negotiates character mode and switches the client to the alternate
    /// screen.
    #[instrument(skip_all)]
    pub async fn open(reader: Rd, mut writer: Wr) -> Result<Self> {
        writer
            .write_all(&CHARACTER_MODE)
            .await
            .context("Failed to negotiate character mode")?;

        let mut terminal = Terminal::with_options(
            CrosstermBackend::new(Vec::new()),
            TerminalOptions {
                viewport: Viewport::Fixed(SCREEN),
            },
        )?;
        queue!(
            terminal.backend_mut(),
            EnterAlternateScreen,
            Hide,
            Clear(ClearType::All)
        )?;

        let mut client = Self {
            reader,
            writer,
            terminal,
            decoder: KeyDecoder::new(),
            pending: VecDeque::new(),
            buf: [0; 256],
        };
        client.send_queued().await?;
        debug!("Telnet client switched to character mode");
        Ok(client)
    }

    /// Restores the client's screen, says goodbye and closes the write side.
    #[instrument(skip_all)]
    pub async fn close(mut self) -> Result<()> {
        queue!(self.terminal.backend_mut(), Show, LeaveAlternateScreen)?;
        self.send_queued().await?;
        self.writer.write_all(b"Bye!\r\n").await?;
        self.writer.shutdown().await?;
        Ok(())
    }

    /// Copies whatever the backend has written so far onto the socket.
    async fn send_queued(&mut self) -> Result<()> {
        let bytes = std::mem::take(self.terminal.backend_mut().writer_mut());
        trace!(bytes = bytes.len(), "Sending screen update");
        self.writer.write_all(&bytes).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl<Rd, Wr> Frontend for TelnetClient<Rd, Wr>
where
    Rd: AsyncRead + Unpin + Send,
    Wr: AsyncWrite + Unpin + Send,
{
    async fn next_key(&mut self) -> Result<Option<Key>> {
        loop {
            if let Some(key) = self.pending.pop_front() {
                return Ok(Some(key));
            }
            // Cancel safe: nothing is consumed until this read completes.
            let n = self.reader.read(&mut self.buf).await?;
            if n == 0 {
                return Ok(None);
            }
            let keys = self.decoder.feed(&self.buf[..n]);
            self.pending.extend(keys);
        }
    }

    async fn present(&mut self, frame: Text<'static>) -> Result<()> {
        self.terminal.draw(|f| draw_board(f, frame))?;
        self.send_queued().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{duplex, split};

    #[tokio::test]
    async fn test_frames_are_drawn_through_the_backend() {
        let (remote, local) = duplex(64 * 1024);
        let (reader, writer) = split(local);

        let mut client = TelnetClient::open(reader, writer).await.expect("open");
        client
            .present(Text::raw("Χ●"))
            .await
            .expect("present");
        client.close().await.expect("close");

        let mut received = Vec::new();
        let (mut remote_reader, _remote_writer) = split(remote);
        remote_reader
            .read_to_end(&mut received)
            .await
            .expect("read");

        assert!(received.starts_with(&CHARACTER_MODE));
        let text = String::from_utf8_lossy(&received[CHARACTER_MODE.len()..]).into_owned();
        assert!(text.starts_with("\x1b[?1049h"), "{text:?}");
        assert!(text.contains("Tic-Tac-Toe"));
        assert!(text.contains("Χ●"));
        assert!(text.contains("\x1b[?1049l"));
        assert!(text.ends_with("Bye!\r\n"));
    }
}
