//! Multi-session telnet server. Every connection plays its own game.

use crate::config::GameConfig;
use crate::frontend::{TelnetClient, drive};
use crate::session::Session;
use anyhow::Result;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument, warn};

/// How long running sessions get to finish once shutdown starts.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// Accepts connections on `listener` until `shutdown` resolves, then tells
/// every session to stop and waits up to [`SHUTDOWN_GRACE`] for them.
#[instrument(skip_all, fields(addr = ?listener.local_addr().ok()))]
pub async fn serve<S>(listener: TcpListener, config: GameConfig, shutdown: S) -> Result<()>
where
    S: Future<Output = ()>,
{
    let config = Arc::new(config);
    let (stop_tx, stop_rx) = watch::channel(false);
    let mut sessions = JoinSet::new();
    let mut next_id: u64 = 0;
    tokio::pin!(shutdown);

    info!("Server ready");

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "Failed to accept connection");
                        continue;
                    }
                };
                let id = next_id;
                next_id += 1;
                info!(session_id = id, %peer, "Connection accepted");
                sessions.spawn(handle_connection(
                    stream,
                    peer,
                    id,
                    Arc::clone(&config),
                    stop_rx.clone(),
                ));
            }
            // Reap finished sessions so the set does not grow without bound.
            Some(_) = sessions.join_next(), if !sessions.is_empty() => {}
            _ = &mut shutdown => break,
        }
    }

    info!(active = sessions.len(), "Shutting down");
    drop(listener);
    let _ = stop_tx.send(true);

    let drain = async { while sessions.join_next().await.is_some() {} };
    let drained = tokio::time::timeout(SHUTDOWN_GRACE, drain).await;
    if drained.is_err() {
        warn!(
            remaining = sessions.len(),
            "Sessions did not finish in time, aborting"
        );
        sessions.abort_all();
    }

    info!("Server stopped");
    Ok(())
}

#[instrument(skip(stream, config, stop), fields(session_id = id, %peer))]
async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    id: u64,
    config: Arc<GameConfig>,
    mut stop: watch::Receiver<bool>,
) {
    let (reader, writer) = stream.into_split();
    let mut client = match TelnetClient::open(reader, writer).await {
        Ok(client) => client,
        Err(e) => {
            warn!(error = ?e, "Failed to set up telnet client");
            return;
        }
    };

    let mut session = Session::new(config.session_rng(id));
    let stopped = async move {
        let _ = stop.changed().await;
    };

    if let Err(e) = drive(&mut client, &mut session, config.blink_interval(), stopped).await {
        error!(error = ?e, "Session failed");
    }

    match client.close().await {
        Ok(()) => debug!("Connection closed"),
        Err(e) => debug!(error = ?e, "Client went away before goodbye"),
    }
    info!("Session ended");
}
