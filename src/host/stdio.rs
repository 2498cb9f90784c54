//! Stdio host pump
//!
//! Connects a session handle to line-delimited JSON over stdin/stdout:
//! commands in, messages out.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::arena::SessionHandle;
use crate::host::protocol::{HostCommand, HostMsg};

/// Pump commands from stdin into the session and session messages to stdout
pub async fn run_host(
    handle: SessionHandle,
    mut msg_rx: broadcast::Receiver<HostMsg>,
) -> anyhow::Result<()> {
    let session_id = handle.id;

    // Spawn writer task: broadcast messages -> stdout
    let writer_handle = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        loop {
            match msg_rx.recv().await {
                Ok(msg) => {
                    if let Err(e) = write_line(&mut stdout, &msg).await {
                        debug!(session_id = %session_id, error = %e, "Stdout write failed");
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!(
                        session_id = %session_id,
                        lagged_count = n,
                        "Host lagged, skipping {} messages", n
                    );
                    // Continue - don't tear down for lag
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!(session_id = %session_id, "Message channel closed");
                    break;
                }
            }
        }
    });

    // Reader loop: stdin -> session
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<HostCommand>(line) {
            Ok(command) => {
                if handle.command_tx.send(command).await.is_err() {
                    debug!(session_id = %session_id, "Command channel closed");
                    break;
                }
            }
            Err(e) => {
                warn!(session_id = %session_id, error = %e, "Failed to parse host command");
            }
        }
    }

    info!(session_id = %session_id, "Host input closed");

    // Dropping the handle closes the command channel and ends the session
    drop(handle);
    writer_handle.abort();

    Ok(())
}

/// Write one message as a JSON line
async fn write_line(stdout: &mut tokio::io::Stdout, msg: &HostMsg) -> anyhow::Result<()> {
    let mut json = serde_json::to_vec(msg)?;
    json.push(b'\n');
    stdout.write_all(&json).await?;
    stdout.flush().await?;
    Ok(())
}
