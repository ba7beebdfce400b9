use glosa_types::{AppEvent, UiEvent};
use kanal::AsyncSender;
use tokio::io::{AsyncBufRead, BufReader};
use tokio_util::sync::CancellationToken;

use crate::command::parse_command;

/// Reads user commands from stdin and forwards them to the event loop.
pub async fn watcher_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("Starting stdin watcher");
    forward_commands(BufReader::new(tokio::io::stdin()), cancel, event_tx).await
}

/// Parses each input line into an event. End of input ends the session.
pub(crate) async fn forward_commands<R>(
    reader: R,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let tx = event_tx.clone();
    tokio::select! {
        result = glosa_io::stdin::watch_lines(reader, move |line| {
            let tx = tx.clone();
            async move {
                let event = match parse_command(&line) {
                    Ok(ui_event) => AppEvent::UiEvent(ui_event),
                    Err(e) => AppEvent::Status(e.to_string()),
                };
                if let Err(e) = tx.send(event).await {
                    tracing::error!("Failed to send input to app: {}", e);
                    return false;
                }
                true
            }
        }) => {
            if let Err(e) = result {
                tracing::error!("stdin watcher error: {}", e);
            }
            let _ = event_tx.send(AppEvent::UiEvent(UiEvent::Quit)).await;
        }
        _ = cancel.cancelled() => {
            tracing::info!("stdin watcher stopping");
        }
    }

    Ok(())
}
