use crate::domain::events::Event;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::Sender;
use tracing::{info, instrument, warn};

/// Reads user commands line by line: `r`/`refresh` reports again, `range <meters>` edits the
/// range and `q`/`quit` stops the application.
#[instrument(skip_all)]
pub async fn listen<R>(reader: R, tx: Sender<Event>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("⌨️ Input closed");
                return;
            }
            Err(e) => {
                warn!("⚠️ Unable to read input: {}", e);
                return;
            }
        };

        let Some(event) = parse_command(&line) else {
            if !line.trim().is_empty() {
                warn!("⚠️ Unknown command '{}', expected 'refresh', 'range <meters>' or 'quit'", line.trim());
            }
            continue;
        };

        let shutdown = event == Event::Shutdown;
        if tx.send(event).await.is_err() || shutdown {
            return;
        }
    }
}

fn parse_command(line: &str) -> Option<Event> {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    match command.to_lowercase().as_str() {
        "r" | "refresh" => Some(Event::RefreshRequested),
        "range" => Some(Event::RangeChanged(argument.to_string())),
        "q" | "quit" => Some(Event::Shutdown),
        _ => None,
    }
}
