use crate::domain::Notice;
use tokio::sync::mpsc::Receiver;
use tracing::{instrument, warn};

/// Shows user notices. Stands in for the toast channel of a map screen.
#[instrument(skip_all)]
pub async fn notice_listener(mut rx: Receiver<Notice>) {
    while let Some(notice) = rx.recv().await {
        warn!("🔔 {}", notice);
    }
}
