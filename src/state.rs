use crate::models::Snapshot;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};

/// Shared dashboard state. Polls replace the snapshot wholesale; readers wake
/// through the watch channel and never observe a partial update. Overlapping
/// polls both go through `replace`, so whichever resolves last wins.
#[derive(Clone)]
pub struct DashState {
    snapshot: Arc<Mutex<Option<Snapshot>>>,
    version_tx: watch::Sender<u64>,
}

impl DashState {
    pub fn new() -> Self {
        let (version_tx, _) = watch::channel(0);
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            version_tx,
        }
    }

    pub async fn replace(&self, snapshot: Snapshot) {
        *self.snapshot.lock().await = Some(snapshot);
        self.version_tx.send_modify(|version| *version += 1);
    }

    pub async fn snapshot(&self) -> Option<Snapshot> {
        self.snapshot.lock().await.clone()
    }

    /// Receiver that marks changed on every snapshot replacement.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version_tx.subscribe()
    }
}

impl Default for DashState {
    fn default() -> Self {
        Self::new()
    }
}
