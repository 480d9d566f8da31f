use crate::models::StoredState;
use crate::tracker::{RIPPLE_LIFETIME, Tracker, UNDO_WINDOW};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, stored: StoredState) -> Self {
        Self {
            data_path,
            tracker: Arc::new(Mutex::new(Tracker::from_stored(stored))),
        }
    }

    // Expiry tasks check their token under the lock, so a firing that lost
    // the race to a newer mutation is a no-op.
    pub fn schedule_undo_expiry(&self, token: u64) {
        let tracker = Arc::clone(&self.tracker);
        tokio::spawn(async move {
            sleep(UNDO_WINDOW).await;
            tracker.lock().await.expire_undo(token);
        });
    }

    pub fn schedule_ripple_expiry(&self, id: u64) {
        let tracker = Arc::clone(&self.tracker);
        tokio::spawn(async move {
            sleep(RIPPLE_LIFETIME).await;
            tracker.lock().await.expire_ripple(id);
        });
    }
}
