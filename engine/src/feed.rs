//! Project feed loading: one fetch per run, reported over a channel.

use tokio::sync::mpsc;

use vitrine_backend::BackendUrl;
use vitrine_types::{FeedPhase, Project};

/// Completion report from the spawned fetch task. Exactly one per run.
#[derive(Debug)]
pub enum FeedEvent {
    Loaded(Vec<Project>),
    Failed,
}

const FEED_EVENT_CHANNEL_CAPACITY: usize = 1;

/// Owns the feed state machine and the channel its fetch task reports on.
#[derive(Debug, Default)]
pub struct FeedState {
    pub phase: FeedPhase,
    receiver: Option<mpsc::Receiver<FeedEvent>>,
}

impl FeedState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the one fetch for this run. Fire-and-forget; the result arrives
    /// through [`FeedState::poll`]. Requires a tokio runtime.
    pub fn spawn_fetch(&mut self, base: BackendUrl) {
        let (tx, rx) = mpsc::channel(FEED_EVENT_CHANNEL_CAPACITY);
        self.receiver = Some(rx);
        tokio::spawn(async move {
            let event = match vitrine_backend::fetch_projects(&base).await {
                Ok(items) => FeedEvent::Loaded(items),
                Err(err) => {
                    tracing::warn!(%err, "Project feed unavailable");
                    FeedEvent::Failed
                }
            };
            let _ = tx.send(event).await;
        });
    }

    /// Drain the completion event if it has arrived.
    ///
    /// `Loading` is left at most once; `Ready` and `Failed` are terminal for
    /// the run.
    pub fn poll(&mut self) {
        if !self.phase.is_loading() {
            return;
        }
        let Some(receiver) = self.receiver.as_mut() else {
            return;
        };
        match receiver.try_recv() {
            Ok(FeedEvent::Loaded(items)) => {
                self.phase = FeedPhase::Ready(items);
                self.receiver = None;
            }
            Ok(FeedEvent::Failed) => {
                self.phase = FeedPhase::Failed;
                self.receiver = None;
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                // Fetch task went away without reporting.
                self.phase = FeedPhase::Failed;
                self.receiver = None;
            }
        }
    }
}
