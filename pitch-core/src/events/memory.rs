//! In-process event delivery

use async_trait::async_trait;
use tokio::sync::broadcast;

use super::PitchEvent;
use super::bus::EventBus;

/// Broadcast-channel delivery for in-process subscribers.
///
/// Events are fire-and-forget: a subscriber only sees events published
/// after it subscribed, and a slow subscriber is lagged out rather than
/// back-pressuring session mutations.
pub struct MemoryEventBus {
    tx: broadcast::Sender<PitchEvent>,
}

impl MemoryEventBus {
    /// Create a bus with the given per-subscriber buffer capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Receive events published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<PitchEvent> {
        self.tx.subscribe()
    }
}

#[async_trait]
impl EventBus for MemoryEventBus {
    async fn publish(&self, event: PitchEvent) {
        // No subscribers is fine; delivery is best-effort
        let _ = self.tx.send(event);
    }
}
