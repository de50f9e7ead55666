//! Notification collaborator seam

use async_trait::async_trait;

use super::PitchEvent;

/// Delivery channel for session mutation events.
///
/// The core hands every successful mutation to this seam and moves on:
/// delivery, framing, and fan-out are the implementation's concern, and
/// publishing must never fail the mutation that produced the event.
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Hand an event over for delivery
    async fn publish(&self, event: PitchEvent);
}
