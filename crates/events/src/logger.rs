//! Background subscriber that writes every published event to the
//! structured log.
//!
//! The logger is the default bus consumer in deployments without an
//! external delivery channel, so every mutation leaves a trace in the
//! request log alongside the HTTP spans.

use tokio::sync::broadcast;

use crate::bus::SceneEvent;

pub struct EventLogger;

impl EventLogger {
    /// Consume events until the bus is dropped.
    ///
    /// Lagged receivers resubscribe implicitly: a `Lagged` error only
    /// skips the overwritten backlog, so the loop continues.
    pub async fn run(mut rx: broadcast::Receiver<SceneEvent>) {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    tracing::info!(
                        event_type = %event.event_type,
                        scene_id = event.scene_id.as_deref().unwrap_or("-"),
                        payload = %event.payload,
                        "scene event"
                    );
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event logger lagged behind the bus");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        tracing::debug!("event bus closed, logger stopping");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::EventBus;

    #[tokio::test]
    async fn logger_stops_when_bus_is_dropped() {
        let bus = EventBus::default();
        let rx = bus.subscribe();
        let handle = tokio::spawn(EventLogger::run(rx));

        bus.publish(SceneEvent::new("session.created").with_scene("scene-1"));
        drop(bus);

        // The task must terminate once the channel closes.
        handle.await.expect("logger task should finish cleanly");
    }
}
