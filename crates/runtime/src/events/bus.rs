//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{DuelEvent, MatchmakingEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Queue entries, pairings and friendly challenges
    Matchmaking,
    /// Session lifecycle and resolved actions
    Duel,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Matchmaking(MatchmakingEvent),
    Duel(DuelEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Matchmaking(_) => Topic::Matchmaking,
            Event::Duel(_) => Topic::Duel,
        }
    }
}

impl From<MatchmakingEvent> for Event {
    fn from(event: MatchmakingEvent) -> Self {
        Event::Matchmaking(event)
    }
}

impl From<DuelEvent> for Event {
    fn from(event: DuelEvent) -> Self {
        Event::Duel(event)
    }
}

/// Topic-based event bus
///
/// Topics are fixed, so each gets its channel up front and no lock is needed
/// to publish or subscribe. Clones share the same channels.
#[derive(Clone)]
pub struct EventBus {
    matchmaking: broadcast::Sender<Event>,
    duel: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            matchmaking: broadcast::channel(capacity).0,
            duel: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Matchmaking => &self.matchmaking,
            Topic::Duel => &self.duel,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::PlayerId;

    #[tokio::test]
    async fn events_only_reach_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut matchmaking = bus.subscribe(Topic::Matchmaking);
        let mut duel = bus.subscribe(Topic::Duel);

        bus.publish(MatchmakingEvent::SearchStarted {
            player: PlayerId::new(1),
        });

        let event = matchmaking.recv().await.unwrap();
        assert_eq!(event.topic(), Topic::Matchmaking);
        assert!(duel.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::default();
        bus.publish(MatchmakingEvent::SearchCancelled {
            player: PlayerId::new(1),
        });
    }
}
