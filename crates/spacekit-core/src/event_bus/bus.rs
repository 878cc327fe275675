//! Session-scoped event bus.

use parking_lot::RwLock;
use std::collections::HashMap;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};

/// Buffered events per broadcast receiver before slow receivers lag.
const CHANNEL_CAPACITY: usize = 256;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.simple().to_string()[..8])
    }
}

/// Which events a handler wants.
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    /// Events in any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EventBusError {
    #[error("No active subscribers")]
    NoSubscribers,
}

struct Subscription {
    filter: EventFilter,
    handler: Box<dyn Fn(AppEvent) + Send + Sync>,
}

/// Delivers scene engine notifications to views.
///
/// Handlers run synchronously on the publishing call, in no particular order,
/// and must not subscribe or unsubscribe on the same bus from inside the
/// callback. Async observers take a [`receiver`](EventBus::receiver) instead.
pub struct EventBus {
    subscriptions: RwLock<HashMap<SubscriptionId, Subscription>>,
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            subscriptions: RwLock::new(HashMap::new()),
            sender,
        }
    }

    /// Delivers `event` to matching handlers and every broadcast receiver.
    ///
    /// Returns how many listeners got it, or `NoSubscribers` when none did.
    pub fn publish(&self, event: AppEvent) -> Result<usize, EventBusError> {
        tracing::trace!("Publishing {}", event.description());

        let mut delivered = 0;
        for subscription in self.subscriptions.read().values() {
            if subscription.filter.matches(&event) {
                (subscription.handler)(event.clone());
                delivered += 1;
            }
        }
        delivered += self.sender.send(event).unwrap_or(0);

        if delivered == 0 {
            Err(EventBusError::NoSubscribers)
        } else {
            Ok(delivered)
        }
    }

    /// Publishes and ignores the no-listener case, which is normal for a
    /// headless session.
    pub fn notify(&self, event: AppEvent) {
        let _ = self.publish(event);
    }

    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscriptions.write().insert(
            id,
            Subscription {
                filter,
                handler: Box::new(handler),
            },
        );
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.subscriptions.write().remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// A receiver that sees every event published from now on.
    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscriptions.read().len())
            .field("receivers", &self.sender.receiver_count())
            .finish()
    }
}
