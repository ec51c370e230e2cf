//! Store change notifications.
//!
//! The web version leaned on cross-tab storage events, which only ever
//! refreshed the cart badge. Here every store owns an [`EventBus`] and emits
//! a [`StoreEvent`] after each persisted mutation, so a rendering layer
//! subscribes once and observes every change deterministically.

use rust_decimal::Decimal;

/// A change notification emitted after a store persists a mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// The shopping-list collection changed.
    ItemsChanged {
        /// Number of items now in the list.
        count: usize,
    },
    /// The cart collection changed.
    CartChanged {
        /// Number of cart lines.
        lines: usize,
        /// Sum of line quantities (the badge count).
        item_count: Decimal,
        /// Cart total over effective paid prices.
        total: Decimal,
    },
}

type Subscriber = Box<dyn Fn(&StoreEvent) + Send>;

/// Subscriber registry for a single store.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register a subscriber called on every subsequent event.
    pub fn subscribe(&mut self, subscriber: impl Fn(&StoreEvent) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Deliver an event to every subscriber, in registration order.
    pub fn emit(&self, event: &StoreEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
