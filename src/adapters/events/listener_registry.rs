//! In-process listener registry for session events.
//!
//! Delivery is synchronous and in registration order. Listener lists are
//! cloned out of the lock before invocation, so a listener may subscribe
//! or unsubscribe others without deadlocking.

use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::domain::conversation::SessionEvent;
use crate::domain::foundation::SubscriptionId;
use crate::ports::SessionListener;

/// Registry of session listeners.
///
/// # Example
///
/// ```ignore
/// let registry = Arc::new(ListenerRegistry::new());
/// let subscription = ListenerRegistry::subscribe(&registry, Arc::new(renderer));
///
/// registry.publish_all(&session.take_events());
/// subscription.unsubscribe();
/// ```
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: RwLock<Vec<(SubscriptionId, Arc<dyn SessionListener>)>>,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` and returns the handle that removes it.
    pub fn subscribe(this: &Arc<Self>, listener: Arc<dyn SessionListener>) -> Subscription {
        let id = SubscriptionId::new();
        tracing::debug!(subscription_id = %id, listener = listener.name(), "Listener subscribed");
        this.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, listener));
        Subscription {
            id,
            registry: Arc::downgrade(this),
        }
    }

    /// Removes a listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        let removed = listeners.len() != before;
        if removed {
            tracing::debug!(subscription_id = %id, "Listener unsubscribed");
        }
        removed
    }

    /// Delivers one event to every current listener.
    pub fn publish(&self, event: &SessionEvent) {
        for listener in self.snapshot() {
            tracing::trace!(event_type = event.event_type(), listener = listener.name(), "Delivering event");
            listener.on_event(event);
        }
    }

    /// Delivers events in order; each event reaches all listeners before the next.
    pub fn publish_all(&self, events: &[SessionEvent]) {
        for event in events {
            self.publish(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn snapshot(&self) -> Vec<Arc<dyn SessionListener>> {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }
}

/// Handle returned by [`ListenerRegistry::subscribe`].
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<ListenerRegistry>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Stops delivery to this listener. Idempotent.
    pub fn unsubscribe(&self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => registry.unsubscribe(self.id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::domain::staff::StaffFunction;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct CountingListener(Arc<AtomicUsize>);

    impl SessionListener for CountingListener {
        fn on_event(&self, _: &SessionEvent) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
        fn name(&self) -> &'static str {
            "CountingListener"
        }
    }

    struct RecordingListener {
        tag: &'static str,
        log: Arc<Mutex<Vec<(&'static str, &'static str)>>>,
    }

    impl SessionListener for RecordingListener {
        fn on_event(&self, event: &SessionEvent) {
            self.log.lock().unwrap().push((self.tag, event.event_type()));
        }
        fn name(&self) -> &'static str {
            "RecordingListener"
        }
    }

    fn awaiting(flag: bool) -> SessionEvent {
        SessionEvent::AwaitingChanged {
            session_id: SessionId::new(),
            awaiting: flag,
        }
    }

    #[test]
    fn publish_reaches_every_listener() {
        let registry = Arc::new(ListenerRegistry::new());
        let counter = Arc::new(AtomicUsize::new(0));

        ListenerRegistry::subscribe(&registry, Arc::new(CountingListener(counter.clone())));
        ListenerRegistry::subscribe(&registry, Arc::new(CountingListener(counter.clone())));
        registry.publish(&awaiting(true));

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let registry = Arc::new(ListenerRegistry::new());
        let counter = Arc::new(AtomicUsize::new(0));

        let subscription =
            ListenerRegistry::subscribe(&registry, Arc::new(CountingListener(counter.clone())));
        registry.publish(&awaiting(true));
        assert!(subscription.unsubscribe());
        registry.publish(&awaiting(false));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(registry.listener_count(), 0);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let registry = Arc::new(ListenerRegistry::new());
        let subscription = ListenerRegistry::subscribe(
            &registry,
            Arc::new(CountingListener(Arc::new(AtomicUsize::new(0)))),
        );

        assert!(subscription.unsubscribe());
        assert!(!subscription.unsubscribe());
    }

    #[test]
    fn unsubscribe_after_registry_dropped_is_harmless() {
        let registry = Arc::new(ListenerRegistry::new());
        let subscription = ListenerRegistry::subscribe(
            &registry,
            Arc::new(CountingListener(Arc::new(AtomicUsize::new(0)))),
        );
        drop(registry);

        assert!(!subscription.unsubscribe());
    }

    #[test]
    fn publish_all_delivers_each_event_to_all_before_the_next() {
        let registry = Arc::new(ListenerRegistry::new());
        let log = Arc::new(Mutex::new(Vec::new()));

        for tag in ["a", "b"] {
            ListenerRegistry::subscribe(
                &registry,
                Arc::new(RecordingListener { tag, log: log.clone() }),
            );
        }
        let selected = SessionEvent::StaffFunctionSelected {
            session_id: SessionId::new(),
            staff_function: StaffFunction::Admin,
        };
        registry.publish_all(&[selected, awaiting(true)]);

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                ("a", "session.staff_function_selected"),
                ("b", "session.staff_function_selected"),
                ("a", "session.awaiting_changed"),
                ("b", "session.awaiting_changed"),
            ]
        );
    }
}
