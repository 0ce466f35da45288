//! Session event delivery.

mod listener_registry;

pub use listener_registry::{ListenerRegistry, Subscription};
