//! Ordered subscription storage with prefix-based bulk removal.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use super::types::Subscription;

/// An insertion-ordered collection of subscriptions.
///
/// Order matters: dispatch follows subscription order. There is no
/// uniqueness constraint, so the same (event name, context) pair may be
/// registered any number of times.
pub struct SubscriptionRegistry<C> {
    subscriptions: Vec<Subscription<C>>,
}

impl<C> SubscriptionRegistry<C> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    /// Append a subscription. Never fails.
    pub fn add(&mut self, subscription: Subscription<C>) {
        trace!(event = subscription.event_name(), "subscription added");
        self.subscriptions.push(subscription);
    }

    /// Remove every subscription whose event name starts with
    /// `event_name_prefix` (a plain string-prefix test, not segment-aware)
    /// and whose context is the given one. No-op if nothing matches.
    pub fn remove_all(&mut self, event_name_prefix: &str, context: &Rc<RefCell<C>>) {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| {
            !sub.event_name().starts_with(event_name_prefix) || !sub.context_is(context)
        });
        let removed = before - self.subscriptions.len();
        if removed > 0 {
            trace!(prefix = event_name_prefix, removed, "subscriptions removed");
        }
    }

    /// All subscriptions registered under exactly `event_name`, in insertion
    /// order. Empty if none match.
    pub fn find_exact<'a>(
        &'a self,
        event_name: &'a str,
    ) -> impl Iterator<Item = &'a Subscription<C>> + 'a {
        self.subscriptions
            .iter()
            .filter(move |sub| sub.event_name() == event_name)
    }

    /// Mutable variant of [`find_exact`](Self::find_exact), for dispatch.
    pub fn find_exact_mut<'a>(
        &'a mut self,
        event_name: &'a str,
    ) -> impl Iterator<Item = &'a mut Subscription<C>> + 'a {
        self.subscriptions
            .iter_mut()
            .filter(move |sub| sub.event_name() == event_name)
    }

    /// Number of stored subscriptions, inert ones included.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether the registry holds no subscriptions.
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl<C> Default for SubscriptionRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}
