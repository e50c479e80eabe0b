//! The emitter facade tying subscription storage and dispatch together.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::subscriptions::{Subscription, SubscriptionRegistry};

/// A synchronous publish/subscribe event emitter over dotted namespaces.
///
/// Handlers are registered against dot-delimited event names and invoked
/// against a receiver context of type `C`. Emitting a name notifies the
/// handlers of that name and of every ancestor namespace: emitting
/// `"funny.slide"` notifies `"funny.slide"` subscribers first, then
/// `"funny"` subscribers.
///
/// Every method returns `&mut Self`, so calls chain:
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use herald::Emitter;
///
/// let student = Rc::new(RefCell::new(0));
/// let mut emitter = Emitter::new();
///
/// emitter
///     .on("lecture.begin", student.clone(), |attended| *attended += 1)
///     .emit("lecture.begin")
///     .emit("lecture.begin.late");
///
/// assert_eq!(*student.borrow(), 2);
/// ```
///
/// Each emitter owns a private registry; separate instances share nothing.
pub struct Emitter<C> {
    registry: SubscriptionRegistry<C>,
}

impl<C> Emitter<C> {
    /// Create an emitter with an empty registry.
    pub fn new() -> Self {
        Self {
            registry: SubscriptionRegistry::new(),
        }
    }

    /// Subscribe `handler` to `event_name`, invoked against `context` on
    /// every matching emit.
    pub fn on(
        &mut self,
        event_name: impl Into<String>,
        context: Rc<RefCell<C>>,
        handler: impl FnMut(&mut C) + 'static,
    ) -> &mut Self {
        self.registry
            .add(Subscription::new(event_name, context, handler));
        self
    }

    /// Unsubscribe `context` from `event_name` and everything below it.
    ///
    /// Removal is by plain string prefix: `off("slide", ...)` drops
    /// `"slide"`, `"slide.funny"`, and also `"slides"` for that context.
    /// Subscriptions held by other contexts are untouched.
    pub fn off(&mut self, event_name: &str, context: &Rc<RefCell<C>>) -> &mut Self {
        self.registry.remove_all(event_name, context);
        self
    }

    /// Emit `event_name`: walk its namespace chain from most specific to
    /// least specific and dispatch every exact-name subscription at each
    /// level, in insertion order.
    ///
    /// Dispatch is inline in the calling thread. Methods take `&mut self`,
    /// so a handler cannot re-enter this emitter while an emit is in
    /// flight — the subscription list observed by an emit is fixed for its
    /// whole duration. A panicking handler aborts the remaining dispatch of
    /// this call and unwinds to the caller.
    pub fn emit(&mut self, event_name: &str) -> &mut Self {
        trace!(event = event_name, "emit");
        for level in namespace_chain(event_name) {
            for subscription in self.registry.find_exact_mut(level) {
                subscription.dispatch();
            }
        }
        self
    }

    /// Subscribe like [`on`](Self::on), but the handler fires for at most
    /// the first `times` matching emits. The subscription stays registered
    /// afterwards, permanently inert.
    ///
    /// `times == 0` degrades to an unbounded subscription.
    pub fn several(
        &mut self,
        event_name: impl Into<String>,
        context: Rc<RefCell<C>>,
        handler: impl FnMut(&mut C) + 'static,
        times: u64,
    ) -> &mut Self {
        self.registry
            .add(Subscription::limited(event_name, context, handler, times));
        self
    }

    /// Subscribe like [`on`](Self::on), but the handler fires only on every
    /// `frequency`-th matching emit, the first included.
    ///
    /// `frequency == 0` degrades to 1 (every matching emit).
    pub fn through(
        &mut self,
        event_name: impl Into<String>,
        context: Rc<RefCell<C>>,
        handler: impl FnMut(&mut C) + 'static,
        frequency: u64,
    ) -> &mut Self {
        self.registry.add(Subscription::throttled(
            event_name, context, handler, frequency,
        ));
        self
    }

    /// Number of registered subscriptions, inert ones included.
    pub fn subscription_count(&self) -> usize {
        self.registry.len()
    }
}

impl<C> Default for Emitter<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand an event name into its namespace chain, most specific first.
///
/// The chain is the name itself followed by each ancestor obtained by
/// dropping the last dot-delimited segment: `"x.y.z"` yields
/// `["x.y.z", "x.y", "x"]`. A name without dots yields just itself. The
/// truncation is purely textual, so `"a..b"` yields `["a..b", "a.", "a"]`.
pub fn namespace_chain(event_name: &str) -> Vec<&str> {
    let mut chain = Vec::with_capacity(event_name.matches('.').count() + 1);
    let mut level = event_name;
    chain.push(level);
    while let Some(split_at) = level.rfind('.') {
        level = &level[..split_at];
        chain.push(level);
    }
    chain
}
