//! Subscription types for event dispatch.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Handler invoked against a subscription's context.
pub type Handler<C> = Box<dyn FnMut(&mut C)>;

/// A registered handler binding.
///
/// Couples an event name, a receiver context, and a handler with two
/// optional delivery controls:
///
/// - a call limit (`None` = unbounded): the handler fires only while the
///   dispatch-attempt counter is below the limit;
/// - a frequency (default 1): the handler fires only on every Nth dispatch
///   attempt, starting with the first.
///
/// The counter advances on **every** dispatch attempt, fired or not, so both
/// controls track progress across attempts that didn't fire.
pub struct Subscription<C> {
    /// Dot-delimited event name, exact-match key. Immutable.
    event_name: String,

    /// Receiver the handler is invoked against. Identity is `Rc::ptr_eq`.
    context: Rc<RefCell<C>>,

    /// The handler itself. Immutable.
    handler: Handler<C>,

    /// Max number of times the handler may fire. `None` = unbounded.
    call_limit: Option<u64>,

    /// Fire on every Nth dispatch attempt. Always >= 1.
    frequency: u64,

    /// Dispatch attempts so far (fired or not).
    call_count: u64,
}

impl<C> Subscription<C> {
    /// Create an unbounded, unthrottled subscription.
    pub fn new(
        event_name: impl Into<String>,
        context: Rc<RefCell<C>>,
        handler: impl FnMut(&mut C) + 'static,
    ) -> Self {
        Self::build(event_name.into(), context, Box::new(handler), None, 1)
    }

    /// Create a subscription that fires at most `times` times.
    ///
    /// `times == 0` degrades to unbounded.
    pub fn limited(
        event_name: impl Into<String>,
        context: Rc<RefCell<C>>,
        handler: impl FnMut(&mut C) + 'static,
        times: u64,
    ) -> Self {
        let limit = if times > 0 { Some(times) } else { None };
        Self::build(event_name.into(), context, Box::new(handler), limit, 1)
    }

    /// Create a subscription that fires on every `frequency`-th dispatch
    /// attempt, the first included.
    ///
    /// `frequency == 0` degrades to 1 (every attempt).
    pub fn throttled(
        event_name: impl Into<String>,
        context: Rc<RefCell<C>>,
        handler: impl FnMut(&mut C) + 'static,
        frequency: u64,
    ) -> Self {
        Self::build(
            event_name.into(),
            context,
            Box::new(handler),
            None,
            frequency.max(1),
        )
    }

    fn build(
        event_name: String,
        context: Rc<RefCell<C>>,
        handler: Handler<C>,
        call_limit: Option<u64>,
        frequency: u64,
    ) -> Self {
        Self {
            event_name,
            context,
            handler,
            call_limit,
            frequency,
            call_count: 0,
        }
    }

    /// The event name this subscription was registered under.
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Dispatch attempts so far.
    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    /// Whether this subscription's context is the given one (identity, not
    /// value, comparison).
    pub fn context_is(&self, context: &Rc<RefCell<C>>) -> bool {
        Rc::ptr_eq(&self.context, context)
    }

    /// Whether the next dispatch attempt would invoke the handler.
    fn should_fire(&self) -> bool {
        let within_limit = self.call_limit.map_or(true, |limit| self.call_count < limit);
        within_limit && self.call_count % self.frequency == 0
    }

    /// Attempt delivery: invoke the handler against the context if the call
    /// limit and frequency allow it, then advance the attempt counter.
    ///
    /// The counter advances whether or not the handler fired. A panicking
    /// handler unwinds through this call uncaught, leaving the counter
    /// unadvanced.
    pub fn dispatch(&mut self) {
        if self.should_fire() {
            (self.handler)(&mut *self.context.borrow_mut());
        }
        self.call_count += 1;
    }
}

impl<C> fmt::Debug for Subscription<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("event_name", &self.event_name)
            .field("call_limit", &self.call_limit)
            .field("frequency", &self.frequency)
            .field("call_count", &self.call_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> Rc<RefCell<u32>> {
        Rc::new(RefCell::new(0))
    }

    #[test]
    fn test_unbounded_fires_every_attempt() {
        let ctx = counter();
        let mut sub = Subscription::new("tick", ctx.clone(), |hits| *hits += 1);

        for _ in 0..5 {
            sub.dispatch();
        }

        assert_eq!(*ctx.borrow(), 5);
        assert_eq!(sub.call_count(), 5);
    }

    #[test]
    fn test_limited_stops_after_n_fires() {
        let ctx = counter();
        let mut sub = Subscription::limited("tick", ctx.clone(), |hits| *hits += 1, 2);

        for _ in 0..6 {
            sub.dispatch();
        }

        // Fired on the first two attempts only, but kept counting.
        assert_eq!(*ctx.borrow(), 2);
        assert_eq!(sub.call_count(), 6);
    }

    #[test]
    fn test_limited_zero_degrades_to_unbounded() {
        let ctx = counter();
        let mut sub = Subscription::limited("tick", ctx.clone(), |hits| *hits += 1, 0);

        for _ in 0..4 {
            sub.dispatch();
        }

        assert_eq!(*ctx.borrow(), 4);
    }

    #[test]
    fn test_throttled_fires_on_every_nth_attempt() {
        let ctx = counter();
        let mut sub = Subscription::throttled("tick", ctx.clone(), |hits| *hits += 1, 3);

        // Attempts 1..=7: fires on 1, 4, 7 (attempt indices 0, 3, 6).
        for _ in 0..7 {
            sub.dispatch();
        }

        assert_eq!(*ctx.borrow(), 3);
        assert_eq!(sub.call_count(), 7);
    }

    #[test]
    fn test_throttled_zero_degrades_to_every_attempt() {
        let ctx = counter();
        let mut sub = Subscription::throttled("tick", ctx.clone(), |hits| *hits += 1, 0);

        sub.dispatch();
        sub.dispatch();

        assert_eq!(*ctx.borrow(), 2);
    }

    #[test]
    fn test_context_identity_not_value() {
        let ctx_a = counter();
        let ctx_b = counter();
        let sub = Subscription::new("tick", ctx_a.clone(), |_| {});

        assert!(sub.context_is(&ctx_a));
        // Equal value, different allocation.
        assert!(!sub.context_is(&ctx_b));
    }
}
