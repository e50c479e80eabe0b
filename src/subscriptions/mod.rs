//! Subscription storage for the emitter.
//!
//! A [`Subscription`] binds an event name, a receiver context, and a handler,
//! optionally capped by a call limit or throttled by a frequency. The
//! [`SubscriptionRegistry`] keeps subscriptions in insertion order and
//! supports exact-name lookup (for dispatch) and bulk removal by name prefix
//! plus context identity (for unsubscription).

mod registry;
mod types;

pub use registry::SubscriptionRegistry;
pub use types::{Handler, Subscription};
