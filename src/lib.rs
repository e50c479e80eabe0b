//! # Herald
//!
//! A synchronous, in-process publish/subscribe event emitter with dotted
//! namespaces.
//!
//! ## Core Concepts
//!
//! - **Events**: dot-delimited names such as `"funny.slide"`; emitting a
//!   name also notifies every ancestor namespace (`"funny"`), most specific
//!   first
//! - **Subscriptions**: (event name, context, handler) bindings, dispatched
//!   in insertion order; removed in bulk by name prefix and context identity
//! - **Delivery controls**: subscriptions may fire at most N times
//!   ([`Emitter::several`]) or only on every Nth matching emit
//!   ([`Emitter::through`])
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use herald::Emitter;
//!
//! struct Attendance {
//!     lectures: u32,
//! }
//!
//! let student = Rc::new(RefCell::new(Attendance { lectures: 0 }));
//! let mut emitter = Emitter::new();
//!
//! emitter
//!     .on("lecture", student.clone(), |s| s.lectures += 1)
//!     .emit("lecture.algebra")
//!     .emit("lecture.geometry");
//!
//! assert_eq!(student.borrow().lectures, 2);
//!
//! emitter.off("lecture", &student).emit("lecture.algebra");
//! assert_eq!(student.borrow().lectures, 2);
//! ```

pub mod emitter;
pub mod subscriptions;

// Re-exports
pub use emitter::{namespace_chain, Emitter};
pub use subscriptions::{Handler, Subscription, SubscriptionRegistry};
