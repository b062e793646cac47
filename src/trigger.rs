//! Publish/subscribe callback registration.
//!
//! Whatever observes an external event (a click, a hash change, a timer) fires a [`Trigger`].
//! Whoever reacts subscribes to it. Neither side knows about the other.

use core::{any::type_name, cell::RefCell, fmt};
use hashbrown::HashMap;
use std::rc::Rc;
use tracing::{trace, trace_span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler<A> = Rc<dyn Fn(&A)>;

struct Subscribers<A> {
	handlers: HashMap<SubscriptionId, Handler<A>>,
	next_id: u64,
}

/// A cloneable handle to a set of handlers taking `&A`.
///
/// Clones share their subscribers. Handlers may subscribe, unsubscribe or fire re-entrantly.
/// Invocation order is unspecified.
pub struct Trigger<A> {
	subscribers: Rc<RefCell<Subscribers<A>>>,
}

impl<A> Clone for Trigger<A> {
	fn clone(&self) -> Self {
		Self {
			subscribers: Rc::clone(&self.subscribers),
		}
	}
}

impl<A> Default for Trigger<A> {
	fn default() -> Self {
		Self::new()
	}
}

impl<A> fmt::Debug for Trigger<A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Trigger")
			.field("argument", &type_name::<A>())
			.field("subscribers", &self.len())
			.finish()
	}
}

impl<A> Trigger<A> {
	#[must_use]
	pub fn new() -> Self {
		Self {
			subscribers: Rc::new(RefCell::new(Subscribers {
				handlers: HashMap::new(),
				next_id: 0,
			})),
		}
	}

	pub fn subscribe(&self, handler: impl 'static + Fn(&A)) -> SubscriptionId {
		let mut subscribers = self.subscribers.borrow_mut();
		let id = SubscriptionId(subscribers.next_id);
		subscribers.next_id += 1;
		subscribers.handlers.insert(id, Rc::new(handler));
		trace!(?id, "Subscribed.");
		id
	}

	/// Returns whether `id` was still subscribed.
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		self.subscribers.borrow_mut().handlers.remove(&id).is_some()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.subscribers.borrow().handlers.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Calls each handler subscribed at the time of the call.
	pub fn fire(&self, argument: &A) {
		let handlers: Vec<_> = self.subscribers.borrow().handlers.values().cloned().collect();
		let span = trace_span!("Firing", argument = type_name::<A>(), handlers = handlers.len());
		let _enter = span.enter();
		for handler in handlers {
			handler(argument);
		}
	}
}
