use forkify_dom::trigger::Trigger;
use std::{cell::RefCell, rc::Rc};

mod logging_;

fn recorder<A: Clone + 'static>() -> (Rc<RefCell<Vec<A>>>, impl Fn(&A)) {
	let log = Rc::new(RefCell::new(Vec::new()));
	let handler = {
		let log = Rc::clone(&log);
		move |argument: &A| log.borrow_mut().push(argument.clone())
	};
	(log, handler)
}

#[test]
fn fires_subscribed_handlers() {
	logging_::init();
	let trigger = Trigger::new();
	let (first, handler) = recorder::<usize>();
	trigger.subscribe(handler);
	let (second, handler) = recorder::<usize>();
	trigger.subscribe(handler);
	assert_eq!(trigger.len(), 2);

	trigger.fire(&2);
	trigger.fire(&3);
	assert_eq!(*first.borrow(), [2, 3]);
	assert_eq!(*second.borrow(), [2, 3]);
}

#[test]
fn unsubscribe() {
	let trigger = Trigger::new();
	let (log, handler) = recorder::<&'static str>();
	let id = trigger.subscribe(handler);

	trigger.fire(&"before");
	assert!(trigger.unsubscribe(id));
	assert!(!trigger.unsubscribe(id));
	assert!(trigger.is_empty());
	trigger.fire(&"after");

	assert_eq!(*log.borrow(), ["before"]);
}

#[test]
fn clones_share_subscribers() {
	let trigger = Trigger::new();
	let (log, handler) = recorder::<String>();
	trigger.clone().subscribe(handler);

	trigger.fire(&"hashchange".to_owned());
	assert_eq!(*log.borrow(), ["hashchange"]);
	assert_eq!(Trigger::<String>::default().len(), 0);
}

#[test]
fn handlers_may_reenter() {
	let trigger = Trigger::<u32>::new();
	let (log, handler) = recorder::<u32>();
	trigger.subscribe(handler);

	// Counts down by firing itself, then subscribes another handler.
	let inner = trigger.clone();
	trigger.subscribe(move |&remaining| {
		if remaining > 0 {
			inner.fire(&(remaining - 1));
		} else {
			inner.subscribe(|_| {});
		}
	});

	trigger.fire(&2);
	let mut seen = log.borrow().clone();
	seen.sort_unstable();
	assert_eq!(seen, [0, 1, 2]);
	assert_eq!(trigger.len(), 3);
}
