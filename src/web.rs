//! Binding to a live document through `web_sys`.

use crate::{
	mount::{MountError, MountPoint},
	trigger::Trigger,
};
use core::fmt;
use js_sys::Function;
use tracing::{error, instrument, trace, trace_span};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

#[allow(clippy::needless_pass_by_value)]
fn host_error(error: JsValue) -> MountError {
	MountError::Host(format!("{:?}", error))
}

/// Renders into the child nodes of a [`web_sys::Element`].
///
/// Pre-order indices count elements and text nodes only. Comments and other node types are skipped.
#[derive(Debug, Clone)]
pub struct ElementMount {
	element: web_sys::Element,
}

impl ElementMount {
	#[must_use]
	pub fn new(element: web_sys::Element) -> Self {
		Self { element }
	}

	#[must_use]
	pub fn element(&self) -> &web_sys::Element {
		&self.element
	}

	fn is_counted(node: &web_sys::Node) -> bool {
		node.dyn_ref::<web_sys::Element>().is_some() || node.dyn_ref::<web_sys::Text>().is_some()
	}

	/// The pre-order successor of `node` below the mount element.
	fn following(&self, node: &web_sys::Node) -> Option<web_sys::Node> {
		if node.dyn_ref::<web_sys::Element>().is_some() {
			if let Some(first_child) = node.first_child() {
				return Some(first_child);
			}
		}

		let root: &web_sys::Node = self.element.as_ref();
		let mut current = node.clone();
		loop {
			if let Some(sibling) = current.next_sibling() {
				return Some(sibling);
			}
			let parent = current.parent_node()?;
			if root.is_same_node(Some(&parent)) {
				return None;
			}
			current = parent;
		}
	}

	fn node_at(&self, index: usize) -> Option<web_sys::Node> {
		let mut remaining = index;
		let mut next = self.element.first_child();
		while let Some(node) = next {
			if Self::is_counted(&node) {
				if remaining == 0 {
					return Some(node);
				}
				remaining -= 1;
			}
			next = self.following(&node);
		}
		None
	}
}

impl MountPoint for ElementMount {
	#[instrument(skip(self))]
	fn clear(&mut self) {
		self.element.set_inner_html("");
	}

	#[instrument(skip(self, markup))]
	fn insert_markup(&mut self, markup: &str) -> Result<(), MountError> {
		self.element.insert_adjacent_html("afterbegin", markup).map_err(host_error)
	}

	#[instrument(skip(self, text))]
	fn set_text(&mut self, index: usize, text: &str) -> Result<(), MountError> {
		let node = self.node_at(index).ok_or(MountError::NoNodeAt { index })?;
		match node.dyn_ref::<web_sys::Text>() {
			Some(dom_text) => {
				if cfg!(feature = "dangerous-logging") {
					trace!("Replacing {:?}", dom_text.data());
				}
				dom_text.set_data(text);
				Ok(())
			}
			None => {
				error!("Expected to update `web_sys::Text` but found {:?}.", node);
				Err(MountError::KindMismatch { index, expected: "text node" })
			}
		}
	}

	#[instrument(skip(self, value))]
	fn set_attribute(&mut self, index: usize, name: &str, value: &str) -> Result<(), MountError> {
		let node = self.node_at(index).ok_or(MountError::NoNodeAt { index })?;
		match node.dyn_ref::<web_sys::Element>() {
			Some(element) => element.set_attribute(name, value).map_err(host_error),
			None => {
				error!("Expected to update `web_sys::Element` but found {:?}.", node);
				Err(MountError::KindMismatch { index, expected: "element" })
			}
		}
	}
}

/// Listens for an event on a container and fires a [`Trigger`] for occurrences inside matching descendants.
///
/// The listener is removed when this is dropped.
pub struct DelegatedListener {
	target: web_sys::EventTarget,
	event: &'static str,
	closure: Closure<dyn Fn(web_sys::Event)>,
}

impl fmt::Debug for DelegatedListener {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DelegatedListener").field("target", &self.target).field("event", &self.event).finish_non_exhaustive()
	}
}

impl DelegatedListener {
	/// For each `event` on or below `container`, finds the closest ancestor of the event target matching `selector`.
	/// If there is one and `extract` returns an argument for it, `trigger` fires with that argument.
	///
	/// # Errors
	///
	/// Iff the listener could not be added.
	pub fn new<A: 'static>(
		container: &web_sys::Element,
		event: &'static str,
		selector: &'static str,
		extract: impl 'static + Fn(&web_sys::Element) -> Option<A>,
		trigger: Trigger<A>,
	) -> Result<Self, MountError> {
		let closure = Closure::wrap(Box::new(move |dom_event: web_sys::Event| {
			let span = trace_span!("Delegated event", event, selector);
			let _enter = span.enter();

			let target = match dom_event.target().and_then(|target| target.dyn_into::<web_sys::Element>().ok()) {
				Some(target) => target,
				None => return trace!("Event target is not an element."),
			};
			let matched = match target.closest(selector) {
				Ok(Some(matched)) => matched,
				Ok(None) => return trace!("No match."),
				Err(error) => return error!("Invalid selector {:?}: {:?}", selector, error),
			};
			match extract(&matched) {
				Some(argument) => trigger.fire(&argument),
				None => trace!("Nothing to extract from {:?}.", matched),
			}
		}) as Box<dyn Fn(web_sys::Event)>);

		container
			.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref::<Function>())
			.map_err(host_error)?;

		Ok(Self {
			target: container.clone().into(),
			event,
			closure,
		})
	}
}

impl Drop for DelegatedListener {
	fn drop(&mut self) {
		if let Err(error) = self.target.remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref::<Function>()) {
			error!("Failed to remove event listener {:?}: {:?}", self.event, error);
		}
	}
}
