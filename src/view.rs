//! The view lifecycle: full renders, incremental updates and status views.

use crate::{
	config,
	mount::{MountError, MountPoint},
	node::{Element, Node},
	reconcile::{reconcile, Edit, Reconciliation},
	views::icon_svg,
};
use core::{any::type_name, fmt, marker::PhantomData};
use tracing::{error, instrument, level_filters::STATIC_MAX_LEVEL, trace, trace_span, warn, Level};

/// A data value a view can render.
pub trait Entity {
	/// An empty entity can't be rendered: [`View::render`] shows the error view and [`View::update`] does nothing.
	fn is_empty(&self) -> bool {
		false
	}
}

impl<T> Entity for Vec<T> {
	fn is_empty(&self) -> bool {
		<[T]>::is_empty(self)
	}
}

/// Builds the [`Node`] tree for one entity.
///
/// Must be deterministic: equal entities must yield equal trees, since updates are matched by position.
/// Trees may contain empty or adjacent text. The view [normalizes](`Node::normalized`) them before use.
/// A producer may read shared state but must not modify it.
/// Panics are a programming error and aren't caught.
pub trait Producer {
	type Entity: Entity;

	const ERROR_MESSAGE: &'static str = config::DEFAULT_ERROR_MESSAGE;
	const MESSAGE: &'static str = config::DEFAULT_MESSAGE;

	fn produce(&self, entity: &Self::Entity) -> Node;
}

/// Adapts a closure into a [`Producer`].
pub struct FnProducer<E, F> {
	produce: F,
	_entity: PhantomData<fn(&E)>,
}

impl<E, F> FnProducer<E, F>
where
	E: Entity,
	F: Fn(&E) -> Node,
{
	#[must_use]
	pub fn new(produce: F) -> Self {
		Self { produce, _entity: PhantomData }
	}
}

impl<E, F> Producer for FnProducer<E, F>
where
	E: Entity,
	F: Fn(&E) -> Node,
{
	type Entity = E;

	fn produce(&self, entity: &E) -> Node {
		(self.produce)(entity)
	}
}

impl<E, F> fmt::Debug for FnProducer<E, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FnProducer").field("entity", &type_name::<E>()).finish_non_exhaustive()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	Empty,
	Loading,
	Rendered,
	Error,
	Message,
}

/// Owns one mount point and keeps it in sync with the entities it is given.
///
/// Construct one per mount point. All operations run to completion synchronously.
pub struct View<P: Producer, M: MountPoint> {
	producer: P,
	mount: M,
	last_entity: Option<P::Entity>,
	last_tree: Option<Node>,
	phase: Phase,
}

impl<P: Producer, M: MountPoint + fmt::Debug> fmt::Debug for View<P, M> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("View")
			.field("producer", &type_name::<P>())
			.field("mount", &self.mount)
			.field("last_tree", &self.last_tree)
			.field("phase", &self.phase)
			.finish_non_exhaustive()
	}
}

impl<P: Producer, M: MountPoint> View<P, M> {
	#[must_use]
	pub fn new(producer: P, mount: M) -> Self {
		Self {
			producer,
			mount,
			last_entity: None,
			last_tree: None,
			phase: Phase::Empty,
		}
	}

	#[must_use]
	pub fn phase(&self) -> Phase {
		self.phase
	}

	#[must_use]
	pub fn last_entity(&self) -> Option<&P::Entity> {
		self.last_entity.as_ref()
	}

	/// The tree the mount point reflected when it was last [`Phase::Rendered`].
	#[must_use]
	pub fn last_tree(&self) -> Option<&Node> {
		self.last_tree.as_ref()
	}

	#[must_use]
	pub fn producer(&self) -> &P {
		&self.producer
	}

	#[must_use]
	pub fn mount(&self) -> &M {
		&self.mount
	}

	/// Direct access to the mount point.
	///
	/// Changes made here are not tracked. The next [`View::update`] recovers from them with a full render
	/// only if they break a patch outright.
	pub fn mount_mut(&mut self) -> &mut M {
		&mut self.mount
	}

	/// Renders `entity` from scratch.
	///
	/// An absent or empty entity shows the error view instead.
	/// With `materialize` set to `false`, the markup is returned and neither the mount point nor the view state is touched.
	pub fn render(&mut self, entity: Option<P::Entity>, materialize: bool) -> Option<String> {
		let span = trace_span!("render", view = type_name::<P>(), materialize);
		let _enter = span.enter();

		let entity = match entity {
			Some(entity) if !entity.is_empty() => entity,
			_ => {
				trace!("Absent or empty entity.");
				self.render_error(None);
				return None;
			}
		};

		let tree = self.produce(&entity);
		if !materialize {
			return Some(tree.to_markup());
		}

		self.materialize(entity, tree);
		None
	}

	/// Brings the mount point in line with `entity`, patching text and attributes in place where possible.
	///
	/// An absent or empty entity is ignored.
	/// If the tree's shape changed, or the mount point isn't currently showing a rendered tree, this renders from scratch.
	pub fn update(&mut self, entity: Option<P::Entity>) {
		let span = trace_span!("update", view = type_name::<P>(), phase = ?self.phase);
		let _enter = span.enter();

		let entity = match entity {
			Some(entity) if !entity.is_empty() => entity,
			_ => return trace!("Absent or empty entity. Nothing to update."),
		};

		let next = self.produce(&entity);
		let reconciliation = match (&self.last_tree, self.phase) {
			(Some(previous), Phase::Rendered) => reconcile(previous, &next),
			_ => {
				trace!("Not showing a rendered tree.");
				Reconciliation::Incompatible
			}
		};

		match reconciliation {
			Reconciliation::NoChange => {
				trace!("No change.");
				self.last_entity = Some(entity);
			}

			Reconciliation::Patch(edits) => {
				let patched = match &self.last_tree {
					Some(previous) => apply_patch(&mut self.mount, previous, &edits),
					None => Err(MountError::NoNodeAt { index: 0 }),
				};
				match patched {
					Ok(()) => {
						self.last_entity = Some(entity);
						self.last_tree = Some(next);
					}
					Err(error) => {
						warn!("Could not patch the mount point ({}). Recreating the view.", error);
						self.materialize(entity, next);
					}
				}
			}

			Reconciliation::Incompatible => {
				trace!("Incompatible trees. Rendering from scratch.");
				self.materialize(entity, next);
			}
		}
	}

	/// Replaces the content with a loading indicator.
	#[instrument(skip(self), fields(view = type_name::<P>()))]
	pub fn render_loading(&mut self) {
		let spinner = Element::new("div").attr("class", "spinner").child(icon_svg("loader"));
		self.show_status(&spinner.into(), "Loading...", Phase::Loading);
	}

	/// Replaces the content with an error message, by default [`Producer::ERROR_MESSAGE`].
	#[instrument(skip(self), fields(view = type_name::<P>()))]
	pub fn render_error(&mut self, message: Option<&str>) {
		let message = message.unwrap_or(P::ERROR_MESSAGE);
		self.show_status(&status_markup("error", "alert-triangle", message), message, Phase::Error);
	}

	/// Replaces the content with an informational message, by default [`Producer::MESSAGE`].
	#[instrument(skip(self), fields(view = type_name::<P>()))]
	pub fn render_message(&mut self, message: Option<&str>) {
		let message = message.unwrap_or(P::MESSAGE);
		self.show_status(&status_markup("message", "smile", message), message, Phase::Message);
	}

	/// Produced trees are normalized so their indices match what the mount point parses from their markup.
	fn produce(&self, entity: &P::Entity) -> Node {
		self.producer.produce(entity).normalized()
	}

	fn materialize(&mut self, entity: P::Entity, tree: Node) {
		self.mount.clear();
		if let Err(error) = self.mount.insert_markup(&tree.to_markup()) {
			error!("Failed to insert rendered markup: {}", error);
			return self.render_error(None);
		}
		trace!("Materialized {} node(s).", tree.node_count());
		self.last_entity = Some(entity);
		self.last_tree = Some(tree);
		self.phase = Phase::Rendered;
	}

	/// Falls back to `fallback` as plain text if the host rejects the status markup.
	fn show_status(&mut self, tree: &Node, fallback: &str, phase: Phase) {
		self.mount.clear();
		if let Err(error) = self.mount.insert_markup(&tree.to_markup()) {
			error!("Failed to insert {:?} markup: {}. Inserting plain text instead.", phase, error);
			self.mount.clear();
			if let Err(error) = self.mount.insert_markup(&Node::text(fallback).to_markup()) {
				error!("Failed to insert plain text: {}", error);
			}
		}
		self.phase = phase;
	}
}

fn apply_patch(mount: &mut impl MountPoint, previous: &Node, edits: &[Edit]) -> Result<(), MountError> {
	let flat = previous.flatten();
	for edit in edits {
		match edit {
			Edit::Text { index, text } => {
				let span = trace_span!("Patching text", index);
				let _enter = span.enter();
				if cfg!(feature = "dangerous-logging") {
					trace!("{:?} -> {:?}", flat.get(*index).and_then(|node| node.as_text()), text);
				}
				mount.set_text(*index, text)?;
			}

			Edit::Attributes { index, attributes } => {
				let span = trace_span!("Patching attributes", index);
				let _enter = span.enter();
				for (name, value) in attributes {
					if cfg!(feature = "dangerous-logging") {
						trace!("{}={:?}", name, value);
					}
					mount.set_attribute(*index, name, value)?;
				}

				if STATIC_MAX_LEVEL >= Level::WARN {
					if let Some(Node::Element(stale)) = flat.get(*index) {
						for name in stale.attributes.keys().filter(|name| !attributes.contains_key(*name)) {
							warn!("Attribute {:?} on <{}> (index {}) is no longer produced but stays in place.", name, stale.tag, index);
						}
					}
				}
			}
		}
	}
	Ok(())
}

fn status_markup(class: &str, icon: &str, message: &str) -> Node {
	Element::new("div")
		.attr("class", class)
		.child(Element::new("div").child(icon_svg(icon)))
		.child(Element::new("p").text(message))
		.into()
}
