//! The host-document boundary a [`View`](`crate::view::View`) renders into.
//!
//! A mount point is addressed by the pre-order index of its content, exactly as [`Node::flatten`] numbers a tree:
//! index 0 is the first node inserted at the front, followed by its descendants, then its next sibling.

use crate::{
	load::{self, LoadError},
	node::{self, Node},
};
use tracing::{instrument, trace};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
	#[error("no materialized node at index {index}")]
	NoNodeAt { index: usize },
	#[error("expected {expected} at index {index}")]
	KindMismatch { index: usize, expected: &'static str },
	#[error("could not load markup: {0}")]
	Markup(#[from] LoadError),
	#[error("host document error: {0}")]
	Host(String),
}

/// The four primitives a view needs from its host document.
pub trait MountPoint {
	/// Removes all content.
	fn clear(&mut self);

	/// Parses `markup` and inserts the result before any existing content.
	///
	/// # Errors
	///
	/// Iff the host rejects the markup.
	fn insert_markup(&mut self, markup: &str) -> Result<(), MountError>;

	/// Replaces the payload of the text node at pre-order `index`.
	///
	/// # Errors
	///
	/// Iff there is no text node at `index`.
	fn set_text(&mut self, index: usize, text: &str) -> Result<(), MountError>;

	/// Sets (adds or overwrites) one attribute of the element at pre-order `index`.
	///
	/// # Errors
	///
	/// Iff there is no element at `index`.
	fn set_attribute(&mut self, index: usize, name: &str, value: &str) -> Result<(), MountError>;
}

impl<M: MountPoint + ?Sized> MountPoint for &mut M {
	fn clear(&mut self) {
		(**self).clear();
	}

	fn insert_markup(&mut self, markup: &str) -> Result<(), MountError> {
		(**self).insert_markup(markup)
	}

	fn set_text(&mut self, index: usize, text: &str) -> Result<(), MountError> {
		(**self).set_text(index, text)
	}

	fn set_attribute(&mut self, index: usize, name: &str, value: &str) -> Result<(), MountError> {
		(**self).set_attribute(index, name, value)
	}
}

/// An in-memory mount point that holds parsed [`Node`]s instead of a live document.
///
/// Inserted markup goes through [`load::parse_fragment`], so what is stored is what a document would have built from it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DetachedMount {
	content: Vec<Node>,
}

impl DetachedMount {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn content(&self) -> &[Node] {
		&self.content
	}

	/// Serializes the current content.
	#[must_use]
	pub fn markup(&self) -> String {
		node::fragment_markup(&self.content)
	}

	/// Concatenated text payloads, in document order.
	#[must_use]
	pub fn text_content(&self) -> String {
		self.content.iter().flat_map(Node::flatten).filter_map(Node::as_text).collect()
	}

	fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
		let mut remaining = index;
		let mut siblings = self.content.iter_mut();
		loop {
			let node = siblings.next()?;
			let count = node.node_count();
			if remaining >= count {
				remaining -= count;
				continue;
			}
			if remaining == 0 {
				return Some(node);
			}
			remaining -= 1;
			siblings = match node {
				Node::Element(element) => element.children.iter_mut(),
				Node::Text(_) => return None,
			};
		}
	}
}

impl MountPoint for DetachedMount {
	#[instrument(skip(self))]
	fn clear(&mut self) {
		trace!("Discarding {} root node(s).", self.content.len());
		self.content.clear();
	}

	#[instrument(skip(self, markup))]
	fn insert_markup(&mut self, markup: &str) -> Result<(), MountError> {
		let loaded = load::parse_fragment(markup)?;
		self.content.splice(0..0, loaded);
		Ok(())
	}

	#[instrument(skip(self, text))]
	fn set_text(&mut self, index: usize, text: &str) -> Result<(), MountError> {
		match self.node_mut(index) {
			Some(Node::Text(data)) => {
				text.clone_into(data);
				Ok(())
			}
			Some(Node::Element(_)) => Err(MountError::KindMismatch { index, expected: "text node" }),
			None => Err(MountError::NoNodeAt { index }),
		}
	}

	#[instrument(skip(self, value))]
	fn set_attribute(&mut self, index: usize, name: &str, value: &str) -> Result<(), MountError> {
		match self.node_mut(index) {
			Some(Node::Element(element)) => {
				element.attributes.insert(name.to_owned(), value.to_owned());
				Ok(())
			}
			Some(Node::Text(_)) => Err(MountError::KindMismatch { index, expected: "element" }),
			None => Err(MountError::NoNodeAt { index }),
		}
	}
}
