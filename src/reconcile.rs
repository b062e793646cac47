//! Positional reconciliation of two [`Node`] trees.

use crate::node::{Attributes, Element, Node};
use tracing::{instrument, trace, trace_span};

/// Outcome of [`reconcile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
	NoChange,
	/// Edits in ascending index order.
	Patch(Vec<Edit>),
	/// Positional comparison is unsafe. The caller must re-materialize the whole tree.
	Incompatible,
}

/// A single in-place mutation of a materialized tree, addressed by pre-order index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
	Text { index: usize, text: String },
	/// Every key in `attributes` is to be set. Keys missing from `attributes` are left alone.
	Attributes { index: usize, attributes: Attributes },
}

impl Edit {
	#[must_use]
	pub fn index(&self) -> usize {
		match *self {
			Self::Text { index, .. } | Self::Attributes { index, .. } => index,
		}
	}
}

/// Compares `previous` against `next` node by node in pre-order.
///
/// Each index is compared node-locally (tag, attributes and child count, or text payload),
/// since descendants are visited at their own indices anyway.
/// Two elements at the same index that disagree in tag or child count can't be patched,
/// and neither can differing flattened lengths or node kinds.
#[must_use]
#[instrument(skip(previous, next))]
pub fn reconcile(previous: &Node, next: &Node) -> Reconciliation {
	let p = previous.flatten();
	let n = next.flatten();
	if p.len() != n.len() {
		trace!("Flattened lengths differ ({} -> {}).", p.len(), n.len());
		return Reconciliation::Incompatible;
	}

	let mut edits = Vec::new();
	for (index, (p, n)) in p.into_iter().zip(n).enumerate() {
		match (p, n) {
			(Node::Text(t_1), Node::Text(t_2)) => {
				if t_1 != t_2 {
					edits.push(Edit::Text { index, text: t_2.clone() });
				}
			}

			(
				Node::Element(Element {
					tag: tag_1,
					attributes: a_1,
					children: c_1,
				}),
				Node::Element(Element {
					tag: tag_2,
					attributes: a_2,
					children: c_2,
				}),
			) => {
				if tag_1 != tag_2 || c_1.len() != c_2.len() {
					let span = trace_span!("Unreconcilable element", index, tag_1 = tag_1.as_str(), tag_2 = tag_2.as_str());
					let _enter = span.enter();
					trace!("Child counts: {} -> {}", c_1.len(), c_2.len());
					return Reconciliation::Incompatible;
				}
				if a_1 != a_2 {
					edits.push(Edit::Attributes { index, attributes: a_2.clone() });
				}
			}

			_ => {
				trace!(index, "Node kind differs.");
				return Reconciliation::Incompatible;
			}
		}
	}

	if edits.is_empty() {
		Reconciliation::NoChange
	} else {
		trace!("{} edit(s).", edits.len());
		Reconciliation::Patch(edits)
	}
}
