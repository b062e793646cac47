//! The structural representation of rendered output.
//!
//! A [`Node`] tree carries no behaviour beyond equality, pre-order flattening and serialization to markup.
//! Identity across two renders is purely positional: a node is "the same" as the node at the same index of the other tree's [`Node::flatten`].

use core::fmt::{self, Write as _};
use indexmap::IndexMap;

/// Ordered attribute mapping with unique keys.
///
/// Equality ignores insertion order, which is what [`Node::deep_equals`] requires.
pub type Attributes = IndexMap<String, String>;

/// Elements that have no closing tag and can't have children.
pub const VOID_ELEMENTS: &[&str] = &["area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track", "wbr"];

#[must_use]
pub fn is_void(tag: &str) -> bool {
	VOID_ELEMENTS.iter().any(|void| void.eq_ignore_ascii_case(tag))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Element(Element),
	Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	pub tag: String,
	pub attributes: Attributes,
	pub children: Vec<Node>,
}

impl Element {
	#[must_use]
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			attributes: Attributes::new(),
			children: Vec::new(),
		}
	}

	/// Sets `name` to `value`, replacing (but keeping the position of) an earlier value.
	#[must_use]
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(name.into(), value.into());
		self
	}

	/// Appends `child`, normalized the way a document would parse the serialized result:
	/// empty text is dropped and adjacent text is merged.
	#[must_use]
	pub fn child(mut self, child: impl Into<Node>) -> Self {
		let child = child.into();
		if let Node::Text(text) = &child {
			if text.is_empty() {
				return self;
			}
			if let Some(Node::Text(last)) = self.children.last_mut() {
				last.push_str(text);
				return self;
			}
		}
		self.children.push(child);
		self
	}

	#[must_use]
	pub fn children(self, children: impl IntoIterator<Item = Node>) -> Self {
		children.into_iter().fold(self, Element::child)
	}

	/// Shorthand for a text child.
	#[must_use]
	pub fn text(self, text: impl Into<String>) -> Self {
		self.child(Node::Text(text.into()))
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}

impl Node {
	#[must_use]
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	#[must_use]
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Self::Element(element) => Some(element),
			Self::Text(_) => None,
		}
	}

	#[must_use]
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			Self::Element(_) => None,
		}
	}

	/// Children of an element. Text leaves have none.
	#[must_use]
	pub fn child_nodes(&self) -> &[Node] {
		match self {
			Self::Element(element) => &element.children,
			Self::Text(_) => &[],
		}
	}

	/// Drops empty text and merges adjacent text throughout the tree, as [`Element::child`] does while building.
	///
	/// This is the shape a document ends up with after parsing [`Node::to_markup`].
	#[must_use]
	pub fn normalized(self) -> Self {
		match self {
			Self::Text(_) => self,
			Self::Element(Element { tag, attributes, children }) => Element {
				tag,
				attributes,
				children: Vec::new(),
			}
			.children(children.into_iter().map(Node::normalized))
			.into(),
		}
	}

	/// Recursive structural equality: kind, tag, attributes (in any order), text payload and children pairwise in order.
	#[must_use]
	pub fn deep_equals(&self, other: &Self) -> bool {
		self == other
	}

	/// Pre-order flattening: each node, then each of its children in order, recursively.
	///
	/// The returned index of a node is its identity for reconciliation.
	#[must_use]
	pub fn flatten(&self) -> Vec<&Node> {
		let mut flat = Vec::new();
		let mut stack = vec![self];
		while let Some(node) = stack.pop() {
			flat.push(node);
			stack.extend(node.child_nodes().iter().rev());
		}
		flat
	}

	/// Number of nodes [`Node::flatten`] would return.
	#[must_use]
	pub fn node_count(&self) -> usize {
		1 + self.child_nodes().iter().map(Node::node_count).sum::<usize>()
	}

	/// Serializes this tree as HTML.
	#[must_use]
	pub fn to_markup(&self) -> String {
		let mut markup = String::new();
		self.write_markup(&mut markup).ok();
		markup
	}

	/// # Errors
	///
	/// Iff `w` fails.
	pub fn write_markup(&self, w: &mut impl fmt::Write) -> fmt::Result {
		match self {
			Self::Text(text) => write_escaped(w, text, false),
			Self::Element(Element { tag, attributes, children }) => {
				write!(w, "<{}", tag)?;
				for (name, value) in attributes {
					write!(w, " {}=\"", name)?;
					write_escaped(w, value, true)?;
					w.write_char('"')?;
				}
				w.write_char('>')?;
				if is_void(tag) {
					if !children.is_empty() {
						tracing::warn!("Void element <{}> has {} child node(s), which won't be serialized.", tag, children.len());
					}
					return Ok(());
				}
				for child in children {
					child.write_markup(w)?;
				}
				write!(w, "</{}>", tag)
			}
		}
	}
}

/// Serializes a sequence of sibling trees.
#[must_use]
pub fn fragment_markup(nodes: &[Node]) -> String {
	let mut markup = String::new();
	for node in nodes {
		node.write_markup(&mut markup).ok();
	}
	markup
}

fn write_escaped(w: &mut impl fmt::Write, text: &str, attribute: bool) -> fmt::Result {
	let mut rest = text;
	while let Some(position) = rest.find(|c: char| matches!(c, '&' | '<' | '>') || (attribute && c == '"')) {
		w.write_str(&rest[..position])?;
		w.write_str(match rest.as_bytes()[position] {
			b'&' => "&amp;",
			b'<' => "&lt;",
			b'>' => "&gt;",
			_ => "&quot;",
		})?;
		rest = &rest[position + 1..];
	}
	w.write_str(rest)
}
