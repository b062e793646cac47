//! Constructs [`Node`] trees from serialized markup or from live DOM elements.

use crate::node::{is_void, Element, Node};
use tracing::{instrument, trace, warn};
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
	#[error("markup ended inside a tag")]
	UnexpectedEnd,
	#[error("<{tag}> was never closed")]
	UnclosedElement { tag: String },
	#[error("expected </{expected}> but found </{found}>")]
	MismatchedClose { expected: String, found: String },
	#[error("closing tag </{tag}> without matching opening tag")]
	UnmatchedClose { tag: String },
	#[error("value of attribute {name:?} on <{tag}> is not double-quoted")]
	UnquotedAttribute { tag: String, name: String },
	#[error("empty tag name at byte {position}")]
	EmptyTagName { position: usize },
	#[error("empty attribute name on <{tag}>")]
	EmptyAttributeName { tag: String },
}

/// Parses `markup` as emitted by [`Node::to_markup`] into a list of sibling trees.
///
/// Supported are elements, double-quoted and valueless attributes, self-closing tags, void elements, text,
/// the entities `&amp;`, `&lt;`, `&gt;`, `&quot;` and `&#39;`, and numeric character references.
///
/// # Errors
///
/// Iff `markup` is malformed. See [`LoadError`].
#[instrument(skip(markup), fields(markup.len = markup.len()))]
pub fn parse_fragment(markup: &str) -> Result<Vec<Node>, LoadError> {
	let mut roots = Vec::new();
	let mut open: Vec<Element> = Vec::new();
	let mut rest = markup;

	while !rest.is_empty() {
		if let Some(close) = rest.strip_prefix("</") {
			let end = close.find('>').ok_or(LoadError::UnexpectedEnd)?;
			let tag = close[..end].trim();
			let element = open.pop().ok_or_else(|| LoadError::UnmatchedClose { tag: tag.to_owned() })?;
			if !element.tag.eq_ignore_ascii_case(tag) {
				return Err(LoadError::MismatchedClose {
					expected: element.tag,
					found: tag.to_owned(),
				});
			}
			attach(&mut open, &mut roots, element.into());
			rest = &close[end + 1..];
		} else if let Some(tag_start) = rest.strip_prefix('<') {
			let (element, self_closing, after) = parse_open_tag(tag_start, markup.len() - rest.len())?;
			rest = after;
			if self_closing || is_void(&element.tag) {
				attach(&mut open, &mut roots, element.into());
			} else {
				open.push(element);
			}
		} else {
			let end = rest.find('<').unwrap_or(rest.len());
			attach(&mut open, &mut roots, Node::Text(decode_entities(&rest[..end])));
			rest = &rest[end..];
		}
	}

	match open.pop() {
		Some(element) => Err(LoadError::UnclosedElement { tag: element.tag }),
		None => {
			trace!("Loaded {} root node(s).", roots.len());
			Ok(roots)
		}
	}
}

fn attach(open: &mut [Element], roots: &mut Vec<Node>, node: Node) {
	match open.last_mut() {
		Some(parent) => parent.children.push(node),
		None => roots.push(node),
	}
}

/// `rest` starts just after `<`. Returns the element, whether it was self-closing and the remainder after `>`.
fn parse_open_tag(rest: &str, position: usize) -> Result<(Element, bool, &str), LoadError> {
	let name_end = rest.find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/').ok_or(LoadError::UnexpectedEnd)?;
	if name_end == 0 {
		return Err(LoadError::EmptyTagName { position });
	}
	let mut element = Element::new(&rest[..name_end]);
	let mut rest = &rest[name_end..];

	loop {
		rest = rest.trim_start();
		if let Some(after) = rest.strip_prefix("/>") {
			return Ok((element, true, after));
		}
		if let Some(after) = rest.strip_prefix('>') {
			return Ok((element, false, after));
		}
		if rest.is_empty() {
			return Err(LoadError::UnexpectedEnd);
		}

		let name_end = rest
			.find(|c: char| c.is_ascii_whitespace() || c == '=' || c == '>' || c == '/')
			.ok_or(LoadError::UnexpectedEnd)?;
		if name_end == 0 {
			return Err(LoadError::EmptyAttributeName { tag: element.tag });
		}
		let name = rest[..name_end].to_owned();
		rest = &rest[name_end..];

		let value = if let Some(after_equals) = rest.strip_prefix('=') {
			let quoted = after_equals.strip_prefix('"').ok_or_else(|| LoadError::UnquotedAttribute {
				tag: element.tag.clone(),
				name: name.clone(),
			})?;
			let value_end = quoted.find('"').ok_or(LoadError::UnexpectedEnd)?;
			rest = &quoted[value_end + 1..];
			decode_entities(&quoted[..value_end])
		} else {
			String::new()
		};

		if element.attributes.insert(name, value).is_some() {
			warn!("Duplicate attribute on <{}>. The last value wins.", element.tag);
		}
	}
}

fn decode_entities(text: &str) -> String {
	let mut decoded = String::with_capacity(text.len());
	let mut rest = text;
	while let Some(ampersand) = rest.find('&') {
		decoded.push_str(&rest[..ampersand]);
		rest = &rest[ampersand..];

		let entity = rest.find(';').map(|end| (&rest[1..end], end));
		let replacement = entity.and_then(|(name, end)| {
			let c = match name {
				"amp" => Some('&'),
				"lt" => Some('<'),
				"gt" => Some('>'),
				"quot" => Some('"'),
				"apos" => Some('\''),
				_ => name
					.strip_prefix("#x")
					.or_else(|| name.strip_prefix("#X"))
					.map_or_else(|| name.strip_prefix('#').and_then(|decimal| decimal.parse().ok()), |hex| u32::from_str_radix(hex, 16).ok())
					.and_then(char::from_u32),
			};
			c.map(|c| (c, end))
		});

		match replacement {
			Some((c, end)) => {
				decoded.push(c);
				rest = &rest[end + 1..];
			}
			None => {
				decoded.push('&');
				rest = &rest[1..];
			}
		}
	}
	decoded.push_str(rest);
	decoded
}

/// Loads the child nodes of a live DOM node. Comments and other node types are skipped.
#[must_use]
pub fn load_child_nodes(node: &web_sys::Node) -> Vec<Node> {
	let child_nodes = node.child_nodes();
	(0..child_nodes.length())
		.filter_map(|i| child_nodes.item(i))
		.filter_map(|child| {
			if let Some(element) = child.dyn_ref::<web_sys::Element>() {
				Some(load_element(element).into())
			} else if let Some(text) = child.dyn_ref::<web_sys::Text>() {
				Some(Node::Text(text.data()))
			} else {
				trace!("Skipping unrecognised child node: {:?}", child);
				None
			}
		})
		.collect()
}

#[must_use]
pub fn load_element(element: &web_sys::Element) -> Element {
	let attributes = element.attributes();
	let node: &web_sys::Node = element.as_ref();
	Element {
		tag: element.local_name(),
		attributes: (0..attributes.length()).filter_map(|i| attributes.item(i)).map(|attribute| (attribute.local_name(), attribute.value())).collect(),
		children: load_child_nodes(node),
	}
}
