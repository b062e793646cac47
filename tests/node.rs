use forkify_dom::node::{fragment_markup, Attributes, Element, Node};

fn sample() -> Node {
	Element::new("div")
		.attr("class", "recipe")
		.child(Element::new("h1").child(Element::new("span").text("Soup")))
		.child(Element::new("img").attr("src", "a.jpg"))
		.text("tail")
		.into()
}

fn describe(node: &Node) -> String {
	match node {
		Node::Element(element) => element.tag.clone(),
		Node::Text(text) => format!("#{}", text),
	}
}

#[test]
fn flatten_is_pre_order() {
	let tree = sample();
	let flat: Vec<_> = tree.flatten().into_iter().map(describe).collect();
	assert_eq!(flat, ["div", "h1", "span", "#Soup", "img", "#tail"]);
	assert_eq!(tree.node_count(), 6);
}

#[test]
fn flatten_of_text_leaf_is_itself() {
	let leaf = Node::text("only");
	assert_eq!(leaf.flatten(), [&leaf]);
	assert!(leaf.child_nodes().is_empty());
}

#[test]
fn deep_equals_ignores_attribute_order() {
	let a: Node = Element::new("a").attr("href", "#1").attr("class", "x").into();
	let b: Node = Element::new("a").attr("class", "x").attr("href", "#1").into();
	assert!(a.deep_equals(&b));

	let c: Node = Element::new("a").attr("class", "x").attr("href", "#2").into();
	assert!(!a.deep_equals(&c));

	let d: Node = Element::new("a").attr("class", "x").into();
	assert!(!a.deep_equals(&d));
}

#[test]
fn deep_equals_compares_children_in_order() {
	let a: Node = Element::new("ul").child(Element::new("li").text("1")).child(Element::new("li").text("2")).into();
	let b: Node = Element::new("ul").child(Element::new("li").text("2")).child(Element::new("li").text("1")).into();
	assert!(!a.deep_equals(&b));
	assert!(a.deep_equals(&a.clone()));
	assert!(!Node::text("x").deep_equals(&Element::new("x").into()));
}

#[test]
fn text_children_are_normalized() {
	let element = Element::new("p").text("").text("a").text("b").child(Element::new("br")).text("c");
	assert_eq!(element.children, [Node::text("ab"), Element::new("br").into(), Node::text("c")]);
}

#[test]
fn repeated_attribute_keeps_position() {
	let element = Element::new("a").attr("class", "x").attr("href", "#1").attr("class", "y");
	let keys: Vec<_> = element.attributes.keys().map(String::as_str).collect();
	assert_eq!(keys, ["class", "href"]);
	assert_eq!(element.attributes["class"], "y");
}

#[test]
fn markup_escapes_and_skips_void_closing_tags() {
	let tree: Node = Element::new("p").attr("title", "\"Mac\" & <cheese>").text("1 < 2 & 3 > 2").child(Element::new("br")).into();
	assert_eq!(tree.to_markup(), "<p title=\"&quot;Mac&quot; &amp; &lt;cheese&gt;\">1 &lt; 2 &amp; 3 &gt; 2<br></p>");
}

#[test]
fn fragment_markup_concatenates_siblings() {
	let nodes = [Element::new("li").text("a").into(), Element::new("li").text("b").into()];
	assert_eq!(fragment_markup(&nodes), "<li>a</li><li>b</li>");
}

#[test]
fn normalized_drops_empty_and_merges_adjacent_text() {
	let raw = Node::Element(Element {
		tag: "div".to_owned(),
		attributes: Attributes::new(),
		children: vec![
			Node::text(""),
			Node::Element(Element {
				tag: "p".to_owned(),
				attributes: Attributes::new(),
				children: vec![Node::text("Soup"), Node::text(""), Node::text(" by Someone")],
			}),
			Node::text("a"),
			Node::text("b"),
		],
	});

	let expected: Node = Element::new("div").child(Element::new("p").text("Soup by Someone")).text("ab").into();
	assert_eq!(raw.normalized(), expected);
	assert_eq!(Node::text("").normalized(), Node::text(""));
}
