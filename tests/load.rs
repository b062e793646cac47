use forkify_dom::{
	load::{parse_fragment, LoadError},
	node::{Element, Node},
};

#[test]
fn loads_what_it_serializes() {
	let tree: Node = Element::new("li")
		.attr("class", "preview")
		.child(
			Element::new("a")
				.attr("href", "#5ed6604591c37cdc054bc886")
				.attr("class", "preview__link")
				.child(Element::new("img").attr("src", "pizza.jpg").attr("alt", "Pizza \"al taglio\""))
				.child(Element::new("h4").text("Fish & <Chips>")),
		)
		.child(Element::new("svg").child(Element::new("use").attr("href", "img/icons.svg#icon-user")))
		.into();

	assert_eq!(parse_fragment(&tree.to_markup()), Ok(vec![tree]));
}

#[test]
fn loads_siblings_and_top_level_text() {
	let nodes = parse_fragment("<p>a</p>between<p>b</p>").unwrap();
	assert_eq!(nodes, [Element::new("p").text("a").into(), Node::text("between"), Element::new("p").text("b").into()]);
}

#[test]
fn decodes_entities() {
	let nodes = parse_fragment("<p title=\"&quot;x&quot; &#39;y&#39;\">&lt;&amp;&gt; &#x41;&#66; &unknown; & done</p>").unwrap();
	let expected: Node = Element::new("p").attr("title", "\"x\" 'y'").text("<&> AB &unknown; & done").into();
	assert_eq!(nodes, [expected]);
}

#[test]
fn handles_valueless_and_self_closing() {
	let nodes = parse_fragment("<input disabled><br/><div hidden />").unwrap();
	assert_eq!(
		nodes,
		[
			Element::new("input").attr("disabled", "").into(),
			Element::new("br").into(),
			Element::new("div").attr("hidden", "").into(),
		]
	);
}

#[test]
fn empty_markup_is_empty() {
	assert_eq!(parse_fragment(""), Ok(vec![]));
}

#[test]
fn rejects_malformed_markup() {
	assert_eq!(parse_fragment("<div><p>x</div>"), Err(LoadError::MismatchedClose { expected: "p".to_owned(), found: "div".to_owned() }));
	assert_eq!(parse_fragment("<div>"), Err(LoadError::UnclosedElement { tag: "div".to_owned() }));
	assert_eq!(parse_fragment("</div>"), Err(LoadError::UnmatchedClose { tag: "div".to_owned() }));
	assert_eq!(parse_fragment("<a href=x>"), Err(LoadError::UnquotedAttribute { tag: "a".to_owned(), name: "href".to_owned() }));
	assert_eq!(parse_fragment("<a href=\"x"), Err(LoadError::UnexpectedEnd));
	assert_eq!(parse_fragment("<>"), Err(LoadError::EmptyTagName { position: 0 }));
	assert_eq!(parse_fragment("<a / b>"), Err(LoadError::EmptyAttributeName { tag: "a".to_owned() }));
}
