#![cfg(target_arch = "wasm32")]

use forkify_dom::{
	load::load_child_nodes,
	node::{Element, Node},
	view::{Entity, FnProducer, Phase, View},
	web::ElementMount,
};
use std::sync::Once;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, HtmlBodyElement};

wasm_bindgen_test_configure!(run_in_browser);

static LOGGING: Once = Once::new();

struct Dish {
	id: u32,
	title: &'static str,
}

impl Entity for Dish {}

fn dish_markup(dish: &Dish) -> Node {
	Element::new("article")
		.attr("data-id", dish.id.to_string())
		.child(Element::new("h2").text(dish.title))
		.child(Element::new("svg").child(Element::new("use").attr("href", "img/icons.svg#icon-user")))
		.into()
}

fn container() -> web_sys::Element {
	LOGGING.call_once(tracing_wasm::set_as_global_default);

	let document = window().unwrap().document().unwrap();
	let body = document.body().unwrap().dyn_into::<HtmlBodyElement>().unwrap();
	let container = document.create_element("div").unwrap();
	body.append_child(&container).unwrap();
	container
}

#[wasm_bindgen_test]
fn render_then_patch_in_place() {
	let container = container();
	let mut view = View::new(FnProducer::new(dish_markup), ElementMount::new(container.clone()));

	view.render(Some(Dish { id: 1, title: "Soup" }), true);
	assert_eq!(view.phase(), Phase::Rendered);
	assert_eq!(container.inner_html(), "<article data-id=\"1\"><h2>Soup</h2><svg><use href=\"img/icons.svg#icon-user\"></use></svg></article>");

	let heading: web_sys::Node = container.query_selector("h2").unwrap().unwrap().into();
	let text = heading.first_child().unwrap();

	view.update(Some(Dish { id: 2, title: "Stew" }));
	assert_eq!(container.inner_html(), "<article data-id=\"2\"><h2>Stew</h2><svg><use href=\"img/icons.svg#icon-user\"></use></svg></article>");

	// Patched, not recreated.
	let heading_after: web_sys::Node = container.query_selector("h2").unwrap().unwrap().into();
	assert!(heading_after.is_same_node(Some(&heading)));
	assert!(heading_after.first_child().unwrap().is_same_node(Some(&text)));

	container.remove();
}

#[wasm_bindgen_test]
fn loaded_document_matches_the_rendered_tree() {
	let container = container();
	let mut view = View::new(FnProducer::new(dish_markup), ElementMount::new(container.clone()));
	view.render(Some(Dish { id: 1, title: "Fish & <Chips>" }), true);

	let root: &web_sys::Node = container.as_ref();
	let loaded = load_child_nodes(root);
	assert_eq!(loaded.len(), 1);
	assert_eq!(Some(&loaded[0]), view.last_tree());

	container.remove();
}

#[wasm_bindgen_test]
fn status_views_then_full_render() {
	let container = container();
	let mut view = View::new(FnProducer::new(dish_markup), ElementMount::new(container.clone()));

	view.render_loading();
	assert_eq!(view.phase(), Phase::Loading);
	assert!(container.query_selector(".spinner").unwrap().is_some());

	view.update(Some(Dish { id: 1, title: "Soup" }));
	assert_eq!(view.phase(), Phase::Rendered);
	assert!(container.query_selector(".spinner").unwrap().is_none());
	assert_eq!(container.query_selector("h2").unwrap().unwrap().text_content().as_deref(), Some("Soup"));

	container.remove();
}
