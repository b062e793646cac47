use super::PreviewMarkup;
use crate::{
	model::Preview,
	node::{Element, Node},
	view::Producer,
};

#[derive(Debug, Clone, Default)]
pub struct BookmarksMarkup {
	preview: PreviewMarkup,
}

impl BookmarksMarkup {
	#[must_use]
	pub fn new(preview: PreviewMarkup) -> Self {
		Self { preview }
	}
}

impl Producer for BookmarksMarkup {
	type Entity = Vec<Preview>;

	const ERROR_MESSAGE: &'static str = "No bookmarks yet! Find a nice recipe and bookmark it :)";

	fn produce(&self, bookmarks: &Vec<Preview>) -> Node {
		Element::new("ul")
			.attr("class", "bookmarks__list")
			.children(bookmarks.iter().map(|bookmark| self.preview.produce(bookmark)))
			.into()
	}
}
