use super::PreviewMarkup;
use crate::{
	model::Search,
	node::{Element, Node},
	view::Producer,
};

/// The current page of a search, as previews.
#[derive(Debug, Clone, Default)]
pub struct ResultsMarkup {
	preview: PreviewMarkup,
}

impl ResultsMarkup {
	#[must_use]
	pub fn new(preview: PreviewMarkup) -> Self {
		Self { preview }
	}
}

impl Producer for ResultsMarkup {
	type Entity = Search;

	const ERROR_MESSAGE: &'static str = "No recipes found for your query! Please try again";

	fn produce(&self, search: &Search) -> Node {
		Element::new("ul")
			.attr("class", "results")
			.children(search.page_window().iter().map(|result| self.preview.produce(result)))
			.into()
	}
}
