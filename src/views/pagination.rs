use super::icon_svg;
use crate::{
	model::Search,
	node::{Element, Node},
	view::Producer,
};

/// Previous/next page buttons for a [`Search`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationMarkup;

impl PaginationMarkup {
	/// Reads the page a clicked button leads to, given its `data-goto` attribute.
	#[must_use]
	pub fn goto(data_goto: &str) -> Option<usize> {
		data_goto.trim().parse().ok().filter(|&page| page > 0)
	}

	fn previous(page: usize) -> Element {
		Element::new("button")
			.attr("data-goto", (page - 1).to_string())
			.attr("class", "btn--inline pagination__btn--prev")
			.child(icon_svg("arrow-left").attr("class", "search__icon"))
			.child(Element::new("span").text(format!("Page {}", page - 1)))
	}

	fn next(page: usize) -> Element {
		Element::new("button")
			.attr("data-goto", (page + 1).to_string())
			.attr("class", "btn--inline pagination__btn--next")
			.child(Element::new("span").text(format!("Page {}", page + 1)))
			.child(icon_svg("arrow-right").attr("class", "search__icon"))
	}
}

impl Producer for PaginationMarkup {
	type Entity = Search;

	fn produce(&self, search: &Search) -> Node {
		let page = search.page.max(1);
		let page_count = search.page_count();
		let controls = Element::new("div").attr("class", "pagination__controls");

		let controls = if page_count <= 1 {
			controls
		} else if page == 1 {
			controls.child(Self::next(page))
		} else if page >= page_count {
			controls.child(Self::previous(page))
		} else {
			controls.child(Self::previous(page)).child(Self::next(page))
		};
		controls.into()
	}
}
