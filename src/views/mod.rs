//! Markup producers for the recipe browser's views.

use crate::{config, node::Element};

mod bookmarks;
mod pagination;
mod preview;
mod recipe;
mod results;

pub use bookmarks::BookmarksMarkup;
pub use pagination::PaginationMarkup;
pub use preview::PreviewMarkup;
pub use recipe::{format_quantity, RecipeMarkup};
pub use results::ResultsMarkup;

/// `<svg><use href="…#icon-{name}"></use></svg>`
pub(crate) fn icon_svg(name: &str) -> Element {
	Element::new("svg").child(Element::new("use").attr("href", config::icon(name)))
}

/// `base`, plus `modifier` if `enabled`.
pub(crate) fn class_list(base: &str, modifier: &str, enabled: bool) -> String {
	if enabled {
		format!("{} {}", base, modifier)
	} else {
		base.to_owned()
	}
}
