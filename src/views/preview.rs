use super::{class_list, icon_svg};
use crate::{
	model::{Preview, Selection},
	node::{Element, Node},
	view::Producer,
};

/// One linked list item per recipe, highlighted while its recipe is the [`Selection`].
#[derive(Debug, Clone, Default)]
pub struct PreviewMarkup {
	selection: Selection,
}

impl PreviewMarkup {
	#[must_use]
	pub fn new(selection: Selection) -> Self {
		Self { selection }
	}

	#[must_use]
	pub fn selection(&self) -> &Selection {
		&self.selection
	}
}

impl Producer for PreviewMarkup {
	type Entity = Preview;

	fn produce(&self, preview: &Preview) -> Node {
		let link = Element::new("a")
			.attr("class", class_list("preview__link", "preview__link--active", self.selection.is(&preview.id)))
			.attr("href", format!("#{}", preview.id))
			.child(Element::new("figure").attr("class", "preview__fig").child(Element::new("img").attr("src", &preview.image).attr("alt", &preview.title)))
			.child(
				Element::new("div")
					.attr("class", "preview__data")
					.child(Element::new("h4").attr("class", "preview__title").text(&preview.title))
					.child(Element::new("p").attr("class", "preview__publisher").text(&preview.publisher))
					.child(
						Element::new("div")
							.attr("class", class_list("preview__user-generated", "hidden", preview.key.is_none()))
							.child(icon_svg("user")),
					),
			);

		Element::new("li").attr("class", "preview").child(link).into()
	}
}
