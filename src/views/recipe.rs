use super::{class_list, icon_svg};
use crate::{
	model::{Ingredient, Recipe},
	node::{Element, Node},
	view::Producer,
};

/// The full recipe: figure, details, ingredients and directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeMarkup;

impl RecipeMarkup {
	/// Reads the servings a clicked button asks for, given its `data-update-to` attribute.
	#[must_use]
	pub fn update_to(data_update_to: &str) -> Option<u32> {
		data_update_to.trim().parse().ok().filter(|&servings| servings > 0)
	}

	fn figure(recipe: &Recipe) -> Element {
		Element::new("figure")
			.attr("class", "recipe__fig")
			.child(Element::new("img").attr("src", &recipe.image).attr("alt", &recipe.title).attr("class", "recipe__img"))
			.child(Element::new("h1").attr("class", "recipe__title").child(Element::new("span").text(&recipe.title)))
	}

	fn info(icon: &str, modifier: &str, data: u32, label: &str) -> Element {
		Element::new("div")
			.attr("class", "recipe__info")
			.child(icon_svg(icon).attr("class", "recipe__info-icon"))
			.child(Element::new("span").attr("class", format!("recipe__info-data recipe__info-data--{}", modifier)).text(data.to_string()))
			.child(Element::new("span").attr("class", "recipe__info-text").text(label))
	}

	fn servings_button(update_to: u32, icon: &str) -> Element {
		Element::new("button")
			.attr("data-update-to", update_to.to_string())
			.attr("class", "btn--tiny btn--update-servings")
			.child(icon_svg(icon))
	}

	fn details(recipe: &Recipe) -> Element {
		let servings = Self::info("users", "people", recipe.servings, "servings").child(
			Element::new("div")
				.attr("class", "recipe__info-buttons")
				.child(Self::servings_button(recipe.servings.saturating_sub(1), "minus-circle"))
				.child(Self::servings_button(recipe.servings.saturating_add(1), "plus-circle")),
		);

		Element::new("div")
			.attr("class", "recipe__details")
			.child(Self::info("clock", "minutes", recipe.cooking_time, "minutes"))
			.child(servings)
			.child(Element::new("div").attr("class", class_list("recipe__user-generated", "hidden", recipe.key.is_none())).child(icon_svg("user")))
			.child(
				Element::new("button")
					.attr("class", "btn--round btn--bookmark")
					.child(icon_svg(if recipe.bookmarked { "bookmark-fill" } else { "bookmark" })),
			)
	}

	fn ingredient(ingredient: &Ingredient) -> Node {
		Element::new("li")
			.attr("class", "recipe__ingredient")
			.child(icon_svg("check").attr("class", "recipe__icon"))
			.child(Element::new("div").attr("class", "recipe__quantity").text(ingredient.quantity.map(format_quantity).unwrap_or_default()))
			.child(
				Element::new("div")
					.attr("class", "recipe__description")
					.child(Element::new("span").attr("class", "recipe__unit").text(&ingredient.unit))
					.text(format!(" {}", ingredient.description)),
			)
			.into()
	}

	fn ingredients(recipe: &Recipe) -> Element {
		Element::new("div")
			.attr("class", "recipe__ingredients")
			.child(Element::new("h2").attr("class", "heading--2").text("Recipe ingredients"))
			.child(Element::new("ul").attr("class", "recipe__ingredient-list").children(recipe.ingredients.iter().map(Self::ingredient)))
	}

	fn directions(recipe: &Recipe) -> Element {
		Element::new("div")
			.attr("class", "recipe__directions")
			.child(Element::new("h2").attr("class", "heading--2").text("How to cook it"))
			.child(
				Element::new("p")
					.attr("class", "recipe__directions-text")
					.text("This recipe was carefully designed and tested by ")
					.child(Element::new("span").attr("class", "recipe__publisher").text(&recipe.publisher))
					.text(". Please check out directions at their website."),
			)
			.child(
				Element::new("a")
					.attr("class", "btn--small recipe__btn")
					.attr("href", &recipe.source_url)
					.attr("target", "_blank")
					.child(Element::new("span").text("Directions"))
					.child(icon_svg("arrow-right").attr("class", "search__icon")),
			)
	}
}

impl Producer for RecipeMarkup {
	type Entity = Recipe;

	const ERROR_MESSAGE: &'static str = "We could not find that recipe. Please try another one!";

	fn produce(&self, recipe: &Recipe) -> Node {
		Element::new("div")
			.attr("class", "recipe__content")
			.child(Self::figure(recipe))
			.child(Self::details(recipe))
			.child(Self::ingredients(recipe))
			.child(Self::directions(recipe))
			.into()
	}
}

/// Formats an ingredient quantity as a whole number and/or the closest fraction with a denominator up to 16,
/// falling back to at most two decimals.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn format_quantity(quantity: f64) -> String {
	const TOLERANCE: f64 = 0.01;

	if !quantity.is_finite() || quantity < 0.0 {
		return decimal(quantity);
	}

	let mut whole = quantity.trunc() as u64;
	let fraction = quantity.fract();
	if fraction < TOLERANCE {
		return whole.to_string();
	}
	if 1.0 - fraction < TOLERANCE {
		whole += 1;
		return whole.to_string();
	}

	for denominator in 2..=16_u64 {
		let numerator = (fraction * denominator as f64).round();
		if (fraction - numerator / denominator as f64).abs() < TOLERANCE {
			let numerator = numerator as u64;
			return match whole {
				0 => format!("{}/{}", numerator, denominator),
				whole => format!("{} {}/{}", whole, numerator, denominator),
			};
		}
	}

	decimal(quantity)
}

fn decimal(quantity: f64) -> String {
	let formatted = format!("{:.2}", quantity);
	if formatted.contains('.') {
		formatted.trim_end_matches('0').trim_end_matches('.').to_owned()
	} else {
		formatted
	}
}
