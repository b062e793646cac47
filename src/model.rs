//! Entities the recipe views render.
//!
//! Field names follow the recipe API's JSON, so responses deserialize directly.

use crate::{config::RESULTS_PER_PAGE, view::Entity};
use core::cell::RefCell;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
	pub id: String,
	pub title: String,
	pub publisher: String,
	pub source_url: String,
	#[serde(rename = "image_url")]
	pub image: String,
	pub servings: u32,
	pub cooking_time: u32,
	#[serde(default)]
	pub ingredients: Vec<Ingredient>,
	/// Present on user-uploaded recipes only.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub key: Option<String>,
	#[serde(default)]
	pub bookmarked: bool,
}

impl Entity for Recipe {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
	pub quantity: Option<f64>,
	#[serde(default)]
	pub unit: String,
	pub description: String,
}

/// The short form of a recipe shown in result and bookmark lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
	pub id: String,
	pub title: String,
	pub publisher: String,
	#[serde(rename = "image_url")]
	pub image: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub key: Option<String>,
}

impl Entity for Preview {}

impl From<&Recipe> for Preview {
	fn from(recipe: &Recipe) -> Self {
		Self {
			id: recipe.id.clone(),
			title: recipe.title.clone(),
			publisher: recipe.publisher.clone(),
			image: recipe.image.clone(),
			key: recipe.key.clone(),
		}
	}
}

/// A search query with all its results and the page currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Search {
	#[serde(default)]
	pub query: String,
	pub results: Vec<Preview>,
	/// 1-based.
	#[serde(default = "first_page")]
	pub page: usize,
	#[serde(default = "results_per_page")]
	pub results_per_page: usize,
}

fn first_page() -> usize {
	1
}

fn results_per_page() -> usize {
	RESULTS_PER_PAGE
}

impl Search {
	#[must_use]
	pub fn new(query: impl Into<String>, results: Vec<Preview>) -> Self {
		Self {
			query: query.into(),
			results,
			page: 1,
			results_per_page: RESULTS_PER_PAGE,
		}
	}

	#[must_use]
	pub fn with_page(self, page: usize) -> Self {
		Self { page, ..self }
	}

	/// `ceil(results / results_per_page)`, or 0 if the page size is 0.
	#[must_use]
	pub fn page_count(&self) -> usize {
		match self.results_per_page {
			0 => 0,
			per_page => self.results.len().div_ceil(per_page),
		}
	}

	/// The results on the current page. Out-of-range pages are empty.
	#[must_use]
	pub fn page_window(&self) -> &[Preview] {
		let len = self.results.len();
		let start = self.page.saturating_sub(1).saturating_mul(self.results_per_page).min(len);
		let end = self.page.saturating_mul(self.results_per_page).min(len);
		&self.results[start..end]
	}
}

/// A search with no results can't be rendered.
impl Entity for Search {
	fn is_empty(&self) -> bool {
		self.results.is_empty()
	}
}

/// The id of the recipe currently open, shared between whoever routes and the views that highlight it.
#[derive(Debug, Clone, Default)]
pub struct Selection(Rc<RefCell<Option<String>>>);

impl Selection {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set(&self, id: Option<String>) {
		*self.0.borrow_mut() = id;
	}

	#[must_use]
	pub fn get(&self) -> Option<String> {
		self.0.borrow().clone()
	}

	#[must_use]
	pub fn is(&self, id: &str) -> bool {
		self.0.borrow().as_deref() == Some(id)
	}
}
