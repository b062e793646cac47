//! Compile-time configuration.

/// Search results shown per page.
pub const RESULTS_PER_PAGE: usize = 10;

/// Path of the SVG sprite all `<use href="…#icon-…">` references point into.
pub const ICONS: &str = "img/icons.svg";

pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again!";
pub const DEFAULT_MESSAGE: &str = "";

/// `href` of the icon named `name` in [`ICONS`].
#[must_use]
pub fn icon(name: &str) -> String {
	format!("{}#icon-{}", ICONS, name)
}
