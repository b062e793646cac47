#![doc(html_root_url = "https://docs.rs/forkify-dom/0.1.0")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Data-driven views for the Forkify recipe browser.
//!
//! A [`View`](`view::View`) owns one [`MountPoint`](`mount::MountPoint`) and renders entities into it through a [`Producer`](`view::Producer`).
//! On [`update`](`view::View::update`) the new tree is [reconciled](`reconcile::reconcile`) against the one currently shown,
//! and only changed text and attributes are written, as long as the tree's shape is stable.

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod config;
pub mod load;
pub mod model;
pub mod mount;
pub mod node;
pub mod reconcile;
pub mod trigger;
pub mod view;
pub mod views;
pub mod web;
