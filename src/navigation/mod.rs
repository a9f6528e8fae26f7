//! Navigation module
//!
//! Derives first/previous/next/last links for the current page.
//!
//! # Overview
//!
//! Links are produced from a `UriTemplate` holding a single `{page}`
//! placeholder. A configured `LinkPattern` is bound to each request's path
//! to produce that template. Previous/next are empty strings exactly at the
//! boundaries so templates can hide disabled controls with a plain emptiness
//! check.

mod builder;
mod template;

pub use builder::{build_navigation, NavigationLinks};
pub use template::{
    LinkPattern, UriTemplate, PAGE_PLACEHOLDER, PARAM_PLACEHOLDER, PATH_PLACEHOLDER,
};
