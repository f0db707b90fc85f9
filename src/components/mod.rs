//! Leptos components making up the page.

pub mod page;
pub mod starfield;
