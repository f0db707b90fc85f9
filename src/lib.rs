//! starfield-page: an animated starfield page with a pointer-reactive particle
//! trail and daily unlockable messages.
//!
//! The crate builds a client-side-rendered WASM app. The particle core lives
//! in [`components::starfield`] and only talks to the browser through the
//! [`components::starfield::surface::Surface`] and
//! [`components::starfield::FrameScheduler`] seams, so it runs natively under
//! test. Everything else is page glue.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Selects the JS entropy source for `rand` on wasm32.
use getrandom as _;

pub mod audio;
pub mod components;
pub mod config;
pub mod daily;
pub mod error;
pub mod storage;

pub use components::page::{DailyMessages, LoveStream};
pub use components::starfield::{Starfield, StarfieldConfig};
pub use config::{PageConfig, load_page_config};
pub use error::{Error, Result};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starfield-page: logging initialized");
}

/// Main application component.
/// Reads the page config from the DOM and layers the phrases and widgets
/// over the starfield.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_page_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Starfield" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="starfield-page">
			<Starfield config=config.starfield />
			<LoveStream />
			<DailyMessages config=config.daily />
		</div>
	}
}
