//! Page configuration read from the DOM.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::starfield::StarfieldConfig;
use crate::daily::DailyConfig;
use crate::error::{Error, Result};

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// All tunables of the page. Every field is optional in the JSON.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
	pub starfield: StarfieldConfig,
	pub daily: DailyConfig,
}

impl PageConfig {
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}
}

fn read_config_script() -> Result<Option<String>> {
	let window = web_sys::window().ok_or(Error::NoWindow)?;
	let document = window.document().ok_or(Error::NoDocument)?;
	let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
		return Ok(None);
	};
	let script: HtmlScriptElement = element
		.dyn_into()
		.map_err(|_| Error::WrongElement(CONFIG_ELEMENT_ID.to_string(), "script"))?;
	Ok(Some(script.text()?))
}

/// Load overrides from the config script element, falling back to defaults.
pub fn load_page_config() -> PageConfig {
	let json = match read_config_script() {
		Ok(Some(json)) => json,
		Ok(None) => return PageConfig::default(),
		Err(e) => {
			warn!("starfield-page: config unreadable, using defaults: {}", e);
			return PageConfig::default();
		}
	};

	match PageConfig::from_json(&json) {
		Ok(config) => {
			info!(
				"starfield-page: loaded config ({} stars, {} messages)",
				config.starfield.ambient_count, config.daily.total_messages
			);
			config
		}
		Err(e) => {
			warn!("starfield-page: failed to parse config: {}", e);
			PageConfig::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn empty_object_is_default() {
		assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
	}

	#[test]
	fn nested_overrides() {
		let config = PageConfig::from_json(
			r#"{ "starfield": { "ambient_count": 50 }, "daily": { "total_messages": 3, "essays_url": "notes.txt" } }"#,
		)
		.unwrap();
		assert_eq!(config.starfield.ambient_count, 50);
		assert_eq!(config.starfield.cursor_radius, 8.0);
		assert_eq!(config.daily.total_messages, 3);
		assert_eq!(config.daily.essays_url, "notes.txt");
		assert_eq!(config.daily.opened_key, "dailyMessageOpened");
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(matches!(
			PageConfig::from_json("{ nope"),
			Err(Error::Json(_))
		));
	}
}
