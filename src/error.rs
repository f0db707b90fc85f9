//! Crate-wide error type for browser glue.
//!
//! The particle core never fails; everything here comes from talking to the
//! DOM, storage, or parsing configuration.

use wasm_bindgen::JsValue;

/// Errors raised while wiring the page to the browser.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("no global window")]
	NoWindow,
	#[error("window has no document")]
	NoDocument,
	#[error("element #{0} not found")]
	MissingElement(String),
	#[error("element #{0} is not a {1}")]
	WrongElement(String, &'static str),
	#[error("canvas has no 2d context")]
	MissingContext,
	#[error("local storage is unavailable")]
	StorageUnavailable,
	#[error("request for {0} failed with status {1}")]
	BadStatus(String, u16),
	#[error("invalid date: {0}")]
	InvalidDate(#[from] time::error::Parse),
	#[error("invalid utc offset: {0}")]
	InvalidOffset(#[from] time::error::ComponentRange),
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
	}
}

/// Result alias used by the browser-facing modules.
pub type Result<T> = std::result::Result<T, Error>;
