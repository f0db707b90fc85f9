//! Message bodies shown when a daily message is opened.
//!
//! A built-in set is replaced at startup by a plain-text asset whose
//! messages are separated by `---` lines.

use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::{Error, Result};

const FALLBACK_ESSAYS: [&str; 8] = [
	"Some nights are quiet enough to hear the stars. This is one of them, and it is yours.",
	"Every small light up there is a day I get to be glad you exist.",
	"If the sky ran out of stars, I would still find my way by the sound of your laugh.",
	"Today is a good day to be gentle with yourself. The moon agrees.",
	"You turn ordinary evenings into something worth remembering.",
	"Whatever today asked of you, you were enough for it.",
	"There is a calm that arrives whenever I think of you. It stayed all day.",
	"Eight stars, eight days, and still not enough words. Thank you for being here.",
];

const ESSAY_IMAGES: [&str; 8] = [
	"Image.jpg",
	"Image1.jpg",
	"Image2.jpg",
	"Image3.jpg",
	"Image4.jpg",
	"Image5.gif",
	"Image6.jpg",
	"Image7.jpg",
];

/// A message ready to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Essay {
	pub text: String,
	pub image: Option<&'static str>,
}

/// Split raw text on `---` lines, dropping empty parts.
///
/// A separator needs a line break on both sides, so `---` on the very first
/// line, or on a last line with no trailing newline, stays part of the text.
pub fn parse_essays(raw: &str) -> Vec<String> {
	let lines: Vec<&str> = raw.split('\n').collect();
	let last = lines.len() - 1;
	let mut parts = Vec::new();
	let mut current: Vec<&str> = Vec::new();
	for (i, line) in lines.into_iter().enumerate() {
		let line = line.trim_end_matches('\r');
		if i > 0 && i < last && line.trim() == "---" {
			parts.push(current.join("\n"));
			current.clear();
		} else {
			current.push(line);
		}
	}
	parts.push(current.join("\n"));

	parts
		.into_iter()
		.map(|p| p.trim().to_string())
		.filter(|p| !p.is_empty())
		.collect()
}

/// The current set of message bodies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EssayBook {
	messages: Vec<String>,
}

impl Default for EssayBook {
	fn default() -> Self {
		Self {
			messages: FALLBACK_ESSAYS.iter().map(|s| s.to_string()).collect(),
		}
	}
}

impl EssayBook {
	/// Replace the messages with those parsed from `raw`. Text with no
	/// messages leaves the book unchanged. Returns the number loaded.
	pub fn replace_from(&mut self, raw: &str) -> usize {
		let parsed = parse_essays(raw);
		if !parsed.is_empty() {
			self.messages = parsed;
		}
		self.messages.len()
	}

	pub fn len(&self) -> usize {
		self.messages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}

	/// Message for a 1-based index. Past the end, the last message is reused
	/// without an image.
	pub fn essay_for(&self, index: u32) -> Essay {
		let slot = (index as usize).checked_sub(1);
		let text = slot
			.and_then(|i| self.messages.get(i))
			.or_else(|| self.messages.last())
			.cloned()
			.unwrap_or_default();
		let image = slot.and_then(|i| ESSAY_IMAGES.get(i)).copied();
		Essay { text, image }
	}
}

/// GET `url` and return the body as text.
pub async fn fetch_text(url: &str) -> Result<String> {
	let window = web_sys::window().ok_or(Error::NoWindow)?;
	let response: Response = JsFuture::from(window.fetch_with_str(url))
		.await?
		.dyn_into()?;
	if !response.ok() {
		return Err(Error::BadStatus(url.to_string(), response.status()));
	}
	let body = JsFuture::from(response.text()?).await?;
	let text = body
		.as_string()
		.ok_or_else(|| Error::Js(format!("{} did not return text", url)))?;
	info!("starfield-page: fetched {} ({} bytes)", url, text.len());
	Ok(text)
}
