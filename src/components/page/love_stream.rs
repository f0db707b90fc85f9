//! Short phrases that fade in and out near the corners of the screen.
//!
//! A new phrase is tried every 900 ms, plus a staggered burst at startup.
//! Each one lives for a single CSS animation and is dropped when it ends.

use std::time::Duration;

use leptos::prelude::*;
use log::warn;
use rand::Rng;

use super::layout::Rect;
use crate::components::starfield::viewport::Viewport;

pub const LOVE_PHRASES: [&str; 14] = [
	"사랑해",
	"사랑합니다",
	"사랑해요",
	"愛してる",
	"大好き",
	"我爱你",
	"愛你",
	"รักเธอ",
	"ฉันรักคุณ",
	"Te amo",
	"Kaluguran daka",
	"Anh yêu em",
	"Em yêu anh",
	"Mahal kita",
];

const PADDING: f64 = 24.0;
const CORNER_FRACTION: f64 = 0.28;
const MIN_CORNER: f64 = 120.0;
const OVERLAP_MARGIN: f64 = 16.0;
const PLACEMENT_ATTEMPTS: usize = 12;
const VERTICAL_CHANCE: f64 = 0.35;
/// Viewport area per allowed phrase.
const AREA_PER_TEXT: f64 = 120_000.0;
const MIN_TEXTS: usize = 6;
/// Layout box of one glyph; phrases are measured as a single line of these.
const GLYPH_SIZE: f64 = 20.0;

const SPAWN_INTERVAL: Duration = Duration::from_millis(900);
const STARTUP_BURST: u64 = 6;
const STARTUP_STAGGER_MS: u64 = 300;

/// How many phrases may be on screen at once.
pub fn max_texts(width: f64, height: f64) -> usize {
	MIN_TEXTS.max((width * height / AREA_PER_TEXT).floor() as usize)
}

/// One phrase on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingText {
	pub id: u64,
	pub phrase: &'static str,
	pub vertical: bool,
	pub x: f64,
	pub y: f64,
	/// Animation length in seconds.
	pub duration: f64,
}

impl FloatingText {
	fn size(phrase: &str, vertical: bool) -> (f64, f64) {
		let length = phrase.chars().count() as f64 * GLYPH_SIZE;
		if vertical {
			(GLYPH_SIZE, length)
		} else {
			(length, GLYPH_SIZE)
		}
	}

	pub fn bounds(&self) -> Rect {
		let (w, h) = Self::size(self.phrase, self.vertical);
		Rect::at(self.x, self.y, w, h)
	}

	pub fn class(&self) -> &'static str {
		if self.vertical { "love-text vertical" } else { "love-text" }
	}

	pub fn style(&self) -> String {
		format!(
			"left: {:.1}px; top: {:.1}px; animation-duration: {:.2}s;",
			self.x, self.y, self.duration
		)
	}
}

/// Pick a phrase and a free spot in one of the four corner regions.
///
/// Returns `None` when the screen already holds [`max_texts`] phrases. After
/// twelve spots that all crowd an existing phrase, the text goes to the
/// top-left padding corner.
pub fn spawn_text<R: Rng + ?Sized>(
	rng: &mut R,
	width: f64,
	height: f64,
	existing: &[Rect],
	id: u64,
) -> Option<FloatingText> {
	if existing.len() >= max_texts(width, height) {
		return None;
	}

	let phrase = LOVE_PHRASES[rng.gen_range(0..LOVE_PHRASES.len())];
	let vertical = rng.gen_range(0.0..1.0) < VERTICAL_CHANCE;
	let (w, h) = FloatingText::size(phrase, vertical);
	let corner_w = MIN_CORNER.max(width * CORNER_FRACTION);
	let corner_h = MIN_CORNER.max(height * CORNER_FRACTION);

	let spot = (0..PLACEMENT_ATTEMPTS)
		.map(|_| {
			let left = rng.gen_range(0..2) == 0;
			let top = rng.gen_range(0..2) == 0;
			let x = if left {
				rng.gen_range(0.0..corner_w) + PADDING
			} else {
				width - corner_w + rng.gen_range(0.0..corner_w) - PADDING
			};
			let y = if top {
				rng.gen_range(0.0..corner_h) + PADDING
			} else {
				height - corner_h + rng.gen_range(0.0..corner_h) - PADDING
			};
			(x, y)
		})
		.find(|&(x, y)| {
			let bounds = Rect::at(x, y, w, h);
			existing.iter().all(|other| bounds.clears(other, OVERLAP_MARGIN))
		})
		.unwrap_or((PADDING, PADDING));

	Some(FloatingText {
		id,
		phrase,
		vertical,
		x: spot.0,
		y: spot.1,
		duration: rng.gen_range(5.5..7.5),
	})
}

/// Full-screen layer of drifting phrases.
#[component]
pub fn LoveStream() -> impl IntoView {
	let texts = RwSignal::new(Vec::<FloatingText>::new());
	let next_id = StoredValue::new(0u64);

	let spawn = move || {
		let Some(window) = web_sys::window() else {
			return;
		};
		let viewport = match Viewport::from_window(&window) {
			Ok(viewport) => viewport,
			Err(e) => {
				warn!("starfield-page: phrase skipped: {}", e);
				return;
			}
		};
		let existing: Vec<Rect> =
			texts.with_untracked(|t| t.iter().map(FloatingText::bounds).collect());
		let id = next_id.get_value();
		let spawned = spawn_text(
			&mut rand::thread_rng(),
			viewport.width as f64,
			viewport.height as f64,
			&existing,
			id,
		);
		if let Some(text) = spawned {
			next_id.set_value(id + 1);
			texts.update(|t| t.push(text));
		}
	};

	set_interval(spawn, SPAWN_INTERVAL);
	for i in 0..STARTUP_BURST {
		set_timeout(spawn, Duration::from_millis(i * STARTUP_STAGGER_MS));
	}

	view! {
		<div class="love-stream" aria-hidden="true">
			<For
				each=move || texts.get()
				key=|text| text.id
				children=move |text: FloatingText| {
					let id = text.id;
					view! {
						<span
							class=text.class()
							style=text.style()
							on:animationend=move |_| texts.update(|t| t.retain(|x| x.id != id))
						>
							{text.phrase}
						</span>
					}
				}
			/>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn limit_scales_with_area() {
		assert_eq!(max_texts(800.0, 600.0), 6);
		assert_eq!(max_texts(1920.0, 1080.0), 17);
		assert_eq!(max_texts(0.0, 0.0), 6);
	}

	#[test]
	fn full_screen_spawns_nothing() {
		let mut rng = StdRng::seed_from_u64(1);
		let crowd = vec![Rect::at(0.0, 0.0, 1.0, 1.0); 6];
		assert_eq!(spawn_text(&mut rng, 800.0, 600.0, &crowd, 0), None);
		assert!(spawn_text(&mut rng, 800.0, 600.0, &crowd[..5], 0).is_some());
	}

	#[test]
	fn crowded_screen_falls_back_to_the_corner() {
		let mut rng = StdRng::seed_from_u64(2);
		let cover = [Rect::at(-100.0, -100.0, 2000.0, 2000.0)];
		let text = spawn_text(&mut rng, 800.0, 600.0, &cover, 3).unwrap();
		assert_eq!((text.x, text.y), (PADDING, PADDING));
		assert_eq!(text.id, 3);
	}

	#[test]
	fn style_and_class() {
		let text = FloatingText {
			id: 0,
			phrase: "Te amo",
			vertical: true,
			x: 30.0,
			y: 40.5,
			duration: 6.0,
		};
		assert_eq!(text.class(), "love-text vertical");
		assert_eq!(text.style(), "left: 30.0px; top: 40.5px; animation-duration: 6.00s;");
		assert_eq!(text.bounds(), Rect::at(30.0, 40.5, GLYPH_SIZE, 6.0 * GLYPH_SIZE));
	}

	proptest! {
		#[test]
		fn placed_text_keeps_clear_of_others(seed in any::<u64>(), taken in 0usize..6) {
			let mut rng = StdRng::seed_from_u64(seed);
			let (width, height) = (1024.0, 768.0);
			let mut existing = Vec::new();
			for id in 0..taken as u64 {
				if let Some(text) = spawn_text(&mut rng, width, height, &existing, id) {
					existing.push(text.bounds());
				}
			}
			let Some(text) = spawn_text(&mut rng, width, height, &existing, 99) else {
				return Err(TestCaseError::fail("below the limit but nothing spawned"));
			};
			let bounds = text.bounds();
			let in_fallback = (text.x, text.y) == (PADDING, PADDING);
			prop_assert!(
				in_fallback || existing.iter().all(|other| bounds.clears(other, OVERLAP_MARGIN))
			);
			prop_assert!((5.5..7.5).contains(&text.duration));

			let corner_w = MIN_CORNER.max(width * CORNER_FRACTION);
			let left_band = PADDING..corner_w + PADDING;
			let right_band = width - corner_w - PADDING..width - PADDING;
			prop_assert!(left_band.contains(&text.x) || right_band.contains(&text.x));
		}
	}
}
