//! Colours and tunables for the starfield layers.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
	}
}

/// HSL color with alpha, the native space of trail sparks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
	/// Hue in degrees.
	pub h: f64,
	/// Saturation in percent.
	pub s: f64,
	/// Lightness in percent.
	pub l: f64,
	pub a: f64,
}

impl Hsla {
	pub fn to_css(self) -> String {
		format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
	}
}

/// Starfield tunables, overridable from the page config.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
	/// Number of background stars; restored on every resize.
	pub ambient_count: usize,
	/// Hard cap on live trail sparks. `None` keeps the population unbounded.
	pub max_trail_particles: Option<usize>,
	/// Radius of the cursor halo.
	pub cursor_radius: f64,
}

impl Default for StarfieldConfig {
	fn default() -> Self {
		Self {
			ambient_count: 200,
			max_trail_particles: None,
			cursor_radius: 8.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_strings() {
		assert_eq!(Color::WHITE.with_alpha(0.5).to_css(), "rgba(255,255,255,0.5)");
		let spark = Hsla {
			h: 210.0,
			s: 100.0,
			l: 80.0,
			a: 0.25,
		};
		assert_eq!(spark.to_css(), "hsla(210, 100%, 80%, 0.25)");
	}

	#[test]
	fn partial_config_keeps_defaults() {
		let config: StarfieldConfig =
			serde_json::from_str(r#"{ "max_trail_particles": 500 }"#).unwrap();
		assert_eq!(config.ambient_count, 200);
		assert_eq!(config.max_trail_particles, Some(500));
	}
}
