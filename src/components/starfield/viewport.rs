//! Viewport bookkeeping shared by the two drawing layers.

use web_sys::Window;

use super::surface::Surface;
use crate::error::{Error, Result};

/// Current drawable area in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
	pub width: u32,
	pub height: u32,
}

impl Viewport {
	pub const fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	/// Read `innerWidth`/`innerHeight` from the host window.
	pub fn from_window(window: &Window) -> Result<Self> {
		let width = window
			.inner_width()?
			.as_f64()
			.ok_or_else(|| Error::Js("innerWidth is not a number".into()))?;
		let height = window
			.inner_height()?
			.as_f64()
			.ok_or_else(|| Error::Js("innerHeight is not a number".into()))?;
		Ok(Self::new(width as u32, height as u32))
	}
}

/// The background (stars) and foreground (trail and cursor) surfaces.
///
/// Both layers always carry the pixel size of the last synced viewport.
pub struct Layers<S: Surface> {
	pub background: S,
	pub foreground: S,
	viewport: Viewport,
}

impl<S: Surface> Layers<S> {
	pub fn new(background: S, foreground: S, viewport: Viewport) -> Self {
		let mut layers = Self {
			background,
			foreground,
			viewport,
		};
		layers.sync(viewport);
		layers
	}

	/// Resize both surfaces to `viewport`.
	pub fn sync(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.background.resize(viewport.width, viewport.height);
		self.foreground.resize(viewport.width, viewport.height);
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	/// Clear both surfaces over the whole viewport.
	pub fn clear(&mut self) {
		let (w, h) = (self.viewport.width as f64, self.viewport.height as f64);
		self.background.clear(w, h);
		self.foreground.clear(w, h);
	}
}

#[cfg(test)]
mod tests {
	use super::super::surface::testing::{Op, RecordingSurface};
	use super::*;

	#[test]
	fn layers_follow_the_viewport() {
		let mut layers = Layers::new(
			RecordingSurface::default(),
			RecordingSurface::default(),
			Viewport::new(800, 600),
		);
		assert_eq!((layers.background.width, layers.background.height), (800, 600));
		assert_eq!((layers.foreground.width, layers.foreground.height), (800, 600));

		layers.sync(Viewport::new(1024, 768));
		layers.clear();
		assert_eq!(layers.viewport(), Viewport::new(1024, 768));
		assert_eq!(layers.foreground.width, 1024);
		assert_eq!(layers.background.ops.last(), Some(&Op::Clear(1024.0, 768.0)));
	}
}
