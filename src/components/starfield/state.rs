//! Starfield state: the three particle populations and the viewport they
//! live in.
//!
//! Created once when the component mounts. Pointer and resize handlers mutate
//! it between frames; the frame loop calls [`StarfieldState::frame`].

use rand::rngs::StdRng;

use super::ambient::AmbientField;
use super::particles::{CursorGlow, Particle};
use super::surface::Surface;
use super::theme::StarfieldConfig;
use super::trail::TrailEmitter;
use super::viewport::{Layers, Viewport};

pub struct StarfieldState {
	pub ambient: AmbientField,
	pub trail: TrailEmitter,
	pub cursor: CursorGlow,
	viewport: Viewport,
	config: StarfieldConfig,
	rng: StdRng,
}

impl StarfieldState {
	pub fn new(config: StarfieldConfig, viewport: Viewport, mut rng: StdRng) -> Self {
		let mut ambient = AmbientField::default();
		ambient.initialize(config.ambient_count, viewport, &mut rng);

		Self {
			ambient,
			trail: TrailEmitter::with_cap(config.max_trail_particles),
			cursor: CursorGlow::new(config.cursor_radius),
			viewport,
			config,
			rng,
		}
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	/// Move the halo and leave a burst of sparks behind it.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.cursor.move_to(x, y);
		self.trail.spawn(x, y, &mut self.rng);
	}

	/// Resize both layers and rebuild the background at the configured count.
	pub fn resize<S: Surface>(&mut self, viewport: Viewport, layers: &mut Layers<S>) {
		layers.sync(viewport);
		self.viewport = viewport;
		self.ambient
			.initialize(self.config.ambient_count, viewport, &mut self.rng);
	}

	/// One displayed frame: clear, pulse the stars, age the trail, draw the
	/// cursor.
	pub fn frame<S: Surface>(&mut self, layers: &mut Layers<S>) {
		layers.clear();
		self.ambient.advance_all(&mut layers.background);
		self.trail.advance_and_prune(&mut layers.foreground);
		self.cursor.render(&mut layers.foreground);
	}
}
