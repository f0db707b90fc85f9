//! The fixed-size field of pulsing background stars.

use rand::Rng;

use super::particles::{AmbientStar, Particle};
use super::surface::Surface;
use super::viewport::Viewport;

/// Background star population.
///
/// The population is only ever replaced wholesale; its length stays at the
/// count passed to the last [`AmbientField::initialize`].
#[derive(Clone, Debug, Default)]
pub struct AmbientField {
	stars: Vec<AmbientStar>,
	generation: u64,
}

impl AmbientField {
	/// Discard every star and sample `count` new ones over `viewport`.
	pub fn initialize<R: Rng + ?Sized>(&mut self, count: usize, viewport: Viewport, rng: &mut R) {
		self.stars = (0..count)
			.map(|_| AmbientStar::sample(rng, viewport))
			.collect();
		self.generation += 1;
	}

	/// Pulse and paint every star. The caller clears the surface first.
	pub fn advance_all(&mut self, surface: &mut dyn Surface) {
		for star in &mut self.stars {
			star.advance();
			star.render(surface);
		}
	}

	pub fn stars(&self) -> &[AmbientStar] {
		&self.stars
	}

	pub fn len(&self) -> usize {
		self.stars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stars.is_empty()
	}

	/// Number of times the population has been rebuilt.
	pub fn generation(&self) -> u64 {
		self.generation
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::super::particles::AMBIENT_MAX_DELTA;
	use super::super::surface::testing::RecordingSurface;
	use super::*;

	#[test]
	fn initialize_sets_exact_count() {
		let mut rng = StdRng::seed_from_u64(1);
		let mut field = AmbientField::default();
		assert!(field.is_empty());

		field.initialize(200, Viewport::new(800, 600), &mut rng);
		assert_eq!(field.len(), 200);

		let mut surface = RecordingSurface::default();
		for _ in 0..50 {
			field.advance_all(&mut surface);
		}
		assert_eq!(field.len(), 200);
		assert_eq!(surface.circle_count(), 200 * 50);

		field.initialize(12, Viewport::new(800, 600), &mut rng);
		assert_eq!(field.len(), 12);
		assert_eq!(field.generation(), 2);
	}

	#[test]
	fn stars_paint_at_their_own_position() {
		let mut rng = StdRng::seed_from_u64(3);
		let mut field = AmbientField::default();
		field.initialize(5, Viewport::new(100, 100), &mut rng);

		let mut surface = RecordingSurface::default();
		field.advance_all(&mut surface);
		for (star, (x, y, radius, _)) in field.stars().iter().zip(surface.circles()) {
			assert_eq!((star.x, star.y, star.radius), (x, y, radius));
		}
	}

	proptest! {
		#[test]
		fn alpha_never_leaves_the_bounce_band(seed in any::<u64>(), frames in 1usize..400) {
			let mut rng = StdRng::seed_from_u64(seed);
			let mut field = AmbientField::default();
			field.initialize(20, Viewport::new(64, 64), &mut rng);
			let mut surface = RecordingSurface::default();
			for _ in 0..frames {
				field.advance_all(&mut surface);
				surface.ops.clear();
			}
			for star in field.stars() {
				prop_assert!(star.alpha >= -AMBIENT_MAX_DELTA - 1e-9);
				prop_assert!(star.alpha <= 1.0 + AMBIENT_MAX_DELTA + 1e-9);
			}
		}
	}
}
