//! Sparks spawned by pointer motion, culled once they fade or shrink away.

use rand::Rng;

use super::particles::{Particle, TrailSpark};
use super::surface::Surface;

/// Fewest sparks spawned per pointer move.
pub const SPAWN_MIN: usize = 3;
/// Most sparks spawned per pointer move.
pub const SPAWN_MAX: usize = 7;

/// Population of live trail sparks, oldest first.
#[derive(Clone, Debug, Default)]
pub struct TrailEmitter {
	sparks: Vec<TrailSpark>,
	cap: Option<usize>,
}

impl TrailEmitter {
	pub fn with_cap(cap: Option<usize>) -> Self {
		Self {
			sparks: Vec::new(),
			cap,
		}
	}

	/// Spawn a burst of sparks around `(x, y)`. Returns how many were added.
	pub fn spawn<R: Rng + ?Sized>(&mut self, x: f64, y: f64, rng: &mut R) -> usize {
		let count = rng.gen_range(SPAWN_MIN..=SPAWN_MAX);
		self.sparks
			.extend((0..count).map(|_| TrailSpark::sample(rng, x, y)));
		self.enforce_cap();
		count
	}

	/// Add a single spark.
	pub fn push(&mut self, spark: TrailSpark) {
		self.sparks.push(spark);
		self.enforce_cap();
	}

	/// Advance and paint every spark newest to oldest, then drop the spent
	/// ones. Returns how many were removed.
	///
	/// Removal is a single compaction after the paint pass, so no spark is
	/// skipped and the survivors keep their relative order.
	pub fn advance_and_prune(&mut self, surface: &mut dyn Surface) -> usize {
		for spark in self.sparks.iter_mut().rev() {
			spark.advance();
			spark.render(surface);
		}
		let before = self.sparks.len();
		self.sparks.retain(|spark| !spark.is_spent());
		before - self.sparks.len()
	}

	pub fn sparks(&self) -> &[TrailSpark] {
		&self.sparks
	}

	pub fn len(&self) -> usize {
		self.sparks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sparks.is_empty()
	}

	// Oldest sparks go first.
	fn enforce_cap(&mut self) {
		if let Some(cap) = self.cap {
			if self.sparks.len() > cap {
				let excess = self.sparks.len() - cap;
				self.sparks.drain(..excess);
			}
		}
	}
}
