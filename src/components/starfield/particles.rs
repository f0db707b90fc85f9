//! The three particle kinds: background stars, trail sparks and the cursor
//! halo.

use rand::Rng;

use super::surface::{Fill, RadialGradient, Surface};
use super::theme::{Color, Hsla};
use super::viewport::Viewport;

/// A drawable point that ages one displayed frame at a time.
///
/// Implementations read and write only their own fields, so a population can
/// be advanced in any order.
pub trait Particle {
	/// Step time-dependent fields by one frame.
	fn advance(&mut self);
	/// Paint the current state.
	fn render(&self, surface: &mut dyn Surface);
}

/// Largest per-frame alpha step of a background star.
pub const AMBIENT_MAX_DELTA: f64 = 0.02;

/// A background star pulsing between transparent and opaque forever.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientStar {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub alpha: f64,
	/// Signed alpha step per frame.
	pub delta: f64,
}

impl AmbientStar {
	/// Sample a star anywhere inside the viewport.
	pub fn sample<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
		Self {
			x: rng.gen_range(0.0..1.0) * viewport.width as f64,
			y: rng.gen_range(0.0..1.0) * viewport.height as f64,
			radius: rng.gen_range(0.5..=2.0),
			alpha: rng.gen_range(0.0..1.0),
			delta: rng.gen_range(0.0..=AMBIENT_MAX_DELTA),
		}
	}
}

impl Particle for AmbientStar {
	fn advance(&mut self) {
		self.alpha += self.delta;
		// Bounce rather than clamp; alpha may overshoot by one step.
		if self.alpha <= 0.0 || self.alpha >= 1.0 {
			self.delta = -self.delta;
		}
	}

	fn render(&self, surface: &mut dyn Surface) {
		let fill = Fill::Solid(Color::WHITE.with_alpha(self.alpha).to_css());
		surface.fill_circle(self.x, self.y, self.radius, &fill);
	}
}

/// Per-frame radius multiplier of a trail spark.
pub const TRAIL_SHRINK: f64 = 0.97;
/// Sparks below this radius are culled.
pub const TRAIL_MIN_RADIUS: f64 = 0.2;
/// Maximum distance of a new spark from the pointer on each axis.
pub const TRAIL_JITTER: f64 = 5.0;

const TRAIL_SATURATION: f64 = 100.0;
const TRAIL_LIGHTNESS: f64 = 80.0;

/// A short-lived spark left behind by the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailSpark {
	pub x: f64,
	pub y: f64,
	pub dx: f64,
	pub dy: f64,
	pub radius: f64,
	pub alpha: f64,
	/// Alpha lost per frame.
	pub fade: f64,
	/// Hue in degrees, fixed for the spark's life.
	pub hue: f64,
}

impl TrailSpark {
	/// Sample a fully opaque spark near `(x, y)`.
	pub fn sample<R: Rng + ?Sized>(rng: &mut R, x: f64, y: f64) -> Self {
		Self {
			x: x + rng.gen_range(-TRAIL_JITTER..TRAIL_JITTER),
			y: y + rng.gen_range(-TRAIL_JITTER..TRAIL_JITTER),
			dx: rng.gen_range(-0.5..0.5),
			dy: rng.gen_range(-0.5..0.5),
			radius: rng.gen_range(1.5..4.5),
			alpha: 1.0,
			fade: rng.gen_range(0.01..0.04),
			hue: rng.gen_range(200.0..250.0),
		}
	}

	/// Faded out or shrunk to nothing.
	pub fn is_spent(&self) -> bool {
		self.alpha <= 0.0 || self.radius < TRAIL_MIN_RADIUS
	}

	pub fn color(&self) -> Hsla {
		Hsla {
			h: self.hue,
			s: TRAIL_SATURATION,
			l: TRAIL_LIGHTNESS,
			a: self.alpha,
		}
	}
}

impl Particle for TrailSpark {
	fn advance(&mut self) {
		self.x += self.dx;
		self.y += self.dy;
		self.alpha -= self.fade;
		self.radius *= TRAIL_SHRINK;
	}

	fn render(&self, surface: &mut dyn Surface) {
		let fill = Fill::Solid(self.color().to_css());
		surface.fill_circle(self.x, self.y, self.radius, &fill);
	}
}

/// The glowing halo that follows the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorGlow {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	/// Alpha at the centre of the halo.
	pub alpha: f64,
}

impl CursorGlow {
	pub fn new(radius: f64) -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			radius,
			alpha: 0.9,
		}
	}

	pub fn move_to(&mut self, x: f64, y: f64) {
		self.x = x;
		self.y = y;
	}

	fn gradient(&self) -> RadialGradient {
		RadialGradient {
			x: self.x,
			y: self.y,
			inner_radius: 0.0,
			outer_radius: self.radius,
			stops: vec![
				(0.0, Color::WHITE.with_alpha(self.alpha).to_css()),
				(0.5, Color::WHITE.with_alpha(0.4).to_css()),
				(1.0, Color::WHITE.with_alpha(0.0).to_css()),
			],
		}
	}
}

impl Particle for CursorGlow {
	/// The halo has no motion of its own.
	fn advance(&mut self) {}

	fn render(&self, surface: &mut dyn Surface) {
		surface.fill_circle(self.x, self.y, self.radius, &Fill::Radial(self.gradient()));
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::super::surface::testing::RecordingSurface;
	use super::*;

	fn star(alpha: f64, delta: f64) -> AmbientStar {
		AmbientStar {
			x: 1.0,
			y: 1.0,
			radius: 1.0,
			alpha,
			delta,
		}
	}

	#[test]
	fn ambient_star_bounces_off_upper_bound() {
		let mut s = star(0.99, 0.02);
		s.advance();
		assert!((s.alpha - 1.01).abs() < 1e-9);
		assert!(s.delta < 0.0, "delta flips on the crossing step");

		s.advance();
		assert!((s.alpha - 0.99).abs() < 1e-9, "alpha heads back down next step");
		assert!(s.delta < 0.0);
	}

	#[test]
	fn ambient_star_bounces_off_lower_bound() {
		let mut s = star(0.01, -0.02);
		s.advance();
		assert!(s.alpha < 0.0);
		assert!(s.delta > 0.0);
		s.advance();
		assert!(s.alpha > 0.0);
	}

	#[test]
	fn sampled_values_stay_in_range() {
		let mut rng = StdRng::seed_from_u64(7);
		let viewport = Viewport::new(640, 480);
		for _ in 0..500 {
			let s = AmbientStar::sample(&mut rng, viewport);
			assert!((0.0..640.0).contains(&s.x));
			assert!((0.0..480.0).contains(&s.y));
			assert!((0.5..=2.0).contains(&s.radius));
			assert!((0.0..1.0).contains(&s.alpha));
			assert!((0.0..=AMBIENT_MAX_DELTA).contains(&s.delta));

			let t = TrailSpark::sample(&mut rng, 100.0, 100.0);
			assert!((95.0..=105.0).contains(&t.x));
			assert!((95.0..=105.0).contains(&t.y));
			assert!((1.5..4.5).contains(&t.radius));
			assert!((0.01..0.04).contains(&t.fade));
			assert!((200.0..250.0).contains(&t.hue));
			assert_eq!(t.alpha, 1.0);
		}
	}

	#[test]
	fn trail_spark_moves_fades_and_shrinks() {
		let mut t = TrailSpark {
			x: 10.0,
			y: 10.0,
			dx: 0.5,
			dy: -0.25,
			radius: 2.0,
			alpha: 1.0,
			fade: 0.03,
			hue: 220.0,
		};
		t.advance();
		assert_eq!((t.x, t.y), (10.5, 9.75));
		assert!((t.alpha - 0.97).abs() < 1e-9);
		assert!((t.radius - 1.94).abs() < 1e-9);
		assert!(!t.is_spent());

		t.radius = 0.19;
		assert!(t.is_spent());
	}

	#[test]
	fn cursor_paints_a_gradient_at_its_position() {
		let mut cursor = CursorGlow::new(8.0);
		cursor.move_to(30.0, 40.0);
		cursor.advance();

		let mut surface = RecordingSurface::default();
		cursor.render(&mut surface);

		let (x, y, radius, fill) = surface.circles().next().unwrap();
		assert_eq!((x, y, radius), (30.0, 40.0, 8.0));
		let Fill::Radial(gradient) = fill else {
			panic!("expected a radial fill, got {:?}", fill);
		};
		assert_eq!((gradient.x, gradient.y), (30.0, 40.0));
		assert_eq!(gradient.outer_radius, 8.0);
		assert_eq!(gradient.stops.last().unwrap().1, "rgba(255,255,255,0)");
	}
}
