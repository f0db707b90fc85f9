//! Box geometry for keeping page widgets inside the viewport.

/// An axis-aligned box in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub left: f64,
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
}

impl Rect {
	pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			left: x,
			top: y,
			right: x + width,
			bottom: y + height,
		}
	}

	/// At least `margin` of empty space separates the two boxes on some axis.
	pub fn clears(&self, other: &Rect, margin: f64) -> bool {
		self.right + margin < other.left
			|| self.left - margin > other.right
			|| self.bottom + margin < other.top
			|| self.top - margin > other.bottom
	}
}

impl From<web_sys::DomRect> for Rect {
	fn from(rect: web_sys::DomRect) -> Self {
		Self {
			left: rect.left(),
			top: rect.top(),
			right: rect.right(),
			bottom: rect.bottom(),
		}
	}
}

/// Classes that flip a star's popup away from the viewport edges it would
/// cross. Vertical and horizontal flips combine; left and right do not.
pub fn edge_classes(rect: Rect, viewport_width: f64, padding: f64) -> Vec<&'static str> {
	let mut classes = Vec::new();
	if rect.top < padding {
		classes.push("is-bottom");
	}
	if rect.right > viewport_width - padding {
		classes.push("is-right");
	} else if rect.left < padding {
		classes.push("is-left");
	}
	classes
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn popup_in_the_middle_keeps_its_place() {
		let rect = Rect::at(300.0, 200.0, 120.0, 40.0);
		assert!(edge_classes(rect, 800.0, 12.0).is_empty());
	}

	#[test]
	fn popup_near_the_top_drops_below() {
		let rect = Rect::at(300.0, 4.0, 120.0, 40.0);
		assert_eq!(edge_classes(rect, 800.0, 12.0), vec!["is-bottom"]);
	}

	#[test]
	fn horizontal_edges_flip_inward() {
		let right = Rect::at(700.0, 100.0, 120.0, 40.0);
		assert_eq!(edge_classes(right, 800.0, 12.0), vec!["is-right"]);

		let left = Rect::at(-30.0, 100.0, 120.0, 40.0);
		assert_eq!(edge_classes(left, 800.0, 12.0), vec!["is-left"]);

		let corner = Rect::at(-30.0, 0.0, 120.0, 40.0);
		assert_eq!(edge_classes(corner, 800.0, 12.0), vec!["is-bottom", "is-left"]);
	}

	#[test]
	fn too_wide_for_the_viewport_prefers_right() {
		let rect = Rect::at(-10.0, 100.0, 900.0, 40.0);
		assert_eq!(edge_classes(rect, 800.0, 12.0), vec!["is-right"]);
	}

	#[test]
	fn clearance_needs_the_full_margin() {
		let a = Rect::at(0.0, 0.0, 10.0, 10.0);
		assert!(a.clears(&Rect::at(27.0, 0.0, 10.0, 10.0), 16.0));
		assert!(!a.clears(&Rect::at(25.0, 0.0, 10.0, 10.0), 16.0));
		assert!(!a.clears(&Rect::at(5.0, 5.0, 10.0, 10.0), 16.0));
		assert!(a.clears(&Rect::at(0.0, 40.0, 10.0, 10.0), 16.0));
	}
}
