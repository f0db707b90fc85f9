//! Drawing surfaces the starfield layers paint onto.
//!
//! Particles only ever see the [`Surface`] trait; the browser implementation
//! wraps a canvas and its 2D context.

use std::f64::consts::TAU;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::error::{Error, Result};

/// A radial gradient between two concentric circles.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
	pub x: f64,
	pub y: f64,
	pub inner_radius: f64,
	pub outer_radius: f64,
	/// `(offset, css color)` pairs, offsets in `0.0..=1.0`.
	pub stops: Vec<(f64, String)>,
}

/// How a circle is filled.
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
	Solid(String),
	Radial(RadialGradient),
}

/// A 2D drawing surface.
pub trait Surface {
	/// Set the pixel size of the surface.
	fn resize(&mut self, width: u32, height: u32);
	/// Clear the rectangle `(0, 0, width, height)`.
	fn clear(&mut self, width: f64, height: f64);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &Fill);
}

/// A canvas element and its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self> {
		let ctx = canvas
			.get_context("2d")?
			.ok_or(Error::MissingContext)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| Error::MissingContext)?;
		Ok(Self { canvas, ctx })
	}

	/// Look up a `<canvas>` by id.
	pub fn by_id(document: &Document, id: &str) -> Result<Self> {
		let element = document
			.get_element_by_id(id)
			.ok_or_else(|| Error::MissingElement(id.to_string()))?;
		let canvas: HtmlCanvasElement = element
			.dyn_into()
			.map_err(|_| Error::WrongElement(id.to_string(), "canvas"))?;
		Self::from_canvas(canvas)
	}
}

impl Surface for CanvasSurface {
	fn resize(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &Fill) {
		match fill {
			Fill::Solid(color) => self.ctx.set_fill_style_str(color),
			Fill::Radial(g) => {
				let gradient = match self.ctx.create_radial_gradient(
					g.x,
					g.y,
					g.inner_radius,
					g.x,
					g.y,
					g.outer_radius,
				) {
					Ok(gradient) => gradient,
					Err(e) => {
						warn!("starfield-page: gradient rejected: {:?}", e);
						return;
					}
				};
				for (offset, color) in &g.stops {
					let _ = gradient.add_color_stop(*offset as f32, color);
				}
				#[allow(deprecated)]
				self.ctx.set_fill_style(&gradient);
			}
		}

		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
		self.ctx.fill();
	}
}
