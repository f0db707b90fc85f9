//! Leptos component mounting the two starfield canvases.
//!
//! The component creates a background and a foreground canvas, listens for
//! pointer moves and resizes on the window, and starts a frame loop driven by
//! `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use super::frame_loop::{AnimationFrameScheduler, RenderLoop};
use super::state::StarfieldState;
use super::surface::CanvasSurface;
use super::theme::StarfieldConfig;
use super::viewport::{Layers, Viewport};
use crate::error::{Error, Result};

/// Everything the frame loop and event handlers share.
struct StarfieldContext {
	state: StarfieldState,
	layers: Layers<CanvasSurface>,
}

type Shared = Rc<RefCell<Option<StarfieldContext>>>;

/// Renders the animated star background and the pointer trail.
///
/// Both canvases are sized to the window and follow it on resize.
#[component]
pub fn Starfield(#[prop(optional)] config: StarfieldConfig) -> impl IntoView {
	let background_ref = NodeRef::<leptos::html::Canvas>::new();
	let foreground_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Shared = Rc::new(RefCell::new(None));
	let render_loop: Rc<RefCell<Option<RenderLoop>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let (Some(background), Some(foreground)) = (background_ref.get(), foreground_ref.get())
		else {
			return;
		};
		if context.borrow().is_some() {
			return;
		}

		let window = match web_sys::window().ok_or(Error::NoWindow) {
			Ok(window) => window,
			Err(e) => {
				error!("starfield-page: {}", e);
				return;
			}
		};
		let ctx = match mount(&window, background.into(), foreground.into(), config.clone()) {
			Ok(ctx) => ctx,
			Err(e) => {
				error!("starfield-page: starfield not started: {}", e);
				return;
			}
		};
		*context.borrow_mut() = Some(ctx);

		let context_move = context.clone();
		*pointer_cb.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut c) = *context_move.borrow_mut() {
				c.state
					.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
			}
		}));
		if let Some(ref cb) = *pointer_cb.borrow() {
			let _ = window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let context_resize = context.clone();
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let viewport = match Viewport::from_window(&win) {
				Ok(viewport) => viewport,
				Err(e) => {
					warn!("starfield-page: resize ignored: {}", e);
					return;
				}
			};
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				debug!(
					"starfield-page: resized to {}x{}",
					viewport.width, viewport.height
				);
				c.state.resize(viewport, &mut c.layers);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let context_frame = context.clone();
		let frames = RenderLoop::new(Rc::new(AnimationFrameScheduler), move || {
			if let Some(ref mut c) = *context_frame.borrow_mut() {
				c.state.frame(&mut c.layers);
			}
		});
		frames.start();
		*render_loop.borrow_mut() = Some(frames);
	});

	view! {
		<canvas node_ref=background_ref id="bg-stars" class="starfield-layer starfield-bg" />
		<canvas node_ref=foreground_ref id="trail-stars" class="starfield-layer starfield-trail" />
	}
}

/// Size both canvases to the window and seed the populations.
fn mount(
	window: &Window,
	background: HtmlCanvasElement,
	foreground: HtmlCanvasElement,
	config: StarfieldConfig,
) -> Result<StarfieldContext> {
	let viewport = Viewport::from_window(window)?;
	let layers = Layers::new(
		CanvasSurface::from_canvas(background)?,
		CanvasSurface::from_canvas(foreground)?,
		viewport,
	);
	let state = StarfieldState::new(config, viewport, StdRng::from_entropy());
	info!(
		"starfield-page: starfield {}x{} with {} stars",
		viewport.width,
		viewport.height,
		state.ambient.len()
	);
	Ok(StarfieldContext { state, layers })
}
