//! Self-rescheduling frame loop over an injectable scheduler.
//!
//! In the browser frames are driven by `requestAnimationFrame`; tests drive
//! them by hand with a scheduler that queues callbacks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;

/// Something that can run a callback at the next display frame.
pub trait FrameScheduler {
	fn request_frame(&self, callback: Box<dyn FnOnce()>);
}

/// Schedules frames with `window.requestAnimationFrame`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationFrameScheduler;

impl FrameScheduler for AnimationFrameScheduler {
	fn request_frame(&self, callback: Box<dyn FnOnce()>) {
		let Some(window) = web_sys::window() else {
			warn!("starfield-page: no window, frame dropped");
			return;
		};
		let cb = Closure::once_into_js(move || callback());
		if let Err(e) = window.request_animation_frame(cb.unchecked_ref()) {
			warn!("starfield-page: requestAnimationFrame failed: {:?}", e);
		}
	}
}

/// Lifecycle of a [`RenderLoop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	/// Created, no frame run yet.
	Idle,
	/// Running a step every frame.
	Running,
	/// Stopped through [`RenderLoop::cancel`]; never restarts.
	Cancelled,
}

struct LoopShared {
	scheduler: Rc<dyn FrameScheduler>,
	step: RefCell<Box<dyn FnMut()>>,
	state: Cell<LoopState>,
	frames: Cell<u64>,
}

/// Handle to a frame loop. Cloning yields another handle to the same loop.
///
/// Pending frames keep the loop alive, so dropping every handle does not stop
/// it; only [`RenderLoop::cancel`] does.
#[derive(Clone)]
pub struct RenderLoop {
	shared: Rc<LoopShared>,
}

impl RenderLoop {
	pub fn new(scheduler: Rc<dyn FrameScheduler>, step: impl FnMut() + 'static) -> Self {
		Self {
			shared: Rc::new(LoopShared {
				scheduler,
				step: RefCell::new(Box::new(step)),
				state: Cell::new(LoopState::Idle),
				frames: Cell::new(0),
			}),
		}
	}

	/// Run the first frame now and keep rescheduling. No-op unless idle.
	pub fn start(&self) {
		if self.shared.state.get() != LoopState::Idle {
			return;
		}
		self.shared.state.set(LoopState::Running);
		tick(self.shared.clone());
	}

	/// Stop before the next frame runs.
	pub fn cancel(&self) {
		self.shared.state.set(LoopState::Cancelled);
	}

	pub fn state(&self) -> LoopState {
		self.shared.state.get()
	}

	/// Frames run so far.
	pub fn frames(&self) -> u64 {
		self.shared.frames.get()
	}
}

fn tick(shared: Rc<LoopShared>) {
	if shared.state.get() != LoopState::Running {
		return;
	}
	{
		let mut step = shared.step.borrow_mut();
		(*step)();
	}
	shared.frames.set(shared.frames.get() + 1);

	let next = shared.clone();
	shared
		.scheduler
		.request_frame(Box::new(move || tick(next)));
}
