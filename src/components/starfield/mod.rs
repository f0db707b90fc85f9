//! Two-layer animated starfield.
//!
//! Paints, every displayed frame:
//! - a background layer of pulsing stars that never die,
//! - a foreground layer of sparks spawned by pointer motion that fade and
//!   shrink until culled,
//! - a glowing halo following the pointer, on top of the sparks.
//!
//! Motion constants are per displayed frame, so animation speed follows the
//! display's refresh rate.
//!
//! # Example
//!
//! ```ignore
//! use starfield_page::components::starfield::{Starfield, StarfieldConfig};
//!
//! view! { <Starfield config=StarfieldConfig::default() /> }
//! ```

mod ambient;
mod component;
pub mod frame_loop;
mod particles;
mod state;
pub mod surface;
pub mod theme;
mod trail;
pub mod viewport;

pub use ambient::AmbientField;
pub use component::Starfield;
pub use frame_loop::{AnimationFrameScheduler, FrameScheduler, LoopState, RenderLoop};
pub use particles::{AmbientStar, CursorGlow, Particle, TrailSpark};
pub use state::StarfieldState;
pub use theme::StarfieldConfig;
pub use trail::TrailEmitter;
