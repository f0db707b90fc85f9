//! Page widgets layered over the starfield: the moon button with its
//! countdown, the unlock modal, the essay reader, the mail history, the debug
//! readout and the floating phrases.

mod component;
pub mod layout;
mod love_stream;
mod widgets;

pub use component::DailyMessages;
pub use love_stream::{FloatingText, LoveStream, max_texts, spawn_text};
