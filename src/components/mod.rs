//! Shared view components for the card.

mod floating_hearts;
mod music_control;
mod polaroid;

pub use floating_hearts::FloatingHearts;
pub use music_control::MusicControl;
pub use polaroid::{Polaroid, TapeTint};
