//! Reusable pixel-art components
//!
//! All components are stateless prop-to-markup mappings except the bouquet,
//! which owns its one-shot bloom timer.

mod bouquet;
mod button;
mod heart;

pub use bouquet::*;
pub use button::*;
pub use heart::*;
