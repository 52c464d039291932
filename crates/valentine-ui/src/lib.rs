//! Valentine Card UI Components
//!
//! Dioxus components for the pixel-art valentine aesthetic:
//! - **PixelButton**: chunky bordered buttons in three variants
//! - **PixelHeart**: the blocky heart glyph used all over the card
//! - **RoseBouquet**: the procedurally laid-out blooming bouquet
//!
//! Components only reference CSS classes; the consuming app provides the
//! `pixel-*` and bouquet styles in its global stylesheet.

pub mod components;

pub use components::*;
