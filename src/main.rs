#![allow(non_snake_case)]

mod app;
mod assets;
mod components;
mod confetti;
mod screens;
mod theme;

use std::sync::OnceLock;

use dioxus::desktop::{Config, WindowBuilder};
use valentine_core::{FloatingHeart, HEART_FIELD_SIZE};

/// Confetti runtime injected into the webview head; the burst adapter in
/// `confetti.rs` calls the `confetti` global this script provides. If the
/// CDN is unreachable the global never appears and bursts silently no-op.
const CONFETTI_SCRIPT: &str = r#"<script src="https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js"></script>"#;

/// Ambient heart decoration, generated once per process
static HEART_FIELD: OnceLock<Vec<FloatingHeart>> = OnceLock::new();

/// Get the ambient heart field (generated at startup)
pub fn heart_field() -> &'static [FloatingHeart] {
    HEART_FIELD.get_or_init(|| FloatingHeart::drift_field(HEART_FIELD_SIZE))
}

fn main() {
    tracing_subscriber::fmt::init();

    // Generate the drifting hearts once, up front; components only ever
    // read this as an immutable slice.
    let _ = HEART_FIELD.set(FloatingHeart::drift_field(HEART_FIELD_SIZE));

    tracing::info!("starting the valentine card");

    let config = Config::new()
        .with_custom_head(CONFETTI_SCRIPT.to_string())
        .with_window(
            WindowBuilder::new()
                .with_title("Will you be my Valentine?")
                .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 850.0))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
