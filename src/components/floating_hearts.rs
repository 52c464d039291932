//! Ambient floating hearts behind every screen.

use dioxus::prelude::*;

use crate::assets;
use crate::heart_field;

/// Drifting heart layer.
///
/// Reads the process-wide heart field generated at startup; each heart gets
/// a negative animation delay so the sky is already populated on first
/// paint instead of starting empty.
#[component]
pub fn FloatingHearts() -> Element {
    rsx! {
        div { class: "heart-drift-layer", "aria-hidden": "true",
            for heart in heart_field() {
                div {
                    key: "{heart.id}",
                    class: "drift-heart",
                    style: "left: {heart.left}%; \
                        animation-duration: {heart.duration}s; \
                        animation-delay: -{heart.delay}s;",
                    img {
                        src: assets::FLOATING_HEART,
                        alt: "",
                        draggable: false,
                        style: "width: {heart.size}px; height: auto;",
                    }
                }
            }
        }
    }
}
