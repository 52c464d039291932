//! The big question.

use dioxus::prelude::*;
use valentine_ui::{ButtonVariant, PixelButton, PixelHeart};

use crate::assets;
use crate::components::Polaroid;

/// Properties for the asking screen
#[derive(Clone, PartialEq, Props)]
pub struct AskingScreenProps {
    /// Headline copy (swaps after the first decline)
    pub prompt: String,
    /// Current escalation phrase for the decline button
    pub decline_label: String,
    /// Accept-button font size in px, grows with each decline
    pub accept_size: u32,
    /// Heart glyph size inside the accept button
    pub glyph_size: f32,
    /// Whether the portrait has swapped to the weepy one
    pub weepy: bool,
    pub on_accept: EventHandler<()>,
    pub on_decline: EventHandler<()>,
}

/// Portrait, headline and the ever-shifting yes/no pair.
#[component]
pub fn AskingScreen(props: AskingScreenProps) -> Element {
    let portrait = if props.weepy {
        assets::WEEPY_PORTRAIT
    } else {
        assets::PORTRAIT
    };

    rsx! {
        div { class: "screen asking-screen",
            div { class: "portrait-wrap",
                Polaroid {
                    img {
                        class: "portrait-img",
                        src: "{portrait}",
                        alt: "Cute visual",
                        draggable: false,
                    }
                    // Notification badge
                    div { class: "notification-badge",
                        PixelHeart { size: 32.0, color: "#ef4444".to_string() }
                        span { class: "badge-mark", "!" }
                    }
                }
            }

            h1 { class: "prompt-title", "{props.prompt}" }

            div { class: "choice-row",
                PixelButton {
                    variant: ButtonVariant::Primary,
                    style: format!("font-size: {}px;", props.accept_size),
                    onclick: move |_| props.on_accept.call(()),
                    "YES "
                    PixelHeart { size: props.glyph_size, class: "accept-glyph".to_string() }
                }
                PixelButton {
                    variant: ButtonVariant::Danger,
                    class: "decline-btn".to_string(),
                    onclick: move |_| props.on_decline.call(()),
                    "{props.decline_label}"
                }
            }
        }
    }
}
