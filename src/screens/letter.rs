//! Sub-gift: the letter.

use dioxus::prelude::*;
use valentine_ui::{ButtonVariant, PixelButton, PixelHeart};

use crate::assets;

/// Washi-taped paper sheet with the letter.
#[component]
pub fn LoveLetter(on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "screen letter-screen screen-enter",
            PixelButton {
                variant: ButtonVariant::Secondary,
                class: "back-btn".to_string(),
                onclick: move |_| on_back.call(()),
                "\u{2190} BACK"
            }

            div { class: "letter-sheet pixel-border",
                div { class: "letter-tape" }
                img {
                    class: "letter-stamp",
                    src: assets::LETTER_STAMP,
                    alt: "stamp",
                    draggable: false,
                }

                div { class: "letter-body-wrap",
                    p { class: "letter-salutation",
                        "To my player 2, co-op partner, and the highest score this heart has ever seen:"
                    }
                    p { class: "letter-body",
                        "Every save point with you feels like home. This past year has been the best campaign I've ever played, and you are the warm glow on every loading screen. I'm so glad you pressed yes today, and I plan on queueing up with you for every level that comes next."
                    }
                    p { class: "letter-signoff",
                        "I love you, always and forever."
                        br {}
                        br {}
                        span { class: "letter-signature", "~ Me" }
                    }
                }

                div { class: "letter-hearts",
                    PixelHeart { size: 16.0, color: "#f9a8d4".to_string() }
                    PixelHeart { size: 16.0, color: "#fca5a5".to_string() }
                }
            }
        }
    }
}
