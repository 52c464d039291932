//! Sub-gift: the blooming bouquet.

use dioxus::prelude::*;
use valentine_ui::{ButtonVariant, PixelButton, RoseBouquet};

use crate::assets;

struct LoveWord {
    text: &'static str,
    left: &'static str,
    top: &'static str,
    delay: &'static str,
}

/// Captions floating around the bouquet at fixed positions.
const LOVE_WORDS: [LoveWord; 6] = [
    LoveWord { text: "I Love You", left: "10%", top: "20%", delay: "1s" },
    LoveWord { text: "Forever & Always", left: "70%", top: "15%", delay: "2.5s" },
    LoveWord { text: "My Player 2", left: "15%", top: "70%", delay: "4s" },
    LoveWord { text: "You're my favorite", left: "65%", top: "65%", delay: "5.5s" },
    LoveWord { text: "Level Up!", left: "40%", top: "10%", delay: "7s" },
    LoveWord { text: "Be Mine", left: "80%", top: "40%", delay: "3s" },
];

/// Bouquet reveal with drifting captions and a back edge to the gallery.
#[component]
pub fn RoseReveal(on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "screen reveal-screen",
            PixelButton {
                variant: ButtonVariant::Secondary,
                class: "back-btn".to_string(),
                onclick: move |_| on_back.call(()),
                "\u{2190} BACK"
            }

            for (i, word) in LOVE_WORDS.iter().enumerate() {
                span {
                    key: "{i}",
                    class: "love-word",
                    style: "left: {word.left}; top: {word.top}; animation-delay: {word.delay};",
                    "{word.text}"
                }
            }

            div { class: "reveal-centerpiece screen-enter-slow",
                RoseBouquet { rose_href: assets::ROSE_SPRITE.to_string() }
            }
        }
    }
}
