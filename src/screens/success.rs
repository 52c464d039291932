//! She said yes.

use dioxus::prelude::*;
use valentine_ui::{ButtonVariant, PixelButton};

/// Celebration headline and the gift teaser.
#[component]
pub fn SuccessScreen(on_open_gift: EventHandler<()>) -> Element {
    rsx! {
        div { class: "screen success-screen screen-enter",
            h1 { class: "success-title pixel-border",
                "YAY!"
                br {}
                span { class: "success-subtitle", "I knew you'd say yes!" }
            }

            div { class: "gift-teaser",
                PixelButton {
                    variant: ButtonVariant::Primary,
                    class: "gift-btn gift-bounce".to_string(),
                    onclick: move |_| on_open_gift.call(()),
                    "I got something for you \u{1F381}"
                }
            }
        }
    }
}
