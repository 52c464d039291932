//! Footer "now playing" control.

use dioxus::prelude::*;

/// Fixed bottom-right music button, shown on the ask and success screens.
#[component]
pub fn MusicControl() -> Element {
    rsx! {
        div { class: "music-control",
            button { class: "music-control-btn pixel-border",
                "\u{266A}"
            }
        }
    }
}
