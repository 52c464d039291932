//! Sub-gift: the song.

use dioxus::prelude::*;
use valentine_ui::{ButtonVariant, PixelButton};

use crate::assets;

/// Song card with spinning vinyl, cover art and a mock player bar.
#[component]
pub fn SongCard(on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "screen song-screen screen-enter",
            PixelButton {
                variant: ButtonVariant::Secondary,
                class: "back-btn".to_string(),
                onclick: move |_| on_back.call(()),
                "\u{2190} BACK"
            }

            div { class: "song-card pixel-border",
                // Vinyl sticker spinning off the corner
                div { class: "vinyl",
                    div { class: "vinyl-disc" }
                    div { class: "vinyl-label" }
                }

                span { class: "note note-bounce", "\u{266A}" }
                span { class: "note note-pulse", "\u{266B}" }

                h2 { class: "song-title", "A song for you" }

                div { class: "song-cover",
                    div { class: "song-cover-shadow pixel-border" }
                    img {
                        class: "song-cover-img",
                        src: assets::SONG_COVER,
                        alt: "Song",
                        draggable: false,
                    }
                }

                // Mock player
                div { class: "player-bar",
                    div { class: "player-dot", "\u{266A}" }
                    div { class: "player-track",
                        div { class: "player-progress" }
                    }
                    span { class: "player-time", "3:12" }
                }
            }
        }
    }
}
