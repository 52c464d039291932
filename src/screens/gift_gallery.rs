//! The three mystery polaroids.

use dioxus::prelude::*;

use crate::components::{Polaroid, TapeTint};

struct GalleryCard {
    selector: u8,
    tape: TapeTint,
    tilt_class: &'static str,
    cell_class: &'static str,
}

/// One card per sub-gift, identified only by its number.
const CARDS: [GalleryCard; 3] = [
    GalleryCard {
        selector: 1,
        tape: TapeTint::Pink,
        tilt_class: "tilt-left",
        cell_class: "cell-pink",
    },
    GalleryCard {
        selector: 2,
        tape: TapeTint::Red,
        tilt_class: "tilt-right",
        cell_class: "cell-red",
    },
    GalleryCard {
        selector: 3,
        tape: TapeTint::Purple,
        tilt_class: "tilt-left-slight",
        cell_class: "cell-purple",
    },
];

/// Gift gallery: pick a polaroid, get a surprise.
#[component]
pub fn GiftGallery(on_select: EventHandler<u8>) -> Element {
    rsx! {
        div { class: "screen gift-row screen-enter-slow",
            for card in CARDS.iter() {
                {
                    let selector = card.selector;
                    rsx! {
                        Polaroid {
                            key: "{selector}",
                            tape: card.tape,
                            class: format!("gallery-polaroid {}", card.tilt_class),
                            onclick: move |_| on_select.call(selector),
                            div { class: "numbered-cell {card.cell_class}",
                                span { class: "cell-number", "{selector}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
