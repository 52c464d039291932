//! Root application component and the six-screen switch.

use std::sync::Arc;

use dioxus::prelude::*;
use valentine_core::{CardFlow, Screen};

use crate::components::{FloatingHearts, MusicControl};
use crate::confetti::WebviewConfetti;
use crate::screens::{AskingScreen, GiftGallery, LoveLetter, RoseReveal, SongCard, SuccessScreen};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Injects global styles and mounts the card view.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        CardView {}
    }
}

/// The card itself: owns the flow controller and maps the active screen to
/// its component. All transitions happen synchronously in the click
/// handlers passed down here.
#[component]
pub fn CardView() -> Element {
    let mut flow = use_signal(|| CardFlow::new(Arc::new(WebviewConfetti)));

    // Derived presentation, recomputed every render from the flow state.
    let (screen, prompt, decline_label, accept_size, glyph_size, weepy, shows_music) = {
        let f = flow.read();
        (
            f.screen(),
            f.prompt().to_string(),
            f.decline_label().to_string(),
            f.accept_size(),
            f.accept_glyph_size(),
            f.shows_weepy_portrait(),
            f.shows_music_control(),
        )
    };

    let screen_view = match screen {
        Screen::Asking => rsx! {
            AskingScreen {
                prompt,
                decline_label,
                accept_size,
                glyph_size,
                weepy,
                on_accept: move |_| flow.write().accept(),
                on_decline: move |_| flow.write().decline(),
            }
        },
        Screen::Success => rsx! {
            SuccessScreen {
                on_open_gift: move |_| flow.write().open_gift(),
            }
        },
        Screen::Gift => rsx! {
            GiftGallery {
                on_select: move |choice| flow.write().select_gift(choice),
            }
        },
        Screen::GiftRose => rsx! {
            RoseReveal {
                on_back: move |_| flow.write().back_to_gifts(),
            }
        },
        Screen::GiftLetter => rsx! {
            LoveLetter {
                on_back: move |_| flow.write().back_to_gifts(),
            }
        },
        Screen::GiftSong => rsx! {
            SongCard {
                on_back: move |_| flow.write().back_to_gifts(),
            }
        },
    };

    rsx! {
        div { class: "card-stage",
            FloatingHearts {}
            div { class: "card-content",
                {screen_view}
            }
            if shows_music {
                MusicControl {}
            }
        }
    }
}
