//! Polaroid frame used by the portrait and the gift gallery.

use dioxus::prelude::*;

/// Tint of the washi-tape strip across the polaroid's top edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TapeTint {
    Pink,
    Red,
    Purple,
}

impl TapeTint {
    pub fn class(&self) -> &'static str {
        match self {
            TapeTint::Pink => "polaroid-tape tape-pink",
            TapeTint::Red => "polaroid-tape tape-red",
            TapeTint::Purple => "polaroid-tape tape-purple",
        }
    }
}

/// Properties for the Polaroid component
#[derive(Clone, PartialEq, Props)]
pub struct PolaroidProps {
    /// Framed content (image, number cell, ...)
    pub children: Element,
    /// Optional tape strip across the top
    #[props(default)]
    pub tape: Option<TapeTint>,
    /// Click handler; presence makes the frame hover-interactive
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes (tilt, spacing)
    #[props(default)]
    pub class: Option<String>,
}

/// White pixel-bordered frame with optional tape and click affordance.
#[component]
pub fn Polaroid(props: PolaroidProps) -> Element {
    let extra = props.class.as_deref().unwrap_or("");
    let clickable = if props.onclick.is_some() { "clickable" } else { "" };
    let full_class = format!("polaroid pixel-border {clickable} {extra}");
    let tape_class = props.tape.map(|tape| tape.class());

    rsx! {
        div {
            class: "{full_class}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if let Some(tape_class) = tape_class {
                div { class: "{tape_class}" }
            }
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tape_tint_classes() {
        assert_eq!(TapeTint::Pink.class(), "polaroid-tape tape-pink");
        assert_eq!(TapeTint::Red.class(), "polaroid-tape tape-red");
        assert_eq!(TapeTint::Purple.class(), "polaroid-tape tape-purple");
    }
}
