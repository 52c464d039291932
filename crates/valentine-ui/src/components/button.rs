//! Button Components
//!
//! Chunky pixel-bordered buttons in three variants:
//! - Primary: pink, the yes/affirmative action
//! - Secondary: white, back/neutral actions
//! - Danger: red, the decline button

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Pink affirmative action
    #[default]
    Primary,
    /// White neutral action
    Secondary,
    /// Red decline action
    Danger,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "pixel-btn-primary",
            ButtonVariant::Secondary => "pixel-btn-secondary",
            ButtonVariant::Danger => "pixel-btn-danger",
        }
    }
}

/// Properties for the PixelButton component
#[derive(Clone, PartialEq, Props)]
pub struct PixelButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, glyphs, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Inline style overrides laid over the variant defaults
    #[props(default)]
    pub style: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Pixel-styled button with a thick border and press-down motion
///
/// # Design Notes
///
/// - Uppercase pixel typography, black 4px border
/// - Translates down on press for the physical-button feel
/// - A translucent highlight bar across the top gives the bevel
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PixelButton {
///         variant: ButtonVariant::Danger,
///         onclick: move |_| decline(),
///         "No"
///     }
/// }
/// ```
#[component]
pub fn PixelButton(props: PixelButtonProps) -> Element {
    let base_class = props.variant.class();
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        format!("pixel-btn {}", base_class)
    } else {
        format!("pixel-btn {} {}", base_class, extra_class)
    };
    let style = props.style.clone().unwrap_or_default();

    rsx! {
        button {
            class: "{full_class}",
            style: "{style}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            // Bevel highlight
            div { class: "pixel-btn-highlight" }
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "pixel-btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "pixel-btn-secondary");
        assert_eq!(ButtonVariant::Danger.class(), "pixel-btn-danger");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
