//! Pixel Heart Glyph
//!
//! The blocky heart rendered as an inline SVG of axis-aligned rectangles.

use dioxus::prelude::*;

/// Properties for the PixelHeart component
#[derive(Clone, PartialEq, Props)]
pub struct PixelHeartProps {
    /// Rendered size in pixels (default: 24)
    #[props(default = 24.0)]
    pub size: f32,
    /// Fill color (default: inherit from text color)
    #[props(default = "currentColor".to_string())]
    pub color: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Renders the pixel heart glyph at a caller-specified size and color
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PixelHeart { size: 32.0, color: "#ef4444".to_string() }
/// }
/// ```
#[component]
pub fn PixelHeart(props: PixelHeartProps) -> Element {
    let size = props.size;
    let color = &props.color;
    let class = props.class.as_deref().unwrap_or("");

    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "{color}",
            class: "{class}",
            style: "image-rendering: pixelated;",
            "aria-hidden": "true",
            // Upper lobes
            rect { x: "6", y: "2", width: "4", height: "4" }
            rect { x: "14", y: "2", width: "4", height: "4" }
            // Stepped body, widest at the middle
            path { d: "M2 8H6V12H2Z" }
            path { d: "M18 8H22V12H18Z" }
            path { d: "M4 4h4v4H4z" }
            path { d: "M8 8h4v4H8z" }
            path { d: "M12 12h4v4H12z" }
            path { d: "M16 8h4v4H16z" }
            path { d: "M20 4h4v4H20z" }
            path { d: "M2 12H10V16H2Z" }
            path { d: "M14 12H22V16H14Z" }
            path { d: "M4 16H12V20H4Z" }
            path { d: "M12 16H20V20H12Z" }
            // Tip
            path { d: "M8 20H16V22H8Z" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_props() {
        let props = PixelHeartProps {
            size: 24.0,
            color: "currentColor".to_string(),
            class: None,
        };
        assert_eq!(props.size, 24.0);
        assert_eq!(props.color, "currentColor");
    }
}
