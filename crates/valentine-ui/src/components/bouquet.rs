//! Rose Bouquet Component
//!
//! A composed pixel-art bouquet: wrapping paper, leaves, a ribbon bow, ten
//! roses and a scatter of buds and sparkles, laid out from static placement
//! tables over a 140x140 viewBox.
//!
//! Shortly after mount the bouquet "blooms": a single boolean flips once and
//! every element grows in with its own stagger delay. The flip is monotonic;
//! re-renders never restart the animation within a mount. Each rose draws a
//! stem line from its own center to the fixed handle anchor, so the stems
//! converge no matter how the placement table changes.

use std::time::Duration;

use dioxus::prelude::*;

/// Point where every stem converges (the top of the bouquet handle).
pub const STEM_ANCHOR: (f32, f32) = (70.0, 90.0);

/// Delay before the bloom starts, ms.
pub const BLOOM_DELAY_MS: u64 = 200;

/// Rose sprites render at this square size.
pub const ROSE_SPRITE_SIZE: f32 = 18.0;

/// Placement of one leaf: position, rotation, bloom stagger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafPlacement {
    pub x: f32,
    pub y: f32,
    pub rotate: f32,
    pub delay_ms: u32,
}

/// Placement of one rose: position, bloom stagger, target scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosePlacement {
    pub x: f32,
    pub y: f32,
    pub delay_ms: u32,
    pub scale: f32,
}

impl RosePlacement {
    /// Center of the rendered sprite; the stem starts just below it.
    pub fn center(&self) -> (f32, f32) {
        (self.x + ROSE_SPRITE_SIZE / 2.0, self.y + ROSE_SPRITE_SIZE / 2.0)
    }
}

/// Leaves fan out behind the roses, outermost first.
pub const LEAVES: [LeafPlacement; 5] = [
    LeafPlacement { x: 20.0, y: 50.0, rotate: -45.0, delay_ms: 300 },
    LeafPlacement { x: 110.0, y: 50.0, rotate: 45.0, delay_ms: 350 },
    LeafPlacement { x: 30.0, y: 35.0, rotate: -60.0, delay_ms: 400 },
    LeafPlacement { x: 100.0, y: 35.0, rotate: 60.0, delay_ms: 450 },
    LeafPlacement { x: 65.0, y: 20.0, rotate: 0.0, delay_ms: 500 },
];

/// Roses bloom back row to front, ending on the centerpiece.
pub const ROSES: [RosePlacement; 10] = [
    // Top back row
    RosePlacement { x: 50.0, y: 20.0, delay_ms: 600, scale: 0.9 },
    RosePlacement { x: 75.0, y: 20.0, delay_ms: 650, scale: 0.9 },
    RosePlacement { x: 35.0, y: 30.0, delay_ms: 700, scale: 1.0 },
    RosePlacement { x: 90.0, y: 30.0, delay_ms: 750, scale: 1.0 },
    // Middle row
    RosePlacement { x: 62.0, y: 35.0, delay_ms: 800, scale: 1.1 },
    RosePlacement { x: 25.0, y: 45.0, delay_ms: 850, scale: 1.0 },
    RosePlacement { x: 100.0, y: 45.0, delay_ms: 900, scale: 1.0 },
    // Front cluster
    RosePlacement { x: 45.0, y: 50.0, delay_ms: 950, scale: 1.1 },
    RosePlacement { x: 80.0, y: 50.0, delay_ms: 1000, scale: 1.1 },
    // Centerpiece
    RosePlacement { x: 62.0, y: 60.0, delay_ms: 1100, scale: 1.2 },
];

/// One pixel leaf, rotated into place and grown in on bloom.
#[component]
fn PixelLeaf(placement: LeafPlacement, bloomed: bool) -> Element {
    let LeafPlacement { x, y, rotate, delay_ms } = placement;
    let scale = if bloomed { 1.0 } else { 0.0 };

    rsx! {
        g {
            style: "transform-origin: {x}px {y}px; \
                transform: rotate({rotate}deg) scale({scale}); \
                transition: transform 1s cubic-bezier(0.34, 1.56, 0.64, 1) {delay_ms}ms;",
            path {
                d: "M{x} {y} h2 v-2 h2 v-2 h2 v-2 h-2 v-2 h-2 v2 h-2 v2 h-2 v2 h2 z",
                fill: "#2d6a4f",
            }
            path {
                d: "M{x} {y} m2 -2 h2 v-2 h2 v-2 h-2 v2 h-2 v2 z",
                fill: "#40916c",
            }
        }
    }
}

/// One rose sprite plus its stem line down to the handle anchor.
#[component]
fn PixelRose(placement: RosePlacement, bloomed: bool, href: String) -> Element {
    let RosePlacement { x, y, delay_ms, scale } = placement;
    let (cx, cy) = placement.center();
    let (anchor_x, anchor_y) = STEM_ANCHOR;
    let scale = if bloomed { scale } else { 0.0 };
    let stem_start_y = cy + 4.0;

    rsx! {
        g {
            style: "transform-origin: {cx}px {cy}px; \
                transform: scale({scale}); \
                transition: transform 1.2s cubic-bezier(0.34, 1.56, 0.64, 1) {delay_ms}ms;",
            line {
                x1: "{cx}",
                y1: "{stem_start_y}",
                x2: "{anchor_x}",
                y2: "{anchor_y}",
                stroke: "#2d6a4f",
                stroke_width: "1.5",
                opacity: "0.8",
            }
            image {
                href: "{href}",
                x: "{x}",
                y: "{y}",
                width: "{ROSE_SPRITE_SIZE}",
                height: "{ROSE_SPRITE_SIZE}",
                preserve_aspect_ratio: "xMidYMid slice",
                style: "image-rendering: pixelated;",
            }
        }
    }
}

/// Kraft wrapping paper behind everything, growing up from the handle.
#[component]
fn WrappingPaper(bloomed: bool) -> Element {
    let scale = if bloomed { 1.0 } else { 0.0 };
    let opacity = if bloomed { 1.0 } else { 0.0 };

    rsx! {
        g {
            style: "transform-origin: 70px 130px; \
                transform: scale({scale}); opacity: {opacity}; \
                transition: transform 1.5s ease-out, opacity 1.5s ease-out;",
            // Back paper (darker)
            path { d: "M35 50 L25 60 L60 120 L80 120 L115 60 L105 50 z", fill: "#9c6644" }
            // Front paper
            path { d: "M30 60 L70 130 L110 60 L100 50 L70 100 L40 50 z", fill: "#ddb892" }
            // Side folds
            path { d: "M30 60 L40 50 L45 65 z", fill: "#e6ccb2" }
            path { d: "M110 60 L100 50 L95 65 z", fill: "#e6ccb2" }
        }
    }
}

/// Ribbon band, knot, bow loops and tails; last of the big pieces to pop in.
#[component]
fn Ribbon(bloomed: bool) -> Element {
    let scale = if bloomed { 1.0 } else { 0.0 };

    rsx! {
        g {
            style: "transform-origin: 70px 100px; \
                transform: scale({scale}); \
                transition: transform 1s cubic-bezier(0.175, 0.885, 0.32, 1.275) 1500ms;",
            // Band
            rect { x: "50", y: "98", width: "40", height: "6", fill: "#9d0208" }
            // Knot
            rect { x: "66", y: "96", width: "8", height: "10", fill: "#d00000" }
            // Bow loops
            path { d: "M66 100 L50 90 L50 110 L66 104 Z", fill: "#d00000" }
            path { d: "M74 100 L90 90 L90 110 L74 104 Z", fill: "#d00000" }
            // Tails
            path { d: "M68 106 L60 125 L70 125 L70 106 Z", fill: "#9d0208" }
            path { d: "M72 106 L80 125 L70 125 L70 106 Z", fill: "#9d0208" }
        }
    }
}

/// Small white filler buds tucked between the roses.
#[component]
fn FillerBuds(bloomed: bool) -> Element {
    let opacity = if bloomed { 1.0 } else { 0.0 };

    rsx! {
        g {
            style: "opacity: {opacity}; transition: opacity 1s ease 1000ms;",
            rect { x: "40", y: "25", width: "2", height: "2", fill: "#fff" }
            rect { x: "95", y: "25", width: "2", height: "2", fill: "#fff" }
            rect { x: "55", y: "15", width: "2", height: "2", fill: "#fff" }
            rect { x: "85", y: "15", width: "2", height: "2", fill: "#fff" }
        }
    }
}

/// Pulsing sparkle pixels floating around the arrangement.
#[component]
fn Sparkles(bloomed: bool) -> Element {
    let opacity = if bloomed { 1.0 } else { 0.0 };

    rsx! {
        g {
            style: "opacity: {opacity}; transition: opacity 1s ease 1000ms;",
            rect { x: "20", y: "20", width: "2", height: "2", fill: "#fff", class: "sparkle" }
            rect {
                x: "110", y: "30", width: "2", height: "2", fill: "#fff",
                class: "sparkle", style: "animation-delay: 0.3s;",
            }
            rect {
                x: "10", y: "80", width: "2", height: "2", fill: "#fff",
                class: "sparkle", style: "animation-delay: 0.7s;",
            }
            rect {
                x: "120", y: "80", width: "2", height: "2", fill: "#fff",
                class: "sparkle", style: "animation-delay: 1.1s;",
            }
            rect {
                x: "70", y: "10", width: "3", height: "3", fill: "#ffd60a",
                class: "sparkle-drift",
            }
        }
    }
}

/// Properties for the RoseBouquet component
#[derive(Clone, PartialEq, Props)]
pub struct RoseBouquetProps {
    /// Image URL for the rose sprite
    pub rose_href: String,
}

/// The full blooming bouquet
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     RoseBouquet { rose_href: assets::ROSE_SPRITE.to_string() }
/// }
/// ```
#[component]
pub fn RoseBouquet(props: RoseBouquetProps) -> Element {
    let mut blooming = use_signal(|| false);

    // One-shot bloom flip. The spawned task dies with the component, so an
    // early teardown just never flips the signal.
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(BLOOM_DELAY_MS)).await;
            blooming.set(true);
            tracing::debug!("bouquet bloomed");
        });
    });

    let bloomed = blooming();

    rsx! {
        div { class: "bouquet-frame",
            svg {
                view_box: "0 0 140 140",
                class: "bouquet-svg",
                "aria-hidden": "true",
                WrappingPaper { bloomed }
                g {
                    for (i, leaf) in LEAVES.iter().enumerate() {
                        PixelLeaf { key: "{i}", placement: *leaf, bloomed }
                    }
                }
                Ribbon { bloomed }
                for (i, rose) in ROSES.iter().enumerate() {
                    PixelRose {
                        key: "{i}",
                        placement: *rose,
                        bloomed,
                        href: props.rose_href.clone(),
                    }
                }
                FillerBuds { bloomed }
                Sparkles { bloomed }
            }
        }
    }
}
