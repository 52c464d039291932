//! Color constants for the pixel valentine palette.

#![allow(dead_code)]

// === PINKS (Primary actions, accents) ===
pub const PINK: &str = "#ec4899";
pub const PINK_DEEP: &str = "#db2777";
pub const PINK_SOFT: &str = "#f9a8d4";

// === REDS (Danger button, headlines) ===
pub const RED: &str = "#ef4444";
pub const RED_DEEP: &str = "#dc2626";
pub const RED_SOFT: &str = "#fca5a5";

// === PAPER & INK ===
pub const PAPER: &str = "#fffdf5";
pub const INK: &str = "#1f2937";
pub const INK_MUTED: &str = "#6b7280";

// === BOUQUET ===
pub const KRAFT: &str = "#ddb892";
pub const KRAFT_DARK: &str = "#9c6644";
pub const LEAF: &str = "#2d6a4f";
pub const LEAF_LIGHT: &str = "#40916c";
pub const RIBBON: &str = "#d00000";
pub const RIBBON_DARK: &str = "#9d0208";

// === ACCENTS ===
pub const GOLD: &str = "#ffd60a";
pub const PURPLE: &str = "#a855f7";
