//! Core types for the valentine card

use rand::Rng;
use serde::Serialize;

/// The six mutually exclusive screens of the card.
///
/// Exactly one screen is active at a time and it is the sole driver of
/// which view tree renders. Transitions are a function only of the current
/// screen and the triggering action; see [`crate::flow::CardFlow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The big question, with escalating decline phrases
    #[default]
    Asking,
    /// She said yes
    Success,
    /// Three polaroids to pick from
    Gift,
    /// Sub-gift: the blooming rose bouquet
    GiftRose,
    /// Sub-gift: the love letter
    GiftLetter,
    /// Sub-gift: the song
    GiftSong,
}

/// Ordered decline phrases, escalating with every "no" click.
///
/// Indexed by the decline count, clamped to the last entry once exhausted.
pub const DECLINE_PHRASES: [&str; 8] = [
    "No",
    "Are you sure?",
    "Really sure?",
    "Pookie please?",
    "Don't do this!",
    "I'm gonna cry...",
    "Breaking my heart!",
    "Last chance!",
];

/// Origin point for a particle burst, in viewport fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BurstOrigin {
    /// Horizontal fraction; the environment centers the burst when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Vertical fraction
    pub y: f32,
}

/// Configuration for one celebratory particle burst.
///
/// Serializes to the camelCase object shape the webview confetti global
/// accepts, so the desktop adapter can pass it through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstConfig {
    pub particle_count: u32,
    pub spread: f32,
    pub origin: BurstOrigin,
    pub colors: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shapes: Option<&'static [&'static str]>,
}

/// Burst fired when the big question is answered with yes.
///
/// Square shapes keep the pixel feel.
pub const ACCEPT_BURST: BurstConfig = BurstConfig {
    particle_count: 150,
    spread: 70.0,
    origin: BurstOrigin { x: Some(0.5), y: 0.6 },
    colors: &["#ff0000", "#ff69b4", "#ffffff"],
    shapes: Some(&["square"]),
};

/// Burst fired when the gift is opened.
pub const GIFT_REVEAL_BURST: BurstConfig = BurstConfig {
    particle_count: 80,
    spread: 60.0,
    origin: BurstOrigin { x: None, y: 0.7 },
    colors: &["#FFD700", "#FFA500", "#FF69B4"],
    shapes: None,
};

/// Environment-provided particle burst capability.
///
/// The desktop app injects a webview-backed implementation; tests inject a
/// recording stub. Calls are fire-and-forget and must never fail from the
/// caller's perspective.
pub trait ParticleBurst: Send + Sync {
    fn burst(&self, config: &BurstConfig);
}

/// Burst implementation used when no environment capability is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBurst;

impl ParticleBurst for NoopBurst {
    fn burst(&self, _config: &BurstConfig) {}
}

/// Number of hearts drifting behind every screen.
pub const HEART_FIELD_SIZE: usize = 25;

/// One ambient floating heart.
///
/// Generated once at process start with independent uniform-random fields
/// and never regenerated; purely cosmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingHeart {
    pub id: usize,
    /// Horizontal position as a percentage of the viewport width
    pub left: f32,
    /// Animation start delay in seconds; applied negated so the field is
    /// populated mid-flight on first paint
    pub delay: f32,
    /// Float duration in seconds
    pub duration: f32,
    /// Rendered width in pixels
    pub size: f32,
}

impl FloatingHeart {
    /// Generate the ambient heart field with random per-heart parameters.
    pub fn drift_field(count: usize) -> Vec<FloatingHeart> {
        let mut rng = rand::rng();
        (0..count)
            .map(|id| FloatingHeart {
                id,
                left: rng.random_range(0.0..100.0),
                delay: rng.random_range(0.0..20.0),
                duration: rng.random_range(15.0..25.0),
                size: rng.random_range(30.0..70.0),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_burst_preset() {
        assert_eq!(ACCEPT_BURST.particle_count, 150);
        assert_eq!(ACCEPT_BURST.spread, 70.0);
        assert_eq!(ACCEPT_BURST.origin.x, Some(0.5));
        assert_eq!(ACCEPT_BURST.origin.y, 0.6);
        assert_eq!(ACCEPT_BURST.colors, ["#ff0000", "#ff69b4", "#ffffff"]);
        assert_eq!(ACCEPT_BURST.shapes, Some(&["square"][..]));
    }

    #[test]
    fn test_gift_reveal_burst_preset() {
        assert_eq!(GIFT_REVEAL_BURST.particle_count, 80);
        assert_eq!(GIFT_REVEAL_BURST.spread, 60.0);
        assert_eq!(GIFT_REVEAL_BURST.origin.x, None);
        assert_eq!(GIFT_REVEAL_BURST.origin.y, 0.7);
        assert!(GIFT_REVEAL_BURST.shapes.is_none());
    }

    #[test]
    fn test_burst_config_serializes_camel_case() {
        let json = serde_json::to_value(&ACCEPT_BURST).expect("serialize");
        assert_eq!(json["particleCount"], 150);
        assert_eq!(json["spread"], 70.0);
        assert_eq!(json["origin"]["x"], 0.5);
        assert_eq!(json["shapes"][0], "square");
    }

    #[test]
    fn test_burst_config_omits_absent_fields() {
        let json = serde_json::to_value(&GIFT_REVEAL_BURST).expect("serialize");
        assert!(json.get("shapes").is_none());
        assert!(json["origin"].get("x").is_none());
        assert_eq!(json["origin"]["y"], 0.7);
    }

    #[test]
    fn test_decline_phrases() {
        assert_eq!(DECLINE_PHRASES.len(), 8);
        assert_eq!(DECLINE_PHRASES[0], "No");
        assert_eq!(DECLINE_PHRASES[3], "Pookie please?");
        assert_eq!(DECLINE_PHRASES[7], "Last chance!");
    }

    #[test]
    fn test_drift_field_size_and_ids() {
        let hearts = FloatingHeart::drift_field(HEART_FIELD_SIZE);
        assert_eq!(hearts.len(), HEART_FIELD_SIZE);
        for (i, heart) in hearts.iter().enumerate() {
            assert_eq!(heart.id, i);
        }
    }

    #[test]
    fn test_drift_field_ranges() {
        for heart in FloatingHeart::drift_field(100) {
            assert!((0.0..100.0).contains(&heart.left));
            assert!((0.0..20.0).contains(&heart.delay));
            assert!((15.0..25.0).contains(&heart.duration));
            assert!((30.0..70.0).contains(&heart.size));
        }
    }
}
