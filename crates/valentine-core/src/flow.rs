//! View-state controller for the card
//!
//! Holds the current screen and the decline counter, maps button clicks to
//! transitions, and fires celebratory bursts through the injected
//! [`ParticleBurst`] capability. The flow is strictly forward except for the
//! sub-gift "back" edge, which returns only to the gift gallery.
//!
//! Everything shown on screen that depends on this state (prompt copy,
//! decline label, accept-button size, portrait swap) is derived through pure
//! methods recomputed on every render; nothing is cached.

use std::sync::Arc;

use crate::types::{
    BurstConfig, NoopBurst, ParticleBurst, Screen, ACCEPT_BURST, DECLINE_PHRASES,
    GIFT_REVEAL_BURST,
};

/// Accept-button font size cap, px
const ACCEPT_SIZE_CAP: u32 = 100;

/// Decline count after which the portrait swaps to the weepy one
const WEEPY_THRESHOLD: u32 = 4;

/// The card's view-state machine.
///
/// Screen and decline count are the only in-memory state of the whole
/// application; every run starts at `Asking` with a zero count.
pub struct CardFlow {
    screen: Screen,
    decline_count: u32,
    burster: Arc<dyn ParticleBurst>,
}

impl CardFlow {
    /// Create a flow with the given burst capability.
    pub fn new(burster: Arc<dyn ParticleBurst>) -> Self {
        Self {
            screen: Screen::Asking,
            decline_count: 0,
            burster,
        }
    }

    /// Create a flow with no burst capability (silent no-op bursts).
    pub fn without_bursts() -> Self {
        Self::new(Arc::new(NoopBurst))
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn decline_count(&self) -> u32 {
        self.decline_count
    }

    // === Actions ===

    /// Yes button. Only meaningful on the asking screen; fires the accept
    /// burst alongside the transition.
    pub fn accept(&mut self) {
        if self.screen != Screen::Asking {
            return;
        }
        self.screen = Screen::Success;
        tracing::debug!(declines = self.decline_count, "accepted");
        self.fire(&ACCEPT_BURST);
    }

    /// No button. Stays on the asking screen and escalates the phrase.
    pub fn decline(&mut self) {
        if self.screen != Screen::Asking {
            return;
        }
        self.decline_count += 1;
        tracing::debug!(count = self.decline_count, "declined");
    }

    /// Open the gift gallery from the success screen; fires the gift burst.
    pub fn open_gift(&mut self) {
        if self.screen != Screen::Success {
            return;
        }
        self.screen = Screen::Gift;
        self.fire(&GIFT_REVEAL_BURST);
    }

    /// Pick one of the three polaroids. Selectors outside {1, 2, 3} are
    /// no-ops, as is any selection outside the gift gallery.
    pub fn select_gift(&mut self, choice: u8) {
        if self.screen != Screen::Gift {
            return;
        }
        self.screen = match choice {
            1 => Screen::GiftRose,
            2 => Screen::GiftLetter,
            3 => Screen::GiftSong,
            _ => return,
        };
    }

    /// Return from a sub-gift to the gift gallery. Never goes further back.
    pub fn back_to_gifts(&mut self) {
        if matches!(
            self.screen,
            Screen::GiftRose | Screen::GiftLetter | Screen::GiftSong
        ) {
            self.screen = Screen::Gift;
        }
    }

    // === Derived presentation (pure functions of state) ===

    /// Headline above the yes/no buttons.
    pub fn prompt(&self) -> &'static str {
        if self.decline_count == 0 {
            "Will you be my Valentine?"
        } else {
            "Wait... really?"
        }
    }

    /// Label for the decline button, clamped to the last phrase.
    pub fn decline_label(&self) -> &'static str {
        let index = (self.decline_count as usize).min(DECLINE_PHRASES.len() - 1);
        DECLINE_PHRASES[index]
    }

    /// Accept-button font size in px: grows with every decline, capped so
    /// the layout survives determined refusal.
    pub fn accept_size(&self) -> u32 {
        self.decline_count
            .saturating_mul(20)
            .saturating_add(16)
            .min(ACCEPT_SIZE_CAP)
    }

    /// Size of the heart glyph inside the accept button.
    pub fn accept_glyph_size(&self) -> f32 {
        self.accept_size() as f32 * 0.8
    }

    /// Whether the asking portrait has given way to the weepy one.
    pub fn shows_weepy_portrait(&self) -> bool {
        self.decline_count > WEEPY_THRESHOLD
    }

    /// The footer "now playing" control is hidden on the gift screens.
    pub fn shows_music_control(&self) -> bool {
        matches!(self.screen, Screen::Asking | Screen::Success)
    }

    fn fire(&self, config: &BurstConfig) {
        self.burster.burst(config);
    }
}

impl Default for CardFlow {
    fn default() -> Self {
        Self::without_bursts()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Records every burst call for assertion.
    #[derive(Default)]
    struct RecordingBurst {
        calls: Mutex<Vec<BurstConfig>>,
    }

    impl RecordingBurst {
        fn calls(&self) -> Vec<BurstConfig> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ParticleBurst for RecordingBurst {
        fn burst(&self, config: &BurstConfig) {
            self.calls.lock().unwrap().push(config.clone());
        }
    }

    fn recorded_flow() -> (CardFlow, Arc<RecordingBurst>) {
        let recorder = Arc::new(RecordingBurst::default());
        (CardFlow::new(recorder.clone()), recorder)
    }

    #[test]
    fn starts_asking_with_zero_declines() {
        let flow = CardFlow::without_bursts();
        assert_eq!(flow.screen(), Screen::Asking);
        assert_eq!(flow.decline_count(), 0);
    }

    #[test]
    fn decline_stays_on_asking_and_increments() {
        let mut flow = CardFlow::without_bursts();
        for expected in 1..=10 {
            flow.decline();
            assert_eq!(flow.screen(), Screen::Asking);
            assert_eq!(flow.decline_count(), expected);
        }
    }

    #[test]
    fn decline_label_walks_then_clamps() {
        let mut flow = CardFlow::without_bursts();
        assert_eq!(flow.decline_label(), "No");
        flow.decline();
        assert_eq!(flow.decline_label(), "Are you sure?");
        for _ in 0..20 {
            flow.decline();
        }
        assert_eq!(flow.decline_label(), "Last chance!");
    }

    #[test]
    fn accept_size_grows_and_caps() {
        let mut flow = CardFlow::without_bursts();
        assert_eq!(flow.accept_size(), 16);
        flow.decline();
        assert_eq!(flow.accept_size(), 36);
        flow.decline();
        flow.decline();
        assert_eq!(flow.accept_size(), 76);
        for _ in 0..10 {
            flow.decline();
        }
        assert_eq!(flow.accept_size(), 100);
        assert_eq!(flow.accept_glyph_size(), 80.0);
    }

    #[test]
    fn accept_fires_exactly_one_accept_burst() {
        let (mut flow, recorder) = recorded_flow();
        flow.accept();
        assert_eq!(flow.screen(), Screen::Success);
        assert_eq!(recorder.calls(), vec![ACCEPT_BURST]);
    }

    #[test]
    fn accept_outside_asking_is_noop() {
        let (mut flow, recorder) = recorded_flow();
        flow.accept();
        flow.accept();
        assert_eq!(flow.screen(), Screen::Success);
        assert_eq!(recorder.calls().len(), 1);
    }

    #[test]
    fn decline_after_accept_is_noop() {
        let mut flow = CardFlow::without_bursts();
        flow.accept();
        flow.decline();
        assert_eq!(flow.decline_count(), 0);
        assert_eq!(flow.screen(), Screen::Success);
    }

    #[test]
    fn open_gift_fires_gift_burst() {
        let (mut flow, recorder) = recorded_flow();
        flow.accept();
        flow.open_gift();
        assert_eq!(flow.screen(), Screen::Gift);
        assert_eq!(recorder.calls(), vec![ACCEPT_BURST, GIFT_REVEAL_BURST]);
    }

    #[test]
    fn open_gift_outside_success_is_noop() {
        let (mut flow, recorder) = recorded_flow();
        flow.open_gift();
        assert_eq!(flow.screen(), Screen::Asking);
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn sub_gift_selection_maps_deterministically() {
        for (choice, expected) in [
            (1u8, Screen::GiftRose),
            (2, Screen::GiftLetter),
            (3, Screen::GiftSong),
        ] {
            let mut flow = CardFlow::without_bursts();
            flow.accept();
            flow.open_gift();
            flow.select_gift(choice);
            assert_eq!(flow.screen(), expected);
        }
    }

    #[test]
    fn invalid_sub_gift_selector_is_noop() {
        let mut flow = CardFlow::without_bursts();
        flow.accept();
        flow.open_gift();
        for choice in [0u8, 4, 7, 255] {
            flow.select_gift(choice);
            assert_eq!(flow.screen(), Screen::Gift);
        }
    }

    #[test]
    fn select_gift_outside_gallery_is_noop() {
        let mut flow = CardFlow::without_bursts();
        flow.select_gift(1);
        assert_eq!(flow.screen(), Screen::Asking);
    }

    #[test]
    fn back_returns_only_to_gift_gallery() {
        for choice in 1u8..=3 {
            let mut flow = CardFlow::without_bursts();
            flow.accept();
            flow.open_gift();
            flow.select_gift(choice);
            flow.back_to_gifts();
            assert_eq!(flow.screen(), Screen::Gift);
            // A second back stays put: the gallery loop has no exit.
            flow.back_to_gifts();
            assert_eq!(flow.screen(), Screen::Gift);
        }
    }

    #[test]
    fn prompt_swaps_after_first_decline() {
        let mut flow = CardFlow::without_bursts();
        assert_eq!(flow.prompt(), "Will you be my Valentine?");
        flow.decline();
        assert_eq!(flow.prompt(), "Wait... really?");
    }

    #[test]
    fn weepy_portrait_past_threshold() {
        let mut flow = CardFlow::without_bursts();
        for _ in 0..4 {
            flow.decline();
        }
        assert!(!flow.shows_weepy_portrait());
        flow.decline();
        assert!(flow.shows_weepy_portrait());
    }

    #[test]
    fn music_control_hidden_on_gift_screens() {
        let mut flow = CardFlow::without_bursts();
        assert!(flow.shows_music_control());
        flow.accept();
        assert!(flow.shows_music_control());
        flow.open_gift();
        assert!(!flow.shows_music_control());
        flow.select_gift(2);
        assert!(!flow.shows_music_control());
    }

    /// The full scripted happy path: three declines, then yes, then the
    /// letter and back.
    #[test]
    fn end_to_end_click_script() {
        let (mut flow, recorder) = recorded_flow();

        flow.decline();
        flow.decline();
        flow.decline();
        assert_eq!(flow.decline_label(), "Pookie please?");
        assert_eq!(flow.accept_size(), 76);

        flow.accept();
        assert_eq!(flow.screen(), Screen::Success);
        assert_eq!(recorder.calls(), vec![ACCEPT_BURST]);

        flow.open_gift();
        assert_eq!(flow.screen(), Screen::Gift);
        assert_eq!(recorder.calls(), vec![ACCEPT_BURST, GIFT_REVEAL_BURST]);

        flow.select_gift(2);
        assert_eq!(flow.screen(), Screen::GiftLetter);

        flow.back_to_gifts();
        assert_eq!(flow.screen(), Screen::Gift);
        // Decline count survives acceptance untouched.
        assert_eq!(flow.decline_count(), 3);
    }
}
