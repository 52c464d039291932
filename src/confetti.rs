//! Webview confetti adapter
//!
//! Implements the core [`ParticleBurst`] capability by handing the preset
//! straight to the `confetti` global loaded in the window head. Bursts are
//! fire-and-forget: a missing script or a failed eval is logged at debug and
//! otherwise ignored.

use dioxus::document;
use dioxus::prelude::spawn;
use valentine_core::{BurstConfig, ParticleBurst};

/// Particle bursts backed by the webview's canvas-confetti script.
pub struct WebviewConfetti;

impl ParticleBurst for WebviewConfetti {
    fn burst(&self, config: &BurstConfig) {
        let payload = match serde_json::to_string(config) {
            Ok(json) => json,
            Err(e) => {
                tracing::debug!("confetti config failed to serialize: {}", e);
                return;
            }
        };
        let js = format!("if (typeof confetti === 'function') {{ confetti({payload}); }}");
        spawn(async move {
            if let Err(e) = document::eval(&js).await {
                tracing::debug!("confetti eval failed: {:?}", e);
            }
        });
    }
}
