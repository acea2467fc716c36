//! Confetti renderer adapter
//!
//! Calls `window.confetti` when the page has loaded it. A missing renderer
//! is not an error; the burst is simply skipped.

use keepsake_domain::BurstSpec;

use crate::infrastructure::script::run_script;
use crate::ports::outbound::ParticlePort;

/// Renderer script loaded by the page head.
pub const CONFETTI_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js";

pub fn burst_script(spec: &BurstSpec) -> Result<String, serde_json::Error> {
    let options = serde_json::to_string(spec)?;
    Ok(format!(
        "if (typeof window.confetti === \"function\") {{ window.confetti({options}); }}"
    ))
}

#[derive(Clone, Default)]
pub struct ConfettiParticles;

impl ParticlePort for ConfettiParticles {
    fn burst(&self, spec: &BurstSpec) {
        match burst_script(spec) {
            Ok(js) => run_script(js),
            Err(e) => tracing::warn!("Failed to encode burst options: {}", e),
        }
    }
}
