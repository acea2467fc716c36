//! Particle port - optional confetti renderer

use keepsake_domain::BurstSpec;

/// Cosmetic particle renderer.
///
/// The experience holds this as an `Option`; when no renderer is available
/// bursts are skipped entirely.
#[cfg_attr(test, mockall::automock)]
pub trait ParticlePort {
    fn burst(&self, spec: &BurstSpec);
}
