use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("trail fade alpha must be in (0, 1], got {0}")]
    TrailFadeAlpha(f32),
    #[error("particle count must be positive")]
    ParticleCount,
    #[error("speed multiplier must be positive, got {0}")]
    SpeedMultiplier(f32),
}

/// Immutable per-instance configuration. Any change means tearing the engine
/// down and mounting a fresh one; nothing is mutated in flight.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// CSS color used for every particle, e.g. "#7df9ff" or "rgb(80,200,255)".
    pub color: String,
    /// Opacity of the per-tick black overwash; lower means longer trails.
    pub trail_fade_alpha: f32,
    pub particle_count: usize,
    pub speed_multiplier: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            color: "#7df9ff".to_string(),
            trail_fade_alpha: 0.05,
            particle_count: 120,
            speed_multiplier: 1.0,
        }
    }
}

impl EngineConfig {
    /// Fail-fast validation; the engine refuses to start on a bad bundle
    /// rather than running a degraded loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.trail_fade_alpha > 0.0 && self.trail_fade_alpha <= 1.0) {
            return Err(ConfigError::TrailFadeAlpha(self.trail_fade_alpha));
        }
        if self.particle_count == 0 {
            return Err(ConfigError::ParticleCount);
        }
        if !(self.speed_multiplier > 0.0) {
            return Err(ConfigError::SpeedMultiplier(self.speed_multiplier));
        }
        Ok(())
    }
}
