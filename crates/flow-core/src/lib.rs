//! Pure simulation core for the flow-field backdrop.
//!
//! Nothing in this crate touches the DOM or any platform API, so the whole
//! simulation can be ticked and asserted on natively. The web frontend
//! consumes these types, feeds them pointer/resize input, and draws the
//! resulting particle states onto a canvas.

pub mod config;
pub mod constants;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod pool;

pub use config::{ConfigError, EngineConfig};
pub use particle::Particle;
pub use pointer::PointerState;
pub use pool::ParticlePool;
