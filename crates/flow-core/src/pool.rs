use crate::particle::Particle;
use glam::Vec2;
use rand::Rng;

/// Fixed-size collection of particles plus the surface bounds they live in.
///
/// The pool is rebuilt wholesale on mount, resize, and reconfiguration;
/// between resets its size never changes (expired particles are recycled in
/// place by `Particle::update`).
pub struct ParticlePool {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticlePool {
    pub fn new(count: usize, width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let mut pool = Self {
            particles: Vec::new(),
            bounds: Vec2::ZERO,
        };
        pool.reset(count, width, height, rng);
        pool
    }

    /// Discard all particles and allocate exactly `count` fresh ones with
    /// uniform random positions over the new bounds. Idempotent; called on
    /// every resize.
    pub fn reset(&mut self, count: usize, width: f32, height: f32, rng: &mut impl Rng) {
        self.bounds = Vec2::new(width, height);
        self.particles.clear();
        self.particles
            .extend((0..count).map(|_| Particle::spawn(self.bounds, rng)));
        log::debug!("pool reset: {} particles over {}x{}", count, width, height);
    }

    /// One simulation pass: update then draw each particle, in pool order.
    /// Particles are mutually independent; the single `draw` sink keeps all
    /// paint calls serialized onto the one surface.
    pub fn tick(
        &mut self,
        pointer: Vec2,
        speed_multiplier: f32,
        rng: &mut impl Rng,
        mut draw: impl FnMut(&Particle),
    ) {
        for p in &mut self.particles {
            p.update(self.bounds, pointer, speed_multiplier, rng);
            draw(p);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }
}
