use crate::constants::{
    DAMPING, INTERACTION_RADIUS, LIFESPAN_MAX, LIFESPAN_MIN, REPULSION_STRENGTH,
};
use crate::field;
use glam::Vec2;
use rand::Rng;

/// One particle of the flow. Expired particles are recycled in place, never
/// destroyed, so the pool size stays constant between resets.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: u32,
    pub lifespan: f32,
}

impl Particle {
    pub fn spawn(bounds: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos: random_position(bounds, rng),
            vel: Vec2::ZERO,
            age: 0,
            lifespan: sample_lifespan(rng),
        }
    }

    /// Advance one tick: accumulate field force, pointer repulsion, integrate,
    /// damp, age (recycling on expiry), then wrap toroidally.
    pub fn update(
        &mut self,
        bounds: Vec2,
        pointer: Vec2,
        speed_multiplier: f32,
        rng: &mut impl Rng,
    ) {
        self.vel += field::field_force(self.pos) * speed_multiplier;

        // Repulsion falls off linearly to zero at the interaction radius.
        // atan2(0, 0) == 0, so a particle exactly under the pointer still
        // gets a full-strength push (along +x) rather than a NaN.
        let dist = self.pos.distance(pointer);
        if dist < INTERACTION_RADIUS {
            let falloff = (INTERACTION_RADIUS - dist) / INTERACTION_RADIUS;
            let away = self.pos - pointer;
            let angle = away.y.atan2(away.x);
            self.vel += Vec2::new(angle.cos(), angle.sin()) * falloff * REPULSION_STRENGTH;
        }

        // Explicit Euler, one tick = one unit of time.
        self.pos += self.vel;
        self.vel *= DAMPING;

        self.age += 1;
        if self.age as f32 > self.lifespan {
            self.recycle(bounds, rng);
        }

        self.wrap(bounds);
    }

    /// Age-based paint opacity: a triangular envelope that is 0 at birth and
    /// death and 1 at mid-life, so particles fade in and out instead of
    /// popping.
    pub fn alpha(&self) -> f32 {
        let t = self.age as f32 / self.lifespan;
        (1.0 - (t - 0.5).abs() * 2.0).clamp(0.0, 1.0)
    }

    fn recycle(&mut self, bounds: Vec2, rng: &mut impl Rng) {
        self.pos = random_position(bounds, rng);
        self.vel = Vec2::ZERO;
        self.age = 0;
        self.lifespan = sample_lifespan(rng);
    }

    // Toroidal wrap: leaving one edge re-enters from the opposite edge with
    // velocity preserved, keeping density visually constant near edges.
    fn wrap(&mut self, bounds: Vec2) {
        if self.pos.x > bounds.x {
            self.pos.x = 0.0;
        } else if self.pos.x < 0.0 {
            self.pos.x = bounds.x;
        }
        if self.pos.y > bounds.y {
            self.pos.y = 0.0;
        } else if self.pos.y < 0.0 {
            self.pos.y = bounds.y;
        }
    }
}

#[inline]
fn random_position(bounds: Vec2, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.gen::<f32>() * bounds.x,
        rng.gen::<f32>() * bounds.y,
    )
}

#[inline]
fn sample_lifespan(rng: &mut impl Rng) -> f32 {
    rng.gen_range(LIFESPAN_MIN..LIFESPAN_MAX)
}
