use flow_core::constants::{
    DAMPING, FIELD_STRENGTH, INTERACTION_RADIUS, LIFESPAN_MAX, LIFESPAN_MIN, POINTER_SENTINEL,
    REPULSION_STRENGTH,
};
use flow_core::{field, Particle};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn sentinel() -> Vec2 {
    Vec2::from(POINTER_SENTINEL)
}

#[test]
fn spawn_respects_bounds_and_lifespan_range() {
    let mut r = rng(1);
    for _ in 0..500 {
        let p = Particle::spawn(BOUNDS, &mut r);
        assert!(p.pos.x >= 0.0 && p.pos.x < BOUNDS.x);
        assert!(p.pos.y >= 0.0 && p.pos.y < BOUNDS.y);
        assert_eq!(p.vel, Vec2::ZERO);
        assert_eq!(p.age, 0);
        assert!(
            p.lifespan >= LIFESPAN_MIN && p.lifespan < LIFESPAN_MAX,
            "lifespan {} out of range",
            p.lifespan
        );
    }
}

#[test]
fn zero_speed_with_far_pointer_leaves_particle_stationary() {
    // The end-to-end degenerate case: no field force (speed multiplier 0),
    // pointer at the sentinel, so one tick must change nothing but age.
    let mut r = rng(2);
    let mut p = Particle::spawn(BOUNDS, &mut r);
    let before = p.pos;
    p.update(BOUNDS, sentinel(), 0.0, &mut r);
    assert_eq!(p.vel, Vec2::ZERO);
    assert_eq!(p.pos, before);
    assert_eq!(p.age, 1);
}

#[test]
fn field_force_accumulates_into_velocity() {
    let mut r = rng(3);
    let mut p = Particle::spawn(BOUNDS, &mut r);
    let force = field::field_force(p.pos);
    let before = p.pos;
    p.update(BOUNDS, sentinel(), 1.0, &mut r);
    // One tick: vel goes 0 -> force, position integrates by it, then damping.
    assert!((p.pos - (before + force)).length() < 1e-5);
    assert!((p.vel - force * DAMPING).length() < 1e-5);
    assert!((force.length() - FIELD_STRENGTH).abs() < 1e-5);
}

#[test]
fn repulsion_is_maximal_at_zero_distance() {
    let mut r = rng(4);
    let mut p = Particle::spawn(BOUNDS, &mut r);
    let pointer = p.pos; // directly under the pointer
    p.update(BOUNDS, pointer, 0.0, &mut r);
    // Full-strength impulse (falloff factor 1), then one damping step.
    let expected = REPULSION_STRENGTH * DAMPING;
    assert!(
        (p.vel.length() - expected).abs() < 1e-6,
        "expected |v| = {}, got {}",
        expected,
        p.vel.length()
    );
}

#[test]
fn repulsion_is_zero_at_and_beyond_the_radius() {
    let mut r = rng(5);
    let mut p = Particle::spawn(BOUNDS, &mut r);
    p.pos = Vec2::new(400.0, 300.0);
    // Exactly on the radius boundary: the strict < check must not fire.
    let pointer = p.pos + Vec2::new(INTERACTION_RADIUS, 0.0);
    p.update(BOUNDS, pointer, 0.0, &mut r);
    assert_eq!(p.vel, Vec2::ZERO);

    let pointer = p.pos + Vec2::new(INTERACTION_RADIUS + 50.0, 0.0);
    p.update(BOUNDS, pointer, 0.0, &mut r);
    assert_eq!(p.vel, Vec2::ZERO);
}

#[test]
fn repulsion_pushes_away_with_linear_falloff() {
    let mut r = rng(6);
    let mut p = Particle::spawn(BOUNDS, &mut r);
    p.pos = Vec2::new(400.0, 300.0);
    // Pointer half a radius to the left: falloff 0.5, push toward +x.
    let pointer = p.pos - Vec2::new(INTERACTION_RADIUS / 2.0, 0.0);
    p.update(BOUNDS, pointer, 0.0, &mut r);
    let expected = 0.5 * REPULSION_STRENGTH * DAMPING;
    assert!(p.vel.x > 0.0, "push should point away from the pointer");
    assert!((p.vel.y).abs() < 1e-6);
    assert!((p.vel.length() - expected).abs() < 1e-6);
}

#[test]
fn damping_decays_velocity_without_sign_reversal() {
    let mut r = rng(7);
    let mut p = Particle::spawn(BOUNDS, &mut r);
    p.pos = Vec2::new(400.0, 300.0);
    p.vel = Vec2::new(1.0, 0.0);
    let mut prev = p.vel.length();
    for _ in 0..50 {
        p.update(BOUNDS, sentinel(), 0.0, &mut r);
        let mag = p.vel.length();
        assert!(mag < prev, "velocity must strictly decrease");
        assert!(p.vel.x >= 0.0, "damping must never reverse sign");
        prev = mag;
    }
    // Factor 0.95 per tick converges toward zero.
    assert!(prev < 0.95_f32.powi(50) + 1e-6);
}

#[test]
fn wrap_teleports_to_the_opposite_edge() {
    let mut r = rng(8);
    let mut p = Particle::spawn(BOUNDS, &mut r);

    p.pos = Vec2::new(BOUNDS.x + 5.0, 300.0);
    p.update(BOUNDS, sentinel(), 0.0, &mut r);
    assert_eq!(p.pos.x, 0.0);

    p.pos = Vec2::new(-5.0, 300.0);
    p.update(BOUNDS, sentinel(), 0.0, &mut r);
    assert_eq!(p.pos.x, BOUNDS.x);

    p.pos = Vec2::new(400.0, BOUNDS.y + 5.0);
    p.update(BOUNDS, sentinel(), 0.0, &mut r);
    assert_eq!(p.pos.y, 0.0);

    p.pos = Vec2::new(400.0, -5.0);
    p.update(BOUNDS, sentinel(), 0.0, &mut r);
    assert_eq!(p.pos.y, BOUNDS.y);
}

#[test]
fn wrap_preserves_velocity() {
    let mut r = rng(9);
    let mut p = Particle::spawn(BOUNDS, &mut r);
    p.pos = Vec2::new(BOUNDS.x - 0.5, 300.0);
    p.vel = Vec2::new(2.0, 0.0);
    p.update(BOUNDS, sentinel(), 0.0, &mut r);
    assert_eq!(p.pos.x, 0.0);
    assert!((p.vel.x - 2.0 * DAMPING).abs() < 1e-6);
}

#[test]
fn expiry_recycles_exactly_once() {
    let mut r = rng(10);
    let mut p = Particle::spawn(BOUNDS, &mut r);
    p.age = 200;
    p.lifespan = 200.0;
    p.vel = Vec2::new(3.0, -3.0);

    // age becomes 201 > 200, so this tick must recycle in place.
    p.update(BOUNDS, sentinel(), 0.0, &mut r);
    assert_eq!(p.age, 0);
    assert_eq!(p.vel, Vec2::ZERO);
    assert!(p.lifespan >= LIFESPAN_MIN && p.lifespan < LIFESPAN_MAX);
    assert!(p.pos.x >= 0.0 && p.pos.x < BOUNDS.x);
    assert!(p.pos.y >= 0.0 && p.pos.y < BOUNDS.y);

    // The next tick ages normally; recycling did not latch.
    p.update(BOUNDS, sentinel(), 0.0, &mut r);
    assert_eq!(p.age, 1);
}

#[test]
fn alpha_envelope_is_triangular_over_life() {
    let mut r = rng(11);
    let mut p = Particle::spawn(BOUNDS, &mut r);
    p.lifespan = 200.0;

    p.age = 0;
    assert!(p.alpha().abs() < 1e-6, "invisible at birth");
    p.age = 100;
    assert!((p.alpha() - 1.0).abs() < 1e-6, "fully opaque at mid-life");
    p.age = 200;
    assert!(p.alpha().abs() < 1e-6, "invisible at death");
    p.age = 50;
    assert!((p.alpha() - 0.5).abs() < 1e-6);
}
