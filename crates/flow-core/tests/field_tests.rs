use flow_core::constants::{FIELD_FREQUENCY, FIELD_STRENGTH};
use flow_core::field::{field_angle, field_force};
use glam::Vec2;
use std::f32::consts::PI;

#[test]
fn field_is_deterministic() {
    for &(x, y) in &[(0.0, 0.0), (123.4, 567.8), (-50.0, 900.0)] {
        assert_eq!(field_angle(x, y), field_angle(x, y));
    }
}

#[test]
fn field_angle_at_origin() {
    // cos(0) + sin(0) = 1, scaled by pi.
    assert!((field_angle(0.0, 0.0) - PI).abs() < 1e-6);
}

#[test]
fn field_angle_is_bounded() {
    // cos + sin of anything is in [-2, 2], so the angle is within 2*pi.
    for i in 0..2000 {
        let x = i as f32 * 3.7 - 1000.0;
        let y = i as f32 * 1.3 - 500.0;
        let a = field_angle(x, y);
        assert!(a.abs() <= 2.0 * PI + 1e-4, "angle {} out of range", a);
    }
}

#[test]
fn field_varies_smoothly_at_the_tuned_frequency() {
    // Neighbouring positions must give nearly identical angles; the 0.005
    // frequency means one flow cell spans hundreds of pixels.
    let a = field_angle(100.0, 100.0);
    let b = field_angle(101.0, 100.0);
    assert!((a - b).abs() < FIELD_FREQUENCY * 2.0 * PI + 1e-4);
}

#[test]
fn field_force_has_fixed_magnitude() {
    for &(x, y) in &[(0.0, 0.0), (250.0, 90.0), (777.0, 333.0)] {
        let f = field_force(Vec2::new(x, y));
        assert!((f.length() - FIELD_STRENGTH).abs() < 1e-5);
    }
}
