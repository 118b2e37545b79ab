//! Angle helpers and the byte-sized random rolls the tuning constants are written against.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

pub const QUARTER_PI: f32 = PI / 4.0;
pub const EIGHTH_PI: f32 = PI / 8.0;

/// Wrap into [0, TAU).
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU itself for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Wrap into (-PI, PI].
pub fn wrap_angle(angle: f32) -> f32 {
    let a = normalize_angle(angle);
    if a > PI {
        a - TAU
    } else {
        a
    }
}

/// Unit heading vector in the xy plane.
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Bearing from `from` to `to` in the xy plane.
pub fn bearing(from: Vec3, to: Vec3) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// One classic 0..=255 random roll.
pub fn roll(rng: &mut fastrand::Rng) -> i32 {
    i32::from(rng.u8(..))
}

/// Inclusive integer range roll.
pub fn rand_int(rng: &mut fastrand::Rng, lo: i32, hi: i32) -> i32 {
    rng.i32(lo..=hi)
}

/// Triangular angular noise: `(roll - roll)` scaled so that `shift` matches the
/// classic `<< shift` on a 32-bit binary angle.
pub fn angle_noise(rng: &mut fastrand::Rng, shift: u32) -> f32 {
    let spread = (roll(rng) - roll(rng)) as f32;
    spread * TAU / (1u64 << (32 - shift)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_stays_in_half_open_range() {
        for i in -40..40 {
            let a = wrap_angle(i as f32 * 0.37);
            assert!(a > -PI - 1e-5 && a <= PI + 1e-5, "{a}");
        }
        assert!((wrap_angle(TAU + 0.1) - 0.1).abs() < 1e-5);
    }

    #[test]
    fn shadow_noise_is_bounded() {
        let mut rng = fastrand::Rng::with_seed(3);
        // 255 << 21 of a 32-bit turn is just under an eighth of a circle
        let bound = 255.0 * TAU / 2048.0;
        for _ in 0..500 {
            assert!(angle_noise(&mut rng, 21).abs() <= bound + 1e-5);
        }
    }
}
