// Simple particle struct to keep track of individual position, velocity, size and color.
// Velocity is in units per second and never changes once the particle is made.

use crate::color::Color;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, size: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            size,
            color,
        }
    }

    pub fn integrate(&mut self, elapsed_ms: f64) {
        let displacement = vecmath::vec2_scale(self.vel, elapsed_ms / 1000.0);
        self.pos = vecmath::vec2_add(self.pos, displacement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrates_velocity_over_seconds() {
        let mut p = Particle::new([10.0, 20.0], [40.0, -8.0], 3.0, Color::Hue(0.0));
        p.integrate(250.0);
        assert_eq!(p.pos, [20.0, 18.0]);
        assert_eq!(p.vel, [40.0, -8.0]);
    }

    #[test]
    fn zero_elapsed_is_a_no_op() {
        let mut p = Particle::new([1.5, -0.5], [0.3, 0.2], 1.0, Color::Rgb([0.1, 0.2, 0.3]));
        p.integrate(0.0);
        assert_eq!(p.pos, [1.5, -0.5]);
    }

    #[test]
    fn negative_elapsed_reverses() {
        let mut p = Particle::new([50.0, 50.0], [100.0, 0.0], 1.0, Color::Hue(10.0));
        p.integrate(-500.0);
        assert_eq!(p.pos, [0.0, 50.0]);
    }
}
