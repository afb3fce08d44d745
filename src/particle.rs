// A single boid: position, velocity, and the size and color it keeps for life

use crate::color::Color;
use vecmath::Vector2;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    size: f64,
    color: Color,
}

impl Particle {
    pub const MAX_SPEED: f64 = 2.0;
    pub const MIN_SIZE: f64 = 8.0;
    pub const MAX_SIZE: f64 = 16.0;
    // Any other particle closer than size * AVOID_FACTOR pushes this one away
    pub const AVOID_FACTOR: f64 = 5.0;

    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, size: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            size,
            color,
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn avoid_distance(&self) -> f64 {
        self.size * Particle::AVOID_FACTOR
    }

    pub fn speed(&self) -> f64 {
        vecmath::vec2_len(self.vel)
    }

    // Heading for the glyph: nose points along velocity, the triangle is drawn nose-up
    pub fn heading(&self) -> f64 {
        self.vel[1].atan2(self.vel[0]) + std::f64::consts::FRAC_PI_2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avoid_distance_scales_with_size() {
        let p = Particle::new(0.0, 0.0, 0.0, 0.0, 10.0, Color::named("red"));
        assert_eq!(p.avoid_distance(), 50.0);
    }

    #[test]
    fn heading_points_nose_along_velocity() {
        let right = Particle::new(0.0, 0.0, 1.0, 0.0, 8.0, Color::named("red"));
        assert!((right.heading() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        let up = Particle::new(0.0, 0.0, 0.0, -1.0, 8.0, Color::named("red"));
        assert!(up.heading().abs() < 1e-12);
    }

    #[test]
    fn speed_is_velocity_length() {
        let p = Particle::new(0.0, 0.0, 3.0, 4.0, 8.0, Color::named("red"));
        assert_eq!(p.speed(), 5.0);
    }
}
