// Owns the fixed population of boids. Created once, mutated in place every frame,
// dropped with the view that hosts it.

use crate::color::Color;
use crate::config::SimulationConfig;
use crate::particle::Particle;
use crate::random::RandomSource;

#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    /// Spawns `config.population` boids uniformly over the canvas.
    ///
    /// Velocity components start in [-1, 1) and are not clamped until the first step.
    pub fn spawn<R: RandomSource + ?Sized>(config: &SimulationConfig, rng: &mut R) -> ParticleStore {
        let mut particles = Vec::with_capacity(config.population);
        for _ in 0..config.population {
            let color = Color::pick(rng, config.random_color_chance);
            let pos_x = rng.next_f64() * config.width;
            let pos_y = rng.next_f64() * config.height;
            let vel_x = rng.next_f64() * 2.0 - 1.0;
            let vel_y = rng.next_f64() * 2.0 - 1.0;
            let size = rng.next_f64() * (Particle::MAX_SIZE - Particle::MIN_SIZE) + Particle::MIN_SIZE;
            particles.push(Particle::new(pos_x, pos_y, vel_x, vel_y, size, color));
        }
        ParticleStore { particles }
    }

    pub fn from_particles(particles: Vec<Particle>) -> ParticleStore {
        ParticleStore { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
