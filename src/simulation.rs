// Per-frame force model. Every boid steers against a frozen copy of the previous
// frame, so the result does not depend on the order particles are visited in.

use crate::particle::Particle;
use crate::random::RandomSource;
use std::collections::HashMap;
use vecmath::Vector2;

const SEPARATION_WEIGHT: f64 = 0.5;
// Cohesion pulls three times harder vertically than horizontally
const COHESION_WEIGHT: Vector2<f64> = [0.03, 0.09];
const ALIGNMENT_WEIGHT: f64 = 0.05;
const AVOID_WEIGHT: f64 = 0.4;
const WANDER_WEIGHT: f64 = 0.2;
const JITTER_SCALE: f64 = 0.34;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Bounds {
        Bounds { width, height }
    }
}

// Read-only view of one particle as it was before the step began
struct Frozen {
    pos: Vector2<f64>,
    vel: Vector2<f64>,
    size: f64,
    group: usize,
}

fn freeze(particles: &[Particle]) -> Vec<Frozen> {
    let mut groups = HashMap::new();
    particles
        .iter()
        .map(|p| {
            let next = groups.len();
            let group = *groups.entry(p.color()).or_insert(next);
            Frozen {
                pos: p.pos,
                vel: p.vel,
                size: p.size(),
                group,
            }
        })
        .collect()
}

/// Advances every particle by one frame: steering, speed clamp, integration, wrap.
pub fn step<R: RandomSource + ?Sized>(particles: &mut [Particle], bounds: Bounds, rng: &mut R) {
    let frame = freeze(particles);
    for (i, particle) in particles.iter_mut().enumerate() {
        let dv = steer(i, &frame, rng);
        particle.vel = vecmath::vec2_add(particle.vel, dv);
        clamp_speed(particle);
        particle.pos = vecmath::vec2_add(particle.pos, particle.vel);
        let size = particle.size();
        particle.pos[0] = wrap_axis(particle.pos[0], size, bounds.width);
        particle.pos[1] = wrap_axis(particle.pos[1], size, bounds.height);
    }
}

// Velocity change for frame[index]. Coincident particles divide by zero here and
// poison that boid with NaN; nothing downstream recovers from it.
fn steer<R: RandomSource + ?Sized>(index: usize, frame: &[Frozen], rng: &mut R) -> Vector2<f64> {
    let me = &frame[index];
    let avoid_distance = me.size * Particle::AVOID_FACTOR;

    let mut avoid = [0.0, 0.0];
    let mut separation = [0.0, 0.0];
    let mut center = [0.0, 0.0];
    let mut mean_vel = [0.0, 0.0];
    let mut flockmates = 0usize;

    for (j, other) in frame.iter().enumerate() {
        if j == index {
            continue;
        }
        let away = vecmath::vec2_sub(me.pos, other.pos);
        let dist = vecmath::vec2_len(away);
        let unit_away = [away[0] / dist, away[1] / dist];
        if dist < avoid_distance {
            avoid = vecmath::vec2_add(avoid, unit_away);
        }
        if other.group == me.group {
            flockmates += 1;
            center = vecmath::vec2_add(center, other.pos);
            mean_vel = vecmath::vec2_add(mean_vel, other.vel);
            if dist < me.size + other.size {
                separation = vecmath::vec2_add(separation, unit_away);
            }
        }
    }

    let avoid = vecmath::vec2_scale(avoid, AVOID_WEIGHT);
    if flockmates > 0 {
        let n = flockmates as f64;
        let cohesion = vecmath::vec2_sub([center[0] / n, center[1] / n], me.pos);
        let alignment = vecmath::vec2_sub([mean_vel[0] / n, mean_vel[1] / n], me.vel);
        let jitter = [jitter(rng), jitter(rng)];
        [
            separation[0] * SEPARATION_WEIGHT
                + cohesion[0] * COHESION_WEIGHT[0]
                + alignment[0] * ALIGNMENT_WEIGHT
                + avoid[0]
                + jitter[0],
            separation[1] * SEPARATION_WEIGHT
                + cohesion[1] * COHESION_WEIGHT[1]
                + alignment[1] * ALIGNMENT_WEIGHT
                + avoid[1]
                + jitter[1],
        ]
    } else {
        let wandering = [rng.next_f64() - 0.5, rng.next_f64() - 0.5];
        let jitter = [jitter(rng), jitter(rng)];
        [
            wandering[0] * WANDER_WEIGHT + avoid[0] + jitter[0],
            wandering[1] * WANDER_WEIGHT + avoid[1] + jitter[1],
        ]
    }
}

fn jitter<R: RandomSource + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_f64() - 0.5) * JITTER_SCALE
}

fn clamp_speed(particle: &mut Particle) {
    let speed = particle.speed();
    if speed > Particle::MAX_SPEED {
        particle.vel = vecmath::vec2_scale(particle.vel, Particle::MAX_SPEED / speed);
    }
}

/// Folds a coordinate that left [-size, bound + size] back in at the opposite edge.
///
/// The particle is fully off-canvas on both sides of the jump.
pub fn wrap_axis(value: f64, size: f64, bound: f64) -> f64 {
    if value < -size {
        bound + size
    } else if value > bound + size {
        -size
    } else {
        value
    }
}
