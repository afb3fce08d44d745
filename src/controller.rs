// Owns everything one animation needs: the boids, the surface they are drawn on and the
// random source. The host calls on_frame once per display refresh and keeps asking for
// frames only while it returns true.

use crate::config::SimulationConfig;
use crate::random::RandomSource;
use crate::simulation::{self, Bounds};
use crate::store::ParticleStore;
use crate::surface::{self, RenderSurface};

pub struct Simulation<S, R> {
    store: ParticleStore,
    surface: S,
    rng: R,
    bounds: Bounds,
    running: bool,
    frames: u64,
}

impl<S: RenderSurface, R: RandomSource> Simulation<S, R> {
    pub fn new(config: &SimulationConfig, surface: S, mut rng: R) -> Self {
        let store = ParticleStore::spawn(config, &mut rng);
        log::debug!(
            "spawned {} boids on {}x{}",
            store.len(),
            config.width,
            config.height
        );
        Simulation {
            store,
            surface,
            rng,
            bounds: Bounds::new(config.width, config.height),
            running: false,
            frames: 0,
        }
    }

    pub fn with_store(store: ParticleStore, bounds: Bounds, surface: S, rng: R) -> Self {
        Simulation {
            store,
            surface,
            rng,
            bounds,
            running: false,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            log::info!("animation started with {} boids", self.store.len());
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("animation stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Runs one step and redraws. Returns whether another frame should be requested.
    ///
    /// Does nothing once stopped, so a frame callback that was already queued when
    /// `stop` was called is harmless.
    pub fn on_frame(&mut self) -> bool {
        if !self.running {
            return false;
        }
        simulation::step(self.store.particles_mut(), self.bounds, &mut self.rng);
        surface::render_frame(
            &mut self.surface,
            self.store.particles(),
            self.bounds.width,
            self.bounds.height,
        );
        self.frames += 1;
        log::trace!("frame {}", self.frames);
        true
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::particle::Particle;
    use crate::random::Constant;
    use crate::surface::{DrawCall, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn simulation() -> Simulation<RecordingSurface, StdRng> {
        Simulation::new(
            &SimulationConfig::default(),
            RecordingSurface::default(),
            StdRng::seed_from_u64(5),
        )
    }

    #[test]
    fn idle_until_started() {
        let mut sim = simulation();
        let before = sim.store().particles().to_vec();
        assert!(!sim.is_running());
        assert!(!sim.on_frame());
        assert_eq!(sim.frame_count(), 0);
        assert!(sim.surface().calls.is_empty());
        assert_eq!(sim.store().particles(), &before[..]);
    }

    #[test]
    fn each_frame_steps_and_draws_everything() {
        let mut sim = simulation();
        sim.start();
        assert!(sim.on_frame());
        assert!(sim.on_frame());
        assert_eq!(sim.frame_count(), 2);
        let clears = sim
            .surface()
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::ClearRect(..)))
            .count();
        let fills = sim
            .surface()
            .calls
            .iter()
            .filter(|c| **c == DrawCall::Fill)
            .count();
        assert_eq!(clears, 2);
        assert_eq!(fills, 2 * 120);
    }

    #[test]
    fn stop_ends_the_loop() {
        let mut sim = simulation();
        sim.start();
        assert!(sim.on_frame());
        sim.stop();
        let calls = sim.surface().calls.len();
        assert!(!sim.on_frame());
        assert_eq!(sim.frame_count(), 1);
        assert_eq!(sim.surface().calls.len(), calls);

        sim.start();
        assert!(sim.on_frame());
        assert_eq!(sim.frame_count(), 2);
    }

    #[test]
    fn runs_on_a_prepared_store() {
        let store = ParticleStore::from_particles(vec![Particle::new(
            -9.0,
            50.0,
            -1.0,
            0.0,
            8.0,
            Color::named("red"),
        )]);
        let mut sim = Simulation::with_store(
            store,
            Bounds::new(100.0, 100.0),
            RecordingSurface::default(),
            Constant(0.5),
        );
        sim.start();
        sim.on_frame();
        assert_eq!(sim.store().particles()[0].pos, [108.0, 50.0]);
        assert_eq!(
            sim.surface().calls[0],
            DrawCall::ClearRect(0.0, 0.0, 100.0, 100.0)
        );
    }
}
