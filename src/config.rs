// Fixed simulation constants. There is no runtime configuration; the defaults
// are the only values the browser build ever uses.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: f64,
    pub height: f64,
    pub population: usize,
    /// Chance that a spawned boid gets a random color instead of a palette color.
    pub random_color_chance: f64,
}

impl SimulationConfig {
    pub const CANVAS_WIDTH: f64 = 700.0;
    pub const CANVAS_HEIGHT: f64 = 700.0;
    pub const POPULATION: usize = 120;

    // Canvas size reported by the host wins over the modeled 700x700
    pub fn with_bounds(self, width: f64, height: f64) -> SimulationConfig {
        SimulationConfig {
            width,
            height,
            ..self
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            width: SimulationConfig::CANVAS_WIDTH,
            height: SimulationConfig::CANVAS_HEIGHT,
            population: SimulationConfig::POPULATION,
            random_color_chance: 0.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_canvas() {
        let config = SimulationConfig::default();
        assert_eq!(config.width, 700.0);
        assert_eq!(config.height, 700.0);
        assert_eq!(config.population, 120);
        assert!((1.0 - config.random_color_chance - 0.6).abs() < 1e-12);
    }

    #[test]
    fn with_bounds_keeps_everything_else() {
        let config = SimulationConfig::default().with_bounds(300.0, 150.0);
        assert_eq!(config.width, 300.0);
        assert_eq!(config.height, 150.0);
        assert_eq!(config.population, 120);
    }
}
