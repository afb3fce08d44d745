// Source of uniform samples in [0, 1), the only randomness the simulation uses.
// Anything implementing rand's RngCore works; tests swap in scripted sources.

use rand::{Rng, RngCore};

pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

// Returns the same sample forever. 0.5 zeroes out jitter and wandering.
#[cfg(test)]
pub struct Constant(pub f64);

#[cfg(test)]
impl RandomSource for Constant {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

// Plays back a fixed list of samples, then falls back to 0.5.
#[cfg(test)]
pub struct Scripted {
    samples: std::collections::VecDeque<f64>,
}

#[cfg(test)]
impl Scripted {
    pub fn new(samples: &[f64]) -> Self {
        Scripted {
            samples: samples.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn next_f64(&mut self) -> f64 {
        self.samples.pop_front().unwrap_or(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rng_samples_stay_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let u = rng.next_f64();
            assert!(u >= 0.0 && u < 1.0);
        }
    }

    #[test]
    fn scripted_plays_back_then_centers() {
        let mut source = Scripted::new(&[0.1, 0.9]);
        assert_eq!(source.next_f64(), 0.1);
        assert_eq!(source.next_f64(), 0.9);
        assert_eq!(source.remaining(), 0);
        assert_eq!(source.next_f64(), 0.5);
    }
}
