// Color token for a boid. Two boids flock together exactly when their colors compare equal,
// so the token is kept as the CSS string handed to the canvas fill style.

use crate::random::RandomSource;
use std::fmt;

pub const PALETTE: [&str; 6] = ["red", "#2E86C1", "green", "yellow", "#8E44AD", "#B2BABB"];

// Largest value the random hex generator can produce, 0xfffffe.
const HEX_RANGE: f64 = 16777215.0;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn named(css: &str) -> Color {
        Color(css.to_owned())
    }

    // Hex digits are not zero-padded, so small values give short strings like "#3fa".
    pub fn from_unit(u: f64) -> Color {
        let value = (u * HEX_RANGE).floor() as u32;
        Color(format!("#{:x}", value))
    }

    /// Picks a palette entry, then with probability `random_chance` replaces it
    /// with a randomly generated color.
    ///
    /// Consumes two samples, plus a third when the random branch is taken.
    pub fn pick<R: RandomSource + ?Sized>(rng: &mut R, random_chance: f64) -> Color {
        let index = ((rng.next_f64() * PALETTE.len() as f64) as usize).min(PALETTE.len() - 1);
        if rng.next_f64() < random_chance {
            Color::from_unit(rng.next_f64())
        } else {
            Color::named(PALETTE[index])
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_palette(&self) -> bool {
        PALETTE.contains(&self.0.as_str())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Scripted;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn palette_branch_indexes_by_first_sample() {
        let mut rng = Scripted::new(&[0.2, 0.9]);
        assert_eq!(Color::pick(&mut rng, 0.4), Color::named("#2E86C1"));
        assert_eq!(rng.remaining(), 0);

        let mut rng = Scripted::new(&[0.99, 0.4]);
        assert_eq!(Color::pick(&mut rng, 0.4), Color::named("#B2BABB"));
    }

    #[test]
    fn random_branch_draws_a_third_sample() {
        let mut rng = Scripted::new(&[0.0, 0.1, 255.5 / 16777215.0]);
        let color = Color::pick(&mut rng, 0.4);
        assert_eq!(color.as_str(), "#ff");
        assert!(!color.is_palette());
    }

    #[test]
    fn hex_is_not_padded() {
        assert_eq!(Color::from_unit(0.0).as_str(), "#0");
        assert_eq!(Color::from_unit(0.999_999_99).as_str(), "#fffffe");
        assert!(Color::from_unit(0.0001).as_str().len() < 7);
    }

    #[test]
    fn roughly_sixty_percent_come_from_the_palette() {
        let mut rng = StdRng::seed_from_u64(42);
        let total = 10_000;
        let from_palette = (0..total)
            .filter(|_| Color::pick(&mut rng, 0.4).is_palette())
            .count();
        let share = from_palette as f64 / total as f64;
        assert!(share > 0.55 && share < 0.65, "share was {}", share);
    }

    #[test]
    fn equality_is_by_css_string() {
        assert_eq!(Color::named("red"), Color::named("red"));
        assert_ne!(Color::named("red"), Color::named("Red"));
        assert_eq!(Color::named("green").to_string(), "green");
    }
}
