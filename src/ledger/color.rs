use rand::Rng;

use crate::models::Swatch;

/// Supplies the display color for each new transaction.
pub trait ColorSource {
    fn next_color(&mut self) -> Swatch;
}

/// Uniformly random colors from the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomColors;

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Swatch {
        Swatch::from_rgb(rand::thread_rng().gen_range(0..=Swatch::MAX))
    }
}
