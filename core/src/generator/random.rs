use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Uniform placement driven by a `SmallRng` seeded from an explicit value, so boards are reproducible.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate_minefield(config, &mut rng)
    }
}
