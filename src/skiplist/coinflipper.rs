use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// the only randomness in the structure: one flip per extra tower level
pub trait CoinFlipper {
    fn flip(&mut self) -> bool;
}

pub struct CoinFlipperRand {
    rng: SmallRng,
}

impl CoinFlipperRand {
    pub fn new() -> CoinFlipperRand {
        return CoinFlipperRand { rng: SmallRng::from_entropy() };
    }
}

impl CoinFlipper for CoinFlipperRand {
    fn flip(&mut self) -> bool {
        let random_value: usize = self.rng.gen();
        return random_value < (usize::MAX / 2);
    }
}

// same coin, reproducible: equal seeds give equal flip sequences, and
// with equal insertion orders, equal tower heights
pub struct CoinFlipperSeeded {
    rng: SmallRng,
}

impl CoinFlipperSeeded {
    pub fn new(seed: u64) -> CoinFlipperSeeded {
        return CoinFlipperSeeded { rng: SmallRng::seed_from_u64(seed) };
    }
}

impl CoinFlipper for CoinFlipperSeeded {
    fn flip(&mut self) -> bool {
        let random_value: usize = self.rng.gen();
        return random_value < (usize::MAX / 2);
    }
}
