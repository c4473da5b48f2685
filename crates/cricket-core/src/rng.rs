//! Injected randomness. The engine never reaches for a module-level RNG;
//! every probabilistic branch draws from a `&mut dyn RandomSource` the
//! caller supplies, so two calls with the same inputs and the same seeded
//! source produce identical results (§8, invariant 5).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A capability interface with one operation: a uniform draw on `[0, 1)`.
pub trait RandomSource {
    fn next_uniform(&mut self) -> f64;
}

/// Production randomness source: a seeded PCG-family PRNG via `StdRng`.
/// Construct with a fixed seed for deterministic replay.
pub struct SeededRng(StdRng);

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRng {
    fn next_uniform(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// A scripted randomness source for tests: replays a fixed sequence, then
/// repeats its last value if exhausted so a test doesn't panic on an
/// off-by-one draw count.
pub struct ScriptedRng {
    values: Vec<f64>,
    index: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "ScriptedRng needs at least one value");
        Self { values, index: 0 }
    }
}

impl RandomSource for ScriptedRng {
    fn next_uniform(&mut self) -> f64 {
        let v = self.values[self.index.min(self.values.len() - 1)];
        self.index += 1;
        v
    }
}
