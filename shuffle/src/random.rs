use tracing::debug;

use crate::seed::SeedSource;

const MODULUS: u64 = 1 << 31;
const MULTIPLIER: u64 = 1103515245;
const INCREMENT: u64 = 12345;

/// Anything that can hand out integers in `[0, upper_bound)`.
pub trait BoundedRandom {
    fn bounded_draw(&mut self, upper_bound: usize) -> usize;
}

/// A simple linear congruential random number generator, as described in
/// https://en.wikipedia.org/wiki/Linear_congruential_generator.
///
/// The parameters are the ones used by glibc's `rand()`, and they must stay
/// exactly as they are: other implementations of this shuffle (in other
/// languages) rely on producing the same sequence of numbers from the same
/// seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        let mut lcg = Lcg { state: 0 };
        lcg.seed(seed);
        lcg
    }

    pub fn from_source<S: SeedSource>(source: &S) -> Self {
        Lcg::new(source.initial_seed())
    }

    /// Restarts the chain from `value`.
    pub fn seed(&mut self, value: u64) {
        self.state = (value % MODULUS) as u32;
        debug!("Seeded generator with {value} (state {}).", self.state);
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advances the generator and returns the new state, always below 2^31.
    pub fn next_u32(&mut self) -> u32 {
        // state < 2^31 and MULTIPLIER < 2^31, so this can't overflow a u64.
        let next = (MULTIPLIER * self.state as u64 + INCREMENT) % MODULUS;
        self.state = next as u32;
        self.state
    }
}

impl BoundedRandom for Lcg {
    /// Note that plain modulo reduction is slightly biased whenever
    /// `upper_bound` doesn't divide 2^31. That's intentional: switching to
    /// something like rejection sampling would change which numbers come out,
    /// breaking parity with other implementations.
    fn bounded_draw(&mut self, upper_bound: usize) -> usize {
        assert!(upper_bound > 0, "upper bound must be positive");
        (self.next_u32() as u64 % upper_bound as u64) as usize
    }
}

impl Iterator for Lcg {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_u32())
    }
}
