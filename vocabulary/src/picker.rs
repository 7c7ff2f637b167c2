use std::time::{SystemTime, UNIX_EPOCH};

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use crate::error::{Error, Result};

/// Chooses one candidate uniformly at random.
pub struct Picker<R = StdRng> {
    rng: R,
}

impl Picker<StdRng> {
    /// Seeded from the wall clock so separate runs do not repeat a sequence.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(StdRng::seed_from_u64(nanos))
    }
}

impl<R: RngCore> Picker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn pick<'a>(&mut self, words: &'a [String]) -> Result<&'a str> {
        if words.is_empty() {
            return Err(Error::NotFound("there are no words to choose from".to_string()));
        }
        let index = self.rng.gen_range(0..words.len());
        Ok(&words[index])
    }
}
