use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Where request handlers get their randomness from.
///
/// `Entropy` uses the thread-local generator. `Seeded` shares one `StdRng`
/// so a run with a fixed seed replays the same sequence of picks.
#[derive(Debug, Clone, Default)]
pub enum RandomSource {
    #[default]
    Entropy,
    Seeded(Arc<Mutex<StdRng>>),
}

impl RandomSource {
    pub fn seeded(seed: u64) -> Self {
        RandomSource::Seeded(Arc::new(Mutex::new(StdRng::seed_from_u64(seed))))
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => RandomSource::Entropy,
        }
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self, RandomSource::Seeded(_))
    }

    /// Run `f` with a generator. The seeded lock is held only for the call.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match self {
            RandomSource::Entropy => {
                let mut rng = rand::rng();
                f(&mut rng)
            }
            RandomSource::Seeded(shared) => {
                // A panic inside `f` cannot leave the generator half-written.
                let mut rng = shared.lock().unwrap_or_else(|e| e.into_inner());
                f(&mut *rng)
            }
        }
    }
}
