use super::config::ServerConfig;
use cpfgen::{Cpf, SeededRandom, ThreadRandom, generate_cpf};
use std::sync::{Arc, Mutex, PoisonError};

/// Where request handlers draw identifier digits from.
#[derive(Clone, Debug)]
enum Digits {
    /// Thread-local RNG; nothing shared between requests.
    Thread,
    /// One seeded stream shared by every request, for reproducible runs.
    Seeded(Arc<Mutex<SeededRandom>>),
}

/// Application state built once at startup and cloned into each handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    digits: Digits,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let digits = match config.seed {
            Some(seed) => Digits::Seeded(Arc::new(Mutex::new(SeededRandom::from_seed(seed)))),
            None => Digits::Thread,
        };
        Self {
            config: Arc::new(config),
            digits,
        }
    }

    /// Generates a fresh identifier for the current request.
    pub fn next_cpf(&self) -> Cpf {
        match &self.digits {
            Digits::Thread => generate_cpf(&mut ThreadRandom),
            Digits::Seeded(rng) => {
                // A panic mid-draw leaves the RNG usable; keep serving.
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                generate_cpf(&mut *rng)
            }
        }
    }
}
