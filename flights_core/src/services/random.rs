//! Sources of randomness handed to the generators

use crate::config::GeneratorConfig;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;

/// Hands out a fresh RNG for each unit of work.
pub trait RandomSource: Send + Sync {
    fn rng(&self) -> Box<dyn RngCore + Send>;
}

/// OS-entropy seeded generator; two calls never share a stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntropySource;

impl RandomSource for EntropySource {
    fn rng(&self) -> Box<dyn RngCore + Send> {
        Box::new(StdRng::from_entropy())
    }
}

/// Every call restarts the same stream.
#[derive(Debug, Clone, Copy)]
pub struct SeededSource {
    seed: u64,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl RandomSource for SeededSource {
    fn rng(&self) -> Box<dyn RngCore + Send> {
        Box::new(StdRng::seed_from_u64(self.seed))
    }
}

pub fn source_from_config(config: &GeneratorConfig) -> Arc<dyn RandomSource> {
    match config.seed {
        Some(seed) => Arc::new(SeededSource::new(seed)),
        None => Arc::new(EntropySource),
    }
}
