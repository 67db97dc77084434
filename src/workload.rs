//! Seeded random workload generation.
//!
//! Produces valid process sets for experiments and property checks. The
//! same seed always yields the same workload.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::ProcessInput;

/// Generator of random process sets named `P1`, `P2`, ….
///
/// # Example
/// ```
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let processes = WorkloadGenerator::new(5)
///     .with_max_arrival(10)
///     .with_burst_range(1, 8)
///     .with_seed(42)
///     .generate();
/// assert_eq!(processes.len(), 5);
/// assert_eq!(processes[0].name, "P1");
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    max_arrival: i64,
    min_burst: i64,
    max_burst: i64,
    seed: u64,
}

impl WorkloadGenerator {
    /// Generator for `count` processes arriving in `[0, 20]` with bursts in `[1, 10]`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            seed: 0,
        }
    }

    /// Sets the latest possible arrival (clamped to ≥ 0).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the inclusive burst range (clamped to ≥ 1, `max ≥ min`).
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst.max(1);
        self.max_burst = max_burst.max(self.min_burst);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the process set.
    pub fn generate(&self) -> Vec<ProcessInput> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (1..=self.count)
            .map(|i| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                ProcessInput::new(format!("P{i}"), arrival, burst)
            })
            .collect()
    }
}
