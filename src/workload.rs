//! Random workload generation.
//!
//! Produces process sets for exercising the engine — demo inputs,
//! comparison runs, and randomized tests. The generator takes a
//! caller-supplied [`Rng`], so a seeded generator yields reproducible
//! workloads.

use rand::Rng;

use crate::models::Process;

/// Builder for random process sets.
///
/// Defaults: arrivals in `0..=4`, bursts in `1..=10`, priorities in
/// `1..=10`. PIDs are assigned `1..=count`.
///
/// # Example
///
/// ```
/// use cpu_sched::workload::WorkloadGenerator;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let procs = WorkloadGenerator::new().generate(5, &mut rng);
/// assert_eq!(procs.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    max_arrival: u32,
    max_burst: u32,
    max_priority: i32,
}

impl WorkloadGenerator {
    /// Creates a generator with the default bounds.
    pub fn new() -> Self {
        Self {
            max_arrival: 4,
            max_burst: 10,
            max_priority: 10,
        }
    }

    /// Sets the latest possible arrival time (inclusive).
    pub fn with_max_arrival(mut self, max_arrival: u32) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the largest possible burst time (inclusive, ≥ 1 enforced).
    pub fn with_max_burst(mut self, max_burst: u32) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the largest possible priority value (inclusive, ≥ 1 enforced).
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(1);
        self
    }

    /// Generates `count` processes with PIDs `1..=count`.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Process> {
        (1..=count as u32)
            .map(|pid| {
                Process::new(
                    pid,
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(1..=self.max_burst),
                )
                .with_priority(rng.random_range(1..=self.max_priority))
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}
