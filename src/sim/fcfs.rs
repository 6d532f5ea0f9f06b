//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Sort processes by arrival time (equal arrivals keep input order).
//! 2. Advance the clock to each process's arrival if the CPU is idle.
//! 3. Run the full burst atomically; no preemption, no reordering.
//!
//! # Complexity
//! O(n log n) for the arrival sort, O(n) simulation.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", §5.3.1

use log::debug;

use super::{intake, CompletionLog, Strategy};
use crate::error::SchedulerError;
use crate::models::{Process, SimulationResult, Timeline};
use crate::validation;

/// First-Come-First-Served: non-preemptive, arrival order only.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl Strategy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SchedulerError> {
        if let Some(err) = validation::first_error(processes) {
            return Err(err);
        }

        let jobs = intake(processes);
        let mut timeline = Timeline::new();
        let mut log = CompletionLog::new(processes.len());
        let mut clock: u32 = 0;

        for job in &jobs {
            clock = clock.max(job.arrival);
            timeline.record(job.pid, clock, job.burst);
            clock += job.burst;
            log.finish(job.idx, clock);
        }

        debug!(
            "FCFS: {} processes simulated in {} time units",
            processes.len(),
            clock
        );
        Ok(SimulationResult::new(log.merge(processes), timeline, clock))
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}
