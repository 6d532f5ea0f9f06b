//! Round Robin scheduling.
//!
//! # Algorithm
//!
//! A FIFO ready queue and a fixed time quantum. The head process runs
//! for `min(quantum, remaining)`; any process that arrived during the
//! slice is admitted *before* the preempted process is requeued, so
//! same-tick arrivals go ahead of it. When the queue is empty the clock
//! jumps to the next arrival.
//!
//! A quantum of zero would never advance the clock; the request is
//! rejected before the simulation starts.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", §5.3.3

use std::collections::VecDeque;

use log::debug;

use super::{intake, CompletionLog, Strategy};
use crate::error::SchedulerError;
use crate::models::{Process, SimulationResult, Timeline};
use crate::validation;

/// Round Robin with a caller-supplied time quantum (≥ 1).
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: u32,
}

impl RoundRobin {
    /// Creates a Round Robin strategy. The quantum is checked when the
    /// simulation runs.
    pub fn new(quantum: u32) -> Self {
        Self { quantum }
    }

    /// The configured time quantum.
    pub fn quantum(&self) -> u32 {
        self.quantum
    }
}

impl Strategy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SchedulerError> {
        if self.quantum < 1 {
            return Err(SchedulerError::InvalidQuantum {
                quantum: self.quantum,
            });
        }
        if let Some(err) = validation::first_error(processes) {
            return Err(err);
        }

        let jobs = intake(processes);
        let mut timeline = Timeline::new();
        let mut log = CompletionLog::new(processes.len());
        let mut queue = VecDeque::new();
        let mut next = 0;
        let mut clock: u32 = 0;

        while next < jobs.len() || !queue.is_empty() {
            while next < jobs.len() && jobs[next].arrival <= clock {
                queue.push_back(jobs[next].clone());
                next += 1;
            }

            let mut job = match queue.pop_front() {
                Some(job) => job,
                None => {
                    clock = jobs[next].arrival;
                    continue;
                }
            };

            let slice = self.quantum.min(job.remaining);
            timeline.record(job.pid, clock, slice);
            job.remaining -= slice;
            clock += slice;

            // Arrivals during the slice enter ahead of the preempted process
            while next < jobs.len() && jobs[next].arrival <= clock {
                queue.push_back(jobs[next].clone());
                next += 1;
            }

            if job.remaining == 0 {
                log.finish(job.idx, clock);
            } else {
                queue.push_back(job);
            }
        }

        debug!(
            "RR(q={}): {} processes simulated in {} time units",
            self.quantum,
            processes.len(),
            clock
        );
        Ok(SimulationResult::new(log.merge(processes), timeline, clock))
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}
