//! Shortest Job First scheduling (non-preemptive).
//!
//! # Algorithm
//!
//! Admit every process whose arrival is at or before the clock into a
//! ready list. If nothing is ready, jump the clock to the next arrival.
//! Otherwise run the ready process with the smallest
//! `(burst, arrival, input position)` key to completion.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", §5.3.2
//! (provably minimal average waiting time among non-preemptive orders)

use log::{debug, trace};

use super::{intake, CompletionLog, Strategy};
use crate::error::SchedulerError;
use crate::models::{Process, SimulationResult, Timeline};
use crate::validation;

/// Shortest Job First: non-preemptive, smallest burst wins.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl Strategy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SchedulerError> {
        if let Some(err) = validation::first_error(processes) {
            return Err(err);
        }

        let jobs = intake(processes);
        let mut timeline = Timeline::new();
        let mut log = CompletionLog::new(processes.len());
        let mut ready = Vec::new();
        let mut next = 0;
        let mut clock: u32 = 0;

        while next < jobs.len() || !ready.is_empty() {
            while next < jobs.len() && jobs[next].arrival <= clock {
                ready.push(jobs[next].clone());
                next += 1;
            }

            if ready.is_empty() {
                trace!("SJF: idle until t={}", jobs[next].arrival);
                clock = jobs[next].arrival;
                continue;
            }

            ready.sort_by_key(|j| (j.burst, j.arrival, j.idx));
            let job = ready.remove(0);

            timeline.record(job.pid, clock, job.burst);
            clock += job.burst;
            log.finish(job.idx, clock);
        }

        debug!(
            "SJF: {} processes simulated in {} time units",
            processes.len(),
            clock
        );
        Ok(SimulationResult::new(log.merge(processes), timeline, clock))
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (non-preemptive)"
    }
}
